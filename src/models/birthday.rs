//! Birthday value type.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::BookError;

/// Date format accepted from the user and used for rendering.
const DATE_FORMAT: &str = "%d.%m.%Y";

/// A contact's birthday: a calendar date with no time component.
///
/// Parsed strictly from `DD.MM.YYYY`; the canonical rendering reproduces the
/// input, so parse and format round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from a `DD.MM.YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `BookError::InvalidDate` on any parse failure: non-numeric
    /// fields, wrong separators, out-of-range dates, wrong field count.
    pub fn parse(raw: &str) -> Result<Self, BookError> {
        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map(Self)
            .map_err(|_| BookError::InvalidDate)
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for Birthday {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

// Serde support - serialize as the DD.MM.YYYY string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}
