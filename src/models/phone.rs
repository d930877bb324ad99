//! Phone number value type.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::BookError;

/// A validated phone number.
///
/// A phone number is exactly 10 ASCII decimal digits; validation happens at
/// construction time, so a `Phone` in hand is always well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `BookError::InvalidPhone` unless `raw` is exactly 10 decimal
    /// digits.
    pub fn new(raw: impl Into<String>) -> Result<Self, BookError> {
        let raw = raw.into();

        if raw.len() != 10 || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BookError::InvalidPhone);
        }

        Ok(Self(raw))
    }

    /// Get the digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as the raw digit string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
