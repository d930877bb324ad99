//! Address book container and the upcoming-birthday query.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use super::Contact;

/// One entry of the upcoming-birthday report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,
    /// The day to send congratulations, weekend-adjusted
    pub congratulation_date: NaiveDate,
}

/// The keyed collection of all contacts.
///
/// Composition over a plain map: lookup is by exact name, while listing and
/// the birthday query iterate in first-insertion order. Invariant: every key
/// equals the `name` of the contact stored under it.
#[derive(Debug, Default)]
pub struct AddressBook {
    entries: HashMap<String, Contact>,
    /// Names in first-insertion order; drives listing output
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a book from an ordered contact list (e.g. a loaded snapshot)
    pub fn from_contacts(contacts: impl IntoIterator<Item = Contact>) -> Self {
        let mut book = Self::new();
        for contact in contacts {
            book.add_record(contact);
        }
        book
    }

    /// Insert a contact, keyed by its name.
    ///
    /// Re-adding a name overwrites the stored contact in place; the original
    /// listing position is kept.
    pub fn add_record(&mut self, contact: Contact) {
        let name = contact.name.clone();
        if self.entries.insert(name.clone(), contact).is_none() {
            self.order.push(name);
        }
    }

    /// Look up a contact by exact name
    pub fn find(&self, name: &str) -> Option<&Contact> {
        self.entries.get(name)
    }

    /// Look up a contact by exact name, mutably
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Contact> {
        self.entries.get_mut(name)
    }

    /// Remove a contact by name; no-op when absent
    pub fn delete(&mut self, name: &str) {
        if self.entries.remove(name).is_some() {
            self.order.retain(|n| n != name);
        }
    }

    /// Iterate contacts in first-insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.order.iter().filter_map(|name| self.entries.get(name))
    }

    /// Number of contacts
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the book has no contacts
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Report birthdays whose next occurrence falls within `days` of `today`
    /// (inclusive on both ends).
    ///
    /// Each birthday is projected onto the current year; occurrences already
    /// past roll to next year. Occurrences landing on a weekend are
    /// congratulated the following Monday — the roll happens after the window
    /// test, so a rolled date can land just past the window. Results follow
    /// the book's listing order, not date order.
    pub fn upcoming_birthdays(&self, today: NaiveDate, days: u32) -> Vec<UpcomingBirthday> {
        let mut upcoming = Vec::new();

        for contact in self.iter() {
            let Some(birthday) = contact.birthday else {
                continue;
            };

            let mut occurrence = occurrence_in_year(birthday.date(), today.year());
            if occurrence < today {
                occurrence = occurrence_in_year(birthday.date(), today.year() + 1);
            }

            let offset = (occurrence - today).num_days();
            if offset < 0 || offset > i64::from(days) {
                continue;
            }

            upcoming.push(UpcomingBirthday {
                name: contact.name.clone(),
                congratulation_date: roll_off_weekend(occurrence),
            });
        }

        upcoming
    }
}

/// Project a birthday onto `year`. February 29 maps to March 1 when `year`
/// is not a leap year.
fn occurrence_in_year(birthday: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 3, 1).unwrap())
}

/// Saturday and Sunday congratulations move to the following Monday
fn roll_off_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}
