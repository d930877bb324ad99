//! Contact record.
//!
//! A contact aggregates a display name, an ordered list of phone numbers,
//! and an optional birthday.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Birthday, Phone};
use crate::error::BookError;

/// A single address book entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    /// Display name; doubles as the address book key
    pub name: String,

    /// Phone numbers in the order they were added (duplicates allowed)
    #[serde(default)]
    pub phones: Vec<Phone>,

    /// Birthday, if one has been recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<Birthday>,
}

impl Contact {
    /// Create a new contact with no phones and no birthday
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Validate and append a phone number. No duplicate check.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), BookError> {
        self.phones.push(Phone::new(raw)?);
        Ok(())
    }

    /// Remove the first phone matching `raw`, if present. Silent no-op
    /// when absent.
    pub fn remove_phone(&mut self, raw: &str) {
        if let Some(pos) = self.phones.iter().position(|p| p.as_str() == raw) {
            self.phones.remove(pos);
        }
    }

    /// Replace the first phone with a newly validated one.
    ///
    /// Returns `false` without validating when the phone list is empty.
    /// Always targets index 0: the contract assumes one phone per contact.
    pub fn edit_phone(&mut self, raw: &str) -> Result<bool, BookError> {
        if self.phones.is_empty() {
            return Ok(false);
        }
        self.phones[0] = Phone::new(raw)?;
        Ok(true)
    }

    /// Find the first phone whose digits equal `raw`
    pub fn find_phone(&self, raw: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == raw)
    }

    /// Parse and set the birthday, overwriting any existing value
    pub fn set_birthday(&mut self, raw: &str) -> Result<(), BookError> {
        self.birthday = Some(Birthday::parse(raw)?);
        Ok(())
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        let birthday = self.birthday.map(|b| b.to_string()).unwrap_or_default();
        write!(
            f,
            "Contact name: {}, phone: {}, birthday: {}",
            self.name, phones, birthday
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_contact_is_empty() {
        let contact = Contact::new("John");
        assert_eq!(contact.name, "John");
        assert!(contact.phones.is_empty());
        assert!(contact.birthday.is_none());
    }

    #[test]
    fn test_add_phone() {
        let mut contact = Contact::new("John");
        contact.add_phone("1234567890").unwrap();
        contact.add_phone("5551234567").unwrap();
        assert_eq!(contact.phones.len(), 2);

        // duplicates are allowed
        contact.add_phone("1234567890").unwrap();
        assert_eq!(contact.phones.len(), 3);
    }

    #[test]
    fn test_add_phone_invalid() {
        let mut contact = Contact::new("John");
        assert!(contact.add_phone("123").is_err());
        assert!(contact.phones.is_empty());
    }

    #[test]
    fn test_remove_phone() {
        let mut contact = Contact::new("John");
        contact.add_phone("1234567890").unwrap();
        contact.add_phone("5551234567").unwrap();

        contact.remove_phone("1234567890");
        assert_eq!(contact.phones.len(), 1);
        assert_eq!(contact.phones[0].as_str(), "5551234567");

        // absent phone: no-op, no error
        contact.remove_phone("0000000000");
        assert_eq!(contact.phones.len(), 1);
    }

    #[test]
    fn test_remove_phone_only_first_match() {
        let mut contact = Contact::new("John");
        contact.add_phone("1234567890").unwrap();
        contact.add_phone("1234567890").unwrap();

        contact.remove_phone("1234567890");
        assert_eq!(contact.phones.len(), 1);
    }

    #[test]
    fn test_edit_phone_replaces_first() {
        let mut contact = Contact::new("John");
        contact.add_phone("1234567890").unwrap();
        contact.add_phone("5551234567").unwrap();

        let replaced = contact.edit_phone("9998887776").unwrap();
        assert!(replaced);
        assert_eq!(contact.phones[0].as_str(), "9998887776");
        assert_eq!(contact.phones[1].as_str(), "5551234567");
    }

    #[test]
    fn test_edit_phone_empty_list_returns_false() {
        let mut contact = Contact::new("John");
        // even an invalid number does not error when there is nothing to edit
        assert!(!contact.edit_phone("bad").unwrap());
    }

    #[test]
    fn test_edit_phone_invalid() {
        let mut contact = Contact::new("John");
        contact.add_phone("1234567890").unwrap();
        assert!(contact.edit_phone("123").is_err());
        assert_eq!(contact.phones[0].as_str(), "1234567890");
    }

    #[test]
    fn test_find_phone() {
        let mut contact = Contact::new("John");
        contact.add_phone("1234567890").unwrap();

        assert!(contact.find_phone("1234567890").is_some());
        assert!(contact.find_phone("0000000000").is_none());
    }

    #[test]
    fn test_set_birthday_overwrites() {
        let mut contact = Contact::new("John");
        contact.set_birthday("01.01.1990").unwrap();
        contact.set_birthday("15.05.1991").unwrap();
        assert_eq!(contact.birthday.unwrap().to_string(), "15.05.1991");
    }

    #[test]
    fn test_display_with_birthday() {
        let mut contact = Contact::new("John");
        contact.add_phone("1234567890").unwrap();
        contact.add_phone("5551234567").unwrap();
        contact.set_birthday("15.05.1990").unwrap();

        assert_eq!(
            contact.to_string(),
            "Contact name: John, phone: 1234567890, 5551234567, birthday: 15.05.1990"
        );
    }

    #[test]
    fn test_display_without_birthday() {
        let mut contact = Contact::new("John");
        contact.add_phone("1234567890").unwrap();

        assert_eq!(
            contact.to_string(),
            "Contact name: John, phone: 1234567890, birthday: "
        );
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut contact = Contact::new("John");
        contact.add_phone("1234567890").unwrap();
        contact.set_birthday("15.05.1990").unwrap();

        let json = serde_json::to_string(&contact).unwrap();
        let back: Contact = serde_json::from_str(&json).unwrap();

        assert_eq!(back.name, contact.name);
        assert_eq!(back.phones, contact.phones);
        assert_eq!(back.birthday, contact.birthday);
    }

    #[test]
    fn test_deserialization_defaults() {
        // a record written before any phone or birthday existed
        let contact: Contact = serde_json::from_str(r#"{"name": "John"}"#).unwrap();
        assert!(contact.phones.is_empty());
        assert!(contact.birthday.is_none());
    }
}
