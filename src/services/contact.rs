//! Contact service
//!
//! Business logic over the address book: find-or-create semantics for adds,
//! phone edits, birthday management, and the upcoming-birthday query.

use crate::error::{BookError, BookResult};
use crate::models::{AddressBook, Birthday, Contact, Phone, UpcomingBirthday};

/// Whether an add targeted a new or an existing contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new contact was created
    Added,
    /// The named contact already existed
    Updated,
}

/// Service for contact management
pub struct ContactService<'a> {
    book: &'a mut AddressBook,
}

impl<'a> ContactService<'a> {
    /// Create a new contact service
    pub fn new(book: &'a mut AddressBook) -> Self {
        Self { book }
    }

    /// Add a phone to the named contact, creating the contact first if it
    /// doesn't exist.
    ///
    /// The contact is created before the phone is validated, so a rejected
    /// phone still leaves a (phoneless) contact behind. That mirrors the
    /// find-or-create contract: `add` never fails on a missing name.
    pub fn add_contact(&mut self, name: &str, phone: &str) -> BookResult<AddOutcome> {
        let outcome = match self.book.find(name) {
            Some(_) => AddOutcome::Updated,
            None => {
                self.book.add_record(Contact::new(name));
                AddOutcome::Added
            }
        };

        if let Some(contact) = self.book.find_mut(name) {
            contact.add_phone(phone)?;
        }

        Ok(outcome)
    }

    /// Replace the named contact's first phone.
    ///
    /// Returns `Ok(false)` when the contact exists but has no phones.
    pub fn change_phone(&mut self, name: &str, phone: &str) -> BookResult<bool> {
        let contact = self
            .book
            .find_mut(name)
            .ok_or_else(|| BookError::contact_not_found(name))?;
        contact.edit_phone(phone)
    }

    /// All phones of the named contact
    pub fn phones(&self, name: &str) -> BookResult<Vec<Phone>> {
        let contact = self
            .book
            .find(name)
            .ok_or_else(|| BookError::contact_not_found(name))?;
        Ok(contact.phones.clone())
    }

    /// Parse and set the named contact's birthday
    pub fn set_birthday(&mut self, name: &str, date: &str) -> BookResult<()> {
        let contact = self
            .book
            .find_mut(name)
            .ok_or_else(|| BookError::contact_not_found(name))?;
        contact.set_birthday(date)
    }

    /// The named contact's birthday, if set
    pub fn birthday(&self, name: &str) -> BookResult<Option<Birthday>> {
        let contact = self
            .book
            .find(name)
            .ok_or_else(|| BookError::contact_not_found(name))?;
        Ok(contact.birthday)
    }

    /// All contacts in listing order
    pub fn all(&self) -> Vec<Contact> {
        self.book.iter().cloned().collect()
    }

    /// Birthdays falling within `days` of today's local date
    pub fn upcoming_birthdays(&self, days: u32) -> Vec<UpcomingBirthday> {
        let today = chrono::Local::now().date_naive();
        self.book.upcoming_birthdays(today, days)
    }
}
