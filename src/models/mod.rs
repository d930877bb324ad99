//! Core data models for rolodex-cli
//!
//! This module contains the data structures that represent the contact
//! domain: validated phone numbers and birthdays, contact records, and the
//! address book itself.

pub mod birthday;
pub mod book;
pub mod contact;
pub mod phone;

pub use birthday::Birthday;
pub use book::{AddressBook, UpcomingBirthday};
pub use contact::Contact;
pub use phone::Phone;
