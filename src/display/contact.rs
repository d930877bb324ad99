//! Contact display formatting
//!
//! Formats contacts and birthday reports for terminal output.

use crate::models::{Contact, Phone, UpcomingBirthday};

/// Format the full contact listing, one line per contact
pub fn format_contact_list(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return "No contacts found.".to_string();
    }

    contacts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a contact's phones as a comma-separated list
pub fn format_phone_list(phones: &[Phone]) -> String {
    phones
        .iter()
        .map(Phone::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format the upcoming-birthday report, one `name: YYYY.MM.DD` line each
pub fn format_upcoming(upcoming: &[UpcomingBirthday]) -> String {
    if upcoming.is_empty() {
        return "No upcoming birthdays.".to_string();
    }

    upcoming
        .iter()
        .map(|u| format!("{}: {}", u.name, u.congratulation_date.format("%Y.%m.%d")))
        .collect::<Vec<_>>()
        .join("\n")
}
