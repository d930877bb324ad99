//! CSV export functionality
//!
//! Exports the contact listing to CSV format (spreadsheet-compatible).

use std::io::Write;

use crate::error::{BookError, BookResult};
use crate::models::{AddressBook, Phone};

/// Export all contacts to CSV: one row per contact, phones joined with `;`
pub fn export_contacts_csv<W: Write>(book: &AddressBook, writer: &mut W) -> BookResult<()> {
    writeln!(writer, "Name,Phones,Birthday").map_err(|e| BookError::Export(e.to_string()))?;

    for contact in book.iter() {
        let phones = contact
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(";");
        let birthday = contact
            .birthday
            .map(|b| b.to_string())
            .unwrap_or_default();

        writeln!(
            writer,
            "{},{},{}",
            escape_csv(&contact.name),
            phones,
            birthday
        )
        .map_err(|e| BookError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Quote a field when it contains a comma, quote, or newline
fn escape_csv(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
