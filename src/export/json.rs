//! JSON export functionality
//!
//! Exports the complete address book to JSON with schema versioning.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{BookError, BookResult};
use crate::models::{AddressBook, Contact};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full address book export structure
#[derive(Debug, Clone, Serialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// All contacts in listing order
    pub contacts: Vec<Contact>,

    /// Total number of contacts
    pub contact_count: usize,
}

impl FullExport {
    /// Snapshot the book for export
    pub fn from_book(book: &AddressBook) -> Self {
        let contacts: Vec<Contact> = book.iter().cloned().collect();
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            contact_count: contacts.len(),
            contacts,
        }
    }
}

/// Write the full book as pretty-printed JSON
pub fn export_full_json<W: Write>(book: &AddressBook, writer: &mut W) -> BookResult<()> {
    let export = FullExport::from_book(book);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| BookError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| BookError::Export(e.to_string()))?;
    Ok(())
}
