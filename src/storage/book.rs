//! Address book persistence
//!
//! Loads and saves the whole address book as one JSON snapshot.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::file_io::{read_json, write_json_atomic};
use crate::error::BookResult;
use crate::models::{AddressBook, Contact};

/// On-disk snapshot of the address book, contacts in listing order
#[derive(Debug, Default, Serialize, Deserialize)]
struct BookData {
    contacts: Vec<Contact>,
}

/// Repository for address book persistence
pub struct BookRepository {
    path: PathBuf,
}

impl BookRepository {
    /// Create a repository backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the address book; a missing file yields an empty book
    pub fn load(&self) -> BookResult<AddressBook> {
        let data: BookData = read_json(&self.path)?;
        debug!(contacts = data.contacts.len(), path = %self.path.display(), "loaded address book");
        Ok(AddressBook::from_contacts(data.contacts))
    }

    /// Overwrite the snapshot with the book's current state
    pub fn save(&self, book: &AddressBook) -> BookResult<()> {
        let data = BookData {
            contacts: book.iter().cloned().collect(),
        };
        debug!(contacts = data.contacts.len(), path = %self.path.display(), "saving address book");
        write_json_atomic(&self.path, &data)
    }
}
