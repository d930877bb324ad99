//! Custom error types for rolodex-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for rolodex operations
#[derive(Error, Debug)]
pub enum BookError {
    /// A phone number failed validation
    #[error("The phone number must consist of 10 digits.")]
    InvalidPhone,

    /// A birthday string failed to parse
    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidDate,

    /// Contact lookup failure
    #[error("Contact not found: {name}")]
    ContactNotFound { name: String },

    /// A command was given the wrong number of arguments
    #[error("Please enter the command, name and number.")]
    Usage,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl BookError {
    /// Create a "not found" error for contacts
    pub fn contact_not_found(name: impl Into<String>) -> Self {
        Self::ContactNotFound { name: name.into() }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ContactNotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidPhone | Self::InvalidDate)
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for BookError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BookError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for rolodex operations
pub type BookResult<T> = Result<T, BookError>;
