//! Export module for rolodex-cli
//!
//! Provides data export functionality in two formats:
//! - JSON: machine-readable full book export with schema versioning
//! - CSV: flat contact listing (spreadsheet-compatible)

pub mod csv;
pub mod json;

pub use csv::export_contacts_csv;
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
