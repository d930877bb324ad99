//! Service layer for rolodex-cli
//!
//! The service layer provides business logic on top of the address book,
//! handling lookups, validation, and outcome reporting for the command
//! handlers.

pub mod contact;

pub use contact::{AddOutcome, ContactService};
