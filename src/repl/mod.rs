//! Interactive read-eval-print loop
//!
//! Reads one command per line from stdin, dispatches to the service layer,
//! and prints one reply per command. Close/exit (and end of input) persist
//! the book before terminating; every other error is reported and the loop
//! continues.

pub mod commands;

pub use commands::Command;

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::config::Settings;
use crate::display::{format_contact_list, format_phone_list, format_upcoming};
use crate::error::{BookError, BookResult};
use crate::models::AddressBook;
use crate::services::{AddOutcome, ContactService};
use crate::storage::BookRepository;

/// Run the REPL until the user closes it or stdin ends.
pub fn run(book: &mut AddressBook, repo: &BookRepository, settings: &Settings) -> BookResult<()> {
    let mut input = io::stdin().lock();
    let mut stdout = io::stdout();

    println!("Welcome to the assistant bot!");

    loop {
        print!("Enter a command: ");
        stdout.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // stdin closed; persist as if the user had typed exit
            repo.save(book)?;
            break;
        }

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                println!("{}", translate(&err));
                continue;
            }
        };

        debug!(?command, "dispatching");

        if command == Command::Exit {
            repo.save(book)?;
            println!("Data has been saved. Good bye!");
            break;
        }

        println!("{}", execute(command, book, settings));
    }

    Ok(())
}

/// Produce the reply line for one command.
fn execute(command: Command, book: &mut AddressBook, settings: &Settings) -> String {
    let mut service = ContactService::new(book);

    match command {
        Command::Hello => "How can I help you?".to_string(),

        Command::Add { name, phone } => match service.add_contact(&name, &phone) {
            Ok(AddOutcome::Added) => format!("Contact {} added.", name),
            Ok(AddOutcome::Updated) => format!("Contact {} updated.", name),
            Err(err) => translate(&err),
        },

        Command::Change { name, phone } => match service.change_phone(&name, &phone) {
            Ok(true) => "Phone updated.".to_string(),
            Ok(false) => "This contact doesn't exist, please add new contact.".to_string(),
            Err(err) => translate(&err),
        },

        Command::Phone { name } => match service.phones(&name) {
            Ok(phones) => format_phone_list(&phones),
            Err(BookError::ContactNotFound { .. }) => "This contact doesn't exist.".to_string(),
            Err(err) => translate(&err),
        },

        Command::All => format_contact_list(&service.all()),

        Command::AddBirthday { name, date } => match service.set_birthday(&name, &date) {
            Ok(()) => format!("Birthday added for {}.", name),
            Err(BookError::ContactNotFound { .. }) => format!("Contact '{}' not found.", name),
            Err(err) => translate(&err),
        },

        Command::ShowBirthday { name } => match service.birthday(&name) {
            Ok(Some(birthday)) => format!("Birthday for {}: {}", name, birthday),
            Ok(None) => format!("No birthday set for {}.", name),
            Err(BookError::ContactNotFound { .. }) => format!("Contact '{}' not found.", name),
            Err(err) => translate(&err),
        },

        Command::Birthdays => {
            format_upcoming(&service.upcoming_birthdays(settings.upcoming_window_days))
        }

        Command::Unknown => "Invalid command.".to_string(),

        // handled by the loop before dispatch
        Command::Exit => String::new(),
    }
}

/// Map an error to the line shown to the user.
///
/// Validation and usage errors carry their message in their Display form;
/// not-found collapses to the generic reply.
fn translate(err: &BookError) -> String {
    match err {
        BookError::ContactNotFound { .. } => "Contact not found.".to_string(),
        other => other.to_string(),
    }
}
