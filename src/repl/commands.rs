//! REPL command parsing
//!
//! Splits a raw input line into a lowercase command token and its
//! whitespace-separated arguments, and matches it against the known
//! commands.

use crate::error::{BookError, BookResult};

/// A parsed REPL command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    Change { name: String, phone: String },
    Phone { name: String },
    All,
    AddBirthday { name: String, date: String },
    ShowBirthday { name: String },
    Birthdays,
    Exit,
    Unknown,
}

impl Command {
    /// Parse one input line. A blank line parses to `None`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Usage` when a recognized command is missing
    /// arguments (or, for fixed-arity commands, given extras).
    pub fn parse(line: &str) -> BookResult<Option<Command>> {
        let mut tokens = line.split_whitespace();
        let Some(first) = tokens.next() else {
            return Ok(None);
        };
        let command = first.to_lowercase();
        let args: Vec<&str> = tokens.collect();

        let parsed = match command.as_str() {
            "hello" => Command::Hello,
            "add" => {
                let (name, phone) = two_args(&args)?;
                Command::Add { name, phone }
            }
            "change" => {
                let (name, phone) = two_args(&args)?;
                Command::Change { name, phone }
            }
            "phone" => Command::Phone {
                name: first_arg(&args)?,
            },
            "all" => Command::All,
            "add-birthday" => {
                let (name, date) = two_args(&args)?;
                Command::AddBirthday { name, date }
            }
            "show-birthday" => Command::ShowBirthday {
                name: first_arg(&args)?,
            },
            "birthdays" => Command::Birthdays,
            "close" | "exit" => Command::Exit,
            _ => Command::Unknown,
        };

        Ok(Some(parsed))
    }
}

fn two_args(args: &[&str]) -> BookResult<(String, String)> {
    match args {
        [a, b] => Ok((a.to_string(), b.to_string())),
        _ => Err(BookError::Usage),
    }
}

fn first_arg(args: &[&str]) -> BookResult<String> {
    args.first()
        .map(|s| s.to_string())
        .ok_or(BookError::Usage)
}
