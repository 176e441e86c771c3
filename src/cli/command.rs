//! Command-line parsing.

use crate::error::{BookError, BookResult};

/// One parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    /// Create the contact if missing, then append the phone.
    Add { name: String, phone: String },
    Change { name: String, old: String, new: String },
    Phone { name: String },
    RemovePhone { name: String, phone: String },
    Delete { name: String },
    All,
    AddBirthday { name: String, birthday: String },
    ShowBirthday { name: String },
    Birthdays,
    Exit,
    Unknown(String),
}

/// Split a line into a lowercased command word and its arguments.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?.to_lowercase();
    let args = parts.map(str::to_string).collect();
    Some((command, args))
}

impl Command {
    /// Build a command from a command word and its arguments.
    ///
    /// Extra arguments are ignored.
    ///
    /// # Errors
    ///
    /// `BookError::InsufficientArguments` if the command needs more
    /// arguments than were given.
    pub fn from_parts(command: &str, args: Vec<String>) -> BookResult<Self> {
        let mut args = args.into_iter();
        let mut next = || args.next().ok_or(BookError::InsufficientArguments);

        let command = match command {
            "hello" => Command::Hello,
            "add" => Command::Add {
                name: next()?,
                phone: next()?,
            },
            "change" => Command::Change {
                name: next()?,
                old: next()?,
                new: next()?,
            },
            "phone" => Command::Phone { name: next()? },
            "remove-phone" => Command::RemovePhone {
                name: next()?,
                phone: next()?,
            },
            "delete" => Command::Delete { name: next()? },
            "all" => Command::All,
            "add-birthday" => Command::AddBirthday {
                name: next()?,
                birthday: next()?,
            },
            "show-birthday" => Command::ShowBirthday { name: next()? },
            "birthdays" => Command::Birthdays,
            "close" | "exit" => Command::Exit,
            other => Command::Unknown(other.to_string()),
        };
        Ok(command)
    }

    /// Parse a full input line. Returns `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> BookResult<Option<Self>> {
        match parse_input(line) {
            Some((command, args)) => Self::from_parts(&command, args).map(Some),
            None => Ok(None),
        }
    }
}
