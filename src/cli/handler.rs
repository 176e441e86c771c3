//! Command execution against an address book.

use crate::cli::command::Command;
use crate::domain::Phone;
use crate::error::{BookError, BookResult};
use crate::models::Record;
use crate::services::AddressBook;
use crate::storage::ContactStorage;

/// Run one command and return the text to show the user.
pub fn execute<S: ContactStorage>(
    book: &mut AddressBook<S>,
    command: Command,
) -> BookResult<String> {
    let reply = match command {
        Command::Hello => "How can I help you?".to_string(),
        Command::Add { name, phone } => {
            if book.find(&name).is_ok() {
                book.add_phone(&name, &phone)?;
                "Contact updated.".to_string()
            } else {
                let mut record = Record::new(name, None)?;
                record.add_phone(&phone)?;
                book.add_record(record)?;
                "Contact added.".to_string()
            }
        }
        Command::Change { name, old, new } => {
            book.change_phone(&name, &old, &new)?;
            "Contact updated.".to_string()
        }
        Command::Phone { name } => {
            let record = book.find(&name)?;
            if record.phones().is_empty() {
                "No phones saved.".to_string()
            } else {
                record
                    .phones()
                    .iter()
                    .map(Phone::as_str)
                    .collect::<Vec<_>>()
                    .join("; ")
            }
        }
        Command::RemovePhone { name, phone } => {
            book.remove_phone(&name, &phone)?;
            "Phone removed.".to_string()
        }
        Command::Delete { name } => {
            book.delete(&name)?;
            "Contact deleted.".to_string()
        }
        Command::All => {
            if book.is_empty() {
                "No contacts saved.".to_string()
            } else {
                book.all()
                    .values()
                    .map(Record::to_string)
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
        Command::AddBirthday { name, birthday } => {
            book.set_birthday(&name, &birthday)?;
            "Birthday added.".to_string()
        }
        Command::ShowBirthday { name } => match book.find(&name)?.birthday() {
            Some(birthday) => birthday.to_string(),
            None => "No birthday set.".to_string(),
        },
        Command::Birthdays => {
            let lines = book.upcoming_birthdays();
            if lines.is_empty() {
                "No upcoming birthdays.".to_string()
            } else {
                lines.join("\n")
            }
        }
        Command::Exit => "Good bye!".to_string(),
        Command::Unknown(_) => "Invalid command.".to_string(),
    };
    Ok(reply)
}

/// Fixed user-facing text for an error.
pub fn error_message(err: &BookError) -> String {
    match err {
        BookError::Validation(_) => "Give me name and phone please.".to_string(),
        BookError::NotFound(_) => "Contact not found.".to_string(),
        BookError::InsufficientArguments => "Please provide enough arguments.".to_string(),
        BookError::Io(_) | BookError::Json(_) => format!("Error: {}", err),
    }
}
