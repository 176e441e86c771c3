//! Interactive command loop for the address book.
//!
//! Reads one command per line, runs it against the book and writes the
//! reply. Errors never end the loop; only `close` or `exit` (or end of
//! input) does.

pub mod command;
pub mod handler;

pub use command::{parse_input, Command};
pub use handler::{error_message, execute};

use crate::services::AddressBook;
use crate::storage::ContactStorage;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Prompt shown before each command.
pub const PROMPT: &str = "Enter a command: ";

/// Run the command loop until `close`/`exit` or end of input.
///
/// # Errors
///
/// Only failures to read `input` or write `output` are returned.
pub fn run<S, R, W>(book: &mut AddressBook<S>, input: R, mut output: W) -> io::Result<()>
where
    S: ContactStorage,
    R: BufRead,
    W: Write,
{
    writeln!(output, "Welcome to the assistant bot!")?;
    let mut lines = input.lines();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(output, "{}", error_message(&e))?;
                continue;
            }
        };

        debug!(?command, "Executing command");
        let exit = command == Command::Exit;
        match execute(book, command) {
            Ok(reply) => writeln!(output, "{}", reply)?,
            Err(e) => {
                debug!(error = %e, "Command failed");
                writeln!(output, "{}", error_message(&e))?;
            }
        }

        if exit {
            break;
        }
    }

    Ok(())
}
