//! Address Book - Main entry point
//!
//! Runs the interactive command loop over stdin/stdout against the book
//! file named by the configuration.

use address_book::storage::JsonFileStorage;
use address_book::{cli, AddressBook, Config};
use anyhow::Result;
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can seed the filter
    let config = Config::from_env()?;

    // Logs go to stderr so stdout carries only command replies
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Using book file {}", config.book_path.display());

    let storage = JsonFileStorage::new(&config.book_path);
    let mut book = match AddressBook::open(storage) {
        Ok(book) => book,
        Err(e) => {
            error!("Failed to load {}: {}", config.book_path.display(), e);
            return Err(e.into());
        }
    };

    let stdin = io::stdin();
    cli::run(&mut book, stdin.lock(), io::stdout())?;

    info!("Address book closed with {} contacts", book.len());
    Ok(())
}
