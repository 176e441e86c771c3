//! Address Book - a personal contact manager with birthday reminders.
//!
//! This library stores named contacts with validated phone numbers and
//! birthdays, persists them to a JSON file after every change, and reports
//! which contacts celebrate a birthday in the coming week.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`Name`, `Phone`, `Birthday`)
//! - **models**: The `Record` for one contact and its persisted form
//! - **storage**: The `ContactStorage` trait and its JSON file implementation
//! - **services**: The `AddressBook` and the upcoming-birthday report
//! - **cli**: Line-based command parsing and the interactive loop
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{BookError, BookResult, ConfigError};
pub use models::Record;
pub use services::AddressBook;
pub use storage::{ContactStorage, JsonFileStorage, StoredBook};
