//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when working with the address book.
#[derive(Error, Debug)]
pub enum BookError {
    /// A phone number, birthday or name failed validation
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A contact or phone number does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// A command was given fewer arguments than it needs
    #[error("Not enough arguments")]
    InsufficientArguments,

    /// Reading or writing the book file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The book file is not valid JSON or has the wrong shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
