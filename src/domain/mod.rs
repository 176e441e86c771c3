//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the raw strings that make up a
//! contact: its name, phone numbers and birthday. These value objects
//! validate at construction time and on every write, so an invalid value is
//! never stored in a record.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::Name;
pub use phone::Phone;
