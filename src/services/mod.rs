//! Application service layer.
//!
//! The address book owns the in-memory records and persists them through a
//! `ContactStorage` after every change. The birthday report is kept apart
//! from the book so it can be computed for any reference date.

mod address_book;
mod birthdays;

pub use address_book::AddressBook;
pub use birthdays::{upcoming_birthdays, BIRTHDAY_WINDOW_DAYS};
