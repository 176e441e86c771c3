//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Textual format of a birthday, as accepted by `chrono`.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono alone accepts "1.2.2000", so the digit counts are pinned here.
static BIRTHDAY_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("valid birthday regex"));

/// A birthday in `DD.MM.YYYY` form.
///
/// The raw string is kept as the canonical form, next to the parsed date
/// used for the upcoming-birthday arithmetic.
///
/// # Example
///
/// ```
/// use address_book::domain::Birthday;
///
/// let birthday = Birthday::new("05.03.1990").unwrap();
/// assert_eq!(birthday.as_str(), "05.03.1990");
/// assert!(Birthday::new("31.02.1990").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday, validating shape and calendar date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the value is not a
    /// two-digit day, two-digit month and four-digit year separated by dots,
    /// or if that day does not exist.
    pub fn new(birthday: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = birthday.into();
        let date = Self::parse(&raw)?;
        Ok(Self { raw, date })
    }

    /// Replace the birthday, keeping the old one if the new value is invalid.
    pub fn set(&mut self, birthday: impl Into<String>) -> Result<(), ValidationError> {
        let raw = birthday.into();
        self.date = Self::parse(&raw)?;
        self.raw = raw;
        Ok(())
    }

    fn parse(raw: &str) -> Result<NaiveDate, ValidationError> {
        if !BIRTHDAY_SHAPE.is_match(raw) {
            return Err(ValidationError::InvalidBirthday(raw.to_string()));
        }
        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map_err(|_| ValidationError::InvalidBirthday(raw.to_string()))
    }

    /// Get the birthday as a string slice.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed date of birth.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The first anniversary falling on or after `today`.
    ///
    /// Returns `None` when the day does not exist in the year it lands in,
    /// which only happens for 29 February outside leap years.
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let born = self.date();
        let this_year = born.with_year(today.year())?;
        if this_year >= today {
            return Some(this_year);
        }
        born.with_year(today.year() + 1)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
