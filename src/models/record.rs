//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// A contact: a name, any number of phones and an optional birthday.
///
/// The name never changes after creation. Phones keep insertion order and
/// may repeat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the name is empty or the birthday is
    /// not a valid `DD.MM.YYYY` date.
    pub fn new(name: impl Into<String>, birthday: Option<&str>) -> Result<Self, ValidationError> {
        let name = Name::new(name)?;
        let birthday = birthday.map(Birthday::new).transpose()?;
        Ok(Self {
            name,
            phones: Vec::new(),
            birthday,
        })
    }

    /// The contact name, fixed at creation.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phones in the order they were added.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The birthday, if one is set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number. Duplicates are allowed.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    /// Remove every phone equal to `phone`, returning how many were dropped.
    pub fn remove_phone(&mut self, phone: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != phone);
        before - self.phones.len()
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// # Errors
    ///
    /// - `BookError::NotFound` if no phone equals `old`
    /// - `BookError::Validation` if `new` is not a valid phone
    ///
    /// The phone list is unchanged on error.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let phone = self
            .phones
            .iter_mut()
            .find(|p| p.as_str() == old)
            .ok_or_else(|| {
                BookError::NotFound(format!("phone {} for contact {}", old, self.name))
            })?;
        phone.set(new)?;
        Ok(())
    }

    /// Find the phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Validate and set the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        match self.birthday.as_mut() {
            Some(existing) => existing.set(birthday)?,
            None => self.birthday = Some(Birthday::new(birthday)?),
        }
        Ok(())
    }

    /// Rebuild a record from its persisted form.
    ///
    /// `key` is the map key the entry was stored under and becomes the
    /// record name. Invalid phones fail the load; an invalid birthday is
    /// logged and dropped so one bad date does not lose the whole book.
    pub fn from_stored(key: &str, stored: StoredRecord) -> BookResult<Self> {
        if stored.name != key {
            warn!(key, name = %stored.name, "Stored name differs from its key, using key");
        }

        let mut record = Record::new(key, None)?;
        for phone in &stored.phones {
            record.add_phone(phone)?;
        }

        if let Some(raw) = stored.birthday.as_deref().filter(|b| !b.is_empty()) {
            if let Err(e) = record.add_birthday(raw) {
                warn!(contact = key, error = %e, "Skipping invalid stored birthday");
            }
        }

        Ok(record)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        let birthday = self.birthday.as_ref().map_or("none", Birthday::as_str);
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name, phones, birthday
        )
    }
}

/// Persisted shape of a record inside the book file.
///
/// Fields stay raw strings so loading can re-validate them one by one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct StoredRecord {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub phones: Vec<String>,

    #[serde(default)]
    pub birthday: Option<String>,
}

impl From<&Record> for StoredRecord {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name.as_str().to_string(),
            phones: record.phones.iter().map(|p| p.as_str().to_string()).collect(),
            birthday: record.birthday.as_ref().map(|b| b.as_str().to_string()),
        }
    }
}
