//! Address book service.
//!
//! Keeps every record in memory, keyed by name, and writes the whole book
//! back through its storage after each successful change.

use crate::error::{BookError, BookResult};
use crate::models::record::StoredRecord;
use crate::models::Record;
use crate::services::birthdays::upcoming_birthdays;
use crate::storage::{ContactStorage, StoredBook};
use chrono::{Local, NaiveDate};
use indexmap::IndexMap;
use tracing::{debug, info};

/// The collection of all contacts plus its persistence.
///
/// Invariant: every key equals the name of the record stored under it.
/// Records keep the order their names were first added in; replacing a
/// record keeps its position.
pub struct AddressBook<S: ContactStorage> {
    records: IndexMap<String, Record>,
    storage: S,
}

impl<S: ContactStorage> AddressBook<S> {
    /// Create an empty book over `storage`. Nothing is read or written.
    pub fn new(storage: S) -> Self {
        Self {
            records: IndexMap::new(),
            storage,
        }
    }

    /// Create a book and fill it from whatever `storage` already holds.
    pub fn open(storage: S) -> BookResult<Self> {
        let mut book = Self::new(storage);
        book.load_from_file()?;
        Ok(book)
    }

    /// The storage backend the book saves through.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Insert `record`, replacing any record with the same name, then save.
    pub fn add_record(&mut self, record: Record) -> BookResult<()> {
        let name = record.name().as_str().to_string();
        if self.records.insert(name.clone(), record).is_some() {
            debug!(contact = %name, "Replaced existing contact");
        } else {
            debug!(contact = %name, "Added contact");
        }
        self.save_to_file()
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> BookResult<&Record> {
        self.records.get(name).ok_or_else(|| not_found(name))
    }

    fn find_mut(&mut self, name: &str) -> BookResult<&mut Record> {
        self.records.get_mut(name).ok_or_else(|| not_found(name))
    }

    /// Replace `old` with `new` in the phones of contact `name`, then save.
    ///
    /// Nothing is saved when the contact or the old phone is missing, or
    /// when `new` is invalid.
    pub fn change_phone(&mut self, name: &str, old: &str, new: &str) -> BookResult<()> {
        self.find_mut(name)?.edit_phone(old, new)?;
        self.save_to_file()
    }

    /// Append a phone to contact `name`, then save.
    pub fn add_phone(&mut self, name: &str, phone: &str) -> BookResult<()> {
        self.find_mut(name)?.add_phone(phone)?;
        self.save_to_file()
    }

    /// Remove every copy of `phone` from contact `name`, then save.
    ///
    /// # Errors
    ///
    /// `BookError::NotFound` if the contact does not exist or has no such phone.
    pub fn remove_phone(&mut self, name: &str, phone: &str) -> BookResult<()> {
        if self.find_mut(name)?.remove_phone(phone) == 0 {
            return Err(BookError::NotFound(format!(
                "phone {} for contact {}",
                phone, name
            )));
        }
        self.save_to_file()
    }

    /// Set or replace the birthday of contact `name`, then save.
    pub fn set_birthday(&mut self, name: &str, birthday: &str) -> BookResult<()> {
        self.find_mut(name)?.add_birthday(birthday)?;
        self.save_to_file()
    }

    /// Remove contact `name`, then save.
    pub fn delete(&mut self, name: &str) -> BookResult<()> {
        if self.records.shift_remove(name).is_none() {
            return Err(not_found(name));
        }
        debug!(contact = %name, "Deleted contact");
        self.save_to_file()
    }

    /// All records, keyed by name, in insertion order.
    pub fn all(&self) -> &IndexMap<String, Record> {
        &self.records
    }

    /// Number of contacts in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book has no contacts.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Write the whole book to storage.
    pub fn save_to_file(&self) -> BookResult<()> {
        let stored: StoredBook = self
            .records
            .iter()
            .map(|(name, record)| (name.clone(), StoredRecord::from(record)))
            .collect();
        self.storage.save(&stored)
    }

    /// Merge the persisted book into this one.
    ///
    /// Entries from storage replace in-memory records with the same name.
    /// Does nothing if storage holds no book yet. On error the in-memory
    /// records are left untouched.
    pub fn load_from_file(&mut self) -> BookResult<()> {
        let Some(stored) = self.storage.load()? else {
            info!("No saved contacts, starting with an empty book");
            return Ok(());
        };

        let loaded = stored
            .into_iter()
            .map(|(key, entry)| Record::from_stored(&key, entry).map(|record| (key, record)))
            .collect::<BookResult<Vec<_>>>()?;

        info!(contacts = loaded.len(), "Loaded contacts");
        self.records.extend(loaded);
        Ok(())
    }

    /// Birthdays in the coming week, counted from the local date.
    pub fn upcoming_birthdays(&self) -> Vec<String> {
        self.upcoming_birthdays_from(Local::now().date_naive())
    }

    /// Birthdays in the week starting at `today`.
    pub fn upcoming_birthdays_from(&self, today: NaiveDate) -> Vec<String> {
        upcoming_birthdays(self.records.values(), today)
    }
}

fn not_found(name: &str) -> BookError {
    BookError::NotFound(format!("contact {}", name))
}
