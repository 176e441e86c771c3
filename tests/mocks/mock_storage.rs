use address_book::error::{BookError, BookResult};
use address_book::storage::{ContactStorage, StoredBook};
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// Mock contact storage for testing.
///
/// Keeps the last saved book in memory, can be told to fail saves, and
/// tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockStorage {
    book: Arc<Mutex<Option<StoredBook>>>,
    fail_saves: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockStorage {
    /// Create a new MockStorage holding nothing.
    pub fn new() -> Self {
        Self {
            book: Arc::new(Mutex::new(None)),
            fail_saves: Arc::new(Mutex::new(false)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Create a MockStorage that already holds `book`.
    pub fn with_book(book: StoredBook) -> Self {
        let storage = Self::new();
        *storage.book.lock().unwrap() = Some(book);
        storage
    }

    /// The last book passed to `save`, if any.
    pub fn saved(&self) -> Option<StoredBook> {
        self.book.lock().unwrap().clone()
    }

    /// Make every following `save` fail with an I/O error.
    pub fn fail_saves(&self, fail: bool) {
        *self.fail_saves.lock().unwrap() = fail;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        let mut counts = self.call_counts.lock().unwrap();
        counts.clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStorage for MockStorage {
    fn load(&self) -> BookResult<Option<StoredBook>> {
        self.track_call("load");
        Ok(self.book.lock().unwrap().clone())
    }

    fn save(&self, book: &StoredBook) -> BookResult<()> {
        self.track_call("save");

        if *self.fail_saves.lock().unwrap() {
            return Err(BookError::Io(io::Error::other("disk full")));
        }

        *self.book.lock().unwrap() = Some(book.clone());
        Ok(())
    }
}
