use crate::error::BookResult;
use crate::models::record::StoredRecord;
use indexmap::IndexMap;

/// Persisted form of the whole book: contact name to stored record, in
/// the order contacts were first added.
pub type StoredBook = IndexMap<String, StoredRecord>;

/// Storage backend for the address book.
///
/// Provides abstraction over where the book lives, enabling different
/// implementations (JSON file, in-memory mock).
pub trait ContactStorage {
    /// Read the persisted book.
    ///
    /// Returns `Ok(None)` when nothing has been persisted yet.
    fn load(&self) -> BookResult<Option<StoredBook>>;

    /// Replace the persisted book with `book`.
    fn save(&self, book: &StoredBook) -> BookResult<()>;
}
