use crate::error::BookResult;
use crate::storage::traits::{ContactStorage, StoredBook};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Contact storage backed by a single JSON file.
///
/// The whole book is rewritten on every save. Writes go to a `.tmp`
/// sibling first and are renamed over the target, so an interrupted save
/// leaves the previous file intact.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create a storage for the file at `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the book file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn encode(book: &StoredBook) -> BookResult<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        book.serialize(&mut ser)?;
        Ok(buf)
    }
}

impl ContactStorage for JsonFileStorage {
    fn load(&self) -> BookResult<Option<StoredBook>> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No book file yet");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let book: StoredBook = serde_json::from_slice(&data)?;
        debug!(path = %self.path.display(), contacts = book.len(), "Loaded book file");
        Ok(Some(book))
    }

    fn save(&self, book: &StoredBook) -> BookResult<()> {
        let data = Self::encode(book)?;
        let tmp = self.temp_path();
        fs::write(&tmp, data)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), contacts = book.len(), "Saved book file");
        Ok(())
    }
}
