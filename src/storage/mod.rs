mod json_file;
mod traits;

pub use json_file::JsonFileStorage;
pub use traits::{ContactStorage, StoredBook};
