//! Round trips through the JSON book file.

use address_book::error::BookError;
use address_book::models::Record;
use address_book::services::AddressBook;
use address_book::storage::JsonFileStorage;
use std::fs;
use tempfile::TempDir;

fn storage_in(dir: &TempDir) -> JsonFileStorage {
    JsonFileStorage::new(dir.path().join("address-book.json"))
}

#[test]
fn test_save_then_load_reproduces_book() {
    let dir = tempfile::tempdir().unwrap();

    let mut book = AddressBook::new(storage_in(&dir));
    let mut john = Record::new("John", Some("05.03.1990")).unwrap();
    john.add_phone("1234567890").unwrap();
    john.add_phone("5555555555").unwrap();
    john.add_phone("1234567890").unwrap();
    book.add_record(john).unwrap();
    book.add_record(Record::new("Jane", None).unwrap()).unwrap();

    let reloaded = AddressBook::open(storage_in(&dir)).unwrap();
    assert_eq!(reloaded.all(), book.all());
    assert_eq!(
        reloaded.find("John").unwrap().birthday().unwrap().as_str(),
        "05.03.1990"
    );
}

#[test]
fn test_file_keeps_insertion_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut book = AddressBook::new(storage_in(&dir));
    for name in ["Zed", "Yan", "Amy"] {
        book.add_record(Record::new(name, None).unwrap()).unwrap();
    }

    let text = fs::read_to_string(book.storage().path()).unwrap();
    let zed = text.find("\"Zed\"").unwrap();
    let yan = text.find("\"Yan\"").unwrap();
    let amy = text.find("\"Amy\"").unwrap();
    assert!(zed < yan && yan < amy);

    let reloaded = AddressBook::open(storage_in(&dir)).unwrap();
    let names: Vec<&str> = reloaded.all().keys().map(String::as_str).collect();
    assert_eq!(names, vec!["Zed", "Yan", "Amy"]);
}

#[test]
fn test_file_layout() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir);
    let path = storage.path().to_path_buf();

    let mut book = AddressBook::new(storage);
    let mut jane = Record::new("Jane", None).unwrap();
    jane.add_phone("9876543210").unwrap();
    book.add_record(jane).unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "Jane": { "name": "Jane", "phones": ["9876543210"], "birthday": null }
        })
    );
}

#[test]
fn test_open_missing_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let book = AddressBook::open(storage_in(&dir)).unwrap();
    assert!(book.is_empty());
    assert!(!book.storage().path().exists());
}

#[test]
fn test_load_tolerates_missing_optional_fields() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir);
    fs::write(
        storage.path(),
        r#"{ "Jane": { "name": "Jane", "phones": ["9876543210"] }, "Bob": { "name": "Bob" } }"#,
    )
    .unwrap();

    let book = AddressBook::open(storage).unwrap();
    assert_eq!(book.len(), 2);
    assert!(book.find("Jane").unwrap().birthday().is_none());
    assert!(book.find("Bob").unwrap().phones().is_empty());
}

#[test]
fn test_load_drops_malformed_birthday() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir);
    fs::write(
        storage.path(),
        r#"{ "Jane": { "name": "Jane", "phones": [], "birthday": "1990-13-45" } }"#,
    )
    .unwrap();

    let book = AddressBook::open(storage).unwrap();
    assert!(book.find("Jane").unwrap().birthday().is_none());
}

#[test]
fn test_load_malformed_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir);
    fs::write(storage.path(), r#"{ "Jane": "#).unwrap();
    assert!(matches!(AddressBook::open(storage), Err(BookError::Json(_))));

    let storage = storage_in(&dir);
    fs::write(storage.path(), r#"["not", "an", "object"]"#).unwrap();
    assert!(matches!(AddressBook::open(storage), Err(BookError::Json(_))));
}

#[test]
fn test_load_invalid_phone_fails() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir);
    fs::write(
        storage.path(),
        r#"{ "Jane": { "name": "Jane", "phones": ["12-34"], "birthday": null } }"#,
    )
    .unwrap();
    assert!(matches!(
        AddressBook::open(storage),
        Err(BookError::Validation(_))
    ));
}

#[test]
fn test_delete_persists() {
    let dir = tempfile::tempdir().unwrap();
    let mut book = AddressBook::new(storage_in(&dir));
    book.add_record(Record::new("John", None).unwrap()).unwrap();
    book.add_record(Record::new("Jane", None).unwrap()).unwrap();
    book.delete("Jane").unwrap();

    let reloaded = AddressBook::open(storage_in(&dir)).unwrap();
    assert_eq!(reloaded.len(), 1);
    assert!(reloaded.find("Jane").is_err());
}
