use std::fs;

use abook::model::{AddressBook, Record};
use abook::store;
use tempfile::TempDir;

fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();

    let mut ann = Record::new("Ann").unwrap();
    ann.add_phone("0123456789").unwrap();
    ann.add_phone("5555555555").unwrap();
    ann.set_birthday("12.06.1990").unwrap();
    book.add_record(ann);

    let mut bob = Record::new("Bob").unwrap();
    bob.add_phone("1111111111").unwrap();
    book.add_record(bob);

    book.add_record(Record::new("Cid").unwrap());
    book
}

// ==========================================================================
// ROUND TRIP TESTS
// ==========================================================================

#[test]
fn save_then_load_round_trips() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("addressbook.json");
    let book = sample_book();

    store::save(&path, &book).unwrap();
    let loaded = store::load(&path).unwrap();

    assert_eq!(loaded, book);
}

#[test]
fn loaded_book_keeps_order_and_fields() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("addressbook.json");

    store::save(&path, &sample_book()).unwrap();
    let loaded = store::load(&path).unwrap();

    let names: Vec<&str> = loaded.iter().map(|r| r.name().as_str()).collect();
    assert_eq!(names, vec!["Ann", "Bob", "Cid"]);

    let ann = loaded.find("Ann").unwrap();
    let phones: Vec<&str> = ann.phones().iter().map(|p| p.as_str()).collect();
    assert_eq!(phones, vec!["0123456789", "5555555555"]);
    assert_eq!(ann.birthday().unwrap().to_string(), "12.06.1990");

    assert!(loaded.find("Cid").unwrap().phones().is_empty());
    assert!(loaded.find("Bob").unwrap().birthday().is_none());
}

#[test]
fn dates_are_stored_in_display_form() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("addressbook.json");

    store::save(&path, &sample_book()).unwrap();
    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("12.06.1990"));
}

// ==========================================================================
// LOAD EDGE CASES
// ==========================================================================

#[test]
fn load_missing_file_gives_empty_book() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nothing-here.json");

    let book = store::load(&path).unwrap();
    assert!(book.is_empty());
}

#[test]
fn load_rejects_a_corrupt_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("addressbook.json");
    fs::write(&path, "not json").unwrap();

    assert!(store::load(&path).is_err());
    // The broken file is still there for the user to inspect.
    assert_eq!(fs::read_to_string(&path).unwrap(), "not json");
}

#[test]
fn load_rejects_records_with_bad_fields() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("addressbook.json");
    fs::write(
        &path,
        r#"[{"name": "Ann", "phones": ["123"], "birthday": null}]"#,
    )
    .unwrap();

    assert!(store::load(&path).is_err());
}

// ==========================================================================
// SAVE EDGE CASES
// ==========================================================================

#[test]
fn save_creates_missing_parent_directories() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("dir").join("book.json");

    store::save(&path, &sample_book()).unwrap();
    assert_eq!(store::load(&path).unwrap(), sample_book());
}

#[test]
fn save_replaces_previous_contents() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("addressbook.json");

    store::save(&path, &sample_book()).unwrap();
    store::save(&path, &AddressBook::new()).unwrap();

    assert!(store::load(&path).unwrap().is_empty());
}
