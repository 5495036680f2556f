use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::fields::Name;
use crate::model::record::Record;

/// The whole address book, keyed by contact name. Records keep the
/// order they were first added in; the serialized form is a plain list
/// of records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Record>", into = "Vec<Record>")]
pub struct AddressBook {
    records: Vec<Record>,
}

/// A birthday falling inside a query window, resolved to the concrete
/// date it is observed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: Name,
    pub date: NaiveDate,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `record` under its name. An existing record with the
    /// same name is replaced without moving its position.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(i) => self.records[i] = record,
            None => self.records.push(record),
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Removes the record stored under `name`, returning it if there
    /// was one.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let i = self.position(name)?;
        Some(self.records.remove(i))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Birthdays whose next occurrence falls within `window_days` of
    /// `as_of`, inclusive on both ends. Results follow book order.
    pub fn upcoming_birthdays(&self, window_days: i64, as_of: NaiveDate) -> Vec<UpcomingBirthday> {
        self.records
            .iter()
            .filter_map(|record| {
                let date = record.birthday()?.next_occurrence(as_of)?;
                ((date - as_of).num_days() <= window_days).then(|| UpcomingBirthday {
                    name: record.name().clone(),
                    date,
                })
            })
            .collect()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}

impl From<Vec<Record>> for AddressBook {
    /// Rebuilds the book through `add_record`, so a list carrying
    /// duplicate names collapses to one record per name with the later
    /// entry winning.
    fn from(records: Vec<Record>) -> Self {
        let mut book = AddressBook::new();
        for record in records {
            book.add_record(record);
        }
        book
    }
}

impl From<AddressBook> for Vec<Record> {
    fn from(book: AddressBook) -> Self {
        book.records
    }
}
