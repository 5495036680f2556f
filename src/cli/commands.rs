use chrono::{Local, NaiveDate};

use crate::error::{AbookError, AbookResult};
use crate::model::{AddressBook, Record};
use crate::validation::{self, BIRTHDAY_FORMAT};

/// Days ahead scanned by the `birthdays` command.
const BIRTHDAY_WINDOW_DAYS: i64 = 7;

/// `add <name> <phone>`. Creates the contact when it does not exist
/// yet; otherwise appends the number to the existing one.
pub fn add(book: &mut AddressBook, args: &str) -> AbookResult<String> {
    let (name, phone) = two_args(args, "add <name> <phone>")?;
    // The command checks the phone shape up front; the record checks
    // again when the number is constructed.
    validation::phone_digits(phone)?;
    match book.find_mut(name) {
        Some(record) => {
            record.add_phone(phone)?;
            Ok("Phone added.".to_string())
        }
        None => {
            let mut record = Record::new(name)?;
            record.add_phone(phone)?;
            book.add_record(record);
            Ok("Contact added.".to_string())
        }
    }
}

/// `change <name> <old-phone> <new-phone>`.
pub fn change(book: &mut AddressBook, args: &str) -> AbookResult<String> {
    let (name, old, new) = three_args(args, "change <name> <old-phone> <new-phone>")?;
    validation::phone_digits(new)?;
    let record = book
        .find_mut(name)
        .ok_or_else(|| AbookError::ContactNotFound {
            name: name.to_string(),
        })?;
    record.edit_phone(old, new)?;
    Ok("Contact updated.".to_string())
}

/// `phone <name>`. Shows the contact's first phone number.
pub fn phone(book: &AddressBook, args: &str) -> AbookResult<String> {
    let name = one_arg(args, "phone <name>")?;
    let record = book.find(name).ok_or_else(|| AbookError::ContactNotFound {
        name: name.to_string(),
    })?;
    match record.phones().first() {
        Some(phone) => Ok(format!("Phone for {}: {}", record.name(), phone)),
        None => Ok(format!("No phone number recorded for {}.", record.name())),
    }
}

/// `all`. Lists every contact, one per line, in book order.
pub fn all(book: &AddressBook) -> AbookResult<String> {
    if book.is_empty() {
        return Ok("No contacts available.".to_string());
    }
    Ok(book
        .iter()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `add-birthday <name> <DD.MM.YYYY>`.
pub fn add_birthday(book: &mut AddressBook, args: &str) -> AbookResult<String> {
    let (name, date) = two_args(args, "add-birthday <name> <DD.MM.YYYY>")?;
    let record = book
        .find_mut(name)
        .ok_or_else(|| AbookError::ContactNotFound {
            name: name.to_string(),
        })?;
    record.set_birthday(date)?;
    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>`.
pub fn show_birthday(book: &AddressBook, args: &str) -> AbookResult<String> {
    let name = one_arg(args, "show-birthday <name>")?;
    let record = book.find(name).ok_or_else(|| AbookError::ContactNotFound {
        name: name.to_string(),
    })?;
    match record.birthday() {
        Some(birthday) => Ok(format!("Birthday for {}: {}", record.name(), birthday)),
        None => Ok("Birthday not specified.".to_string()),
    }
}

/// `birthdays`. Contacts whose birthday falls within the next week,
/// counting today.
pub fn birthdays(book: &AddressBook) -> AbookResult<String> {
    let upcoming = book.upcoming_birthdays(BIRTHDAY_WINDOW_DAYS, today());
    if upcoming.is_empty() {
        return Ok("No upcoming birthdays.".to_string());
    }
    Ok(upcoming
        .iter()
        .map(|u| {
            format!(
                "Upcoming birthday for {} on {}",
                u.name,
                u.date.format(BIRTHDAY_FORMAT)
            )
        })
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `delete <name>` (also reachable as `remove`).
pub fn delete(book: &mut AddressBook, args: &str) -> AbookResult<String> {
    let name = one_arg(args, "delete <name>")?;
    match book.delete(name) {
        Some(_) => Ok("Contact deleted.".to_string()),
        None => Err(AbookError::ContactNotFound {
            name: name.to_string(),
        }),
    }
}

/// `remove-phone <name> <phone>`. Dropping a number the contact does
/// not have still succeeds.
pub fn remove_phone(book: &mut AddressBook, args: &str) -> AbookResult<String> {
    let (name, phone) = two_args(args, "remove-phone <name> <phone>")?;
    let record = book
        .find_mut(name)
        .ok_or_else(|| AbookError::ContactNotFound {
            name: name.to_string(),
        })?;
    record.remove_phone(phone);
    Ok("Phone removed.".to_string())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn one_arg<'a>(args: &'a str, usage: &'static str) -> AbookResult<&'a str> {
    let mut parts = args.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some(a), None) => Ok(a),
        _ => Err(AbookError::Usage(usage)),
    }
}

fn two_args<'a>(args: &'a str, usage: &'static str) -> AbookResult<(&'a str, &'a str)> {
    let mut parts = args.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(a), Some(b), None) => Ok((a, b)),
        _ => Err(AbookError::Usage(usage)),
    }
}

fn three_args<'a>(args: &'a str, usage: &'static str) -> AbookResult<(&'a str, &'a str, &'a str)> {
    let mut parts = args.split_whitespace();
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(a), Some(b), Some(c), None) => Ok((a, b, c)),
        _ => Err(AbookError::Usage(usage)),
    }
}
