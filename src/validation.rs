use chrono::NaiveDate;

use crate::error::{AbookError, AbookResult};

/// Date format used everywhere a birthday is read or shown.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> AbookResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(AbookError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Validates that a string is exactly ten decimal digits.
pub fn phone_digits(value: &str) -> AbookResult<&str> {
    if value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(value)
    } else {
        Err(AbookError::InvalidPhone {
            value: value.to_string(),
        })
    }
}

/// Parses a `DD.MM.YYYY` string into a real calendar date.
pub fn birthday_date(value: &str) -> AbookResult<NaiveDate> {
    NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT).map_err(|_| AbookError::InvalidBirthday {
        value: value.to_string(),
    })
}
