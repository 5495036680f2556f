use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{AbookError, AbookResult};
use crate::validation::{self, BIRTHDAY_FORMAT};

/// A contact's name. Non-blank by construction; it doubles as the
/// lookup key in the address book.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(raw: &str) -> AbookResult<Self> {
        validation::non_blank(raw, "name").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Name {
    type Error = AbookError;

    fn try_from(value: String) -> AbookResult<Self> {
        Name::new(&value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

/// A ten-digit phone number, validated at construction. Replacing a
/// number means constructing a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(raw: &str) -> AbookResult<Self> {
        validation::phone_digits(raw).map(|digits| Self(digits.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = AbookError;

    fn try_from(value: String) -> AbookResult<Self> {
        PhoneNumber::new(&value)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.0
    }
}

/// A birthday, carried as a plain calendar date. Read and shown in
/// `DD.MM.YYYY` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn new(raw: &str) -> AbookResult<Self> {
        validation::birthday_date(raw).map(Self)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The next date this birthday comes around, counting `today`
    /// itself. A Feb 29 birthday is observed on Mar 1 in years without
    /// a leap day. `None` only when the occurrence year would fall
    /// outside chrono's representable range.
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.occurrence_in(today.year())?;
        if this_year < today {
            self.occurrence_in(today.year() + 1)
        } else {
            Some(this_year)
        }
    }

    fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        // The stored day/month came from a real date, so the only
        // combination that can fail here is Feb 29 in a common year.
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl TryFrom<String> for Birthday {
    type Error = AbookError;

    fn try_from(value: String) -> AbookResult<Self> {
        Birthday::new(&value)
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> Self {
        birthday.to_string()
    }
}
