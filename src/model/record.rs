use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AbookResult;
use crate::model::fields::{Birthday, Name, PhoneNumber};

/// One contact: a name, any number of phone numbers, an optional
/// birthday. The name never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: &str) -> AbookResult<Self> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Appends a phone number. A number already on the record is left
    /// alone, so adding twice keeps a single copy.
    pub fn add_phone(&mut self, raw: &str) -> AbookResult<()> {
        let phone = PhoneNumber::new(raw)?;
        if !self.phones.contains(&phone) {
            self.phones.push(phone);
        }
        Ok(())
    }

    /// Drops every phone matching `raw`. Unknown numbers are ignored.
    pub fn remove_phone(&mut self, raw: &str) {
        self.phones.retain(|p| p.as_str() != raw);
    }

    /// Replaces `old_raw` with `new_raw` in place, keeping its position
    /// in the list. When `old_raw` is not on the record nothing happens
    /// and the replacement is never validated.
    pub fn edit_phone(&mut self, old_raw: &str, new_raw: &str) -> AbookResult<()> {
        if let Some(slot) = self.phones.iter_mut().find(|p| p.as_str() == old_raw) {
            *slot = PhoneNumber::new(new_raw)?;
        }
        Ok(())
    }

    /// Sets the birthday, overwriting any previous one.
    pub fn set_birthday(&mut self, raw: &str) -> AbookResult<()> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        let birthday = match &self.birthday {
            Some(b) => b.to_string(),
            None => "Not specified".to_string(),
        };
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name, phones, birthday
        )
    }
}
