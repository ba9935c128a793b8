//! `Directory` — the name-keyed collection of contacts.
//!
//! The directory is the unit of persistence: it is saved and loaded whole.

use std::{collections::BTreeMap, fmt};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
  Result,
  birthdays::{self, Congratulation},
  field::Phone,
  record::ContactRecord,
};

/// Outcome of [`Directory::upsert_phone`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
  /// No contact had that name; one was created.
  Created,
  /// The phone was appended to an existing contact.
  Updated,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directory {
  contacts: BTreeMap<String, ContactRecord>,
}

impl Directory {
  pub fn new() -> Self { Self::default() }

  /// Insert `record` under its name, replacing any record already there.
  pub fn add(&mut self, record: ContactRecord) {
    self
      .contacts
      .insert(record.name.as_str().to_owned(), record);
  }

  pub fn find(&self, name: &str) -> Option<&ContactRecord> {
    self.contacts.get(name)
  }

  pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
    self.contacts.get_mut(name)
  }

  /// Remove `name` if present. Absent names are ignored.
  pub fn delete(&mut self, name: &str) -> Option<ContactRecord> {
    self.contacts.remove(name)
  }

  /// Attach `phone` to the contact called `name`, creating the contact if
  /// needed. An existing contact keeps its phones; the new one is appended.
  ///
  /// The phone is validated first, so a bad number never leaves a new,
  /// phoneless contact behind.
  pub fn upsert_phone(&mut self, name: &str, phone: &str) -> Result<Upsert> {
    let phone = Phone::new(phone)?;
    match self.contacts.get_mut(name) {
      Some(record) => {
        record.phones.push(phone);
        Ok(Upsert::Updated)
      }
      None => {
        let mut record = ContactRecord::new(name);
        record.phones.push(phone);
        self.add(record);
        Ok(Upsert::Created)
      }
    }
  }

  /// Contacts to congratulate within `horizon_days` of `today`, by date.
  pub fn upcoming_birthdays(
    &self,
    today: NaiveDate,
    horizon_days: u32,
  ) -> Vec<Congratulation> {
    birthdays::upcoming(self.contacts.values(), today, horizon_days)
  }

  pub fn iter(&self) -> impl Iterator<Item = &ContactRecord> {
    self.contacts.values()
  }

  pub fn len(&self) -> usize { self.contacts.len() }

  pub fn is_empty(&self) -> bool { self.contacts.is_empty() }
}

impl fmt::Display for Directory {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.is_empty() {
      return f.write_str("Address book is empty.");
    }
    let lines: Vec<String> = self.iter().map(ContactRecord::to_string).collect();
    f.write_str(&lines.join("\n"))
  }
}
