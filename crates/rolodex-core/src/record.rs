//! `ContactRecord` — one contact's name, phone numbers and optional birthday.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  field::{Birthday, Name, Phone},
};

/// A single contact. Phones keep insertion order and may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
  pub name:     Name,
  pub phones:   Vec<Phone>,
  pub birthday: Option<Birthday>,
}

impl ContactRecord {
  /// A record with no phones and no birthday.
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name:     Name::from_label(name),
      phones:   Vec::new(),
      birthday: None,
    }
  }

  /// Validate `raw` and append it; duplicates are allowed.
  pub fn add_phone(&mut self, raw: &str) -> Result<()> {
    self.phones.push(Phone::new(raw)?);
    Ok(())
  }

  /// Remove the first phone equal to `value`.
  pub fn remove_phone(&mut self, value: &str) -> Result<()> {
    let idx = self.position(value)?;
    self.phones.remove(idx);
    Ok(())
  }

  /// Replace the first phone equal to `old` with `new`, keeping its position.
  ///
  /// The record is untouched if `old` is absent or `new` is invalid.
  pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
    let idx = self.position(old)?;
    self.phones[idx] = Phone::new(new)?;
    Ok(())
  }

  pub fn find_phone(&self, value: &str) -> Option<&Phone> {
    self.phones.iter().find(|p| p.as_str() == value)
  }

  /// Set the birthday, replacing any earlier one.
  pub fn set_birthday(&mut self, raw: &str) -> Result<()> {
    self.birthday = Some(Birthday::new(raw)?);
    Ok(())
  }

  /// Phone numbers joined with `"; "`, or `None` when there are none.
  pub fn phones_joined(&self) -> Option<String> {
    if self.phones.is_empty() {
      return None;
    }
    let numbers: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
    Some(numbers.join("; "))
  }

  fn position(&self, value: &str) -> Result<usize> {
    self
      .phones
      .iter()
      .position(|p| p.as_str() == value)
      .ok_or_else(|| Error::PhoneNotFound(value.to_owned()))
  }
}

impl fmt::Display for ContactRecord {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let phones = self.phones_joined();
    write!(
      f,
      "Contact name: {}, phones: {}, birthday: {}",
      self.name,
      phones.as_deref().unwrap_or("no phones"),
      self.birthday.as_ref().map_or("no birthday", Birthday::as_str),
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const A: &str = "0501111111";
  const B: &str = "0502222222";
  const C: &str = "0503333333";
  const X: &str = "0509999999";

  fn numbers(record: &ContactRecord) -> Vec<&str> {
    record.phones.iter().map(Phone::as_str).collect()
  }

  fn with_phones(phones: &[&str]) -> ContactRecord {
    let mut record = ContactRecord::new("bob");
    for p in phones {
      record.add_phone(p).unwrap();
    }
    record
  }

  #[test]
  fn new_record_is_empty() {
    let record = ContactRecord::new("bob");
    assert_eq!(record.name.as_str(), "bob");
    assert!(record.phones.is_empty());
    assert!(record.birthday.is_none());
  }

  #[test]
  fn add_phone_appends_in_order_and_allows_duplicates() {
    let record = with_phones(&[A, B, A]);
    assert_eq!(numbers(&record), vec![A, B, A]);
  }

  #[test]
  fn add_invalid_phone_leaves_record_unchanged() {
    let mut record = with_phones(&[A]);
    assert_eq!(
      record.add_phone("123"),
      Err(Error::InvalidPhone("123".into()))
    );
    assert_eq!(numbers(&record), vec![A]);
  }

  #[test]
  fn edit_phone_replaces_in_place() {
    let mut record = with_phones(&[A, B, C]);
    record.edit_phone(B, X).unwrap();
    assert_eq!(numbers(&record), vec![A, X, C]);
  }

  #[test]
  fn edit_phone_touches_only_first_match() {
    let mut record = with_phones(&[A, B, A]);
    record.edit_phone(A, X).unwrap();
    assert_eq!(numbers(&record), vec![X, B, A]);
  }

  #[test]
  fn edit_missing_phone_is_not_found() {
    let mut record = with_phones(&[A]);
    assert_eq!(record.edit_phone(B, X), Err(Error::PhoneNotFound(B.into())));
  }

  #[test]
  fn edit_to_invalid_phone_keeps_old_value() {
    let mut record = with_phones(&[A, B]);
    assert!(record.edit_phone(A, "nope").unwrap_err().is_validation());
    assert_eq!(numbers(&record), vec![A, B]);
  }

  #[test]
  fn remove_phone_drops_first_match() {
    let mut record = with_phones(&[A, B, A]);
    record.remove_phone(A).unwrap();
    assert_eq!(numbers(&record), vec![B, A]);
    assert_eq!(record.remove_phone(C), Err(Error::PhoneNotFound(C.into())));
  }

  #[test]
  fn find_phone_returns_first_match_or_none() {
    let record = with_phones(&[A, B]);
    assert_eq!(record.find_phone(B).map(Phone::as_str), Some(B));
    assert!(record.find_phone(C).is_none());
  }

  #[test]
  fn set_birthday_replaces_previous_value() {
    let mut record = ContactRecord::new("bob");
    record.set_birthday("01.01.1990").unwrap();
    record.set_birthday("02.02.1992").unwrap();
    assert_eq!(record.birthday.unwrap().as_str(), "02.02.1992");
  }

  #[test]
  fn invalid_birthday_keeps_previous_value() {
    let mut record = ContactRecord::new("bob");
    record.set_birthday("01.01.1990").unwrap();
    assert!(record.set_birthday("31.02.2020").is_err());
    assert_eq!(record.birthday.unwrap().as_str(), "01.01.1990");
  }

  #[test]
  fn display_uses_placeholders_when_unset() {
    let record = ContactRecord::new("bob");
    assert_eq!(
      record.to_string(),
      "Contact name: bob, phones: no phones, birthday: no birthday"
    );
  }

  #[test]
  fn display_lists_phones_and_birthday() {
    let mut record = with_phones(&[A, B]);
    record.set_birthday("15.06.1990").unwrap();
    assert_eq!(
      record.to_string(),
      format!("Contact name: bob, phones: {A}; {B}, birthday: 15.06.1990")
    );
  }
}
