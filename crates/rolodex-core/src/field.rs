//! Validated scalar fields: names, phone numbers and birthdays.
//!
//! A field stores the canonical textual form of its value. Validation runs
//! once, at construction; replacing a value means building a new field.

use std::{fmt, marker::PhantomData};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Error, Result};

/// `chrono` pattern for the canonical `DD.MM.YYYY` birthday form.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// ─── Rules ───────────────────────────────────────────────────────────────────

/// Validation and normalisation rule for one kind of field.
pub trait Rule {
  /// Check `raw` and return its canonical form.
  fn normalize(raw: &str) -> Result<String>;
}

/// Free-form label; anything goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NameRule;

/// Exactly ten ASCII digits, no separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhoneRule;

/// A real calendar date written as `DD.MM.YYYY`.
///
/// The year must be exactly four ASCII digits, so the stored form is always
/// `DD.MM.YYYY` with an unsigned year in `0..=9999`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthdayRule;

impl Rule for NameRule {
  fn normalize(raw: &str) -> Result<String> { Ok(raw.to_owned()) }
}

impl Rule for PhoneRule {
  fn normalize(raw: &str) -> Result<String> {
    if raw.len() == 10 && raw.bytes().all(|b| b.is_ascii_digit()) {
      Ok(raw.to_owned())
    } else {
      Err(Error::InvalidPhone(raw.to_owned()))
    }
  }
}

impl Rule for BirthdayRule {
  fn normalize(raw: &str) -> Result<String> {
    let invalid = || Error::InvalidBirthday(raw.to_owned());

    // chrono accepts short and signed years; only `YYYY` is allowed here.
    let year = raw.rsplit('.').next().ok_or_else(invalid)?;
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
      return Err(invalid());
    }

    let date =
      NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT).map_err(|_| invalid())?;
    if !(0..=9999).contains(&date.year()) {
      return Err(invalid());
    }
    Ok(date.format(BIRTHDAY_FORMAT).to_string())
  }
}

// ─── Field ───────────────────────────────────────────────────────────────────

/// A string value that has passed rule `R`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field<R> {
  value: String,
  rule:  PhantomData<R>,
}

pub type Name = Field<NameRule>;
pub type Phone = Field<PhoneRule>;
pub type Birthday = Field<BirthdayRule>;

impl<R: Rule> Field<R> {
  /// Validate `raw` and store its canonical form.
  pub fn new(raw: impl AsRef<str>) -> Result<Self> {
    Ok(Self {
      value: R::normalize(raw.as_ref())?,
      rule:  PhantomData,
    })
  }

  pub fn as_str(&self) -> &str { &self.value }

  pub fn into_inner(self) -> String { self.value }
}

impl Name {
  /// Names carry no constraint, so building one cannot fail.
  pub fn from_label(value: impl Into<String>) -> Self {
    Self {
      value: value.into(),
      rule:  PhantomData,
    }
  }
}

impl Birthday {
  /// The calendar date this birthday denotes, year included.
  pub fn date(&self) -> NaiveDate {
    // The stored value came out of `BirthdayRule::normalize`: a real date with
    // a four-digit unsigned year, which this pattern always reads back.
    NaiveDate::parse_from_str(&self.value, BIRTHDAY_FORMAT)
      .expect("canonical birthday is always re-parseable")
  }
}

impl<R> fmt::Display for Field<R> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.value)
  }
}

impl<R> Serialize for Field<R> {
  fn serialize<S: Serializer>(
    &self,
    serializer: S,
  ) -> std::result::Result<S::Ok, S::Error> {
    self.value.serialize(serializer)
  }
}

/// Deserialisation re-validates, so a hand-edited snapshot cannot smuggle in
/// an invalid value.
impl<'de, R: Rule> Deserialize<'de> for Field<R> {
  fn deserialize<D: Deserializer<'de>>(
    deserializer: D,
  ) -> std::result::Result<Self, D::Error> {
    let raw = String::deserialize(deserializer)?;
    Self::new(raw).map_err(serde::de::Error::custom)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn phone_accepts_ten_digits() {
    let phone = Phone::new("0501234567").unwrap();
    assert_eq!(phone.as_str(), "0501234567");
    assert_eq!(phone.to_string(), "0501234567");
  }

  #[test]
  fn phone_rejects_wrong_length_or_non_digits() {
    for raw in [
      "",
      "050123456",
      "05012345678",
      "050-123-4567",
      "+380501234",
      "05012345a7",
      " 0501234567",
      "０５０１２３４５６７",
    ] {
      assert_eq!(
        Phone::new(raw),
        Err(Error::InvalidPhone(raw.to_owned())),
        "{raw:?} should be rejected"
      );
    }
  }

  #[test]
  fn birthday_parses_and_exposes_date() {
    let bday = Birthday::new("15.06.1990").unwrap();
    assert_eq!(bday.as_str(), "15.06.1990");
    assert_eq!(bday.date(), NaiveDate::from_ymd_opt(1990, 6, 15).unwrap());
  }

  #[test]
  fn birthday_normalises_unpadded_day_and_month() {
    let bday = Birthday::new("1.1.2000").unwrap();
    assert_eq!(bday.as_str(), "01.01.2000");
    assert_eq!(bday, Birthday::new("01.01.2000").unwrap());
  }

  #[test]
  fn birthday_rejects_impossible_dates() {
    assert!(Birthday::new("31.02.2020").is_err());
    assert!(Birthday::new("29.02.2023").is_err());
    assert!(Birthday::new("00.01.2000").is_err());
    assert!(Birthday::new("01.13.2000").is_err());
  }

  #[test]
  fn birthday_rejects_other_formats() {
    for raw in ["2000-01-01", "01/01/2000", "01.01.00", "01.01.2000x", ""] {
      assert_eq!(
        Birthday::new(raw),
        Err(Error::InvalidBirthday(raw.to_owned())),
        "{raw:?} should be rejected"
      );
    }
  }

  #[test]
  fn birthday_rejects_signed_years() {
    for raw in ["01.01.-990", "01.01.+990", "01.01.-0990", "01.01.+1990"] {
      assert_eq!(
        Birthday::new(raw),
        Err(Error::InvalidBirthday(raw.to_owned())),
        "{raw:?} should be rejected"
      );
    }
  }

  #[test]
  fn stored_birthday_is_accepted_again() {
    for raw in ["1.1.0990", "29.02.2000", "31.12.9999"] {
      let bday = Birthday::new(raw).unwrap();
      assert_eq!(Birthday::new(bday.as_str()).unwrap(), bday);
      let json = serde_json::to_string(&bday).unwrap();
      assert_eq!(serde_json::from_str::<Birthday>(&json).unwrap(), bday);
    }
  }

  #[test]
  fn leap_day_is_a_valid_birthday() {
    let bday = Birthday::new("29.02.2000").unwrap();
    assert_eq!(bday.date(), NaiveDate::from_ymd_opt(2000, 2, 29).unwrap());
  }

  #[test]
  fn name_keeps_its_label() {
    let name = Name::from_label("Alice");
    assert_eq!(name.as_str(), "Alice");
    assert_eq!(Name::new("Alice").unwrap(), name);
  }

  #[test]
  fn fields_serialise_as_plain_strings() {
    let phone = Phone::new("0501234567").unwrap();
    assert_eq!(serde_json::to_string(&phone).unwrap(), "\"0501234567\"");

    let bday: Birthday = serde_json::from_str("\"15.06.1990\"").unwrap();
    assert_eq!(bday.as_str(), "15.06.1990");
  }

  #[test]
  fn deserialising_an_invalid_value_fails() {
    assert!(serde_json::from_str::<Phone>("\"12345\"").is_err());
    assert!(serde_json::from_str::<Birthday>("\"31.02.2020\"").is_err());
  }
}
