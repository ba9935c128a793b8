//! Upcoming-birthday scheduling.
//!
//! For every contact with a birthday, find the next occurrence on or after
//! `today`, keep it if it lands inside the horizon, and move weekend
//! occurrences to the following Monday. The weekend shift happens after the
//! horizon filter, so a Saturday on the last day of the window still yields a
//! congratulation two days past it.
//!
//! February 29 birthdays fall on March 1 in non-leap years.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::record::ContactRecord;

/// Days after `today` that still count as upcoming (inclusive).
pub const DEFAULT_HORIZON_DAYS: u32 = 7;

/// Who to congratulate, and on which working day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Congratulation {
  pub name: String,
  pub date: NaiveDate,
}

/// Compute the congratulation list for `records`, sorted by date.
///
/// Records without a birthday are skipped. Ties keep the iteration order of
/// `records`.
pub fn upcoming<'a>(
  records: impl IntoIterator<Item = &'a ContactRecord>,
  today: NaiveDate,
  horizon_days: u32,
) -> Vec<Congratulation> {
  // A horizon past the end of the calendar just means "everything ahead".
  let end = today
    .checked_add_days(Days::new(u64::from(horizon_days)))
    .unwrap_or(NaiveDate::MAX);

  let mut result: Vec<Congratulation> = records
    .into_iter()
    .filter_map(|record| {
      let birthday = record.birthday.as_ref()?.date();
      let next = next_occurrence(birthday, today);
      (next <= end).then(|| Congratulation {
        name: record.name.as_str().to_owned(),
        date: congratulation_day(next),
      })
    })
    .collect();

  result.sort_by_key(|c| c.date);
  result
}

/// The first anniversary of `birthday` that is not before `today`.
pub fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> NaiveDate {
  let this_year = occurrence_in(birthday, today.year());
  if this_year < today {
    occurrence_in(birthday, today.year() + 1)
  } else {
    this_year
  }
}

/// `birthday`'s month and day in `year`; Feb 29 becomes Mar 1 off leap years.
pub fn occurrence_in(birthday: NaiveDate, year: i32) -> NaiveDate {
  birthday.with_year(year).unwrap_or_else(|| {
    // Only Feb 29 can fail to exist in another year.
    NaiveDate::from_ymd_opt(year, 3, 1).unwrap_or(birthday)
  })
}

/// Shift a Saturday or Sunday to the next Monday.
pub fn congratulation_day(occurrence: NaiveDate) -> NaiveDate {
  match occurrence.weekday() {
    Weekday::Sat => occurrence + Days::new(2),
    Weekday::Sun => occurrence + Days::new(1),
    _ => occurrence,
  }
}
