//! Plausibility range for extracted dates.

use chrono::{Days, NaiveDate, NaiveTime, Utc};
use kairos_core::{Dated, Exactness, ExtractedDate};
use serde::{Deserialize, Serialize};

/// Earliest plausible date of a web document.
const HISTORICAL_FLOOR: (i32, u32, u32) = (1993, 11, 1);

/// A closed interval of calendar days a date has to fall into to be taken
/// seriously.
///
/// The default runs from 1993-11-01 to tomorrow; the extra day tolerates
/// documents stamped in a time zone ahead of ours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
  pub floor:   NaiveDate,
  pub ceiling: NaiveDate,
}

impl DateRange {
  pub fn new(floor: NaiveDate, ceiling: NaiveDate) -> Self {
    Self { floor, ceiling }.checked()
  }

  /// The default range with a different floor.
  pub fn with_floor(floor: NaiveDate) -> Self {
    Self {
      floor,
      ..Self::default()
    }
    .checked()
  }

  /// True when the floor lies after the ceiling, so nothing is in range.
  pub fn is_empty(&self) -> bool { self.floor > self.ceiling }

  fn checked(self) -> Self {
    if self.is_empty() {
      tracing::warn!(
        floor = %self.floor,
        ceiling = %self.ceiling,
        "date range floor is after its ceiling, every date will be rejected"
      );
    }
    self
  }

  pub fn historical_floor() -> NaiveDate {
    let (y, m, d) = HISTORICAL_FLOOR;
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
  }

  /// Whether `date` lies within the range.
  ///
  /// The comparison happens at the coarser of day precision and the date's
  /// own exactness, so `1993-11` is in the default range while
  /// `1993-10-31` is not.
  pub fn contains<T: Dated>(&self, date: &T) -> bool {
    let date = date.date();
    let exactness = Exactness::common(Exactness::Day, date.exactness());
    let key = date.key(exactness);
    bound(self.floor).key(exactness) <= key
      && key <= bound(self.ceiling).key(exactness)
  }
}

impl Default for DateRange {
  fn default() -> Self {
    let today = Utc::now().date_naive();
    Self {
      floor:   Self::historical_floor(),
      ceiling: today.checked_add_days(Days::new(1)).unwrap_or(today),
    }
  }
}

fn bound(day: NaiveDate) -> ExtractedDate {
  ExtractedDate::from_datetime(day.and_time(NaiveTime::MIN))
}

/// Whether `date` lies within [`DateRange::default`].
pub fn is_date_in_range<T: Dated>(date: &T) -> bool {
  DateRange::default().contains(date)
}

#[cfg(test)]
mod tests {
  use chrono::Datelike;
  use kairos_core::{DateKind, DateParts};

  use super::*;

  fn plain(parts: DateParts) -> ExtractedDate {
    ExtractedDate::new(parts, DateKind::Plain).unwrap()
  }

  #[test]
  fn floor_is_inclusive() {
    assert!(is_date_in_range(&plain(DateParts::ymd(1993, 11, 1))));
    assert!(!is_date_in_range(&plain(DateParts::ymd(1993, 10, 31))));
  }

  #[test]
  fn coarse_dates_overlapping_the_floor_are_accepted() {
    assert!(is_date_in_range(&plain(DateParts::ym(1993, 11))));
    assert!(is_date_in_range(&plain(DateParts::year(1993))));
    assert!(!is_date_in_range(&plain(DateParts::ym(1993, 10))));
    assert!(!is_date_in_range(&plain(DateParts::year(1992))));
  }

  #[test]
  fn coarse_dates_overlapping_the_ceiling_are_accepted() {
    let range = DateRange::new(
      NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
      NaiveDate::from_ymd_opt(2010, 8, 15).unwrap(),
    );
    assert!(range.contains(&plain(DateParts::year(2010))));
    assert!(range.contains(&plain(DateParts::ym(2010, 8))));
    assert!(!range.contains(&plain(DateParts::ym(2010, 9))));
    assert!(!range.contains(&plain(DateParts::year(2011))));

    let this_year = Utc::now().date_naive().year();
    let past_ceiling = DateRange::default().ceiling.year() + 1;
    assert!(is_date_in_range(&plain(DateParts::year(this_year))));
    assert!(!is_date_in_range(&plain(DateParts::year(past_ceiling))));
  }

  #[test]
  fn inverted_range_is_empty() {
    let range = DateRange::new(
      NaiveDate::from_ymd_opt(2011, 1, 1).unwrap(),
      NaiveDate::from_ymd_opt(2010, 1, 1).unwrap(),
    );
    assert!(range.is_empty());
    assert!(!range.contains(&plain(DateParts::ymd(2010, 6, 1))));
    assert!(!range.contains(&plain(DateParts::year(2010))));
    assert!(!DateRange::default().is_empty());
    assert!(DateRange::with_floor(NaiveDate::MAX).is_empty());
  }

  #[test]
  fn time_of_day_does_not_matter_at_the_bounds() {
    let range = DateRange::new(
      NaiveDate::from_ymd_opt(2010, 1, 1).unwrap(),
      NaiveDate::from_ymd_opt(2010, 1, 31).unwrap(),
    );
    assert!(range.contains(&plain(DateParts::ymd(2010, 1, 31).and_hms(23, 59, 59))));
    assert!(range.contains(&plain(DateParts::ymd(2010, 1, 1).and_hour(0))));
    assert!(!range.contains(&plain(DateParts::ymd(2010, 2, 1).and_hour(0))));
  }

  #[test]
  fn ceiling_tolerates_tomorrow() {
    let tomorrow = Utc::now().date_naive() + Days::new(1);
    let after = tomorrow + Days::new(1);
    assert!(is_date_in_range(&bound(tomorrow)));
    assert!(!is_date_in_range(&bound(after)));
    assert!(is_date_in_range(&ExtractedDate::now()));
  }

  #[test]
  fn custom_floor_keeps_default_ceiling() {
    let floor = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    let range = DateRange::with_floor(floor);
    assert_eq!(range.floor, floor);
    assert_eq!(range.ceiling, DateRange::default().ceiling);
    assert!(!range.contains(&plain(DateParts::ymd(1999, 12, 31))));
  }
}
