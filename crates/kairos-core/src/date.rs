//! The extracted date value type.
//!
//! An [`ExtractedDate`] is a date recognised somewhere in a document. Not all
//! calendar fields need to be known: a date may be known only to the month,
//! or to the minute. The known fields always form a contiguous prefix
//! `year → month → … → second`, and the last known field is the date's
//! [`Exactness`]. Fields finer than the exactness are unknown and never take
//! part in comparisons.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::{
  Result,
  error::Error,
  exactness::Exactness,
  kind::{ContentDate, DateKind, DateType, KeywordLocation},
};

// ─── Fields ──────────────────────────────────────────────────────────────────

/// A calendar field of an [`ExtractedDate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateField {
  Year,
  Month,
  Day,
  Hour,
  Minute,
  Second,
}

impl DateField {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Year => "year",
      Self::Month => "month",
      Self::Day => "day",
      Self::Hour => "hour",
      Self::Minute => "minute",
      Self::Second => "second",
    }
  }

  /// The exactness a date has when this is its finest known field.
  pub fn exactness(self) -> Exactness {
    match self {
      Self::Year => Exactness::Year,
      Self::Month => Exactness::Month,
      Self::Day => Exactness::Day,
      Self::Hour => Exactness::Hour,
      Self::Minute => Exactness::Minute,
      Self::Second => Exactness::Second,
    }
  }
}

impl std::fmt::Display for DateField {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

// ─── DateParts ───────────────────────────────────────────────────────────────

/// Raw calendar fields, before validation.
///
/// Field order matters: the derived `Ord` compares year first, then month,
/// and so on, with an unknown field sorting before any known value.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct DateParts {
  pub year:   i32,
  pub month:  Option<u32>,
  pub day:    Option<u32>,
  pub hour:   Option<u32>,
  pub minute: Option<u32>,
  pub second: Option<u32>,
}

impl DateParts {
  pub fn year(year: i32) -> Self {
    Self {
      year,
      month: None,
      day: None,
      hour: None,
      minute: None,
      second: None,
    }
  }

  pub fn ym(year: i32, month: u32) -> Self {
    Self {
      month: Some(month),
      ..Self::year(year)
    }
  }

  pub fn ymd(year: i32, month: u32, day: u32) -> Self {
    Self {
      day: Some(day),
      ..Self::ym(year, month)
    }
  }

  pub fn and_hour(self, hour: u32) -> Self {
    Self {
      hour: Some(hour),
      ..self
    }
  }

  pub fn and_hm(self, hour: u32, minute: u32) -> Self {
    Self {
      minute: Some(minute),
      ..self.and_hour(hour)
    }
  }

  pub fn and_hms(self, hour: u32, minute: u32, second: u32) -> Self {
    Self {
      second: Some(second),
      ..self.and_hm(hour, minute)
    }
  }

  /// The finer fields in order, paired with their names.
  fn optional_fields(&self) -> [(DateField, Option<u32>); 5] {
    [
      (DateField::Month, self.month),
      (DateField::Day, self.day),
      (DateField::Hour, self.hour),
      (DateField::Minute, self.minute),
      (DateField::Second, self.second),
    ]
  }

  /// The finest field of the contiguous known prefix.
  pub fn exactness(&self) -> Exactness {
    self
      .optional_fields()
      .into_iter()
      .take_while(|(_, value)| value.is_some())
      .last()
      .map_or(Exactness::Year, |(field, _)| field.exactness())
  }

  /// A copy with every field finer than `exactness` cleared.
  pub fn truncate(self, exactness: Exactness) -> Self {
    let keep = |field: DateField, value: Option<u32>| {
      value.filter(|_| exactness.provides(field.exactness()))
    };
    Self {
      year:   self.year,
      month:  keep(DateField::Month, self.month),
      day:    keep(DateField::Day, self.day),
      hour:   keep(DateField::Hour, self.hour),
      minute: keep(DateField::Minute, self.minute),
      second: keep(DateField::Second, self.second),
    }
  }

  fn validate(&self) -> Result<()> {
    let mut gap = false;
    for (field, value) in self.optional_fields() {
      match value {
        Some(_) if gap => return Err(Error::GapInParts { field }),
        Some(_) => {}
        None => gap = true,
      }
    }

    if NaiveDate::from_ymd_opt(self.year, 1, 1).is_none() {
      return Err(Error::InvalidDate {
        field: DateField::Year,
        value: self.year.into(),
      });
    }
    check_range(DateField::Month, self.month, 1..=12)?;
    if let (Some(month), Some(day)) = (self.month, self.day)
      && NaiveDate::from_ymd_opt(self.year, month, day).is_none()
    {
      return Err(Error::NoSuchDay {
        year: self.year,
        month,
        day,
      });
    }
    check_range(DateField::Hour, self.hour, 0..=23)?;
    check_range(DateField::Minute, self.minute, 0..=59)?;
    check_range(DateField::Second, self.second, 0..=59)?;
    Ok(())
  }
}

fn check_range(
  field: DateField,
  value: Option<u32>,
  range: std::ops::RangeInclusive<u32>,
) -> Result<()> {
  match value {
    Some(v) if !range.contains(&v) => Err(Error::InvalidDate {
      field,
      value: v.into(),
    }),
    _ => Ok(()),
  }
}

// ─── DateKey ─────────────────────────────────────────────────────────────────

/// A date's fields truncated to some exactness. Two dates with equal keys
/// denote the same moment at that granularity; keys sort chronologically.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
)]
pub struct DateKey(DateParts);

impl DateKey {
  pub fn parts(&self) -> DateParts { self.0 }
}

// ─── Time units ──────────────────────────────────────────────────────────────

/// Unit of the value returned by [`ExtractedDate::difference`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
  Milliseconds,
  Seconds,
  Minutes,
  Hours,
  Days,
}

impl TimeUnit {
  pub fn millis(self) -> i64 {
    match self {
      Self::Milliseconds => 1,
      Self::Seconds => 1_000,
      Self::Minutes => 60_000,
      Self::Hours => 3_600_000,
      Self::Days => 86_400_000,
    }
  }
}

// ─── ExtractedDate ───────────────────────────────────────────────────────────

/// A date discovered in a document. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedDate {
  /// The text the date was parsed from.
  date_string: Option<String>,
  /// Identifier of the pattern that matched `date_string`.
  format:      Option<String>,
  parts:       DateParts,
  time_zone:   Option<String>,
  kind:        DateKind,
}

impl ExtractedDate {
  /// Validate `parts` and build a date of the given kind.
  pub fn new(parts: DateParts, kind: DateKind) -> Result<Self> {
    parts.validate()?;
    Ok(Self {
      date_string: None,
      format: None,
      parts,
      time_zone: None,
      kind,
    })
  }

  /// A second-exact plain date for the given instant.
  pub fn from_datetime(dt: NaiveDateTime) -> Self {
    let parts = DateParts::ymd(dt.year(), dt.month(), dt.day()).and_hms(
      dt.hour(),
      dt.minute(),
      dt.second(),
    );
    Self {
      date_string: None,
      format: None,
      parts,
      time_zone: None,
      kind: DateKind::Plain,
    }
  }

  /// The current UTC instant as a plain date.
  pub fn now() -> Self {
    Self::from_datetime(Utc::now().naive_utc()).with_time_zone("UTC")
  }

  pub fn with_source(
    self,
    date_string: impl Into<String>,
    format: impl Into<String>,
  ) -> Self {
    Self {
      date_string: Some(date_string.into()),
      format: Some(format.into()),
      ..self
    }
  }

  pub fn with_time_zone(self, time_zone: impl Into<String>) -> Self {
    Self {
      time_zone: Some(time_zone.into()),
      ..self
    }
  }

  /// The same date re-tagged as another kind.
  pub fn with_kind(self, kind: DateKind) -> Self { Self { kind, ..self } }

  // ── Source metadata ───────────────────────────────────────────────────

  pub fn date_string(&self) -> Option<&str> { self.date_string.as_deref() }

  pub fn format(&self) -> Option<&str> { self.format.as_deref() }

  pub fn time_zone(&self) -> Option<&str> { self.time_zone.as_deref() }

  // ── Calendar fields ───────────────────────────────────────────────────

  pub fn parts(&self) -> DateParts { self.parts }

  pub fn exactness(&self) -> Exactness { self.parts.exactness() }

  /// The value of a calendar field, or `None` when the date is not that
  /// exact.
  pub fn get(&self, field: DateField) -> Option<i32> {
    let p = &self.parts;
    let value = match field {
      DateField::Year => return Some(p.year),
      DateField::Month => p.month,
      DateField::Day => p.day,
      DateField::Hour => p.hour,
      DateField::Minute => p.minute,
      DateField::Second => p.second,
    };
    value.map(|v| v as i32)
  }

  pub fn year(&self) -> i32 { self.parts.year }

  pub fn month(&self) -> Option<u32> { self.parts.month }

  pub fn day(&self) -> Option<u32> { self.parts.day }

  pub fn hour(&self) -> Option<u32> { self.parts.hour }

  pub fn minute(&self) -> Option<u32> { self.parts.minute }

  pub fn second(&self) -> Option<u32> { self.parts.second }

  // ── Kind ──────────────────────────────────────────────────────────────

  pub fn kind(&self) -> &DateKind { &self.kind }

  pub fn date_type(&self) -> DateType { self.kind.date_type() }

  pub fn keyword(&self) -> Option<&str> { self.kind.keyword() }

  pub fn tag(&self) -> Option<&str> { self.kind.tag() }

  pub fn structural_depth(&self) -> Option<u32> {
    self.kind.structural_depth()
  }

  /// The source URL of a URL date.
  pub fn url(&self) -> Option<&str> {
    match &self.kind {
      DateKind::Url(u) => Some(&u.url),
      _ => None,
    }
  }

  pub fn content(&self) -> Option<&ContentDate> {
    match &self.kind {
      DateKind::Content(c) => Some(c),
      _ => None,
    }
  }

  pub fn keyword_location(&self) -> Option<KeywordLocation> {
    self.content().map(|c| c.keyword_location)
  }

  // ── Derived representations ───────────────────────────────────────────

  /// Canonical `YYYY-MM-DD HH:MM:SS` form, cut after the last known field.
  /// Time fields are only written when `include_time` is set.
  pub fn normalized_date_string(&self, include_time: bool) -> String {
    let p = &self.parts;
    let mut s = p.year.to_string();
    let Some(month) = p.month else { return s };
    s.push_str(&format!("-{month:02}"));
    let Some(day) = p.day else { return s };
    s.push_str(&format!("-{day:02}"));
    if !include_time {
      return s;
    }
    let Some(hour) = p.hour else { return s };
    s.push_str(&format!(" {hour:02}"));
    let Some(minute) = p.minute else { return s };
    s.push_str(&format!(":{minute:02}"));
    if let Some(second) = p.second {
      s.push_str(&format!(":{second:02}"));
    }
    s
  }

  /// A calendar value with every field finer than `exactness` zeroed
  /// (month and day to 1). Fields this date does not know are zeroed too.
  pub fn calendar(&self, exactness: Exactness) -> NaiveDateTime {
    let p = self.parts.truncate(exactness);
    NaiveDate::from_ymd_opt(p.year, p.month.unwrap_or(1), p.day.unwrap_or(1))
      .and_then(|d| {
        d.and_hms_opt(
          p.hour.unwrap_or(0),
          p.minute.unwrap_or(0),
          p.second.unwrap_or(0),
        )
      })
      .unwrap_or(NaiveDateTime::MIN)
  }

  /// The calendar value at this date's own exactness.
  pub fn normalized_date(&self) -> NaiveDateTime {
    self.calendar(self.exactness())
  }

  /// Grouping key at `exactness`; see [`DateKey`].
  pub fn key(&self, exactness: Exactness) -> DateKey {
    DateKey(self.parts.truncate(exactness))
  }

  /// Absolute distance to `other`, measured at the exactness both dates
  /// share and rounded to two decimals.
  ///
  /// The result is meaningless when `unit` is finer than that common
  /// exactness (e.g. minutes between two day-exact dates); that is the
  /// caller's concern.
  pub fn difference(&self, other: &ExtractedDate, unit: TimeUnit) -> f64 {
    let common = Exactness::common(self.exactness(), other.exactness());
    let delta = self.calendar(common) - other.calendar(common);
    let millis = delta.num_milliseconds().abs() as f64;
    (millis * 100.0 / unit.millis() as f64).round() / 100.0
  }
}

impl std::fmt::Display for ExtractedDate {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.normalized_date_string(true))
  }
}

// ─── Dated ───────────────────────────────────────────────────────────────────

/// Anything that wraps an [`ExtractedDate`]: plain dates, rated dates and
/// references to either.
pub trait Dated {
  fn date(&self) -> &ExtractedDate;
}

impl Dated for ExtractedDate {
  fn date(&self) -> &ExtractedDate { self }
}

impl<T: Dated + ?Sized> Dated for &T {
  fn date(&self) -> &ExtractedDate { (**self).date() }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::kind::{StructureDate, UrlDate};

  fn plain(parts: DateParts) -> ExtractedDate {
    ExtractedDate::new(parts, DateKind::Plain).unwrap()
  }

  #[test]
  fn exactness_follows_known_prefix() {
    assert_eq!(plain(DateParts::year(2010)).exactness(), Exactness::Year);
    assert_eq!(plain(DateParts::ym(2010, 8)).exactness(), Exactness::Month);
    assert_eq!(
      plain(DateParts::ymd(2010, 8, 1)).exactness(),
      Exactness::Day
    );
    assert_eq!(
      plain(DateParts::ymd(2010, 8, 1).and_hm(12, 30)).exactness(),
      Exactness::Minute
    );
    assert_eq!(
      plain(DateParts::ymd(2010, 8, 1).and_hms(12, 30, 5)).exactness(),
      Exactness::Second
    );
  }

  #[test]
  fn gap_in_parts_is_rejected() {
    let parts = DateParts {
      day: Some(3),
      ..DateParts::year(2010)
    };
    let err = ExtractedDate::new(parts, DateKind::Plain).unwrap_err();
    assert!(matches!(err, Error::GapInParts {
      field: DateField::Day
    }));
  }

  #[test]
  fn out_of_range_fields_are_rejected() {
    assert!(matches!(
      ExtractedDate::new(DateParts::ym(2010, 13), DateKind::Plain),
      Err(Error::InvalidDate {
        field: DateField::Month,
        value: 13
      })
    ));
    assert!(matches!(
      ExtractedDate::new(DateParts::ymd(2010, 2, 30), DateKind::Plain),
      Err(Error::NoSuchDay { .. })
    ));
    assert!(matches!(
      ExtractedDate::new(
        DateParts::ymd(2010, 2, 3).and_hour(24),
        DateKind::Plain
      ),
      Err(Error::InvalidDate {
        field: DateField::Hour,
        ..
      })
    ));
  }

  #[test]
  fn get_returns_none_for_unknown_fields() {
    let d = plain(DateParts::ymd(2010, 8, 1));
    assert_eq!(d.get(DateField::Year), Some(2010));
    assert_eq!(d.get(DateField::Day), Some(1));
    assert_eq!(d.get(DateField::Hour), None);
    assert_eq!(d.get(DateField::Second), None);
  }

  #[test]
  fn normalized_string_is_cut_at_exactness() {
    assert_eq!(plain(DateParts::year(2010)).normalized_date_string(true), "2010");
    assert_eq!(
      plain(DateParts::ym(2010, 5)).normalized_date_string(true),
      "2010-05"
    );
    let full = plain(DateParts::ymd(2010, 5, 3).and_hms(7, 4, 9));
    assert_eq!(full.normalized_date_string(true), "2010-05-03 07:04:09");
    assert_eq!(full.normalized_date_string(false), "2010-05-03");
    assert_eq!(
      plain(DateParts::ymd(2010, 5, 3).and_hour(7)).normalized_date_string(true),
      "2010-05-03 07"
    );
    assert_eq!(full.to_string(), "2010-05-03 07:04:09");
  }

  #[test]
  fn calendar_zeroes_finer_fields() {
    let d = plain(DateParts::ymd(2010, 5, 3).and_hms(7, 4, 9));
    let month = d.calendar(Exactness::Month);
    assert_eq!(month.to_string(), "2010-05-01 00:00:00");
    let coarse = plain(DateParts::year(2010));
    assert_eq!(
      coarse.calendar(Exactness::Second).to_string(),
      "2010-01-01 00:00:00"
    );
  }

  #[test]
  fn difference_uses_common_exactness() {
    let a = plain(DateParts::ymd(2010, 8, 1).and_hms(10, 0, 0));
    let b = plain(DateParts::ymd(2010, 8, 3));
    assert_eq!(a.difference(&b, TimeUnit::Days), 2.0);
    assert_eq!(b.difference(&a, TimeUnit::Hours), 48.0);

    let c = plain(DateParts::ymd(2010, 8, 1).and_hms(11, 30, 0));
    assert_eq!(a.difference(&c, TimeUnit::Hours), 1.5);
    assert_eq!(a.difference(&c, TimeUnit::Days), 0.06);
  }

  #[test]
  fn keys_sort_chronologically_with_unknown_first() {
    let month = plain(DateParts::ym(2010, 8));
    let first = plain(DateParts::ymd(2010, 8, 1));
    let second = plain(DateParts::ymd(2010, 8, 2));
    assert!(month.key(Exactness::Day) < first.key(Exactness::Day));
    assert!(first.key(Exactness::Day) < second.key(Exactness::Day));
    assert_eq!(first.key(Exactness::Month), month.key(Exactness::Month));
  }

  #[test]
  fn typed_accessors_follow_kind() {
    let url = ExtractedDate::new(
      DateParts::ymd(2010, 8, 1),
      DateKind::Url(UrlDate {
        url: "http://example.com/2010/08/01/post".into(),
      }),
    )
    .unwrap();
    assert_eq!(url.url(), Some("http://example.com/2010/08/01/post"));
    assert_eq!(url.keyword(), None);
    assert_eq!(url.date_type(), DateType::Url);

    let structure = url.clone().with_kind(DateKind::Structure(StructureDate {
      keyword:          Some("date".into()),
      tag:              Some("time".into()),
      structural_depth: Some(4),
    }));
    assert_eq!(structure.url(), None);
    assert_eq!(structure.structural_depth(), Some(4));
    assert_eq!(structure.key(Exactness::Second), url.key(Exactness::Second));
  }

  #[test]
  fn now_is_second_exact() {
    let now = ExtractedDate::now();
    assert_eq!(now.exactness(), Exactness::Second);
    assert_eq!(now.time_zone(), Some("UTC"));
  }
}
