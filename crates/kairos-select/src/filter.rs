//! Type and predicate filters.

use kairos_core::{DateClass, Dated, Exactness, KeywordLocation};

use crate::range::DateRange;

/// Keep the dates whose kind falls into `class`.
///
/// `class` may be a concrete [`kairos_core::DateType`] or one of the groups
/// of [`DateClass`]; disjoint classes never share an element.
pub fn filter<T: Dated>(dates: &[T], class: impl Into<DateClass>) -> Vec<&T> {
  let class = class.into();
  dates.iter().filter(|d| class.matches(d.date().kind())).collect()
}

/// A predicate over single dates, for [`filter_by`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFilter {
  /// The date lies inside the range (see [`DateRange::contains`]).
  InRange(DateRange),
  /// Year, month and day are all known.
  FullDate,
  /// Content dates whose keyword sits at the given location. Other kinds
  /// never match.
  KeywordLocation(KeywordLocation),
}

impl DateFilter {
  pub fn accepts<T: Dated>(&self, date: &T) -> bool {
    let date = date.date();
    match self {
      Self::InRange(range) => range.contains(date),
      Self::FullDate => date.exactness().provides(Exactness::Day),
      Self::KeywordLocation(location) => {
        date.keyword_location() == Some(*location)
      }
    }
  }
}

/// Keep the dates accepted by `predicate`.
pub fn filter_by<T: Dated>(dates: &[T], predicate: DateFilter) -> Vec<&T> {
  let kept: Vec<&T> = dates.iter().filter(|d| predicate.accepts(d)).collect();
  tracing::debug!(
    filter = ?predicate,
    kept = kept.len(),
    dropped = dates.len() - kept.len(),
    "filtered dates"
  );
  kept
}

#[cfg(test)]
mod tests {
  use kairos_core::{
    ContentDate, DateKind, DateParts, DateType, ExtractedDate, MetaDate,
  };

  use super::*;

  fn date(parts: DateParts, kind: DateKind) -> ExtractedDate {
    ExtractedDate::new(parts, kind).unwrap()
  }

  fn content(location: KeywordLocation) -> DateKind {
    DateKind::Content(ContentDate {
      keyword_location: location,
      ..Default::default()
    })
  }

  #[test]
  fn type_filter_keeps_order_and_subtypes() {
    let dates = vec![
      date(DateParts::ymd(2010, 1, 1), content(KeywordLocation::Absent)),
      date(DateParts::ymd(2010, 1, 2), DateKind::Archive),
      date(DateParts::ymd(2010, 1, 3), DateKind::Meta(MetaDate::default())),
      date(DateParts::ymd(2010, 1, 4), content(KeywordLocation::Content)),
    ];

    let contents = filter(&dates, DateType::Content);
    assert_eq!(contents.len(), 2);
    assert_eq!(contents[0].day(), Some(1));
    assert_eq!(contents[1].day(), Some(4));

    let keyword = filter(&dates, DateClass::Keyword);
    assert_eq!(keyword.len(), 3);

    assert!(filter(&dates, DateType::Url).is_empty());
  }

  #[test]
  fn full_date_filter_needs_a_day() {
    let dates = vec![
      date(DateParts::ym(2010, 1), DateKind::Plain),
      date(DateParts::ymd(2010, 1, 5), DateKind::Plain),
      date(DateParts::ymd(2010, 1, 5).and_hour(3), DateKind::Plain),
    ];
    let full = filter_by(&dates, DateFilter::FullDate);
    assert_eq!(full.len(), 2);
  }

  #[test]
  fn keyword_location_filter_only_sees_content_dates() {
    let dates = vec![
      date(DateParts::year(2010), content(KeywordLocation::Attribute)),
      date(DateParts::year(2011), content(KeywordLocation::Content)),
      date(DateParts::year(2012), DateKind::Meta(MetaDate::default())),
      date(DateParts::year(2013), content(KeywordLocation::Absent)),
    ];
    let attr = filter_by(
      &dates,
      DateFilter::KeywordLocation(KeywordLocation::Attribute),
    );
    assert_eq!(attr.len(), 1);
    assert_eq!(attr[0].year(), 2010);

    let absent =
      filter_by(&dates, DateFilter::KeywordLocation(KeywordLocation::Absent));
    assert_eq!(absent.len(), 1);
    assert_eq!(absent[0].year(), 2013);
  }
}
