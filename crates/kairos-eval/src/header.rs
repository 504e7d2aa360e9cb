//! HTTP header technique: dates from the `Last-Modified` and `Date`
//! response headers recorded in the dataset.

use std::convert::Infallible;

use kairos_core::{
  DateKind, ExtractedDate, MetaDate, RatedDate, TimeUnit, parse_date,
};
use kairos_dataset::{Entry, HeaderField, PageDateType};

use crate::technique::{DateGetter, DateRater};

pub const LAST_MODIFIED: &str = "last-modified";
pub const DATE: &str = "date";

/// Default freshness window in hours.
pub const DEFAULT_FRESHNESS_HOURS: f64 = 12.0;

const HEADERS: [(HeaderField, &str); 2] = [
  (HeaderField::LastModified, LAST_MODIFIED),
  (HeaderField::Date, DATE),
];

/// Reads the recorded header values of an entry as `Meta` dates keyed by
/// header name. Unparseable or empty headers are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderDateGetter;

impl DateGetter for HeaderDateGetter {
  type Error = Infallible;

  fn get_dates(&self, entry: &Entry) -> Result<Vec<ExtractedDate>, Infallible> {
    let dates = HEADERS
      .iter()
      .filter_map(|&(field, keyword)| {
        let date = entry.header(field).and_then(parse_date)?;
        Some(date.with_kind(DateKind::Meta(MetaDate {
          keyword: Some(keyword.to_string()),
          tag:     None,
        })))
      })
      .collect();
    Ok(dates)
  }
}

/// Rates header dates for a target page date.
///
/// A header stamped within the freshness window of the download is most
/// likely the server's clock rather than a document date and is rated `0`.
/// Otherwise `last-modified` rates `1.0`; `date` rates `0.5` when looking
/// for the last-modified date and `0.25` when looking for the publish date.
///
/// The 12 hour window and the three rates are tunable defaults, not
/// measured values; the window can be changed with
/// [`with_freshness_hours`](Self::with_freshness_hours).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderDateRater {
  target:          PageDateType,
  freshness_hours: f64,
}

impl HeaderDateRater {
  pub fn new(target: PageDateType) -> Self {
    Self {
      target,
      freshness_hours: DEFAULT_FRESHNESS_HOURS,
    }
  }

  pub fn with_freshness_hours(self, hours: f64) -> Self {
    Self {
      freshness_hours: hours,
      ..self
    }
  }

  pub fn target(&self) -> PageDateType { self.target }

  fn rate_one(&self, date: &ExtractedDate, downloaded: Option<&ExtractedDate>) -> f64 {
    if let Some(downloaded) = downloaded
      && date.difference(downloaded, TimeUnit::Hours) < self.freshness_hours
    {
      return 0.0;
    }
    match (date.keyword(), self.target) {
      (Some(LAST_MODIFIED), _) => 1.0,
      (Some(DATE), PageDateType::LastModified) => 0.5,
      (Some(DATE), PageDateType::Publish) => 0.25,
      _ => 0.0,
    }
  }
}

impl DateRater for HeaderDateRater {
  fn rate(&self, dates: &[ExtractedDate], entry: &Entry) -> Vec<RatedDate> {
    let downloaded = entry.downloaded();
    dates
      .iter()
      .map(|d| RatedDate::create(d.clone(), self.rate_one(d, downloaded.as_ref())))
      .collect()
  }
}
