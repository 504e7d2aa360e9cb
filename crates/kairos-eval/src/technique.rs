//! The two halves of a date-extraction technique.

use kairos_core::{ExtractedDate, RatedDate};
use kairos_dataset::Entry;

/// Produces candidate dates for one example page.
pub trait DateGetter {
  type Error: std::error::Error + Send + Sync + 'static;

  fn get_dates(&self, entry: &Entry) -> Result<Vec<ExtractedDate>, Self::Error>;
}

/// Scores candidate dates. Returns one rated date per input date, in input
/// order.
pub trait DateRater {
  fn rate(&self, dates: &[ExtractedDate], entry: &Entry) -> Vec<RatedDate>;
}
