//! Rated dates: an extracted date decorated with a confidence score.

use std::ops::Deref;

use serde::Serialize;

use crate::date::{Dated, ExtractedDate};

/// An [`ExtractedDate`] together with the score a rater assigned to it.
///
/// The rate is set once, when the rater creates the value. Its scale is the
/// rater's business; most raters use `0.0..=1.0` but nothing here enforces
/// that. All date accessors are reachable through `Deref`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatedDate {
  date: ExtractedDate,
  rate: f64,
}

impl RatedDate {
  pub fn create(date: ExtractedDate, rate: f64) -> Self { Self { date, rate } }

  pub fn rate(&self) -> f64 { self.rate }

  pub fn date(&self) -> &ExtractedDate { &self.date }

  pub fn into_inner(self) -> ExtractedDate { self.date }
}

impl Deref for RatedDate {
  type Target = ExtractedDate;

  fn deref(&self) -> &ExtractedDate { &self.date }
}

impl Dated for RatedDate {
  fn date(&self) -> &ExtractedDate { &self.date }
}

impl std::fmt::Display for RatedDate {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{} ({})", self.date, self.rate)
  }
}
