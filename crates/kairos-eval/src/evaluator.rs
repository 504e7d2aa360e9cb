//! The get → filter → rate → compare loop over a labelled dataset.

use kairos_core::{ExtractedDate, RatedDate};
use kairos_dataset::{Dataset, Entry, PageDateType};
use kairos_select::{DateFilter, DateRange, best_rated, filter_by};
use serde::Serialize;

use crate::{
  error::Result,
  outcome::{Outcome, classify},
  tally::Tally,
  technique::{DateGetter, DateRater},
};

/// What happened for one example page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExampleResult {
  pub url:      String,
  pub outcome:  Outcome,
  /// The date the technique settled on, if any.
  pub found:    Option<RatedDate>,
  /// The hand-labelled date, if any.
  pub expected: Option<ExtractedDate>,
}

/// The result of a full evaluation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
  pub target:  PageDateType,
  pub tally:   Tally,
  pub results: Vec<ExampleResult>,
}

impl Report {
  pub fn to_json(&self) -> Result<String> {
    Ok(serde_json::to_string_pretty(self)?)
  }
}

/// Runs one technique, a getter and a rater, against a dataset.
pub struct Evaluator<G, R> {
  getter: G,
  rater:  R,
  target: PageDateType,
  range:  DateRange,
}

impl<G: DateGetter, R: DateRater> Evaluator<G, R> {
  pub fn new(getter: G, rater: R, target: PageDateType) -> Self {
    Self {
      getter,
      rater,
      target,
      range: DateRange::default(),
    }
  }

  /// Replace the plausibility range dates have to fall into.
  pub fn with_range(self, range: DateRange) -> Self { Self { range, ..self } }

  pub fn target(&self) -> PageDateType { self.target }

  /// Evaluate a single example.
  pub fn evaluate_entry(&self, entry: &Entry) -> ExampleResult {
    let dates = match self.getter.get_dates(entry) {
      Ok(dates) => dates,
      Err(e) => {
        tracing::warn!(url = %entry.url, error = %e, "date getter failed");
        Vec::new()
      }
    };

    let plausible: Vec<ExtractedDate> =
      filter_by(&dates, DateFilter::InRange(self.range))
        .into_iter()
        .cloned()
        .collect();

    let rated = if plausible.is_empty() {
      Vec::new()
    } else {
      self.rater.rate(&plausible, entry)
    };
    let found = best_rated(&rated).cloned();
    let expected = entry.expected(self.target);
    let outcome = classify(found.as_ref().map(RatedDate::date), expected.as_ref());

    tracing::debug!(
      url = %entry.url,
      candidates = dates.len(),
      plausible = plausible.len(),
      found = ?found.as_ref().map(ToString::to_string),
      expected = ?expected.as_ref().map(ToString::to_string),
      %outcome,
      "evaluated example"
    );

    ExampleResult {
      url: entry.url.clone(),
      outcome,
      found,
      expected,
    }
  }

  /// Evaluate every entry in file order, logging running totals.
  pub fn run(&self, dataset: &Dataset) -> Report {
    let mut tally = Tally::default();
    let mut results = Vec::with_capacity(dataset.len());
    for entry in dataset {
      let result = self.evaluate_entry(entry);
      tally.record(result.outcome);
      tracing::info!(url = %entry.url, outcome = %result.outcome, "{tally}");
      results.push(result);
    }
    tracing::info!(page_date = %self.target, "{tally}");
    Report {
      target: self.target,
      tally,
      results,
    }
  }
}
