//! Evaluation settings, read from an optional TOML file and `KAIROS_*`
//! environment variables.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use kairos_dataset::PageDateType;
use kairos_select::DateRange;
use serde::{Deserialize, Serialize};

use crate::{
  error::{Error, Result},
  header::{DEFAULT_FRESHNESS_HOURS, HeaderDateRater},
};

/// Runtime evaluation configuration. Every field has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
  pub dataset:         PathBuf,
  pub target:          PageDateType,
  pub max_entries:     Option<usize>,
  /// Earliest plausible date; the range ceiling is always tomorrow.
  pub range_floor:     Option<NaiveDate>,
  pub freshness_hours: f64,
}

impl Default for EvalConfig {
  fn default() -> Self {
    Self {
      dataset:         PathBuf::from("dataset.txt"),
      target:          PageDateType::default(),
      max_entries:     None,
      range_floor:     None,
      freshness_hours: DEFAULT_FRESHNESS_HOURS,
    }
  }
}

impl EvalConfig {
  /// Load from `path` (missing file is fine) layered under `KAIROS_*`
  /// environment variables.
  pub fn load(path: &Path) -> Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("KAIROS"))
      .build()?;
    let cfg: Self = settings.try_deserialize()?;
    cfg.validate()
  }

  /// Reject settings that would make every example fail.
  pub fn validate(self) -> Result<Self> {
    let range = self.range();
    if range.is_empty() {
      return Err(Error::InvalidRange {
        floor:   range.floor,
        ceiling: range.ceiling,
      });
    }
    Ok(self)
  }

  pub fn range(&self) -> DateRange {
    self.range_floor.map(DateRange::with_floor).unwrap_or_default()
  }

  pub fn header_rater(&self) -> HeaderDateRater {
    HeaderDateRater::new(self.target).with_freshness_hours(self.freshness_hours)
  }
}
