//! Error types for the evaluation harness.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("dataset error: {0}")]
  Dataset(#[from] kairos_dataset::Error),

  #[error("config error: {0}")]
  Config(#[from] config::ConfigError),

  #[error("range floor {floor} is after its ceiling {ceiling}")]
  InvalidRange {
    floor:   chrono::NaiveDate,
    ceiling: chrono::NaiveDate,
  },

  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
