//! Error types for the kairos-dataset codec.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("dataset has no header line")]
  MissingHeader,

  #[error("dataset header has no `url` column")]
  MissingUrlColumn,

  #[error("line {line}: expected {expected} fields, found {found}")]
  MalformedRow {
    line:     usize,
    expected: usize,
    found:    usize,
  },

  #[error("unknown page date type: {0}")]
  UnknownPageDateType(String),

  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
