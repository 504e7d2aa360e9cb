//! Error types for `kairos-core`.

use thiserror::Error;

use crate::date::DateField;

#[derive(Debug, Error)]
pub enum Error {
  #[error("{field} value {value} is out of range")]
  InvalidDate { field: DateField, value: i64 },

  #[error("{year:04}-{month:02}-{day:02} is not a calendar date")]
  NoSuchDay { year: i32, month: u32, day: u32 },

  #[error("{field} is set but a coarser field is not")]
  GapInParts { field: DateField },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
