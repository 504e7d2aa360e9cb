//! Core types for the Kairos date-extraction toolkit.
//!
//! An [`ExtractedDate`] is a date recognised in a document, tagged with the
//! [`DateKind`] of signal that produced it. Raters decorate dates with a score
//! as [`RatedDate`]. Everything here is an immutable value; the filtering and
//! clustering functions live in `kairos-select`.

pub mod date;
pub mod error;
pub mod exactness;
pub mod kind;
pub mod parse;
pub mod rated;

pub use date::{DateField, DateKey, DateParts, Dated, ExtractedDate, TimeUnit};
pub use error::{Error, Result};
pub use exactness::Exactness;
pub use kind::{
  ContentDate, DateClass, DateKind, DateType, KeywordLocation, MetaDate,
  ReferenceDate, StructureDate, UrlDate,
};
pub use parse::parse_date;
pub use rated::RatedDate;
