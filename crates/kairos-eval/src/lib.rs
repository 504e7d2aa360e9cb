//! Evaluation harness for date-extraction techniques.
//!
//! A technique is a [`DateGetter`] paired with a [`DateRater`]. The
//! [`Evaluator`] runs it over a labelled [`kairos_dataset::Dataset`],
//! classifies every answer into one of five [`Outcome`]s and keeps a
//! [`Tally`]. The HTTP header technique in [`header`] is the one shipped
//! with the `kairos-eval` binary.

pub mod config;
pub mod error;
pub mod evaluator;
pub mod header;
pub mod outcome;
pub mod tally;
pub mod technique;

pub use config::EvalConfig;
pub use error::{Error, Result};
pub use evaluator::{Evaluator, ExampleResult, Report};
pub use header::{HeaderDateGetter, HeaderDateRater};
pub use outcome::{Outcome, classify};
pub use tally::Tally;
pub use technique::{DateGetter, DateRater};
