//! Comparison of a found date against the hand-labelled one.

use kairos_core::{Exactness, ExtractedDate};
use serde::{Deserialize, Serialize};

/// The five mutually exclusive results of evaluating one example.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
  /// A date was labelled and the technique found it (RF).
  AvailableFoundRight,
  /// No date was labelled and the technique found none (RNF).
  AbsentRightDetected,
  /// A date was labelled and the technique found a different one (WF).
  AvailableFoundWrong,
  /// A date was labelled and the technique found none (WNF).
  AvailableNotFound,
  /// No date was labelled but the technique found one (FF).
  AbsentWrongDetected,
}

impl Outcome {
  pub const ALL: [Outcome; 5] = [
    Self::AvailableFoundRight,
    Self::AbsentRightDetected,
    Self::AvailableFoundWrong,
    Self::AbsentWrongDetected,
    Self::AvailableNotFound,
  ];

  /// Short report label.
  pub fn code(self) -> &'static str {
    match self {
      Self::AvailableFoundRight => "RF",
      Self::AbsentRightDetected => "RNF",
      Self::AvailableFoundWrong => "WF",
      Self::AvailableNotFound => "WNF",
      Self::AbsentWrongDetected => "FF",
    }
  }

  /// Whether the technique behaved correctly.
  pub fn is_right(self) -> bool {
    matches!(self, Self::AvailableFoundRight | Self::AbsentRightDetected)
  }
}

impl std::fmt::Display for Outcome {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.code())
  }
}

/// Classify a technique's answer against the ground truth.
///
/// Two dates match when they agree at the exactness both of them know, so a
/// day-exact label accepts a found date with any time of that day.
pub fn classify(
  found: Option<&ExtractedDate>,
  expected: Option<&ExtractedDate>,
) -> Outcome {
  match (expected, found) {
    (None, None) => Outcome::AbsentRightDetected,
    (None, Some(_)) => Outcome::AbsentWrongDetected,
    (Some(_), None) => Outcome::AvailableNotFound,
    (Some(expected), Some(found)) => {
      let common = Exactness::common(expected.exactness(), found.exactness());
      if expected.key(common) == found.key(common) {
        Outcome::AvailableFoundRight
      } else {
        Outcome::AvailableFoundWrong
      }
    }
  }
}
