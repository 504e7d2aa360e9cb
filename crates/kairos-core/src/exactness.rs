//! Calendar granularity of an extracted date.

use serde::{Deserialize, Serialize};

/// The finest calendar field that is actually known for a date.
///
/// Variants are declared coarse to fine, so the derived `Ord` gives
/// `Year < Month < Day < Hour < Minute < Second`.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Exactness {
  Year,
  Month,
  Day,
  Hour,
  Minute,
  Second,
}

impl Exactness {
  const ALL: [Exactness; 6] = [
    Self::Year,
    Self::Month,
    Self::Day,
    Self::Hour,
    Self::Minute,
    Self::Second,
  ];

  /// All levels, coarse to fine.
  pub fn all() -> impl DoubleEndedIterator<Item = Exactness> {
    Self::ALL.into_iter()
  }

  /// `true` if a date of this exactness knows the field `other` stands for.
  pub fn provides(self, other: Exactness) -> bool { self >= other }

  /// The coarser of two levels, i.e. the depth at which both dates can be
  /// compared.
  pub fn common(a: Exactness, b: Exactness) -> Exactness { a.min(b) }

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Year => "year",
      Self::Month => "month",
      Self::Day => "day",
      Self::Hour => "hour",
      Self::Minute => "minute",
      Self::Second => "second",
    }
  }
}

impl std::fmt::Display for Exactness {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn ordered_coarse_to_fine() {
    let levels: Vec<_> = Exactness::all().collect();
    let mut sorted = levels.clone();
    sorted.sort();
    assert_eq!(levels, sorted);
    assert!(Exactness::Year < Exactness::Second);
  }

  #[test]
  fn provides_is_reflexive_and_downward() {
    assert!(Exactness::Day.provides(Exactness::Day));
    assert!(Exactness::Day.provides(Exactness::Month));
    assert!(!Exactness::Day.provides(Exactness::Hour));
  }

  #[test]
  fn common_picks_coarser() {
    assert_eq!(
      Exactness::common(Exactness::Minute, Exactness::Month),
      Exactness::Month
    );
  }
}
