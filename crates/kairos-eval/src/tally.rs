//! Running counts of evaluation outcomes.

use serde::Serialize;

use crate::outcome::Outcome;

/// One counter per [`Outcome`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
  pub rf:  usize,
  pub rnf: usize,
  pub wf:  usize,
  pub wnf: usize,
  pub ff:  usize,
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
  if denominator == 0 {
    0.0
  } else {
    numerator as f64 / denominator as f64
  }
}

impl Tally {
  pub fn record(&mut self, outcome: Outcome) {
    *self.counter(outcome) += 1;
  }

  pub fn get(&self, outcome: Outcome) -> usize {
    match outcome {
      Outcome::AvailableFoundRight => self.rf,
      Outcome::AbsentRightDetected => self.rnf,
      Outcome::AvailableFoundWrong => self.wf,
      Outcome::AvailableNotFound => self.wnf,
      Outcome::AbsentWrongDetected => self.ff,
    }
  }

  fn counter(&mut self, outcome: Outcome) -> &mut usize {
    match outcome {
      Outcome::AvailableFoundRight => &mut self.rf,
      Outcome::AbsentRightDetected => &mut self.rnf,
      Outcome::AvailableFoundWrong => &mut self.wf,
      Outcome::AvailableNotFound => &mut self.wnf,
      Outcome::AbsentWrongDetected => &mut self.ff,
    }
  }

  pub fn total(&self) -> usize {
    self.rf + self.rnf + self.wf + self.wnf + self.ff
  }

  /// Share of examples handled correctly (RF and RNF).
  pub fn accuracy(&self) -> f64 { ratio(self.rf + self.rnf, self.total()) }

  /// Share of found dates that were right. `0.0` when nothing was found.
  pub fn precision(&self) -> f64 {
    ratio(self.rf, self.rf + self.wf + self.ff)
  }

  /// Share of labelled dates that were found right. `0.0` when nothing was
  /// labelled.
  pub fn recall(&self) -> f64 { ratio(self.rf, self.rf + self.wf + self.wnf) }

  pub fn f1(&self) -> f64 {
    let (p, r) = (self.precision(), self.recall());
    if p + r == 0.0 { 0.0 } else { 2.0 * p * r / (p + r) }
  }
}

impl std::fmt::Display for Tally {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "all: {} RF: {} RNF: {} WF: {} FF: {} WNF: {}",
      self.total(),
      self.rf,
      self.rnf,
      self.wf,
      self.ff,
      self.wnf
    )
  }
}

impl Extend<Outcome> for Tally {
  fn extend<I: IntoIterator<Item = Outcome>>(&mut self, iter: I) {
    for outcome in iter {
      self.record(outcome);
    }
  }
}

impl FromIterator<Outcome> for Tally {
  fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
    let mut tally = Self::default();
    tally.extend(iter);
    tally
  }
}
