//! Helpers over rated dates.

use kairos_core::RatedDate;

use crate::exactest::filter_exactest;

/// The highest rate in `rated`, or `0.0` when the list is empty or every
/// rate is negative.
pub fn highest_rate(rated: &[RatedDate]) -> f64 {
  rated.iter().map(RatedDate::rate).fold(0.0, f64::max)
}

/// The dates rated exactly `rate` when `include` is set, otherwise all the
/// others.
pub fn rated_dates(rated: &[RatedDate], rate: f64, include: bool) -> Vec<&RatedDate> {
  rated.iter().filter(|d| (d.rate() == rate) == include).collect()
}

/// All dates, highest rate first. Equal rates keep their input order.
pub fn order_by_rate(rated: &[RatedDate]) -> Vec<&RatedDate> {
  let mut ordered: Vec<&RatedDate> = rated.iter().collect();
  ordered.sort_by(|a, b| b.rate().total_cmp(&a.rate()));
  ordered
}

/// True when no date has a positive rate.
pub fn is_all_zero(rated: &[RatedDate]) -> bool {
  rated.iter().all(|d| d.rate() <= 0.0)
}

/// The date a rater trusts most.
///
/// Only positive rates qualify. Among dates sharing the top rate the most
/// exact one wins, then the earliest in input order.
pub fn best_rated(rated: &[RatedDate]) -> Option<&RatedDate> {
  let top = highest_rate(rated);
  if top <= 0.0 {
    return None;
  }
  let candidates = rated_dates(rated, top, true);
  let best = filter_exactest(&candidates).into_iter().next().copied();
  if let Some(best) = best {
    tracing::debug!(
      date = %best.date(),
      rate = best.rate(),
      tied = candidates.len(),
      "picked best rated date"
    );
  }
  best
}
