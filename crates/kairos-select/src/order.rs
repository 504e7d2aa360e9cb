//! Chronological ordering.
//!
//! Dates are compared by [`DateKey`] at second exactness, so a date that
//! stops at a coarser field sorts before every finer date inside it:
//! `2010` < `2010-08` < `2010-08-01`.

use kairos_core::{DateKey, Dated, Exactness};

fn key<T: Dated>(d: &T) -> DateKey { d.date().key(Exactness::Second) }

/// All dates oldest first, or youngest first when `reverse` is set.
/// Equal dates keep their input order either way.
pub fn order_dates<T: Dated>(dates: &[T], reverse: bool) -> Vec<&T> {
  let mut ordered: Vec<&T> = dates.iter().collect();
  if reverse {
    ordered.sort_by(|a, b| key(b).cmp(&key(a)));
  } else {
    ordered.sort_by_key(|d| key(d));
  }
  ordered
}

/// The earliest date; the first one in input order on a tie.
pub fn oldest<T: Dated>(dates: &[T]) -> Option<&T> {
  dates
    .iter()
    .reduce(|best, d| if key(d) < key(best) { d } else { best })
}

/// The latest date; the first one in input order on a tie.
pub fn youngest<T: Dated>(dates: &[T]) -> Option<&T> {
  dates
    .iter()
    .reduce(|best, d| if key(d) > key(best) { d } else { best })
}
