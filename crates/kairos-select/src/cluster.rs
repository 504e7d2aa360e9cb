//! Grouping and counting of dates that agree at a given exactness.

use std::collections::BTreeMap;

use kairos_core::{DateKey, Dated, Exactness};

/// Group `dates` by their value at `exactness`.
///
/// Clusters come out in ascending order of their key; inside a cluster the
/// input order is kept. Every input element lands in exactly one cluster, so
/// the cluster sizes always sum to `dates.len()`.
pub fn cluster<T: Dated>(dates: &[T], exactness: Exactness) -> Vec<Vec<&T>> {
  let mut buckets: BTreeMap<DateKey, Vec<&T>> = BTreeMap::new();
  for d in dates {
    buckets.entry(d.date().key(exactness)).or_default().push(d);
  }
  buckets.into_values().collect()
}

/// Number of elements in `dates` equal to `reference` at `exactness`.
///
/// The reference is not excluded: if it is itself an element of `dates` it
/// counts towards the result.
pub fn count_dates<R: Dated, T: Dated>(
  reference: &R,
  dates: &[T],
  exactness: Exactness,
) -> usize {
  let key = reference.date().key(exactness);
  dates.iter().filter(|d| d.date().key(exactness) == key).count()
}

/// Like [`count_dates`], but each pair is compared at the exactness the
/// reference and the element have in common.
pub fn count_dates_common<R: Dated, T: Dated>(
  reference: &R,
  dates: &[T],
) -> usize {
  dates.iter().filter(|d| agree_at_common(reference, *d)).count()
}

/// The elements of `dates` equal to `reference` at `exactness`.
pub fn same_dates<'a, R: Dated, T: Dated>(
  reference: &R,
  dates: &'a [T],
  exactness: Exactness,
) -> Vec<&'a T> {
  let key = reference.date().key(exactness);
  dates.iter().filter(|d| d.date().key(exactness) == key).collect()
}

/// The elements of `dates` not equal to `reference` at `exactness`.
pub fn different_dates<'a, R: Dated, T: Dated>(
  reference: &R,
  dates: &'a [T],
  exactness: Exactness,
) -> Vec<&'a T> {
  let key = reference.date().key(exactness);
  dates.iter().filter(|d| d.date().key(exactness) != key).collect()
}

fn agree_at_common<A: Dated, B: Dated>(a: &A, b: &B) -> bool {
  let (a, b) = (a.date(), b.date());
  let common = Exactness::common(a.exactness(), b.exactness());
  a.key(common) == b.key(common)
}
