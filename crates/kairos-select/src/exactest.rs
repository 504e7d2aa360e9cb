use kairos_core::Dated;

/// Keep only the dates with the highest exactness present in `dates`.
///
/// Input order is kept. An empty input gives an empty output.
pub fn filter_exactest<T: Dated>(dates: &[T]) -> Vec<&T> {
  let Some(best) = dates.iter().map(|d| d.date().exactness()).max() else {
    return Vec::new();
  };
  dates.iter().filter(|d| d.date().exactness() == best).collect()
}
