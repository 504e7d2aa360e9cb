//! Filtering, clustering and selection over lists of candidate dates.
//!
//! Every function here is a pure function over a caller-owned slice: nothing
//! is mutated, nothing is cached, and results borrow from the input. Input
//! order is preserved unless a function says otherwise. The functions accept
//! any [`Dated`] element, so plain and rated lists go through the same code.
//!
//! [`Dated`]: kairos_core::Dated

mod cluster;
mod exactest;
mod filter;
mod order;
mod range;
mod rating;

pub use cluster::{
  cluster, count_dates, count_dates_common, different_dates, same_dates,
};
pub use exactest::filter_exactest;
pub use filter::{DateFilter, filter, filter_by};
pub use order::{oldest, order_dates, youngest};
pub use range::{DateRange, is_date_in_range};
pub use rating::{best_rated, highest_rate, is_all_zero, order_by_rate, rated_dates};
