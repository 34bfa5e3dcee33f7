//! NAV module - the NAV series model and the two cleaning policies.
//!
//! - [`clean_dropping_missing`] feeds the risk calculator: unusable rows are
//!   removed and the provider's most-recent-first order is kept.
//! - [`clean_interpolating_gaps`] feeds the comparison chart: zero or
//!   non-numeric NAVs are filled by linear interpolation and the series is
//!   sorted oldest-first.

mod nav_model;
mod nav_normalizer;

pub use nav_model::{NavOrder, NavRecord, NavSeries};
pub use nav_normalizer::{
    clean_dropping_missing, clean_interpolating_gaps, parse_nav_date, parse_nav_value,
};
