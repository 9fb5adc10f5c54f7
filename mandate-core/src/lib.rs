//! mandate-core
//!
//! Core traits and utilities shared across the mandate workspace.
//!
//! - `connector`: the `MandateConnector` trait and its role traits.
//! - `middleware`: the `Middleware` trait implemented by connector wrappers.
//! - `timeseries`: derived metrics over date-indexed series (differences,
//!   rolling means, percent changes, joins, percentile ranks, recession periods).
//!
#![warn(missing_docs)]

/// Connector role traits and the primary `MandateConnector` interface.
pub mod connector;
/// Middleware trait implemented by connector wrappers.
pub mod middleware;
/// Pure derivations over series and frames.
pub mod timeseries;

pub use connector::{DatasetProvider, MandateConnector, SeriesProvider};
pub use mandate_types::*;
pub use middleware::Middleware;
pub use timeseries::join::{complete_rows, inner_join, inner_join_all};
pub use timeseries::recession::{Period, recession_periods, recession_runs};
pub use timeseries::stats::{mean, min_max, padded_range, percentile_rank_latest};
pub use timeseries::transform::{
    annualized, diff, diff_n, pct_change, rebase_diff, rebase_pct, rolling_mean, scale, sum, yoy,
};
pub use timeseries::window::{anchor_position, months_back};
