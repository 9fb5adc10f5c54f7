//! Derived metrics over date-indexed series.
//!
//! Modules include:
//! - `transform`: differences, rolling means, percent changes, rebasing
//! - `join`: date-aligned joins producing frames
//! - `stats`: percentile rank, averages, padded axis ranges
//! - `recession`: flag series to shaded periods
//! - `window`: calendar helpers for zoom windows and anchors
/// Date-aligned joins producing frames.
pub mod join;
/// Recession flag extraction.
pub mod recession;
/// Summary statistics over series values.
pub mod stats;
/// Element-wise transformations preserving the input index.
pub mod transform;
/// Calendar helpers for default windows and anchors.
pub mod window;
