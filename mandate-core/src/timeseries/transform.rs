//! Element-wise transformations.
//!
//! Every function here returns a series on the same index as its input;
//! positions where the result is undefined (not enough history, missing inputs,
//! division by zero) carry `None`.

use chrono::NaiveDate;

use crate::timeseries::window::anchor_position;
use crate::{MandateError, Point, TimeSeries};

fn lagged(s: &TimeSeries, periods: usize, f: impl Fn(f64, f64) -> f64) -> TimeSeries {
    let pts = s.points();
    TimeSeries::new(
        s.name(),
        pts.iter().enumerate().map(|(i, p)| {
            let value = i
                .checked_sub(periods)
                .and_then(|j| Some(f(p.value?, pts[j].value?)))
                .filter(|v| v.is_finite());
            Point {
                date: p.date,
                value,
            }
        }),
    )
}

/// First difference: `x[t] - x[t-1]`.
#[must_use]
pub fn diff(s: &TimeSeries) -> TimeSeries {
    diff_n(s, 1)
}

/// Lagged difference: `x[t] - x[t-n]`.
#[must_use]
pub fn diff_n(s: &TimeSeries, periods: usize) -> TimeSeries {
    lagged(s, periods, |cur, prev| cur - prev)
}

/// Simple trailing mean over `window` points.
///
/// The first `window - 1` points are `None`, as is any point whose window
/// contains a missing value. A window of 0 or 1 returns the input unchanged.
#[must_use]
pub fn rolling_mean(s: &TimeSeries, window: usize) -> TimeSeries {
    if window <= 1 {
        return s.clone();
    }
    let pts = s.points();
    #[allow(clippy::cast_precision_loss)]
    let denom = window as f64;
    TimeSeries::new(
        s.name(),
        pts.iter().enumerate().map(|(i, p)| {
            let value = if i + 1 < window {
                None
            } else {
                pts[i + 1 - window..=i]
                    .iter()
                    .map(|q| q.value)
                    .sum::<Option<f64>>()
                    .map(|total| total / denom)
            };
            Point {
                date: p.date,
                value,
            }
        }),
    )
}

/// Percent change over `periods` points: `(x[t] / x[t-n] - 1) * 100`.
#[must_use]
pub fn pct_change(s: &TimeSeries, periods: usize) -> TimeSeries {
    lagged(s, periods, |cur, prev| (cur / prev - 1.0) * 100.0)
}

/// Year-over-year percent change for a monthly series.
#[must_use]
pub fn yoy(s: &TimeSeries) -> TimeSeries {
    pct_change(s, 12)
}

/// Rolling `months`-month change annualized: `((x[t] / x[t-n])^(12/n) - 1) * 100`.
#[must_use]
pub fn annualized(s: &TimeSeries, months: usize) -> TimeSeries {
    if months == 0 {
        return s.map_values(|_| f64::NAN);
    }
    #[allow(clippy::cast_precision_loss)]
    let exponent = 12.0 / months as f64;
    lagged(s, months, move |cur, prev| ((cur / prev).powf(exponent) - 1.0) * 100.0)
}

fn anchor_value(s: &TimeSeries, anchor: NaiveDate) -> Result<f64, MandateError> {
    let dates = s.dates();
    let pos = anchor_position(&dates, anchor).ok_or_else(|| {
        MandateError::Data(format!("{}: no observation on or after {anchor}", s.name()))
    })?;
    s.points()[pos].value.ok_or_else(|| {
        MandateError::Data(format!(
            "{}: anchor observation {} is missing",
            s.name(),
            dates[pos]
        ))
    })
}

/// Cumulative change since `anchor`: `x[t] - x[anchor]`.
///
/// When `anchor` is not in the index the first later date is used.
///
/// # Errors
/// Returns `Data` when no observation exists on or after `anchor`, or when it is missing.
pub fn rebase_diff(s: &TimeSeries, anchor: NaiveDate) -> Result<TimeSeries, MandateError> {
    let base = anchor_value(s, anchor)?;
    Ok(s.map_values(|v| v - base))
}

/// Percent change since `anchor`: `(x[t] / x[anchor] - 1) * 100`.
///
/// # Errors
/// Same conditions as [`rebase_diff`], plus a zero anchor value.
pub fn rebase_pct(s: &TimeSeries, anchor: NaiveDate) -> Result<TimeSeries, MandateError> {
    let base = anchor_value(s, anchor)?;
    if base == 0.0 {
        return Err(MandateError::Data(format!(
            "{}: anchor value is zero",
            s.name()
        )));
    }
    Ok(s.map_values(|v| (v / base - 1.0) * 100.0))
}

/// Multiply every value by `factor` (e.g. `1e-3` for thousands to millions).
#[must_use]
pub fn scale(s: &TimeSeries, factor: f64) -> TimeSeries {
    s.map_values(|v| v * factor)
}

/// Date-aligned sum over the intersection of both indices.
#[must_use]
pub fn sum(a: &TimeSeries, b: &TimeSeries, name: impl Into<String>) -> TimeSeries {
    TimeSeries::new(
        name,
        a.points().iter().filter_map(|p| {
            let other = b
                .points()
                .binary_search_by_key(&p.date, |q| q.date)
                .ok()
                .map(|i| b.points()[i].value)?;
            Some(Point {
                date: p.date,
                value: p.value.zip(other).map(|(x, y)| x + y),
            })
        }),
    )
}
