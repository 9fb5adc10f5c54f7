use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::{Frame, TimeSeries};

/// Inner join of two series on date.
///
/// The resulting index is exactly the intersection of both indices; missing
/// values inside that intersection are kept as missing cells.
#[must_use]
pub fn inner_join(a: &TimeSeries, b: &TimeSeries) -> Frame {
    inner_join_all(&[a, b])
}

/// Inner join of any number of series on date.
#[must_use]
pub fn inner_join_all(series: &[&TimeSeries]) -> Frame {
    let mut iter = series.iter();
    let Some(first) = iter.next() else {
        return Frame::default();
    };
    let mut common: BTreeSet<NaiveDate> = first.points().iter().map(|p| p.date).collect();
    for s in iter {
        let dates: BTreeSet<NaiveDate> = s.points().iter().map(|p| p.date).collect();
        common = common.intersection(&dates).copied().collect();
    }
    Frame::aligned(common.into_iter().collect(), series)
}

/// Outer join followed by dropping any row with a missing value.
///
/// This is the shape every dashboard panel takes: several series side by side,
/// truncated to the dates where all of them are observed.
#[must_use]
pub fn complete_rows(series: &[&TimeSeries]) -> Frame {
    Frame::from_series(series.iter().copied()).dropna()
}
