use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::TimeSeries;

/// A shaded date span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// First flagged date.
    pub start: NaiveDate,
    /// Closing date; see the extracting function for the exact convention.
    pub end: NaiveDate,
}

fn flags(s: &TimeSeries) -> impl Iterator<Item = (NaiveDate, bool)> + '_ {
    s.points()
        .iter()
        .map(|p| (p.date, p.value.is_some_and(|v| v != 0.0)))
}

/// Recession periods closed on the falling edge.
///
/// A period starts at the first flagged date of a run and ends at the first
/// unflagged date after it. A run still open at the end of the data closes on
/// the last date. A run that begins on the first observation is kept.
#[must_use]
pub fn recession_periods(s: &TimeSeries) -> Vec<Period> {
    let mut out = Vec::new();
    let mut open: Option<NaiveDate> = None;
    let mut last: Option<NaiveDate> = None;
    for (date, flagged) in flags(s) {
        match (open, flagged) {
            (None, true) => open = Some(date),
            (Some(start), false) => {
                out.push(Period { start, end: date });
                open = None;
            }
            _ => {}
        }
        last = Some(date);
    }
    if let (Some(start), Some(end)) = (open, last) {
        out.push(Period { start, end });
    }
    out
}

/// Recession runs with inclusive ends: each period closes on its last flagged date.
#[must_use]
pub fn recession_runs(s: &TimeSeries) -> Vec<Period> {
    let mut out = Vec::new();
    let mut run: Option<Period> = None;
    for (date, flagged) in flags(s) {
        run = match (run, flagged) {
            (None, true) => Some(Period {
                start: date,
                end: date,
            }),
            (Some(p), true) => Some(Period { end: date, ..p }),
            (Some(p), false) => {
                out.push(p);
                None
            }
            (None, false) => None,
        };
    }
    out.extend(run);
    out
}
