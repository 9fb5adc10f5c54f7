#![allow(dead_code)]

pub mod series_only;

pub use series_only::SeriesOnly;

use chrono::{Months, NaiveDate};
use mandate::{Point, TimeSeries};

pub const UNRATE: &str = "UNRATE";
pub const PAYEMS: &str = "PAYEMS";

/// Calendar date from components, panicking on invalid input.
pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid test date")
}

/// Monthly series starting 2020-01-01 with the given values.
pub fn monthly(name: &str, values: &[f64]) -> TimeSeries {
    TimeSeries::new(
        name,
        values.iter().enumerate().map(|(i, v)| {
            let date = d(2020, 1, 1)
                .checked_add_months(Months::new(u32::try_from(i).unwrap()))
                .unwrap();
            Point::new(date, *v)
        }),
    )
}
