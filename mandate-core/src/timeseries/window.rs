use chrono::{Months, NaiveDate};

/// `date` moved back by `months` calendar months, clamped to month end.
#[must_use]
pub fn months_back(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(months)).unwrap_or(date)
}

/// Position of `anchor` in a sorted index, or of the first later date.
#[must_use]
pub fn anchor_position(dates: &[NaiveDate], anchor: NaiveDate) -> Option<usize> {
    let pos = dates.partition_point(|d| *d < anchor);
    (pos < dates.len()).then_some(pos)
}
