//! Series identifiers, requests, and the date-indexed series container.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::MandateError;

/// Upstream series code such as `PAYEMS` or `CES0500000003`.
///
/// Codes are non-empty, limited to ASCII alphanumerics and `_`, and stored
/// uppercased so `payems` and `PAYEMS` share a cache entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SeriesCode(String);

impl SeriesCode {
    /// Validate and wrap a code.
    ///
    /// # Errors
    /// Returns `InvalidArg` for empty codes or codes with unsupported characters.
    pub fn new(code: impl AsRef<str>) -> Result<Self, MandateError> {
        let code = code.as_ref().trim();
        if code.is_empty() {
            return Err(MandateError::InvalidArg("series code is empty".into()));
        }
        if !code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(MandateError::InvalidArg(format!(
                "series code '{code}' contains unsupported characters"
            )));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    /// Borrow the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeriesCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for SeriesCode {
    type Error = MandateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SeriesCode> for String {
    fn from(code: SeriesCode) -> Self {
        code.0
    }
}

/// Request for a single series, optionally bounded and renamed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeriesRequest {
    code: SeriesCode,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    name: Option<String>,
}

impl SeriesRequest {
    /// Build a request for `code` with open date bounds.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `code` is not a valid series code.
    pub fn new(code: impl AsRef<str>) -> Result<Self, MandateError> {
        Ok(Self::for_code(SeriesCode::new(code)?))
    }

    /// Build a request from an already validated code.
    #[must_use]
    pub const fn for_code(code: SeriesCode) -> Self {
        Self {
            code,
            start: None,
            end: None,
            name: None,
        }
    }

    /// Set the inclusive start date.
    #[must_use]
    pub const fn with_start(mut self, start: NaiveDate) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the inclusive end date.
    #[must_use]
    pub const fn with_end(mut self, end: NaiveDate) -> Self {
        self.end = Some(end);
        self
    }

    /// Set the output column name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Upstream code.
    #[must_use]
    pub const fn code(&self) -> &SeriesCode {
        &self.code
    }

    /// Inclusive start date, if set.
    #[must_use]
    pub const fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    /// Inclusive end date, if set.
    #[must_use]
    pub const fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    /// Requested output name, if set.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Output column name: the requested name, or the upstream code.
    #[must_use]
    pub fn column_name(&self) -> &str {
        self.name.as_deref().unwrap_or_else(|| self.code.as_str())
    }

    /// Check that the bounds, when both present, are ordered.
    ///
    /// # Errors
    /// Returns `InvalidArg` when `start > end`.
    pub fn validate(&self) -> Result<(), MandateError> {
        if let (Some(s), Some(e)) = (self.start, self.end)
            && s > e
        {
            return Err(MandateError::InvalidArg(format!(
                "start {s} is after end {e} for {}",
                self.code
            )));
        }
        Ok(())
    }

    /// Fill open bounds with `default_start` and `today`.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the effective start falls after the effective end.
    pub fn resolved(&self, default_start: NaiveDate, today: NaiveDate) -> Result<Self, MandateError> {
        let out = Self {
            code: self.code.clone(),
            start: Some(self.start.unwrap_or(default_start)),
            end: Some(self.end.unwrap_or(today)),
            name: self.name.clone(),
        };
        out.validate()?;
        Ok(out)
    }

    /// True when `date` lies within the request bounds.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|s| date >= s) && self.end.is_none_or(|e| date <= e)
    }
}

/// One observation. `None` marks a missing value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Observation date.
    pub date: NaiveDate,
    /// Observed value, if any.
    pub value: Option<f64>,
}

impl Point {
    /// Convenience constructor for a present value.
    #[must_use]
    pub const fn new(date: NaiveDate, value: f64) -> Self {
        Self {
            date,
            value: Some(value),
        }
    }

    /// Convenience constructor for a missing value.
    #[must_use]
    pub const fn missing(date: NaiveDate) -> Self {
        Self { date, value: None }
    }
}

/// Named, date-indexed series with a strictly increasing index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    name: String,
    points: Vec<Point>,
}

impl TimeSeries {
    /// Build a series, sorting by date and keeping the last value for duplicate dates.
    pub fn new(name: impl Into<String>, points: impl IntoIterator<Item = Point>) -> Self {
        let by_date: BTreeMap<NaiveDate, Option<f64>> =
            points.into_iter().map(|p| (p.date, p.value)).collect();
        Self {
            name: name.into(),
            points: by_date
                .into_iter()
                .map(|(date, value)| Point { date, value })
                .collect(),
        }
    }

    /// Series name (output column).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All points in date order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points including missing ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the series has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Dates in order.
    #[must_use]
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    /// Values in date order.
    #[must_use]
    pub fn values(&self) -> Vec<Option<f64>> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Present values only, in date order.
    pub fn valid_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().filter_map(|p| p.value)
    }

    /// Last point, missing or not.
    #[must_use]
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Last point carrying a value.
    #[must_use]
    pub fn last_valid(&self) -> Option<(NaiveDate, f64)> {
        self.points
            .iter()
            .rev()
            .find_map(|p| p.value.map(|v| (p.date, v)))
    }

    /// First date, if any.
    #[must_use]
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.date)
    }

    /// Last date, if any.
    #[must_use]
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }

    /// Drop missing points.
    #[must_use]
    pub fn dropna(&self) -> Self {
        Self {
            name: self.name.clone(),
            points: self
                .points
                .iter()
                .filter(|p| p.value.is_some())
                .copied()
                .collect(),
        }
    }

    /// Keep points within the inclusive bounds.
    #[must_use]
    pub fn between(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self {
            name: self.name.clone(),
            points: self
                .points
                .iter()
                .filter(|p| start.is_none_or(|s| p.date >= s) && end.is_none_or(|e| p.date <= e))
                .copied()
                .collect(),
        }
    }

    /// Keep points on or after `start`.
    #[must_use]
    pub fn from_date(&self, start: NaiveDate) -> Self {
        self.between(Some(start), None)
    }

    /// Same points under a new name.
    #[must_use]
    pub fn renamed(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replace every present value with `f(value)`, treating non-finite results as missing.
    #[must_use]
    pub fn map_values(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            name: self.name.clone(),
            points: self
                .points
                .iter()
                .map(|p| Point {
                    date: p.date,
                    value: p.value.map(&f).filter(|v| v.is_finite()),
                })
                .collect(),
        }
    }
}
