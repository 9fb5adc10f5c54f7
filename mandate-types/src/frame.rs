//! Date-indexed table of named columns.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{MandateError, Point, TimeSeries};

/// A named column aligned to the owning frame's index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column name.
    pub name: String,
    /// One value per index row; `None` is missing.
    pub values: Vec<Option<f64>>,
}

/// Table of columns sharing a strictly increasing date index.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Frame {
    index: Vec<NaiveDate>,
    columns: Vec<Column>,
}

impl Frame {
    /// Outer-join series on date; dates absent from a series become missing cells.
    #[must_use]
    pub fn from_series<'a>(series: impl IntoIterator<Item = &'a TimeSeries>) -> Self {
        let series: Vec<&TimeSeries> = series.into_iter().collect();
        let index: Vec<NaiveDate> = series
            .iter()
            .flat_map(|s| s.points().iter().map(|p| p.date))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        Self::aligned(index, &series)
    }

    /// Reindex `series` onto `index`, filling absent dates with missing cells.
    #[must_use]
    pub fn aligned(index: Vec<NaiveDate>, series: &[&TimeSeries]) -> Self {
        let columns = series
            .iter()
            .map(|s| {
                let lookup: BTreeMap<NaiveDate, Option<f64>> =
                    s.points().iter().map(|p| (p.date, p.value)).collect();
                Column {
                    name: s.name().to_string(),
                    values: index
                        .iter()
                        .map(|d| lookup.get(d).copied().flatten())
                        .collect(),
                }
            })
            .collect();
        Self { index, columns }
    }

    /// Date index.
    #[must_use]
    pub fn index(&self) -> &[NaiveDate] {
        &self.index
    }

    /// All columns in insertion order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column names in insertion order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// True when the frame has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// First index date.
    #[must_use]
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.index.first().copied()
    }

    /// Last index date.
    #[must_use]
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.index.last().copied()
    }

    /// Values of a column.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&[Option<f64>]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    /// A column as a standalone series.
    ///
    /// # Errors
    /// Returns `Data` when the column does not exist.
    pub fn series(&self, name: &str) -> Result<TimeSeries, MandateError> {
        let values = self
            .column(name)
            .ok_or_else(|| MandateError::Data(format!("missing column '{name}'")))?;
        Ok(TimeSeries::new(
            name,
            self.index.iter().zip(values).map(|(&date, &value)| Point { date, value }),
        ))
    }

    /// Every column as a series, in insertion order.
    #[must_use]
    pub fn all_series(&self) -> Vec<TimeSeries> {
        self.columns
            .iter()
            .map(|c| {
                TimeSeries::new(
                    c.name.clone(),
                    self.index
                        .iter()
                        .zip(&c.values)
                        .map(|(&date, &value)| Point { date, value }),
                )
            })
            .collect()
    }

    /// Keep only the named columns, in the given order.
    ///
    /// # Errors
    /// Returns `Data` when any name is missing.
    pub fn select(&self, names: &[&str]) -> Result<Self, MandateError> {
        let columns = names
            .iter()
            .map(|n| {
                self.columns
                    .iter()
                    .find(|c| c.name == *n)
                    .cloned()
                    .ok_or_else(|| MandateError::Data(format!("missing column '{n}'")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            index: self.index.clone(),
            columns,
        })
    }

    /// Remove a column if present.
    #[must_use]
    pub fn drop_column(&self, name: &str) -> Self {
        Self {
            index: self.index.clone(),
            columns: self
                .columns
                .iter()
                .filter(|c| c.name != name)
                .cloned()
                .collect(),
        }
    }

    /// Remove rows with a missing value in any column.
    #[must_use]
    pub fn dropna(&self) -> Self {
        let keep: Vec<usize> = (0..self.index.len())
            .filter(|&i| self.columns.iter().all(|c| c.values[i].is_some()))
            .collect();
        self.take_rows(&keep)
    }

    /// Keep rows dated on or after `start`.
    #[must_use]
    pub fn from_date(&self, start: NaiveDate) -> Self {
        let keep: Vec<usize> = (0..self.index.len())
            .filter(|&i| self.index[i] >= start)
            .collect();
        self.take_rows(&keep)
    }

    /// Apply a per-column transformation that keeps the index intact.
    #[must_use]
    pub fn map_columns(&self, f: impl Fn(&TimeSeries) -> TimeSeries) -> Self {
        let mapped: Vec<TimeSeries> = self.all_series().iter().map(f).collect();
        let refs: Vec<&TimeSeries> = mapped.iter().collect();
        Self::aligned(self.index.clone(), &refs)
    }

    /// Fallible variant of [`map_columns`](Self::map_columns).
    ///
    /// # Errors
    /// Propagates the first error returned by `f`.
    pub fn try_map_columns(
        &self,
        f: impl Fn(&TimeSeries) -> Result<TimeSeries, MandateError>,
    ) -> Result<Self, MandateError> {
        let mapped = self
            .all_series()
            .iter()
            .map(f)
            .collect::<Result<Vec<_>, _>>()?;
        let refs: Vec<&TimeSeries> = mapped.iter().collect();
        Ok(Self::aligned(self.index.clone(), &refs))
    }

    /// Rename columns by appending `suffix` (e.g. " YoY").
    #[must_use]
    pub fn suffixed(mut self, suffix: &str) -> Self {
        for c in &mut self.columns {
            c.name.push_str(suffix);
        }
        self
    }

    fn take_rows(&self, rows: &[usize]) -> Self {
        Self {
            index: rows.iter().map(|&i| self.index[i]).collect(),
            columns: self
                .columns
                .iter()
                .map(|c| Column {
                    name: c.name.clone(),
                    values: rows.iter().map(|&i| c.values[i]).collect(),
                })
                .collect(),
        }
    }
}
