//! CSV bodies into series and frames.
//!
//! FRED graph exports carry a date column (`observation_date`, or `DATE` in
//! older exports) followed by one column named after the series code. The
//! San Francisco Fed files carry a `DATE` column followed by any number of
//! value columns with loosely formatted headers.

use chrono::NaiveDate;
use mandate_core::{Frame, MandateError, Point, TimeSeries};

const DATE_HEADERS: &[&str] = &["observation_date", "date"];
const MISSING: &[&str] = &["", ".", "NA", "N/A", "#N/A", "NaN"];

fn reader(body: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(body.as_bytes())
}

fn csv_err(e: &csv::Error) -> MandateError {
    MandateError::Data(format!("malformed csv: {e}"))
}

fn date_column(headers: &csv::StringRecord) -> Option<usize> {
    headers
        .iter()
        .position(|h| DATE_HEADERS.iter().any(|d| h.eq_ignore_ascii_case(d)))
}

/// Parse a date cell in ISO (`2020-01-01`) or US (`01/01/2020`) form.
///
/// A trailing time component (`2020-01-01 00:00:00`) is ignored.
///
/// # Errors
/// Returns `Data` when the cell matches neither format.
pub fn parse_date(raw: &str) -> Result<NaiveDate, MandateError> {
    let raw = raw.split_whitespace().next().unwrap_or_default();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%m/%d/%Y"))
        .map_err(|_| MandateError::Data(format!("unparseable date '{raw}'")))
}

/// Parse a value cell. FRED writes `.` for missing observations.
///
/// # Errors
/// Returns `Data` for a cell that is neither a number nor a missing marker.
pub fn parse_value(raw: &str) -> Result<Option<f64>, MandateError> {
    let raw = raw.trim();
    if MISSING.contains(&raw) {
        return Ok(None);
    }
    let v: f64 = raw
        .parse()
        .map_err(|_| MandateError::Data(format!("unparseable value '{raw}'")))?;
    Ok(v.is_finite().then_some(v))
}

/// Python-style title casing: the first letter of every alphabetic run is
/// upper-cased and the rest lower-cased.
#[must_use]
pub fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_word = false;
    for ch in raw.trim().chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

/// Parse a single-series FRED export into a `TimeSeries` called `name`.
///
/// The value column is the one whose header equals `code` (case-insensitive),
/// else the first non-date column.
///
/// # Errors
/// `NotFound` when the body holds no observations; `Data` for a missing date
/// column or malformed cells.
pub fn parse_series(body: &str, code: &str, name: &str) -> Result<TimeSeries, MandateError> {
    let mut rdr = reader(body);
    let headers = rdr.headers().map_err(|e| csv_err(&e))?.clone();
    let date_col = date_column(&headers)
        .ok_or_else(|| MandateError::Data(format!("no date column in export for {code}")))?;
    let value_col = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(code))
        .or_else(|| (0..headers.len()).find(|i| *i != date_col))
        .ok_or_else(|| MandateError::Data(format!("no value column in export for {code}")))?;

    let mut points = Vec::new();
    for rec in rdr.records() {
        let rec = rec.map_err(|e| csv_err(&e))?;
        let date = parse_date(rec.get(date_col).unwrap_or_default())?;
        let value = parse_value(rec.get(value_col).unwrap_or_default())?;
        points.push(Point { date, value });
    }
    if points.is_empty() {
        return Err(MandateError::not_found(format!("series {code}")));
    }
    Ok(TimeSeries::new(name, points))
}

/// Parse a multi-column export into a `Frame` keyed by its `DATE` column.
///
/// Column headers are trimmed and title-cased; blank headers are skipped.
///
/// # Errors
/// `Data` for a missing date column, malformed cells or a body without rows.
pub fn parse_frame(body: &str) -> Result<Frame, MandateError> {
    let mut rdr = reader(body);
    let headers = rdr.headers().map_err(|e| csv_err(&e))?.clone();
    let date_col =
        date_column(&headers).ok_or_else(|| MandateError::Data("no DATE column".into()))?;
    let value_cols: Vec<(usize, String)> = headers
        .iter()
        .enumerate()
        .filter(|(i, h)| *i != date_col && !h.trim().is_empty())
        .map(|(i, h)| (i, title_case(h)))
        .collect();

    let mut columns: Vec<Vec<Point>> = vec![Vec::new(); value_cols.len()];
    for rec in rdr.records() {
        let rec = rec.map_err(|e| csv_err(&e))?;
        let date = parse_date(rec.get(date_col).unwrap_or_default())?;
        for ((i, _), col) in value_cols.iter().zip(columns.iter_mut()) {
            let value = parse_value(rec.get(*i).unwrap_or_default())?;
            col.push(Point { date, value });
        }
    }
    if columns.first().is_none_or(Vec::is_empty) {
        return Err(MandateError::Data("dataset has no rows".into()));
    }
    let series: Vec<TimeSeries> = value_cols
        .into_iter()
        .zip(columns)
        .map(|((_, name), points)| TimeSeries::new(name, points))
        .collect();
    Ok(Frame::from_series(&series))
}
