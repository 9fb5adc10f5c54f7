use chrono::NaiveDate;
use mandate_types::{MandateError, Point, SeriesCode, SeriesRequest, TimeSeries, default_start};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn code_rejects_empty_and_punctuation() {
    assert!(matches!(SeriesCode::new(""), Err(MandateError::InvalidArg(_))));
    assert!(matches!(
        SeriesCode::new("PAYEMS&x=1"),
        Err(MandateError::InvalidArg(_))
    ));
    assert_eq!(SeriesCode::new(" UNRATE ").unwrap().as_str(), "UNRATE");
}

#[test]
fn code_is_uppercased() {
    assert_eq!(SeriesCode::new("payems").unwrap(), SeriesCode::new("PAYEMS").unwrap());
    assert_eq!(SeriesRequest::new("ces0500000003").unwrap().column_name(), "CES0500000003");
}

#[test]
fn column_name_defaults_to_code() {
    let req = SeriesRequest::new("PAYEMS").unwrap();
    assert_eq!(req.column_name(), "PAYEMS");
    let named = req.with_name("Payroll Level");
    assert_eq!(named.column_name(), "Payroll Level");
}

#[test]
fn resolved_fills_floor_and_today() {
    let today = d(2024, 6, 15);
    let req = SeriesRequest::new("UNRATE")
        .unwrap()
        .resolved(default_start(), today)
        .unwrap();
    assert_eq!(req.start(), Some(d(1950, 1, 1)));
    assert_eq!(req.end(), Some(today));
}

#[test]
fn resolved_keeps_explicit_bounds() {
    let req = SeriesRequest::new("UNRATE")
        .unwrap()
        .with_start(d(2020, 1, 1))
        .with_end(d(2021, 1, 1))
        .resolved(default_start(), d(2024, 6, 15))
        .unwrap();
    assert_eq!(req.start(), Some(d(2020, 1, 1)));
    assert_eq!(req.end(), Some(d(2021, 1, 1)));
}

#[test]
fn inverted_bounds_are_invalid() {
    let err = SeriesRequest::new("UNRATE")
        .unwrap()
        .with_start(d(2022, 1, 1))
        .with_end(d(2021, 1, 1))
        .validate()
        .unwrap_err();
    assert!(matches!(err, MandateError::InvalidArg(_)));
}

#[test]
fn time_series_sorts_and_dedups_last_wins() {
    let s = TimeSeries::new(
        "X",
        vec![
            Point::new(d(2020, 3, 1), 3.0),
            Point::new(d(2020, 1, 1), 1.0),
            Point::new(d(2020, 3, 1), 30.0),
            Point::missing(d(2020, 2, 1)),
        ],
    );
    assert_eq!(s.dates(), vec![d(2020, 1, 1), d(2020, 2, 1), d(2020, 3, 1)]);
    assert_eq!(s.values(), vec![Some(1.0), None, Some(30.0)]);
    assert_eq!(s.last_valid(), Some((d(2020, 3, 1), 30.0)));
    assert_eq!(s.dropna().len(), 2);
}

#[test]
fn between_is_inclusive() {
    let s = TimeSeries::new(
        "X",
        (1..=12).map(|m| Point::new(d(2020, m, 1), f64::from(m))),
    );
    let cut = s.between(Some(d(2020, 3, 1)), Some(d(2020, 5, 1)));
    assert_eq!(cut.values(), vec![Some(3.0), Some(4.0), Some(5.0)]);
}

#[test]
fn code_roundtrips_through_serde_as_string() {
    let code = SeriesCode::new("CES0500000003").unwrap();
    let json = serde_json::to_string(&code).unwrap();
    assert_eq!(json, "\"CES0500000003\"");
    let bad: Result<SeriesCode, _> = serde_json::from_str("\"no spaces\"");
    assert!(bad.is_err());
}
