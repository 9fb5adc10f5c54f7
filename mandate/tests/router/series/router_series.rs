use std::sync::Arc;

use mandate::{Mandate, MandateError, SeriesRequest};
use mandate_mock::MockConnector;

use crate::helpers::{PAYEMS, UNRATE, d};

fn mock_mandate() -> Mandate {
    Mandate::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .default_start(d(2005, 1, 1))
        .today(d(2010, 6, 15))
        .build()
        .unwrap()
}

#[tokio::test]
async fn open_bounds_resolve_to_default_start_and_today() {
    let s = mandate_mock_series(UNRATE).await;
    assert_eq!(s.first_date(), Some(d(2005, 1, 1)));
    assert_eq!(s.last_date(), Some(d(2010, 6, 1)));
}

async fn mandate_mock_series(code: &str) -> mandate::TimeSeries {
    mock_mandate()
        .series(&SeriesRequest::new(code).unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn explicit_bounds_and_name_are_honored() {
    let req = SeriesRequest::new(PAYEMS)
        .unwrap()
        .with_start(d(2008, 1, 1))
        .with_end(d(2008, 12, 31))
        .with_name("Nonfarm Payrolls");
    let s = mock_mandate().series(&req).await.unwrap();
    assert_eq!(s.name(), "Nonfarm Payrolls");
    assert_eq!(s.len(), 12);
    assert_eq!(s.first_date(), Some(d(2008, 1, 1)));
    assert_eq!(s.last_date(), Some(d(2008, 12, 1)));
}

#[tokio::test]
async fn unnamed_request_keeps_code_as_name() {
    let s = mandate_mock_series(UNRATE).await;
    assert_eq!(s.name(), UNRATE);
}

#[tokio::test]
async fn start_after_pinned_today_is_invalid() {
    let req = SeriesRequest::new(UNRATE).unwrap().with_start(d(2011, 1, 1));
    let err = mock_mandate().series(&req).await.unwrap_err();
    assert!(matches!(err, MandateError::InvalidArg(_)), "unexpected: {err:?}");
}

#[tokio::test]
async fn single_connector_failure_keeps_its_tag() {
    let err = mock_mandate()
        .series(&SeriesRequest::new("FAIL").unwrap())
        .await
        .unwrap_err();
    match err {
        MandateError::Connector { connector, .. } => assert_eq!(connector, MockConnector::NAME),
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn unknown_code_is_not_found() {
    let err = mock_mandate()
        .series(&SeriesRequest::new("NOSUCHCODE").unwrap())
        .await
        .unwrap_err();
    assert_eq!(err, MandateError::not_found("series NOSUCHCODE"));
}
