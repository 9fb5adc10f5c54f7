use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::NaiveDate;
use mandate::{Mandate, MandateError, SeriesRequest};
use mandate_mock::MockConnector;

use crate::helpers::{PAYEMS, UNRATE, d};

fn mock_mandate() -> Mandate {
    Mandate::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .today(d(2024, 12, 31))
        .build()
        .unwrap()
}

#[tokio::test]
async fn monthly_panel_keeps_label_order() {
    let frame = mock_mandate()
        .panel(
            &[("Unemployment", UNRATE), ("Payrolls", PAYEMS)],
            Some(d(2015, 1, 1)),
            Some(d(2015, 12, 31)),
        )
        .await
        .unwrap();
    assert_eq!(frame.names(), vec!["Unemployment", "Payrolls"]);
    assert_eq!(frame.len(), 12);
    assert_eq!(frame.first_date(), Some(d(2015, 1, 1)));
}

#[tokio::test]
async fn mixed_frequencies_join_on_shared_dates_only() {
    let mandate = mock_mandate();
    let start = Some(d(2019, 1, 1));
    let frame = mandate
        .panel(&[("Claims", "ICSA"), ("Unemployment", UNRATE)], start, None)
        .await
        .unwrap();

    let weekly: BTreeSet<NaiveDate> = mandate
        .series(&SeriesRequest::new("ICSA").unwrap().with_start(d(2019, 1, 1)))
        .await
        .unwrap()
        .dates()
        .into_iter()
        .collect();
    let monthly: BTreeSet<NaiveDate> = mandate
        .series(&SeriesRequest::new(UNRATE).unwrap().with_start(d(2019, 1, 1)))
        .await
        .unwrap()
        .dates()
        .into_iter()
        .collect();
    let expected: Vec<NaiveDate> = weekly.intersection(&monthly).copied().collect();
    assert_eq!(frame.index(), expected.as_slice());
}

#[tokio::test]
async fn recession_column_is_appended() {
    let frame = mock_mandate()
        .panel_with_recession(&[("Payrolls", PAYEMS)], Some(d(2008, 1, 1)), Some(d(2009, 12, 1)))
        .await
        .unwrap();
    assert_eq!(frame.names(), vec!["Payrolls", "USREC"]);
    let flags = frame.column("USREC").unwrap();
    assert_eq!(flags[0], Some(1.0));
    assert_eq!(flags[flags.len() - 1], Some(0.0));
}

#[tokio::test]
async fn any_missing_member_fails_the_panel() {
    let err = mock_mandate()
        .panel(&[("Payrolls", PAYEMS), ("Ghost", "NOSUCHCODE")], None, None)
        .await
        .unwrap_err();
    assert_eq!(err, MandateError::not_found("series NOSUCHCODE"));
}

#[tokio::test]
async fn recession_label_clashes_with_member_label() {
    let plain = mock_mandate()
        .panel(&[("USREC", PAYEMS)], None, None)
        .await;
    assert!(plain.is_ok());

    let err = mock_mandate()
        .panel_with_recession(&[("USREC", PAYEMS)], None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, MandateError::InvalidArg(_)));
}
