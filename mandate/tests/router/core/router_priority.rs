use mandate::{Mandate, MandateError, SeriesRequest};
use mandate_mock::{DynamicMockConnector, MockBehavior};

use crate::helpers::{UNRATE, d, monthly};

fn req(code: &str) -> SeriesRequest {
    SeriesRequest::new(code).unwrap()
}

#[tokio::test]
async fn registration_order_decides_without_preferences() {
    let (first, c1) = DynamicMockConnector::new_with_controller("first");
    let (second, c2) = DynamicMockConnector::new_with_controller("second");
    c1.set_series_behavior(UNRATE, MockBehavior::Return(monthly(UNRATE, &[1.0, 1.0])))
        .await;
    c2.set_series_behavior(UNRATE, MockBehavior::Return(monthly(UNRATE, &[2.0, 2.0])))
        .await;

    let mandate = Mandate::builder()
        .with_connector(first)
        .with_connector(second)
        .today(d(2021, 1, 1))
        .build()
        .unwrap();

    let s = mandate.series(&req(UNRATE)).await.unwrap();
    assert_eq!(s.values(), vec![Some(1.0), Some(1.0)]);
    assert_eq!(c2.series_calls(UNRATE).await, 0);
}

#[tokio::test]
async fn per_code_priority_is_applied() {
    let (first, c1) = DynamicMockConnector::new_with_controller("first");
    let (second, c2) = DynamicMockConnector::new_with_controller("second");
    for code in [UNRATE, "PAYEMS"] {
        c1.set_series_behavior(code, MockBehavior::Return(monthly(code, &[1.0])))
            .await;
        c2.set_series_behavior(code, MockBehavior::Return(monthly(code, &[2.0])))
            .await;
    }

    let mandate = Mandate::builder()
        .with_connector(first.clone())
        .with_connector(second.clone())
        .prefer_code(UNRATE, &[second, first])
        .today(d(2021, 1, 1))
        .build()
        .unwrap();

    let preferred = mandate.series(&req(UNRATE)).await.unwrap();
    assert_eq!(preferred.values(), vec![Some(2.0)]);
    let default_order = mandate.series(&req("PAYEMS")).await.unwrap();
    assert_eq!(default_order.values(), vec![Some(1.0)]);
}

#[tokio::test]
async fn falls_back_after_connector_failure() {
    let (broken, c1) = DynamicMockConnector::new_with_controller("broken");
    let (healthy, c2) = DynamicMockConnector::new_with_controller("healthy");
    c1.set_series_behavior(
        UNRATE,
        MockBehavior::Fail(MandateError::connector("broken", "server error 503")),
    )
    .await;
    c2.set_series_behavior(UNRATE, MockBehavior::Return(monthly(UNRATE, &[3.5, 3.6])))
        .await;

    let mandate = Mandate::builder()
        .with_connector(broken)
        .with_connector(healthy)
        .today(d(2021, 1, 1))
        .build()
        .unwrap();

    let s = mandate.series(&req(UNRATE)).await.unwrap();
    assert_eq!(s.values(), vec![Some(3.5), Some(3.6)]);
    assert_eq!(c1.series_calls(UNRATE).await, 1);
    assert_eq!(c2.series_calls(UNRATE).await, 1);
}

#[tokio::test]
async fn all_not_found_collapses_to_not_found() {
    let (a, _c1) = DynamicMockConnector::new_with_controller("a");
    let (b, _c2) = DynamicMockConnector::new_with_controller("b");

    let mandate = Mandate::builder()
        .with_connector(a)
        .with_connector(b)
        .build()
        .unwrap();

    let err = mandate.series(&req("NOPE")).await.unwrap_err();
    assert_eq!(err, MandateError::not_found("series NOPE"));
}

#[tokio::test]
async fn mixed_failures_are_aggregated() {
    let (a, c1) = DynamicMockConnector::new_with_controller("a");
    let (b, c2) = DynamicMockConnector::new_with_controller("b");
    c1.set_series_behavior(
        UNRATE,
        MockBehavior::Fail(MandateError::connector("a", "rate limit")),
    )
    .await;
    c2.set_series_behavior(UNRATE, MockBehavior::Fail(MandateError::Other("boom".into())))
        .await;

    let mandate = Mandate::builder()
        .with_connector(a)
        .with_connector(b)
        .build()
        .unwrap();

    let err = mandate.series(&req(UNRATE)).await.unwrap_err();
    match err {
        MandateError::AllProvidersFailed(errs) => {
            assert_eq!(errs.len(), 2);
            assert_eq!(errs[0], MandateError::connector("a", "rate limit"));
            assert_eq!(
                errs[1],
                MandateError::connector("b", "unknown error: boom")
            );
        }
        other => panic!("unexpected: {other:?}"),
    }
}
