use std::time::Duration;

use mandate::{FetchStrategy, Mandate, MandateError, SeriesRequest};
use mandate_mock::{DynamicMockConnector, MockBehavior};

use crate::helpers::{UNRATE, d, monthly};

#[tokio::test]
async fn latency_returns_first_success_despite_hanging_priority_provider() {
    let (slow, c1) = DynamicMockConnector::new_with_controller("slow");
    let (fast, c2) = DynamicMockConnector::new_with_controller("fast");
    c1.set_series_behavior(UNRATE, MockBehavior::Hang).await;
    c2.set_series_behavior(UNRATE, MockBehavior::Return(monthly(UNRATE, &[4.0])))
        .await;

    let mandate = Mandate::builder()
        .with_connector(slow)
        .with_connector(fast)
        .fetch_strategy(FetchStrategy::Latency)
        .provider_timeout(Duration::from_secs(30))
        .today(d(2021, 1, 1))
        .build()
        .unwrap();

    let s = tokio::time::timeout(
        Duration::from_secs(5),
        mandate.series(&SeriesRequest::new(UNRATE).unwrap()),
    )
    .await
    .expect("latency mode must not wait for the hanging provider")
    .unwrap();
    assert_eq!(s.values(), vec![Some(4.0)]);
}

#[tokio::test]
async fn priority_moves_on_after_provider_timeout() {
    let (slow, c1) = DynamicMockConnector::new_with_controller("slow");
    let (backup, c2) = DynamicMockConnector::new_with_controller("backup");
    c1.set_series_behavior(UNRATE, MockBehavior::Hang).await;
    c2.set_series_behavior(UNRATE, MockBehavior::Return(monthly(UNRATE, &[5.0])))
        .await;

    let mandate = Mandate::builder()
        .with_connector(slow)
        .with_connector(backup)
        .provider_timeout(Duration::from_millis(50))
        .today(d(2021, 1, 1))
        .build()
        .unwrap();

    let s = mandate
        .series(&SeriesRequest::new(UNRATE).unwrap())
        .await
        .unwrap();
    assert_eq!(s.values(), vec![Some(5.0)]);
    assert_eq!(c1.series_calls(UNRATE).await, 1);
}

#[tokio::test]
async fn all_providers_timing_out_is_reported() {
    for strategy in [FetchStrategy::PriorityWithFallback, FetchStrategy::Latency] {
        let (a, c1) = DynamicMockConnector::new_with_controller("a");
        let (b, c2) = DynamicMockConnector::new_with_controller("b");
        c1.set_series_behavior(UNRATE, MockBehavior::Hang).await;
        c2.set_series_behavior(UNRATE, MockBehavior::Hang).await;

        let mandate = Mandate::builder()
            .with_connector(a)
            .with_connector(b)
            .fetch_strategy(strategy)
            .provider_timeout(Duration::from_millis(30))
            .build()
            .unwrap();

        let err = mandate
            .series(&SeriesRequest::new(UNRATE).unwrap())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            MandateError::AllProvidersTimedOut {
                capability: "series".into()
            },
            "strategy {strategy:?}"
        );
    }
}

#[tokio::test]
async fn mock_timeout_code_exceeds_short_provider_timeout() {
    let mandate = Mandate::builder()
        .with_connector(std::sync::Arc::new(mandate_mock::MockConnector::new()))
        .provider_timeout(Duration::from_millis(20))
        .build()
        .unwrap();

    let err = mandate
        .series(&SeriesRequest::new("TIMEOUT").unwrap())
        .await
        .unwrap_err();
    assert!(err.is_timeout(), "unexpected: {err:?}");
}
