use std::sync::Arc;
use std::time::Duration;

use mandate::{FetchStrategy, Mandate, MandateError};
use mandate_mock::MockConnector;

use crate::helpers::d;

#[test]
fn build_without_connectors_is_invalid() {
    let err = Mandate::builder().build().err().unwrap();
    assert!(matches!(err, MandateError::InvalidArg(_)));
}

#[test]
fn builder_settings_reach_config() {
    let mock = Arc::new(MockConnector::new());
    let mandate = Mandate::builder()
        .with_connector(mock)
        .fetch_strategy(FetchStrategy::Latency)
        .provider_timeout(Duration::from_millis(250))
        .request_timeout(Duration::from_secs(2))
        .default_start(d(1990, 1, 1))
        .today(d(2024, 5, 17))
        .build()
        .unwrap();

    let cfg = mandate.config();
    assert_eq!(cfg.fetch_strategy, FetchStrategy::Latency);
    assert_eq!(cfg.provider_timeout, Duration::from_millis(250));
    assert_eq!(cfg.request_timeout, Some(Duration::from_secs(2)));
    assert_eq!(cfg.default_start, d(1990, 1, 1));
    assert_eq!(mandate.today(), d(2024, 5, 17));
}

#[test]
fn priority_entries_for_unknown_connectors_are_dropped() {
    let (registered, _c1) = mandate_mock::DynamicMockConnector::new_with_controller("registered");
    let (stranger, _c2) = mandate_mock::DynamicMockConnector::new_with_controller("stranger");

    let mandate = Mandate::builder()
        .with_connector(registered.clone())
        .prefer_code("UNRATE", &[stranger, registered.clone(), registered])
        .build()
        .unwrap();

    assert_eq!(
        mandate.config().per_code_priority.get("UNRATE"),
        Some(&vec!["registered".to_string()])
    );
}
