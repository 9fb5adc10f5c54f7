use std::time::Duration;

use mandate::{Mandate, MandateError};
use mandate_mock::{DynamicMockConnector, MockBehavior};

use crate::helpers::{PAYEMS, UNRATE, monthly};

#[tokio::test]
async fn panel_deadline_maps_to_panel_capability() {
    let (dynamic, ctrl) = DynamicMockConnector::new_with_controller("dyn");
    ctrl.set_series_behavior(UNRATE, MockBehavior::Return(monthly(UNRATE, &[3.5])))
        .await;
    ctrl.set_series_behavior(PAYEMS, MockBehavior::Hang).await;

    let mandate = Mandate::builder()
        .with_connector(dynamic)
        .provider_timeout(Duration::from_secs(30))
        .request_timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let err = mandate
        .panel(&[("Unemployment", UNRATE), ("Payrolls", PAYEMS)], None, None)
        .await
        .unwrap_err();
    assert_eq!(err, MandateError::request_timeout("panel"));
}

#[tokio::test]
async fn provider_timeout_inside_panel_surfaces_as_timeout() {
    let (dynamic, ctrl) = DynamicMockConnector::new_with_controller("dyn");
    ctrl.set_series_behavior(UNRATE, MockBehavior::Hang).await;

    let mandate = Mandate::builder()
        .with_connector(dynamic)
        .provider_timeout(Duration::from_millis(30))
        .build()
        .unwrap();

    let err = mandate
        .panel(&[("Unemployment", UNRATE)], None, None)
        .await
        .unwrap_err();
    assert!(err.is_timeout(), "unexpected: {err:?}");
}
