use mandate::{CacheConfig, ConnectorBuilder, Mandate, SeriesRequest};
use mandate_mock::{DynamicMockConnector, MockBehavior};

use crate::helpers::{UNRATE, d, monthly};

#[tokio::test]
async fn cached_connector_serves_repeat_requests() {
    let (raw, ctrl) = DynamicMockConnector::new_with_controller("dyn");
    ctrl.set_series_behavior(UNRATE, MockBehavior::Return(monthly(UNRATE, &[3.5, 3.7, 3.9])))
        .await;
    let cached = ConnectorBuilder::new(raw)
        .with_cache(&CacheConfig::default())
        .build();

    let mandate = Mandate::builder()
        .with_connector(cached)
        .today(d(2021, 1, 1))
        .build()
        .unwrap();

    let req = SeriesRequest::new(UNRATE).unwrap();
    let first = mandate.series(&req).await.unwrap();
    let second = mandate
        .series(&req.clone().with_name("Unemployment Rate"))
        .await
        .unwrap();

    assert_eq!(first.values(), second.values());
    assert_eq!(second.name(), "Unemployment Rate");
    assert_eq!(ctrl.series_calls(UNRATE).await, 1);
}
