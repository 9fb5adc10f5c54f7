use std::sync::Arc;

use mandate::{DatasetId, Mandate, MandateError};
use mandate_mock::{DynamicMockConnector, MockBehavior, MockConnector};

use crate::helpers::{SeriesOnly, monthly};

#[tokio::test]
async fn dataset_served_by_publishing_connector() {
    let series_only = Arc::new(SeriesOnly {
        name: "series-only",
        series: monthly("X", &[1.0]),
    });
    let mandate = Mandate::builder()
        .with_connector(series_only)
        .with_connector(Arc::new(MockConnector::new()))
        .build()
        .unwrap();

    let frame = mandate
        .dataset(DatasetId::CyclicalAcyclicalYoy)
        .await
        .unwrap();
    assert_eq!(frame.names(), vec!["Cyclical", "Acyclical"]);
    assert!(!frame.is_empty());
}

#[tokio::test]
async fn no_publisher_is_unsupported() {
    let mandate = Mandate::builder()
        .with_connector(Arc::new(SeriesOnly {
            name: "series-only",
            series: monthly("X", &[1.0]),
        }))
        .build()
        .unwrap();

    let err = mandate
        .dataset(DatasetId::CyclicalAcyclicalMom)
        .await
        .unwrap_err();
    assert_eq!(err, MandateError::unsupported("dataset"));
}

#[tokio::test]
async fn missing_dataset_is_not_found() {
    let (dynamic, ctrl) = DynamicMockConnector::new_with_controller("dyn");
    ctrl.set_dataset_behavior(
        DatasetId::CyclicalAcyclicalMom,
        MockBehavior::Fail(MandateError::not_found("https://example.test/chart_2.csv")),
    )
    .await;

    let mandate = Mandate::builder().with_connector(dynamic).build().unwrap();
    let err = mandate
        .dataset(DatasetId::CyclicalAcyclicalMom)
        .await
        .unwrap_err();
    assert_eq!(err, MandateError::not_found("dataset cyclical-acyclical-mom"));
}
