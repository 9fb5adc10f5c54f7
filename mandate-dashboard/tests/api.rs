use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::NaiveDate;
use clap::Parser;
use mandate::{Mandate, MandateConnector, MandateError};
use mandate_dashboard::{AppState, Args, create_router};
use mandate_mock::{DynamicMockConnector, MockBehavior};
use serde_json::Value;
use tower::ServiceExt;

fn mock_app() -> Router {
    let args =
        Args::try_parse_from(["mandate-dashboard", "--mock", "--today", "2024-12-31"]).unwrap();
    create_router(AppState::new(args.build_mandate().unwrap()))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let res = app
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn health_and_shell_are_served() {
    let res = mock_app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = mock_app()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let html = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&html).contains("The Dual Mandate Monitor"));
}

#[tokio::test]
async fn tabs_list_both_branches() {
    let (status, body) = get(mock_app(), "/api/tabs").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["title"], "Employment");
    assert_eq!(body[1]["sections"][2]["path"], "inflation/pce");
}

#[tokio::test]
async fn general_section_renders_two_charts() {
    let (status, body) = get(mock_app(), "/api/sections/employment/general").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "employment/general");
    let row = body["rows"][0].as_array().unwrap();
    assert_eq!(row[0]["header"], "Employment Growth");
    assert_eq!(row[1]["header"], "Unemployment Rate");
    assert!(row[1]["subheader"].as_str().unwrap().starts_with("Ranking: "));
    assert_eq!(row[0]["figure"]["layout"]["template"], "simple_white");
}

#[tokio::test]
async fn pce_section_uses_both_datasets() {
    let (status, body) = get(mock_app(), "/api/sections/inflation/pce").await;
    assert_eq!(status, StatusCode::OK);
    let row = body["rows"][0].as_array().unwrap();
    assert_eq!(row[0]["figure"]["data"][0]["name"], "Cyclical");
    assert_eq!(row[1]["figure"]["layout"]["barmode"], "stack");
}

#[tokio::test]
async fn unknown_section_is_404_json() {
    let (status, body) = get(mock_app(), "/api/sections/employment/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not found: section employment/nope");
}

#[tokio::test]
async fn explorer_smooths_within_window() {
    let (status, body) = get(
        mock_app(),
        "/api/explorer?series=labour-demand&start=2010-01-01&ma=3",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["x"][0], "2010-03-01");
    assert_eq!(body["layout"]["yaxis"]["title"]["text"], "Labour Demand");
    assert_eq!(body["layout"]["height"], 400);
}

#[tokio::test]
async fn explorer_rejects_bad_queries() {
    let (status, body) = get(mock_app(), "/api/explorer?ma=4").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("moving average"));

    let (status, body) = get(mock_app(), "/api/explorer?series=bogus").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn explorer_options_reflect_today() {
    let (status, body) = get(mock_app(), "/api/explorer/options").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["min_date"], "1980-01-01");
    assert_eq!(body["max_date"], "2024-12-31");
    assert_eq!(body["series"].as_array().unwrap().len(), 7);
}

fn dynamic_app(conn: Arc<dyn MandateConnector>) -> Router {
    let mandate = Mandate::builder()
        .with_connector(conn)
        .provider_timeout(Duration::from_millis(50))
        .today(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap())
        .build()
        .unwrap();
    create_router(AppState::new(mandate))
}

#[tokio::test]
async fn upstream_failure_is_502_and_hang_is_504() {
    let (conn, ctl) = DynamicMockConnector::new_with_controller("dyn");
    ctl.set_series_behavior(
        "JTSJOL",
        MockBehavior::Fail(MandateError::connector("dyn", "upstream 500")),
    )
    .await;
    ctl.set_series_behavior("CCSA", MockBehavior::Hang).await;
    let app = dynamic_app(conn);

    let (status, body) = get(app.clone(), "/api/explorer?series=job-openings").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "dyn failed: upstream 500");

    let (status, _) = get(app, "/api/explorer?series=continued-claims").await;
    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
}
