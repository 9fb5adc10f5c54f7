//! HTTP surface: the page shell, its stylesheet and the JSON API it calls.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Json, Router};
use mandate::Mandate;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::chart::Figure;
use crate::error::ApiError;
use crate::explorer::{self, ExplorerOptions, ExplorerQuery};
use crate::layout::{self, SectionId, TabEntry};
use crate::sections::{self, Section};

const INDEX_HTML: &str = include_str!("../assets/index.html");
const THEME_CSS: &str = include_str!("../assets/theme.css");

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub mandate: Arc<Mandate>,
}

impl AppState {
    #[must_use]
    pub fn new(mandate: Mandate) -> Self {
        Self {
            mandate: Arc::new(mandate),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/assets/theme.css", get(theme))
        .route("/health", get(|| async { "OK" }))
        .route("/api/tabs", get(tabs))
        .route("/api/sections/{tab}/{section}", get(section))
        .route("/api/explorer/options", get(explorer_options))
        .route("/api/explorer", get(explore))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn theme() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], THEME_CSS)
}

async fn tabs() -> Json<Vec<TabEntry>> {
    Json(layout::tabs())
}

async fn section(
    State(state): State<AppState>,
    Path((tab, section)): Path<(String, String)>,
) -> Result<Json<Section>, ApiError> {
    let id = SectionId::lookup(&tab, &section)
        .ok_or_else(|| ApiError::NotFound(format!("section {tab}/{section}")))?;
    Ok(Json(sections::render(&state.mandate, id).await?))
}

async fn explorer_options(State(state): State<AppState>) -> Json<ExplorerOptions> {
    Json(explorer::options(state.mandate.today()))
}

async fn explore(
    State(state): State<AppState>,
    query: Result<Query<ExplorerQuery>, QueryRejection>,
) -> Result<Json<Figure>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let req = query.resolve(state.mandate.today())?;
    Ok(Json(explorer::explore(&state.mandate, req).await?))
}
