use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mandate::MandateError;
use serde_json::json;

/// Error returned by the HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Upstream(#[from] MandateError),
}

impl ApiError {
    /// Status code this error maps to.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(e) => match e {
                MandateError::NotFound { .. } => StatusCode::NOT_FOUND,
                MandateError::InvalidArg(_) => StatusCode::BAD_REQUEST,
                e if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
                _ => StatusCode::BAD_GATEWAY,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(target: "mandate::dashboard", status = status.as_u16(), "{self}");
        } else {
            tracing::debug!(target: "mandate::dashboard", status = status.as_u16(), "{self}");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
