// src/error.rs
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unsupported Content-Type. This route only accepts application/json")]
    UnsupportedMediaType,

    #[error("Invalid JSON request: {0}")]
    BadRequest(String),

    #[error("{0} is not set")]
    MissingConfig(&'static str),

    #[error("Langflow API responded with status {0}")]
    UpstreamStatus(u16),

    #[error("Invalid response structure from Langflow")]
    UpstreamShape,

    #[error("http: {0}")]
    Http(#[from] reqwest::Error),
}

impl AppError {
    // Only the content-type check gets its own status; validation and
    // upstream failures all share a 500, which is what the frontend's
    // generic error handling expects.
    fn status(&self) -> StatusCode {
        match self {
            AppError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("error in /api/chat route: {self}");
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
