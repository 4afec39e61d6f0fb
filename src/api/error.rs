use crate::tracker::TrackerError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Tracker(#[from] TrackerError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Tracker(_) => StatusCode::SERVICE_UNAVAILABLE,
        };

        error!(status = %status, "❌ Request failed: {}", self);
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
