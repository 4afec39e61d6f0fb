use crate::api::AppState;
use crate::api::error::ApiError;
use crate::domain::{HistoryPoint, PositionRecord, TrackerStatus};
use axum::Json;
use axum::extract::State;
use tracing::{debug, instrument};

/// GET /api/current-position
#[instrument(skip_all)]
pub async fn current_position(State(state): State<AppState>) -> Result<Json<PositionRecord>, ApiError> {
    let position = state.tracker.current_position().await?;
    debug!(lat = position.latitude, lon = position.longitude, "Serving current position");
    Ok(Json(position))
}

/// GET /api/position-history
#[instrument(skip_all)]
pub async fn position_history(State(state): State<AppState>) -> Result<Json<Vec<HistoryPoint>>, ApiError> {
    Ok(Json(state.tracker.position_history().await?))
}

/// GET /api/tracker-status
#[instrument(skip_all)]
pub async fn tracker_status(State(state): State<AppState>) -> Result<Json<TrackerStatus>, ApiError> {
    Ok(Json(state.tracker.status().await?))
}
