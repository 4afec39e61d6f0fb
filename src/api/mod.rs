mod error;
mod handlers;

use crate::tracker::TrackerHandle;
use axum::Router;
use axum::routing::get;
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

#[derive(Clone, Debug)]
pub struct AppState {
    tracker: TrackerHandle,
}

/// The map page, its assets under `/static` and the JSON API under `/api`.
pub fn router(tracker: TrackerHandle, static_dir: impl AsRef<Path>) -> Router {
    let static_dir = static_dir.as_ref();

    Router::new()
        .route("/api/current-position", get(handlers::current_position))
        .route("/api/position-history", get(handlers::position_history))
        .route("/api/tracker-status", get(handlers::tracker_status))
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { tracker })
}
