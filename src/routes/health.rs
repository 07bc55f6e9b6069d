//! Health probe.

use axum::extract::State;
use axum::response::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub environment: String,
}

/// `GET /health` — liveness plus the configured deployment label.
pub async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(Health { status: "healthy", environment: state.environment.to_string() })
}
