//! Health check endpoints

use axum::{extract::State, Json};

use crate::dto::HealthResponse;
use crate::state::AppState;

/// Heartbeat, answered without touching the store
pub async fn ping() -> &'static str {
    "."
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let available = state.warps.is_available().await;

    Json(HealthResponse {
        status: if available { "healthy" } else { "degraded" }.to_string(),
        version: state.version.clone(),
        store: if available { "available" } else { "unavailable" }.to_string(),
    })
}
