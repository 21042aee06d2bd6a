use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `"ok"` when the store answers, `"degraded"` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Connections currently held by the pool, idle or in use.
    pub db_connections: u32,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = state.store_reachable().await;
    if !db_healthy {
        tracing::warn!("Health check could not reach the project store");
    }

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        db_connections: state.pool.size(),
    })
}

/// Liveness route, mounted beside `/api` rather than under it.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
