use axum::extract::State;
use axum::{routing::get, Json, Router};
use gearshelf_core::types::Timestamp;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database is unreachable.
    pub status: &'static str,
    /// Time the check ran.
    pub timestamp: Timestamp,
    /// Whether the database answered a trivial query.
    pub db_healthy: bool,
}

/// GET /api/v1/healthcheck
async fn healthcheck(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = gearshelf_db::health_check(&state.pool).await.is_ok();
    if !db_healthy {
        tracing::warn!("Health check could not reach the database");
    }

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        timestamp: chrono::Utc::now(),
        db_healthy,
    })
}

/// Mount the health check route; nested under `/api/v1` with the rest.
pub fn router() -> Router<AppState> {
    Router::new().route("/healthcheck", get(healthcheck))
}
