use crate::dtos::HealthResponse;
use crate::startup::AppState;
use axum::{extract::State, Json};

/// Database liveness check. A failed ping degrades the body; it is never an
/// HTTP error.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    match state.store.ping().await {
        Ok(()) => Json(HealthResponse::healthy()),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            Json(HealthResponse::unhealthy())
        }
    }
}
