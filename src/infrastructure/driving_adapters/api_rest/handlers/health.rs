//! Health Handlers
//!
//! Liveness and readiness probes.

use axum::{extract::State, routing::get, Json, Router};

use crate::infrastructure::driving_adapters::api_rest::dto::HealthResponseDto;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for health endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(liveness))
        .route("/ready", get(readiness))
}

/// GET /health - Liveness probe
///
/// Always answers while the process is serving requests.
async fn liveness() -> Json<HealthResponseDto> {
    Json(HealthResponseDto { status: "healthy" })
}

/// GET /health/ready - Readiness probe
///
/// # Responses
///
/// * 200 OK - Database session acquired
/// * 503 Service Unavailable - Database unreachable
#[axum::debug_handler]
async fn readiness(State(state): State<AppState>) -> Result<Json<HealthResponseDto>, ApiError> {
    state.check_readiness_use_case.execute().await?;
    Ok(Json(HealthResponseDto { status: "ready" }))
}
