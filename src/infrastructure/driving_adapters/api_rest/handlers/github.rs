//! GitHub Handlers
//!
//! HTTP handlers for the GitHub contributions proxy.
//! All endpoints are rate limited per client address.

use std::sync::Arc;

use axum::{extract::State, middleware, routing::get, Json, Router};

use crate::infrastructure::driving_adapters::api_rest::dto::ContributionsResponseDto;
use crate::infrastructure::driving_adapters::api_rest::middleware::rate_limit::{
    enforce_rate_limit, ClientRateLimiter,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for GitHub endpoints
///
/// The limiter runs as a route layer, so unknown paths do not spend quota.
pub fn router(rate_limiter: Arc<ClientRateLimiter>) -> Router<AppState> {
    Router::new()
        .route("/contributions", get(get_contributions))
        .route_layer(middleware::from_fn_with_state(rate_limiter, enforce_rate_limit))
}

/// GET /github/contributions - Contribution summary for the portfolio account
///
/// # Responses
///
/// * 200 OK - Contribution summary (cached for an hour)
/// * 429 Too Many Requests - Client exceeded its quota
/// * 502 Bad Gateway - GitHub request failed or returned errors
/// * 503 Service Unavailable - No GitHub token configured
#[axum::debug_handler]
async fn get_contributions(
    State(state): State<AppState>,
) -> Result<Json<ContributionsResponseDto>, ApiError> {
    let contributions = state.get_contributions_use_case.execute().await?;

    Ok(Json(ContributionsResponseDto::from(contributions)))
}
