//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod dto;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::application::use_cases::{CheckReadinessUseCase, GetContributionsUseCase};
use crate::infrastructure::driven_adapters::config::AppConfig;
use handlers::{github, health, root};
use middleware::{cors_layer, request_id_middleware, ClientRateLimiter};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub get_contributions_use_case: Arc<GetContributionsUseCase>,
    pub check_readiness_use_case: Arc<CheckReadinessUseCase>,
    pub rate_limiter: Arc<ClientRateLimiter>,
}

/// Assemble every route with its middleware stack
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(root::router())
        .nest("/health", health::router())
        .nest("/github", github::router(state.rate_limiter.clone()))
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&state.config.cors))
        .with_state(state)
}
