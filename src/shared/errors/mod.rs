//! Error Types
//!
//! Layered error types with proper HTTP status code mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Gateway-level errors for failures talking to upstream services
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Upstream transport error: {0}")]
    Transport(String),

    #[error("Upstream responded with status {0}")]
    Status(u16),

    #[error("Upstream API error: {0}")]
    Api(String),

    #[error("Unexpected upstream payload: {0}")]
    Decode(String),
}

/// Repository-level errors for data access failures
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("GitHub integration is not configured")]
    NotConfigured,

    #[error("Failed to fetch GitHub data: {0}")]
    UpstreamFetch(#[source] GatewayError),

    #[error("GitHub API returned an error: {0}")]
    UpstreamApi(#[source] GatewayError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl From<GatewayError> for UseCaseError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Transport(_) | GatewayError::Status(_) => Self::UpstreamFetch(err),
            GatewayError::Api(_) | GatewayError::Decode(_) => Self::UpstreamApi(err),
        }
    }
}

impl UseCaseError {
    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotConfigured | Self::Repository(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::UpstreamFetch(_) | Self::UpstreamApi(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Client-facing message; never carries upstream or database internals
    #[must_use]
    pub fn detail(&self) -> &'static str {
        match self {
            Self::NotConfigured => "GitHub integration is not configured",
            Self::UpstreamFetch(_) => "Failed to fetch GitHub data",
            Self::UpstreamApi(_) => "GitHub API returned an error",
            Self::Repository(_) => "Database unavailable",
        }
    }
}

/// API error response for HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Error response body structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            ApiError::UseCase(uc_error) => (uc_error.status_code(), uc_error.detail()),
            ApiError::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                "Rate limit exceeded. Try again later.",
            ),
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "Unhandled error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        };

        let body = ErrorResponse {
            detail: detail.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
