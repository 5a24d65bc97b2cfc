//! Root Handler

use axum::{routing::get, Json, Router};

use crate::infrastructure::driving_adapters::api_rest::dto::MessageResponseDto;
use crate::infrastructure::driving_adapters::api_rest::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(welcome))
}

/// GET / - Welcome message
async fn welcome() -> Json<MessageResponseDto> {
    Json(MessageResponseDto {
        message: "Welcome to the Portfolio API".to_string(),
    })
}
