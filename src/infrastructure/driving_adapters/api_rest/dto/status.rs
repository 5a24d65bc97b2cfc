//! Status DTOs

use serde::Serialize;

/// Plain message body
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponseDto {
    pub message: String,
}

/// Health probe body
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponseDto {
    pub status: &'static str,
}
