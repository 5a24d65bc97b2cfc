//! Driving Adapters
//!
//! Entry points that drive the application:
//! - HTTP REST API handlers, middleware and response DTOs

pub mod api_rest;
