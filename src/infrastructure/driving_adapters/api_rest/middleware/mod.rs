//! API Middleware
//!
//! Request tagging, rate limiting and CORS for the REST API.

pub mod cors;
pub mod rate_limit;
pub mod request_id;

pub use cors::cors_layer;
pub use rate_limit::{enforce_rate_limit, ClientRateLimiter};
pub use request_id::{request_id_middleware, request_id_of, RequestId};
