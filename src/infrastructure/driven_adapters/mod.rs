//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Database
//! - Configuration
//! - External service clients

pub mod clock;
pub mod config;
pub mod database;
pub mod github;

pub use clock::SystemClock;
pub use config::AppConfig;
pub use database::Database;
pub use github::GitHubGraphQlClient;
