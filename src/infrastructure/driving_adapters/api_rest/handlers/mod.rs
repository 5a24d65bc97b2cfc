//! HTTP Handlers
//!
//! One module per route group.

pub mod github;
pub mod health;
pub mod root;
