//! Portfolio API
//!
//! Backend for a personal portfolio site: a welcome endpoint, health probes
//! and a cached, rate-limited proxy for GitHub contribution data, following
//! Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
