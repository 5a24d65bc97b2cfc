//! Application Layer
//!
//! Contains use cases that orchestrate business logic.
//! Use cases depend on domain gateways (abstractions), not concrete implementations.

pub mod contribution_cache;
pub mod use_cases;

pub use contribution_cache::{CacheEntry, ContributionCache};
