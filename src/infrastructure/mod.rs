//! Infrastructure Layer
//!
//! Contains all external concerns: driving adapters (HTTP handlers) and
//! driven adapters (database, GitHub client, clock).

pub mod driven_adapters;
pub mod driving_adapters;
