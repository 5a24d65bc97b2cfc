//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod clock;
pub mod contributions_gateway;
pub mod database_health;

pub use clock::Clock;
pub use contributions_gateway::{ContributionQuery, ContributionsGateway};
pub use database_health::DatabaseHealth;
