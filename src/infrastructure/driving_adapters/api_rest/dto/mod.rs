//! Data Transfer Objects
//!
//! Response DTOs for the REST API.

pub mod contributions;
pub mod status;

pub use contributions::{ContributionDayDto, ContributionWeekDto, ContributionsResponseDto};
pub use status::{HealthResponseDto, MessageResponseDto};
