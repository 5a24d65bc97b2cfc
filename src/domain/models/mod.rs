//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod contributions;

pub use contributions::{
    account_age, ActivityDay, ContributionActivity, ContributionDay, ContributionLevel,
    ContributionWeek, ContributionWindow, Contributions,
};
