//! Contribution Use Cases
//!
//! Serving the GitHub contribution summary.

mod get_contributions;

pub use get_contributions::GetContributionsUseCase;
