//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod contributions;
pub mod health;

pub use contributions::GetContributionsUseCase;
pub use health::CheckReadinessUseCase;
