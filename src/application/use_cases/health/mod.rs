//! Health Use Cases

mod check_readiness;

pub use check_readiness::CheckReadinessUseCase;
