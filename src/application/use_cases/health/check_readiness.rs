//! Check Readiness Use Case
//!
//! Verifies the database accepts sessions before traffic is routed here.

use std::sync::Arc;

use crate::domain::gateways::DatabaseHealth;
use crate::shared::errors::UseCaseError;

/// Use case for the readiness probe
pub struct CheckReadinessUseCase {
    database: Arc<dyn DatabaseHealth>,
}

impl CheckReadinessUseCase {
    #[must_use]
    pub fn new(database: Arc<dyn DatabaseHealth>) -> Self {
        Self { database }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if no session could be acquired.
    pub async fn execute(&self) -> Result<(), UseCaseError> {
        self.database.ping().await.map_err(|e| {
            tracing::warn!(error = %e, "Database readiness check failed");
            UseCaseError::from(e)
        })
    }
}
