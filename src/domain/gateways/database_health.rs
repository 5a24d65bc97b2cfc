//! Database Health Gateway

use async_trait::async_trait;

use crate::shared::errors::RepositoryError;

/// Reports whether the relational database is reachable
#[async_trait]
pub trait DatabaseHealth: Send + Sync {
    /// Acquire a session and run a trivial statement
    async fn ping(&self) -> Result<(), RepositoryError>;
}
