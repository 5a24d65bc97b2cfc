//! Contributions Gateway
//!
//! Abstract trait defining the contract for fetching contribution activity
//! from the upstream code hosting service.

use async_trait::async_trait;

use crate::domain::models::contributions::{ContributionActivity, ContributionWindow};
use crate::shared::errors::GatewayError;

/// Parameters of a single contributions lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributionQuery {
    /// Account handle whose activity is requested
    pub username: String,
    pub window: ContributionWindow,
}

/// Gateway trait for upstream contribution lookups
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContributionsGateway: Send + Sync {
    /// Fetch contribution activity for the query, authenticating with `token`
    async fn fetch_activity(
        &self,
        token: &str,
        query: &ContributionQuery,
    ) -> Result<ContributionActivity, GatewayError>;
}
