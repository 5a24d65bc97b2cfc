//! Get Contributions Use Case
//!
//! Serves the contribution summary for the configured account, refreshing it
//! from the upstream service at most once per cache TTL.

use std::sync::Arc;

use crate::application::contribution_cache::ContributionCache;
use crate::domain::gateways::{Clock, ContributionQuery, ContributionsGateway};
use crate::domain::models::contributions::{ContributionWindow, Contributions};
use crate::shared::errors::UseCaseError;
use crate::shared::secret::SecretToken;

/// Use case for fetching the (cached) contribution summary
pub struct GetContributionsUseCase {
    gateway: Arc<dyn ContributionsGateway>,
    clock: Arc<dyn Clock>,
    cache: Arc<ContributionCache>,
    token: Option<SecretToken>,
    username: String,
}

impl GetContributionsUseCase {
    /// Create a new GetContributionsUseCase
    #[must_use]
    pub fn new(
        gateway: Arc<dyn ContributionsGateway>,
        clock: Arc<dyn Clock>,
        cache: Arc<ContributionCache>,
        token: Option<SecretToken>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            gateway,
            clock,
            cache,
            token,
            username: username.into(),
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotConfigured` if no upstream token is set; no
    /// network call is made in that case.
    /// Returns `UseCaseError::UpstreamFetch` on transport failures or non-success statuses.
    /// Returns `UseCaseError::UpstreamApi` if the upstream payload reports errors.
    pub async fn execute(&self) -> Result<Contributions, UseCaseError> {
        let Some(token) = self.token.as_ref().filter(|token| !token.is_blank()) else {
            tracing::warn!("GitHub token missing, contributions unavailable");
            return Err(UseCaseError::NotConfigured);
        };

        let now = self.clock.now();

        self.cache
            .get_or_try_refresh(now, || async move {
                let query = ContributionQuery {
                    username: self.username.clone(),
                    window: ContributionWindow::last_month(now),
                };
                tracing::debug!(
                    username = %query.username,
                    from = %query.window.from,
                    to = %query.window.to,
                    "Fetching contributions from upstream"
                );

                let activity = self
                    .gateway
                    .fetch_activity(token.expose(), &query)
                    .await
                    .map_err(|e| {
                        tracing::warn!(error = %e, "Contribution fetch failed");
                        UseCaseError::from(e)
                    })?;

                let contributions = Contributions::from_activity(activity, now);
                tracing::info!(
                    total = contributions.total_contributions,
                    weeks = contributions.weeks.len(),
                    "Contribution cache refreshed"
                );
                Ok::<_, UseCaseError>(contributions)
            })
            .await
    }
}
