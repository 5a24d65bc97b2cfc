//! Contribution Cache
//!
//! Single-slot, time-bounded cache for the contribution summary. The slot is
//! guarded by an async mutex that stays locked across a refresh, so
//! concurrent misses produce one upstream call.

use std::future::Future;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;

use crate::domain::models::contributions::Contributions;

/// Cached payload together with the instant it was captured
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub payload: Contributions,
    pub fetched_at: DateTime<Utc>,
}

impl CacheEntry {
    /// An entry is fresh while strictly younger than `ttl`
    #[must_use]
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.fetched_at < ttl
    }
}

/// Owned cache for the most recent contribution summary
#[derive(Debug)]
pub struct ContributionCache {
    ttl: Duration,
    slot: Mutex<Option<CacheEntry>>,
}

impl ContributionCache {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return the cached payload if fresh at `now`, otherwise run `refresh`.
    ///
    /// A successful refresh is stored with `fetched_at = now`. A failed
    /// refresh leaves the slot untouched and the error is returned; a stale
    /// payload is never served.
    pub async fn get_or_try_refresh<F, Fut, E>(
        &self,
        now: DateTime<Utc>,
        refresh: F,
    ) -> Result<Contributions, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Contributions, E>>,
    {
        let mut slot = self.slot.lock().await;

        if let Some(entry) = slot.as_ref().filter(|entry| entry.is_fresh(now, self.ttl)) {
            tracing::debug!(fetched_at = %entry.fetched_at, "Contribution cache hit");
            return Ok(entry.payload.clone());
        }

        tracing::debug!(stale = slot.is_some(), "Contribution cache miss");
        let payload = refresh().await?;
        *slot = Some(CacheEntry {
            payload: payload.clone(),
            fetched_at: now,
        });

        Ok(payload)
    }

    /// Snapshot of the current entry, fresh or not
    pub async fn peek(&self) -> Option<CacheEntry> {
        self.slot.lock().await.clone()
    }

    /// Replace the current entry
    pub async fn store(&self, payload: Contributions, fetched_at: DateTime<Utc>) {
        *self.slot.lock().await = Some(CacheEntry { payload, fetched_at });
    }
}
