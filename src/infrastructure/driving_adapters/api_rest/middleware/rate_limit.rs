//! Rate Limiting Middleware
//!
//! Fixed per-client quota. A client's window opens on its first request and
//! the count resets once the window has elapsed.

use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::NonZeroU32;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::request_id::request_id_of;
use crate::infrastructure::driven_adapters::config::RateLimitConfig;
use crate::shared::errors::ApiError;

/// Requests seen from one client in its current window
#[derive(Debug, Clone, Copy)]
struct WindowCounter {
    count: u32,
    window_start: Instant,
}

impl WindowCounter {
    fn is_expired(&self, now: Instant, window: Duration) -> bool {
        now.saturating_duration_since(self.window_start) >= window
    }
}

/// Request quota keyed by client IP address
pub struct ClientRateLimiter {
    requests: u32,
    window: Duration,
    counters: Mutex<HashMap<IpAddr, WindowCounter>>,
}

impl ClientRateLimiter {
    /// Allow `requests` per client within each `window`
    #[must_use]
    pub fn new(requests: NonZeroU32, window: Duration) -> Self {
        Self {
            requests: requests.get(),
            window,
            counters: Mutex::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn from_config(config: &RateLimitConfig) -> Self {
        let requests = NonZeroU32::new(config.requests).unwrap_or(NonZeroU32::MIN);
        Self::new(requests, Duration::from_secs(config.period_secs))
    }

    /// Record a request from `client`; `false` once its quota is spent
    #[must_use]
    pub fn check(&self, client: IpAddr) -> bool {
        self.check_at(client, Instant::now())
    }

    /// Record a request from `client` arriving at `now`
    #[must_use]
    pub fn check_at(&self, client: IpAddr, now: Instant) -> bool {
        let mut counters = self.counters();

        let counter = counters.entry(client).or_insert(WindowCounter {
            count: 0,
            window_start: now,
        });

        if counter.is_expired(now, self.window) {
            *counter = WindowCounter {
                count: 0,
                window_start: now,
            };
        }

        if counter.count >= self.requests {
            return false;
        }

        counter.count += 1;
        true
    }

    /// Drop clients whose window has elapsed
    pub fn purge_idle(&self) {
        self.purge_idle_at(Instant::now());
    }

    pub fn purge_idle_at(&self, now: Instant) {
        let window = self.window;
        let mut counters = self.counters();
        counters.retain(|_, counter| !counter.is_expired(now, window));
        counters.shrink_to_fit();
    }

    /// Number of clients currently tracked
    #[must_use]
    pub fn tracked_clients(&self) -> usize {
        self.counters().len()
    }

    // A panic mid-update leaves at worst one stale counter.
    fn counters(&self) -> MutexGuard<'_, HashMap<IpAddr, WindowCounter>> {
        self.counters.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Peer address of the connection, when the server was started with connect info
fn client_ip(request: &Request) -> IpAddr {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED), |ConnectInfo(addr)| addr.ip())
}

/// Middleware rejecting requests over the client's quota with 429
pub async fn enforce_rate_limit(
    State(limiter): State<Arc<ClientRateLimiter>>,
    request: Request,
    next: Next,
) -> Response {
    let client = client_ip(&request);

    if !limiter.check(client) {
        tracing::warn!(
            client = %client,
            path = %request.uri().path(),
            request_id = request_id_of(&request).unwrap_or("-"),
            "Rate limit exceeded"
        );
        return ApiError::RateLimited.into_response();
    }

    next.run(request).await
}
