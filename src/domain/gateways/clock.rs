//! Clock Gateway
//!
//! Source of the current instant, injectable so cache expiry can be tested.

use chrono::{DateTime, Utc};

/// Provides the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
