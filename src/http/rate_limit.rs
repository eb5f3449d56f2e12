//! Request budget
//!
//! A governor token bucket shared by every request of a client. Scryfall asks
//! for roughly ten requests per second with no bursts, which is the default.

use governor::clock::DefaultClock;
use governor::middleware::NoOpMiddleware;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as Governor};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

type DirectLimiter = Governor<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>;

/// Rate limiter settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimiterConfig {
    pub requests_per_second: u32,
    /// Requests allowed back to back before spacing kicks in
    pub burst_size: u32,
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self::new(10, 1)
    }
}

impl RateLimiterConfig {
    pub fn new(requests_per_second: u32, burst_size: u32) -> Self {
        Self {
            requests_per_second,
            burst_size,
        }
    }

    /// Governor quota; zero values are raised to one
    fn quota(&self) -> Quota {
        let rate = NonZeroU32::new(self.requests_per_second).unwrap_or(NonZeroU32::MIN);
        let burst = NonZeroU32::new(self.burst_size).unwrap_or(NonZeroU32::MIN);
        Quota::per_second(rate).allow_burst(burst)
    }
}

/// Token bucket spacing page requests
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<DirectLimiter>,
    quota: Quota,
}

impl RateLimiter {
    pub fn new(config: &RateLimiterConfig) -> Self {
        let quota = config.quota();
        Self {
            limiter: Arc::new(Governor::direct(quota)),
            quota,
        }
    }

    /// Wait for the next request slot
    pub async fn wait(&self) {
        self.limiter.until_ready().await;
    }

    /// Minimum gap between two requests once the burst is spent
    pub fn interval(&self) -> Duration {
        self.quota.replenish_interval()
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("interval", &self.interval())
            .finish_non_exhaustive()
    }
}
