//! Delay policy between retries

use crate::types::BackoffType;
use std::time::Duration;

/// How long to wait before retry number `attempt` (zero-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backoff {
    pub kind: BackoffType,
    pub initial: Duration,
    /// Upper bound on any single delay
    pub max: Duration,
}

impl Default for Backoff {
    fn default() -> Self {
        Self {
            kind: BackoffType::Exponential,
            initial: Duration::from_millis(100),
            max: Duration::from_secs(60),
        }
    }
}

impl Backoff {
    pub fn new(kind: BackoffType, initial: Duration, max: Duration) -> Self {
        Self { kind, initial, max }
    }

    /// Delay before the retry following failed attempt `attempt`
    pub fn delay(&self, attempt: u32) -> Duration {
        let delay = match self.kind {
            BackoffType::Constant => self.initial,
            BackoffType::Linear => self.initial.saturating_mul(attempt.saturating_add(1)),
            BackoffType::Exponential => self.initial.saturating_mul(2u32.saturating_pow(attempt)),
        };

        delay.min(self.max)
    }
}
