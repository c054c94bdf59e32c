use crate::errors::AuthError;
use async_trait::async_trait;
use ledgerbase_types::prelude::Timestamp;

#[cfg(feature = "ratelimit-memory")]
pub mod memory;

/// Trailing-window admission policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimitPolicy {
    pub window_ms: i64,
    pub max_requests: usize,
}

impl RateLimitPolicy {
    /// Short strict window for sign-in and token endpoints, to blunt
    /// credential stuffing.
    pub const fn auth_endpoints() -> Self {
        Self {
            window_ms: 60_000,
            max_requests: 10,
        }
    }

    pub const fn general_api() -> Self {
        Self {
            window_ms: 60_000,
            max_requests: 60,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RateDecision {
    Allowed,
    Limited { retry_after_ms: i64 },
}

/// Admission control keyed by client identity. `now` is supplied by the
/// caller so stores stay deterministic under test.
#[async_trait]
pub trait RateLimitStore: Send + Sync {
    async fn check_and_consume(
        &self,
        key: &str,
        policy: &RateLimitPolicy,
        now: Timestamp,
    ) -> Result<RateDecision, AuthError>;
}
