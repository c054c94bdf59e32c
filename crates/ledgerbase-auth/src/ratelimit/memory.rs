use super::{RateDecision, RateLimitPolicy, RateLimitStore};
use crate::errors::AuthError;
use ledgerbase_types::prelude::Timestamp;
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};

/// In-process sliding-window store. Correct for a single-process
/// deployment only; horizontally scaled deployments must provide a
/// `RateLimitStore` backed by a shared counter.
#[derive(Default)]
pub struct MemoryRateLimitStore {
    windows: Mutex<HashMap<String, VecDeque<i64>>>,
}

impl MemoryRateLimitStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn check_at(&self, key: &str, policy: &RateLimitPolicy, now_ms: i64) -> RateDecision {
        let window_start = now_ms - policy.window_ms;
        let mut windows = self.windows.lock();
        let entries = windows.entry(key.to_string()).or_default();

        while entries.front().is_some_and(|&ts| ts <= window_start) {
            entries.pop_front();
        }

        if entries.len() >= policy.max_requests {
            // The slot frees up when the oldest retained hit ages out.
            let retry_after_ms = entries
                .front()
                .map(|&oldest| (oldest + policy.window_ms).saturating_sub(now_ms).max(1))
                .unwrap_or(policy.window_ms);
            return RateDecision::Limited { retry_after_ms };
        }

        entries.push_back(now_ms);
        RateDecision::Allowed
    }
}

#[async_trait::async_trait]
impl RateLimitStore for MemoryRateLimitStore {
    async fn check_and_consume(
        &self,
        key: &str,
        policy: &RateLimitPolicy,
        now: Timestamp,
    ) -> Result<RateDecision, AuthError> {
        Ok(self.check_at(key, policy, now.0))
    }
}
