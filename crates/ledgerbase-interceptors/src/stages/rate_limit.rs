use crate::context::{InterceptContext, ProtoRequest, ProtoResponse};
use crate::errors::InterceptError;
use crate::policy::model::RateClass;
use crate::stages::{write_error, Stage, StageOutcome};
use async_trait::async_trait;
use ledgerbase_auth::prelude::{errors, RateDecision, RateLimitPolicy, RateLimitStore};
use ledgerbase_types::prelude::Timestamp;
use std::sync::Arc;
use tracing::warn;

/// Admission control ahead of everything else in the chain. Token
/// verification never runs for a request this stage rejects.
pub struct RateLimitStage {
    pub store: Arc<dyn RateLimitStore>,
    pub auth_policy: RateLimitPolicy,
    pub general_policy: RateLimitPolicy,
}

impl RateLimitStage {
    pub fn new(store: Arc<dyn RateLimitStore>) -> Self {
        Self {
            store,
            auth_policy: RateLimitPolicy::auth_endpoints(),
            general_policy: RateLimitPolicy::general_api(),
        }
    }
}

#[async_trait]
impl Stage for RateLimitStage {
    async fn handle(
        &self,
        cx: &mut InterceptContext,
        _req: &mut dyn ProtoRequest,
        rsp: &mut dyn ProtoResponse,
    ) -> Result<StageOutcome, InterceptError> {
        let rate_class = cx
            .route
            .as_ref()
            .map(|route| route.rate_class)
            .unwrap_or(RateClass::General);
        let policy = match rate_class {
            RateClass::Auth => self.auth_policy,
            RateClass::General => self.general_policy,
        };

        // The principal is not known yet, so the key is the client address.
        let key = format!("ip:{}", cx.client_ip.as_deref().unwrap_or("unknown"));
        let now = Timestamp(chrono::Utc::now().timestamp_millis());

        match self.store.check_and_consume(&key, &policy, now).await {
            Ok(RateDecision::Allowed) => Ok(StageOutcome::Continue),
            Ok(RateDecision::Limited { retry_after_ms }) => {
                let retry_after_secs = (retry_after_ms + 999) / 1000;
                rsp.insert_header("Retry-After", &retry_after_secs.to_string());
                write_error(
                    rsp,
                    InterceptError::from_error(errors::rate_limited(retry_after_ms).into_inner()),
                )
                .await
            }
            Err(err) => {
                // Availability over enforcement: a broken limiter store
                // admits traffic instead of taking the API down.
                warn!(%key, error = %err, "rate limit store failed; admitting request");
                Ok(StageOutcome::Continue)
            }
        }
    }
}
