pub mod authn;
pub mod config;
pub mod errors;
pub mod guard;
pub mod model;
pub mod prelude;
pub mod ratelimit;
pub mod tier;

use ledgerbase_types::prelude::*;
use prelude::*;
use std::sync::Arc;
use tracing::warn;

/// One sensitive request, described protocol-free. HTTP handlers build this
/// from the route binding; jobs and internal callers build it directly.
#[derive(Clone, Debug)]
pub struct AccessRequest {
    /// Rate-limit key: user id when known, else best-effort client ip.
    pub client_key: String,
    pub credential: Option<Credential>,
    pub required_permission: Option<String>,
    pub resource_owner: Option<PrincipalId>,
    pub action: Option<GateAction>,
    pub amount: Option<UsdCents>,
}

/// The request-authorization pipeline, composed once at process start and
/// handed to every handler. Checks run in declared order: rate limit,
/// authentication, permission/ownership guards, KYC tier gate.
pub struct AuthPipeline {
    pub rate_limiter: Box<dyn RateLimitStore>,
    pub rate_policy: RateLimitPolicy,
    pub authenticator: Box<dyn Authenticator>,
    pub tier_gate: TierGate,
}

impl AuthPipeline {
    pub fn new(
        authenticator: Box<dyn Authenticator>,
        rate_limiter: Box<dyn RateLimitStore>,
        rate_policy: RateLimitPolicy,
        tier_gate: TierGate,
    ) -> Self {
        Self {
            rate_limiter,
            rate_policy,
            authenticator,
            tier_gate,
        }
    }

    /// Memory-backed stores, general API rate policy. Suitable for tests
    /// and single-process embedding.
    #[cfg(all(feature = "ratelimit-memory", feature = "tier-memory"))]
    pub fn with_memory_stores(authenticator: Box<dyn Authenticator>) -> Self {
        Self::new(
            authenticator,
            Box::new(MemoryRateLimitStore::new()),
            RateLimitPolicy::general_api(),
            TierGate::new(Arc::new(MemoryTierDirectory::new())),
        )
    }

    pub async fn authorize(
        &self,
        request: AccessRequest,
    ) -> Result<AuthenticatedPrincipal, AuthError> {
        let now = Timestamp(chrono::Utc::now().timestamp_millis());

        // Admission control runs before any credential work so that burst
        // traffic cannot buy signature verification for free. A failing
        // store admits the request (availability over enforcement); the
        // warn log is the audit trail for that trade-off.
        match self
            .rate_limiter
            .check_and_consume(&request.client_key, &self.rate_policy, now)
            .await
        {
            Ok(RateDecision::Allowed) => {}
            Ok(RateDecision::Limited { retry_after_ms }) => {
                return Err(errors::rate_limited(retry_after_ms));
            }
            Err(err) => {
                warn!(key = %request.client_key, error = %err, "rate limit store failed; admitting request");
            }
        }

        let credential = request.credential.ok_or_else(errors::missing_token)?;
        let principal = self.authenticator.authenticate(credential).await?;

        if let Some(required) = request.required_permission.as_deref() {
            guard::require_permission(&principal, required)?;
        }
        if let Some(owner) = request.resource_owner.as_ref() {
            guard::require_resource_access(&principal, owner)?;
        }

        if let Some(action) = request.action {
            self.tier_gate
                .require(&principal.id, action, request.amount)
                .await?;
        }

        Ok(principal)
    }
}
