use crate::errors::{self, AuthError};
use crate::model::{ActionPermissionDecision, GateAction};
use async_trait::async_trait;
use ledgerbase_types::prelude::*;
use std::sync::Arc;

#[cfg(feature = "tier-memory")]
pub mod memory;
pub mod policy;

/// Read seam onto the user/KYC record store. Backed by the relational user
/// store in production; the memory directory serves tests and embedding.
#[async_trait]
pub trait TierDirectory: Send + Sync {
    async fn tier_of(&self, user: &PrincipalId) -> Result<KycTier, AuthError>;
}

pub struct TierGate {
    directory: Arc<dyn TierDirectory>,
}

impl TierGate {
    pub fn new(directory: Arc<dyn TierDirectory>) -> Self {
        Self { directory }
    }

    pub async fn user_tier(&self, user: &PrincipalId) -> Result<KycTier, AuthError> {
        self.directory.tier_of(user).await
    }

    /// Pure decision against a known tier.
    pub fn evaluate(
        current: KycTier,
        action: GateAction,
        amount: Option<UsdCents>,
    ) -> ActionPermissionDecision {
        match policy::required_tier(action, amount) {
            Some(required) if current >= required => ActionPermissionDecision::allow(),
            Some(required) => ActionPermissionDecision::deny(Some(required)),
            // No tier covers this amount at all.
            None => ActionPermissionDecision::deny(None),
        }
    }

    /// Tier lookup failures propagate: an unreachable KYC store denies the
    /// action rather than waving it through.
    pub async fn can_perform(
        &self,
        user: &PrincipalId,
        action: GateAction,
        amount: Option<UsdCents>,
    ) -> Result<ActionPermissionDecision, AuthError> {
        let current = self.directory.tier_of(user).await?;
        Ok(Self::evaluate(current, action, amount))
    }

    pub async fn require(
        &self,
        user: &PrincipalId,
        action: GateAction,
        amount: Option<UsdCents>,
    ) -> Result<(), AuthError> {
        let current = self.directory.tier_of(user).await?;
        let decision = Self::evaluate(current, action, amount);
        if decision.allowed {
            Ok(())
        } else {
            Err(errors::tier_insufficient(current, decision.suggested_tier))
        }
    }
}
