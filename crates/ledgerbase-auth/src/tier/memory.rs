use super::TierDirectory;
use crate::errors::AuthError;
use ledgerbase_types::prelude::{KycTier, PrincipalId};
use parking_lot::RwLock;
use std::collections::HashMap;

/// In-memory tier directory. Users without a record are unverified.
#[derive(Default)]
pub struct MemoryTierDirectory {
    tiers: RwLock<HashMap<PrincipalId, KycTier>>,
}

impl MemoryTierDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tier(self, user: PrincipalId, tier: KycTier) -> Self {
        self.tiers.write().insert(user, tier);
        self
    }

    pub fn set_tier(&self, user: PrincipalId, tier: KycTier) {
        self.tiers.write().insert(user, tier);
    }
}

#[async_trait::async_trait]
impl TierDirectory for MemoryTierDirectory {
    async fn tier_of(&self, user: &PrincipalId) -> Result<KycTier, AuthError> {
        Ok(self
            .tiers
            .read()
            .get(user)
            .copied()
            .unwrap_or(KycTier::Tier0))
    }
}
