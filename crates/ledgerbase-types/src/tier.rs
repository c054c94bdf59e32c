use serde::{Deserialize, Serialize};

/// KYC verification levels, totally ordered. A principal's effective tier
/// only moves up except via explicit administrative downgrade.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum KycTier {
    Tier0,
    Tier1,
    Tier2,
    Tier3,
}

impl KycTier {
    pub const ALL: [KycTier; 4] = [
        KycTier::Tier0,
        KycTier::Tier1,
        KycTier::Tier2,
        KycTier::Tier3,
    ];

    pub const fn display_name(self) -> &'static str {
        match self {
            KycTier::Tier0 => "Unverified",
            KycTier::Tier1 => "Basic Verification",
            KycTier::Tier2 => "Full Verification",
            KycTier::Tier3 => "Enhanced Verification",
        }
    }

    /// Next tier up, if any. Used to route a denied user to the right
    /// verification step.
    pub const fn next(self) -> Option<KycTier> {
        match self {
            KycTier::Tier0 => Some(KycTier::Tier1),
            KycTier::Tier1 => Some(KycTier::Tier2),
            KycTier::Tier2 => Some(KycTier::Tier3),
            KycTier::Tier3 => None,
        }
    }
}
