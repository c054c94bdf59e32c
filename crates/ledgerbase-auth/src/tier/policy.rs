use crate::model::GateAction;
use ledgerbase_types::prelude::{KycTier, UsdCents};

/// Per-action compliance policy: a flat minimum tier, plus per-tier
/// transaction ceilings for monetary actions. Every threshold the API
/// enforces lives in this one table so the policy stays auditable.
pub struct ActionPolicy {
    pub action: GateAction,
    pub minimum_tier: KycTier,
    /// Ascending by tier. A tier with no entry cannot perform the action at
    /// any amount; a `None` ceiling is unlimited.
    pub ceilings: &'static [(KycTier, Option<UsdCents>)],
}

pub const ACTION_POLICIES: &[ActionPolicy] = &[
    ActionPolicy {
        action: GateAction::Deposit,
        minimum_tier: KycTier::Tier0,
        ceilings: &[
            (KycTier::Tier0, Some(UsdCents::from_dollars(1_000))),
            (KycTier::Tier1, Some(UsdCents::from_dollars(10_000))),
            (KycTier::Tier2, None),
            (KycTier::Tier3, None),
        ],
    },
    ActionPolicy {
        action: GateAction::Withdraw,
        minimum_tier: KycTier::Tier1,
        ceilings: &[
            (KycTier::Tier1, Some(UsdCents::from_dollars(1_000))),
            (KycTier::Tier2, Some(UsdCents::from_dollars(25_000))),
            (KycTier::Tier3, None),
        ],
    },
    ActionPolicy {
        action: GateAction::Transfer,
        minimum_tier: KycTier::Tier0,
        ceilings: &[
            (KycTier::Tier0, Some(UsdCents::from_dollars(500))),
            (KycTier::Tier1, Some(UsdCents::from_dollars(1_000))),
            (KycTier::Tier2, Some(UsdCents::from_dollars(50_000))),
            (KycTier::Tier3, None),
        ],
    },
    ActionPolicy {
        action: GateAction::CardPurchase,
        minimum_tier: KycTier::Tier1,
        ceilings: &[
            (KycTier::Tier1, Some(UsdCents::from_dollars(2_500))),
            (KycTier::Tier2, Some(UsdCents::from_dollars(10_000))),
            (KycTier::Tier3, Some(UsdCents::from_dollars(50_000))),
        ],
    },
    ActionPolicy {
        action: GateAction::Swap,
        minimum_tier: KycTier::Tier0,
        ceilings: &[
            (KycTier::Tier0, Some(UsdCents::from_dollars(1_000))),
            (KycTier::Tier1, Some(UsdCents::from_dollars(10_000))),
            (KycTier::Tier2, Some(UsdCents::from_dollars(100_000))),
            (KycTier::Tier3, None),
        ],
    },
    ActionPolicy {
        action: GateAction::BridgeTransfer,
        minimum_tier: KycTier::Tier1,
        ceilings: &[
            (KycTier::Tier1, Some(UsdCents::from_dollars(5_000))),
            (KycTier::Tier2, Some(UsdCents::from_dollars(100_000))),
            (KycTier::Tier3, None),
        ],
    },
    ActionPolicy {
        // Flat requirement only: no amount unlocks DeFi below full
        // verification.
        action: GateAction::DefiInvest,
        minimum_tier: KycTier::Tier2,
        ceilings: &[],
    },
    ActionPolicy {
        action: GateAction::Loan,
        minimum_tier: KycTier::Tier2,
        ceilings: &[
            (KycTier::Tier2, Some(UsdCents::from_dollars(50_000))),
            (KycTier::Tier3, Some(UsdCents::from_dollars(250_000))),
        ],
    },
];

pub fn policy_for(action: GateAction) -> &'static ActionPolicy {
    ACTION_POLICIES
        .iter()
        .find(|policy| policy.action == action)
        .expect("every GateAction has a policy entry")
}

/// Minimum tier that permits `action` at `amount`. When the action carries
/// a ceiling table and an amount is given, the stricter of the flat
/// requirement and the amount-derived requirement wins. `None` means no
/// tier permits this amount.
pub fn required_tier(action: GateAction, amount: Option<UsdCents>) -> Option<KycTier> {
    let policy = policy_for(action);
    let flat = policy.minimum_tier;

    let Some(amount) = amount else {
        return Some(flat);
    };
    if policy.ceilings.is_empty() {
        return Some(flat);
    }

    let amount_tier = policy
        .ceilings
        .iter()
        .find(|(_, ceiling)| ceiling.map_or(true, |c| c >= amount))
        .map(|(tier, _)| *tier)?;

    Some(flat.max(amount_tier))
}

pub fn tier_requirements(tier: KycTier) -> &'static [&'static str] {
    match tier {
        KycTier::Tier0 => &["Email address and account password"],
        KycTier::Tier1 => &[
            "Legal name and date of birth",
            "Residential address",
            "Government ID number",
        ],
        KycTier::Tier2 => &[
            "Government ID document scan",
            "Selfie liveness check",
        ],
        KycTier::Tier3 => &[
            "Proof of address (utility bill or bank statement)",
            "Source of funds declaration",
        ],
    }
}

pub fn tier_benefits(tier: KycTier) -> &'static [&'static str] {
    match tier {
        KycTier::Tier0 => &[
            "View balances and receive deposits",
            "Transfers and swaps at starter limits",
        ],
        KycTier::Tier1 => &[
            "Withdrawals and cross-chain bridging",
            "Virtual card purchases",
            "Raised transfer and swap limits",
        ],
        KycTier::Tier2 => &[
            "DeFi investing and loans",
            "Unlimited deposits",
            "High-value transfer limits",
        ],
        KycTier::Tier3 => &[
            "Unlimited transfers, swaps, and bridging",
            "Top card and loan ceilings",
        ],
    }
}
