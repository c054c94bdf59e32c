use ledgerbase_types::prelude::*;
use serde::{Deserialize, Serialize};

/// Raw credential material pulled off a request. Both variants carry the
/// same signed token; they differ only in where the client put it.
#[derive(Clone, Debug)]
pub enum Credential {
    Bearer(String),
    SessionCookie(String),
}

impl Credential {
    pub fn token(&self) -> &str {
        match self {
            Credential::Bearer(token) | Credential::SessionCookie(token) => token,
        }
    }
}

/// Actions gated by KYC tier. The wire form matches the client API
/// (`"card-purchase"`, `"defi-invest"`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GateAction {
    Deposit,
    Withdraw,
    Transfer,
    CardPurchase,
    Swap,
    BridgeTransfer,
    DefiInvest,
    Loan,
}

impl GateAction {
    pub const fn as_str(self) -> &'static str {
        match self {
            GateAction::Deposit => "deposit",
            GateAction::Withdraw => "withdraw",
            GateAction::Transfer => "transfer",
            GateAction::CardPurchase => "card-purchase",
            GateAction::Swap => "swap",
            GateAction::BridgeTransfer => "bridge-transfer",
            GateAction::DefiInvest => "defi-invest",
            GateAction::Loan => "loan",
        }
    }
}

/// Outcome of a tier-gate check. Computed per call, never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionPermissionDecision {
    pub allowed: bool,
    /// Minimum tier that would permit the action. Present only on denial;
    /// `None` on denial means no tier permits this action at this amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_tier: Option<KycTier>,
}

impl ActionPermissionDecision {
    pub fn allow() -> Self {
        Self {
            allowed: true,
            suggested_tier: None,
        }
    }

    pub fn deny(suggested_tier: Option<KycTier>) -> Self {
        Self {
            allowed: false,
            suggested_tier,
        }
    }
}
