use ledgerbase_auth::prelude::GateAction;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouteRuleSpec {
    pub when: MatchCond,
    pub bind: RouteBindingSpec,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchCond {
    Http { method: String, path_glob: String },
}

/// Which rate-limit policy a route falls under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateClass {
    /// Sign-in and token endpoints: short strict window.
    Auth,
    General,
}

/// Where a route finds the owning principal of the addressed resource.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnerSource {
    Header(String),
    BodyField(String),
}

/// Everything the pipeline needs to police one route, declared next to the
/// route table rather than scattered through handlers.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouteBindingSpec {
    pub rate_class: RateClass,
    #[serde(default)]
    pub required_permission: Option<String>,
    #[serde(default)]
    pub owner_source: Option<OwnerSource>,
    #[serde(default)]
    pub action: Option<GateAction>,
    /// Read `amount` (minor units) from the JSON body for the tier check.
    #[serde(default)]
    pub amount_from_body: bool,
}
