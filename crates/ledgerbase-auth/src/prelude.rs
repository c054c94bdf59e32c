pub use crate::authn::Authenticator;
#[cfg(feature = "authn-jwt")]
pub use crate::authn::jwt::{JwtAuthenticator, TokenClaims};
pub use crate::config::{AuthnConfig, JwtAlgorithm};
pub use crate::errors::{self, AuthError};
pub use crate::guard::{
    has_permission, owns_resource, require_permission, require_resource_access,
    WILDCARD_PERMISSION,
};
pub use crate::model::{ActionPermissionDecision, Credential, GateAction};
#[cfg(feature = "ratelimit-memory")]
pub use crate::ratelimit::memory::MemoryRateLimitStore;
pub use crate::ratelimit::{RateDecision, RateLimitPolicy, RateLimitStore};
#[cfg(feature = "tier-memory")]
pub use crate::tier::memory::MemoryTierDirectory;
pub use crate::tier::{
    policy::{required_tier, tier_benefits, tier_requirements},
    TierDirectory, TierGate,
};
