pub use crate::{
    id::{CorrelationId, PrincipalId, SessionId},
    money::UsdCents,
    principal::{AuthenticatedPrincipal, Role},
    tier::KycTier,
    time::Timestamp,
};
