pub use crate::context::{InterceptContext, ProtoRequest, ProtoResponse};
pub use crate::errors::{to_http_response, InterceptError};
pub use crate::policy::dsl::RoutePolicy;
pub use crate::policy::model::{
    MatchCond, OwnerSource, RateClass, RouteBindingSpec, RouteRuleSpec,
};
pub use crate::stages::{
    authn_map::{AuthnMapStage, SESSION_COOKIE},
    context_init::ContextInitStage,
    rate_limit::RateLimitStage,
    resource_guard::ResourceGuardStage,
    response_stamp::ResponseStampStage,
    route_policy::RoutePolicyStage,
    tier_gate::TierGateStage,
    InterceptorChain, Stage, StageOutcome,
};
