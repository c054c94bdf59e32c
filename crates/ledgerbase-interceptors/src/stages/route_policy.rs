use crate::context::{InterceptContext, ProtoRequest, ProtoResponse};
use crate::errors::InterceptError;
use crate::policy::dsl::RoutePolicy;
use crate::stages::{Stage, StageOutcome};
use async_trait::async_trait;

pub struct RoutePolicyStage {
    pub policy: RoutePolicy,
}

#[async_trait]
impl Stage for RoutePolicyStage {
    async fn handle(
        &self,
        cx: &mut InterceptContext,
        req: &mut dyn ProtoRequest,
        _rsp: &mut dyn ProtoResponse,
    ) -> Result<StageOutcome, InterceptError> {
        let Some(rule) = self.policy.match_http(req.method(), req.path()) else {
            return Err(InterceptError::deny_route("route not declared"));
        };
        cx.route = Some(rule.bind.clone());
        Ok(StageOutcome::Continue)
    }
}
