use crate::context::{InterceptContext, ProtoRequest, ProtoResponse};
use crate::errors::InterceptError;
use crate::stages::{Stage, StageOutcome};
use async_trait::async_trait;
use ledgerbase_auth::prelude::TierGate;
use ledgerbase_errors::prelude::codes;
use ledgerbase_types::prelude::UsdCents;
use std::sync::Arc;

pub struct TierGateStage {
    pub gate: Arc<TierGate>,
}

#[async_trait]
impl Stage for TierGateStage {
    async fn handle(
        &self,
        cx: &mut InterceptContext,
        req: &mut dyn ProtoRequest,
        _rsp: &mut dyn ProtoResponse,
    ) -> Result<StageOutcome, InterceptError> {
        let Some(route) = cx.route.as_ref() else {
            return Ok(StageOutcome::Continue);
        };
        let Some(action) = route.action else {
            return Ok(StageOutcome::Continue);
        };
        let principal = cx.principal.as_ref().ok_or_else(|| {
            InterceptError::from_public(codes::AUTH_UNAUTHENTICATED, "Please sign in.")
        })?;

        let amount = if route.amount_from_body {
            Some(read_amount(req).await?)
        } else {
            None
        };

        self.gate
            .require(&principal.id, action, amount)
            .await
            .map_err(|e| InterceptError::from_error(e.into_inner()))?;
        Ok(StageOutcome::Continue)
    }
}

/// Monetary routes must state their amount in minor units; anything else is
/// rejected before the policy is consulted.
async fn read_amount(req: &mut dyn ProtoRequest) -> Result<UsdCents, InterceptError> {
    let body = req.read_json().await?;
    body.get("amount")
        .and_then(|v| v.as_u64())
        .map(UsdCents)
        .ok_or_else(|| InterceptError::schema("amount must be a non-negative integer of cents"))
}
