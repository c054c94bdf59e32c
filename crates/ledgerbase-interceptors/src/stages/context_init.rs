use crate::context::{InterceptContext, ProtoRequest, ProtoResponse};
use crate::errors::InterceptError;
use crate::stages::{Stage, StageOutcome};
use async_trait::async_trait;

pub struct ContextInitStage;

#[async_trait]
impl Stage for ContextInitStage {
    async fn handle(
        &self,
        cx: &mut InterceptContext,
        req: &mut dyn ProtoRequest,
        _rsp: &mut dyn ProtoResponse,
    ) -> Result<StageOutcome, InterceptError> {
        cx.request_id = req
            .header("X-Request-Id")
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        cx.correlation_id = req.header("X-Correlation-Id");
        cx.client_ip = client_ip(req);
        Ok(StageOutcome::Continue)
    }
}

fn client_ip(req: &dyn ProtoRequest) -> Option<String> {
    if let Some(forwarded) = req.header("x-forwarded-for") {
        let first = forwarded.split(',').next().map(str::trim).unwrap_or("");
        if !first.is_empty() {
            return Some(first.to_string());
        }
    }
    req.header("x-real-ip")
        .map(|ip| ip.trim().to_string())
        .filter(|ip| !ip.is_empty())
}
