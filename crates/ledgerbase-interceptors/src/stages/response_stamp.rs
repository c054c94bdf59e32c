use crate::context::{InterceptContext, ProtoRequest, ProtoResponse};
use crate::errors::InterceptError;
use crate::stages::{Stage, StageOutcome};
use async_trait::async_trait;

pub struct ResponseStampStage;

#[async_trait]
impl Stage for ResponseStampStage {
    async fn handle(
        &self,
        cx: &mut InterceptContext,
        _req: &mut dyn ProtoRequest,
        rsp: &mut dyn ProtoResponse,
    ) -> Result<StageOutcome, InterceptError> {
        rsp.insert_header("X-Request-Id", &cx.request_id);
        if let Some(correlation_id) = &cx.correlation_id {
            rsp.insert_header("X-Correlation-Id", correlation_id);
        }
        Ok(StageOutcome::Continue)
    }
}
