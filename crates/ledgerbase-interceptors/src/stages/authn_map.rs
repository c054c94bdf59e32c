use crate::context::{InterceptContext, ProtoRequest, ProtoResponse};
use crate::errors::InterceptError;
use crate::stages::{Stage, StageOutcome};
use async_trait::async_trait;
use ledgerbase_auth::prelude::{errors, Authenticator, Credential};
use std::sync::Arc;

pub const SESSION_COOKIE: &str = "ledger_session";

pub struct AuthnMapStage {
    pub authenticator: Arc<dyn Authenticator>,
}

#[async_trait]
impl Stage for AuthnMapStage {
    async fn handle(
        &self,
        cx: &mut InterceptContext,
        req: &mut dyn ProtoRequest,
        _rsp: &mut dyn ProtoResponse,
    ) -> Result<StageOutcome, InterceptError> {
        let Some(credential) = extract_credential(req) else {
            return Err(InterceptError::from_error(
                errors::missing_token().into_inner(),
            ));
        };
        cx.credential = Some(credential.clone());

        let principal = self
            .authenticator
            .authenticate(credential)
            .await
            .map_err(|e| InterceptError::from_error(e.into_inner()))?;
        cx.principal = Some(principal);
        Ok(StageOutcome::Continue)
    }
}

/// Bearer header first; the named session cookie is the fallback for
/// browser clients.
fn extract_credential(req: &dyn ProtoRequest) -> Option<Credential> {
    if let Some(authorization) = req.header("Authorization") {
        let token = authorization
            .strip_prefix("Bearer ")
            .unwrap_or(&authorization)
            .trim();
        if !token.is_empty() {
            return Some(Credential::Bearer(token.to_string()));
        }
    }

    let cookies = req.header("Cookie")?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE && !value.is_empty())
            .then(|| Credential::SessionCookie(value.to_string()))
    })
}
