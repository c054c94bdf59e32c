use crate::context::{InterceptContext, ProtoRequest, ProtoResponse};
use crate::errors::InterceptError;
use crate::policy::model::OwnerSource;
use crate::stages::{Stage, StageOutcome};
use async_trait::async_trait;
use ledgerbase_auth::prelude::{require_permission, require_resource_access};
use ledgerbase_errors::prelude::codes;
use ledgerbase_types::prelude::PrincipalId;

/// Permission and ownership checks per the route binding. Pure against the
/// principal; the only I/O is reading the body when the owner id lives
/// there.
pub struct ResourceGuardStage;

#[async_trait]
impl Stage for ResourceGuardStage {
    async fn handle(
        &self,
        cx: &mut InterceptContext,
        req: &mut dyn ProtoRequest,
        _rsp: &mut dyn ProtoResponse,
    ) -> Result<StageOutcome, InterceptError> {
        let principal = cx.principal.as_ref().ok_or_else(|| {
            InterceptError::from_public(codes::AUTH_UNAUTHENTICATED, "Please sign in.")
        })?;
        let Some(route) = cx.route.as_ref() else {
            return Err(InterceptError::deny_route("route not bound"));
        };

        if let Some(required) = route.required_permission.as_deref() {
            require_permission(principal, required)
                .map_err(|e| InterceptError::from_error(e.into_inner()))?;
        }

        if let Some(source) = route.owner_source.clone() {
            let owner = resolve_owner(&source, req).await?;
            require_resource_access(principal, &owner)
                .map_err(|e| InterceptError::from_error(e.into_inner()))?;
        }

        Ok(StageOutcome::Continue)
    }
}

async fn resolve_owner(
    source: &OwnerSource,
    req: &mut dyn ProtoRequest,
) -> Result<PrincipalId, InterceptError> {
    let owner = match source {
        OwnerSource::Header(name) => req.header(name),
        OwnerSource::BodyField(field) => req
            .read_json()
            .await?
            .get(field)
            .and_then(|v| v.as_str())
            .map(str::to_string),
    };

    match owner {
        Some(id) if !id.is_empty() => Ok(PrincipalId(id)),
        // An ownership-scoped route with no owner id is rejected, not waved
        // through.
        _ => Err(InterceptError::schema(
            "resource owner id missing from request",
        )),
    }
}
