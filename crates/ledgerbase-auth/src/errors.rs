use ledgerbase_errors::prelude::*;
use ledgerbase_types::prelude::{KycTier, PrincipalId};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{0:?}")]
pub struct AuthError(pub ErrorObj);

impl AuthError {
    pub fn into_inner(self) -> ErrorObj {
        self.0
    }

    pub fn code(&self) -> ErrorCode {
        self.0.code
    }
}

pub fn missing_token() -> AuthError {
    AuthError(
        ErrorBuilder::new(codes::AUTH_MISSING_TOKEN)
            .dev_msg("no bearer header and no session cookie")
            .build(),
    )
}

pub fn token_expired() -> AuthError {
    AuthError(ErrorBuilder::new(codes::AUTH_TOKEN_EXPIRED).build())
}

pub fn token_invalid(msg: &str) -> AuthError {
    AuthError(
        ErrorBuilder::new(codes::AUTH_TOKEN_INVALID)
            .dev_msg(msg)
            .build(),
    )
}

pub fn unauthenticated(msg: &str) -> AuthError {
    AuthError(
        ErrorBuilder::new(codes::AUTH_UNAUTHENTICATED)
            .dev_msg(msg)
            .build(),
    )
}

pub fn permission_denied(required: &str) -> AuthError {
    AuthError(
        ErrorBuilder::new(codes::AUTH_PERMISSION_DENIED)
            .dev_msg(format!("missing permission: {required}"))
            .meta_kv("required_permission", serde_json::json!(required))
            .build(),
    )
}

pub fn resource_denied(owner: &PrincipalId) -> AuthError {
    AuthError(
        ErrorBuilder::new(codes::AUTH_PERMISSION_DENIED)
            .dev_msg("principal does not own the requested resource")
            .meta_kv("resource_owner", serde_json::json!(owner.0))
            .build(),
    )
}

pub fn rate_limited(retry_after_ms: i64) -> AuthError {
    AuthError(
        ErrorBuilder::new(codes::QUOTA_RATELIMIT)
            .meta_kv("retry_after_ms", serde_json::json!(retry_after_ms))
            .build(),
    )
}

pub fn tier_insufficient(current: KycTier, suggested: Option<KycTier>) -> AuthError {
    let mut builder = ErrorBuilder::new(codes::KYC_TIER_INSUFFICIENT)
        .meta_kv("current_tier", serde_json::json!(current));
    if let Some(tier) = suggested {
        builder = builder.meta_kv("suggested_tier", serde_json::json!(tier));
    }
    AuthError(builder.build())
}

pub fn config_invalid(msg: &str) -> AuthError {
    AuthError(
        ErrorBuilder::new(codes::CONFIG_INVALID)
            .dev_msg(msg)
            .build(),
    )
}

pub fn store_unavailable(msg: &str) -> AuthError {
    AuthError(
        ErrorBuilder::new(codes::STORE_UNAVAILABLE)
            .dev_msg(msg)
            .build(),
    )
}
