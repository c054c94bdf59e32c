use crate::{kind::ErrorKind, retry::RetryClass, severity::Severity};
use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ErrorCode(pub &'static str);

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

impl<'de> Deserialize<'de> for ErrorCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(ErrorCode(Box::leak(s.into_boxed_str())))
    }
}

#[derive(Clone, Debug)]
pub struct CodeSpec {
    pub code: ErrorCode,
    pub kind: ErrorKind,
    pub http_status: u16,
    pub retryable: RetryClass,
    pub severity: Severity,
    pub default_user_msg: &'static str,
}

pub mod codes {
    use super::ErrorCode;

    pub const AUTH_MISSING_TOKEN: ErrorCode = ErrorCode("AUTH.MISSING_TOKEN");
    pub const AUTH_TOKEN_EXPIRED: ErrorCode = ErrorCode("AUTH.TOKEN_EXPIRED");
    pub const AUTH_TOKEN_INVALID: ErrorCode = ErrorCode("AUTH.TOKEN_INVALID");
    pub const AUTH_UNAUTHENTICATED: ErrorCode = ErrorCode("AUTH.UNAUTHENTICATED");
    pub const AUTH_PERMISSION_DENIED: ErrorCode = ErrorCode("AUTH.PERMISSION_DENIED");
    pub const QUOTA_RATELIMIT: ErrorCode = ErrorCode("QUOTA.RATE_LIMITED");
    pub const KYC_TIER_INSUFFICIENT: ErrorCode = ErrorCode("KYC.TIER_INSUFFICIENT");
    pub const SCHEMA_VALIDATION: ErrorCode = ErrorCode("SCHEMA.VALIDATION_FAILED");
    pub const CONFIG_INVALID: ErrorCode = ErrorCode("CONFIG.INVALID");
    pub const STORE_UNAVAILABLE: ErrorCode = ErrorCode("STORE.UNAVAILABLE");
    pub const UNKNOWN_INTERNAL: ErrorCode = ErrorCode("UNKNOWN.INTERNAL");
}

pub static REGISTRY: Lazy<HashMap<&'static str, CodeSpec>> = Lazy::new(|| {
    use codes::*;

    let mut map = HashMap::new();
    let mut add = |spec: CodeSpec| {
        let key = spec.code.0;
        if map.insert(key, spec).is_some() {
            panic!("duplicate error code: {}", key);
        }
    };

    add(CodeSpec {
        code: AUTH_MISSING_TOKEN,
        kind: ErrorKind::Auth,
        http_status: 401,
        retryable: RetryClass::Permanent,
        severity: Severity::Warn,
        default_user_msg: "Please sign in.",
    });

    add(CodeSpec {
        code: AUTH_TOKEN_EXPIRED,
        kind: ErrorKind::Auth,
        http_status: 401,
        retryable: RetryClass::Permanent,
        severity: Severity::Info,
        default_user_msg: "Your session has expired. Please sign in again.",
    });

    add(CodeSpec {
        code: AUTH_TOKEN_INVALID,
        kind: ErrorKind::Auth,
        http_status: 401,
        retryable: RetryClass::Permanent,
        severity: Severity::Warn,
        default_user_msg: "Your credentials could not be verified.",
    });

    add(CodeSpec {
        code: AUTH_UNAUTHENTICATED,
        kind: ErrorKind::Auth,
        http_status: 401,
        retryable: RetryClass::Permanent,
        severity: Severity::Warn,
        default_user_msg: "Please sign in.",
    });

    add(CodeSpec {
        code: AUTH_PERMISSION_DENIED,
        kind: ErrorKind::Auth,
        http_status: 403,
        retryable: RetryClass::Permanent,
        severity: Severity::Warn,
        default_user_msg: "You don't have permission to perform this action.",
    });

    add(CodeSpec {
        code: QUOTA_RATELIMIT,
        kind: ErrorKind::RateLimit,
        http_status: 429,
        retryable: RetryClass::Transient,
        severity: Severity::Warn,
        default_user_msg: "Too many requests. Please retry later.",
    });

    add(CodeSpec {
        code: KYC_TIER_INSUFFICIENT,
        kind: ErrorKind::PolicyDeny,
        http_status: 403,
        retryable: RetryClass::Permanent,
        severity: Severity::Warn,
        default_user_msg: "This action requires a higher verification level.",
    });

    add(CodeSpec {
        code: SCHEMA_VALIDATION,
        kind: ErrorKind::Schema,
        http_status: 422,
        retryable: RetryClass::Permanent,
        severity: Severity::Warn,
        default_user_msg: "Your request is invalid. Please check inputs.",
    });

    add(CodeSpec {
        code: CONFIG_INVALID,
        kind: ErrorKind::Config,
        http_status: 500,
        retryable: RetryClass::Permanent,
        severity: Severity::Critical,
        default_user_msg: "Service is misconfigured. Please contact support.",
    });

    add(CodeSpec {
        code: STORE_UNAVAILABLE,
        kind: ErrorKind::Storage,
        http_status: 503,
        retryable: RetryClass::Transient,
        severity: Severity::Error,
        default_user_msg: "A backend service is unavailable. Please retry later.",
    });

    add(CodeSpec {
        code: UNKNOWN_INTERNAL,
        kind: ErrorKind::Unknown,
        http_status: 500,
        retryable: RetryClass::Transient,
        severity: Severity::Critical,
        default_user_msg: "Internal error. Please retry later.",
    });

    map
});

pub fn spec_of(code: ErrorCode) -> &'static CodeSpec {
    REGISTRY.get(code.0).expect("unregistered ErrorCode")
}
