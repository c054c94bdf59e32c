use crate::errors::{self, AuthError};
use ledgerbase_types::prelude::*;

pub const WILDCARD_PERMISSION: &str = "*";

/// Direct membership, the wildcard, or the admin role.
pub fn has_permission(principal: &AuthenticatedPrincipal, required: &str) -> bool {
    principal.is_admin()
        || principal.permissions.contains(WILDCARD_PERMISSION)
        || principal.permissions.contains(required)
}

/// Owner-or-admin. Email and permissions never factor into ownership.
pub fn owns_resource(principal: &AuthenticatedPrincipal, owner: &PrincipalId) -> bool {
    principal.is_admin() || &principal.id == owner
}

pub fn require_permission(
    principal: &AuthenticatedPrincipal,
    required: &str,
) -> Result<(), AuthError> {
    if has_permission(principal, required) {
        Ok(())
    } else {
        Err(errors::permission_denied(required))
    }
}

pub fn require_resource_access(
    principal: &AuthenticatedPrincipal,
    owner: &PrincipalId,
) -> Result<(), AuthError> {
    if owns_resource(principal, owner) {
        Ok(())
    } else {
        Err(errors::resource_denied(owner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn principal(role: Role, permissions: &[&str]) -> AuthenticatedPrincipal {
        AuthenticatedPrincipal {
            id: PrincipalId("user_1".into()),
            email: "user@example.com".into(),
            role,
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
            session_id: SessionId("sess_1".into()),
            issued_at: Timestamp(0),
            expires_at: Timestamp(0),
        }
    }

    #[test]
    fn wildcard_grants_everything() {
        let p = principal(Role::User, &["*"]);
        assert!(has_permission(&p, "cards:issue"));
    }

    #[test]
    fn admin_bypasses_permission_and_ownership() {
        let p = principal(Role::Admin, &[]);
        assert!(has_permission(&p, "cards:issue"));
        assert!(owns_resource(&p, &PrincipalId("someone_else".into())));
    }

    #[test]
    fn owner_passes_with_empty_permissions() {
        let p = principal(Role::User, &[]);
        assert!(owns_resource(&p, &PrincipalId("user_1".into())));
        assert_eq!(p.permissions, BTreeSet::new());
    }

    #[test]
    fn non_owner_is_denied_with_diagnostics() {
        let p = principal(Role::User, &["transfers:write"]);
        let err = require_resource_access(&p, &PrincipalId("user_2".into()))
            .expect_err("must deny");
        assert_eq!(err.0.code.0, "AUTH.PERMISSION_DENIED");
        assert_eq!(err.0.meta.get("resource_owner").unwrap(), "user_2");
    }
}
