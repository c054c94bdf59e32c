use crate::{
    id::{PrincipalId, SessionId},
    time::Timestamp,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

/// Identity decoded from a verified token. Built fresh on every request and
/// discarded with it; nothing here is ever written to durable storage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedPrincipal {
    pub id: PrincipalId,
    /// Display and logging only. Not a trust boundary.
    pub email: String,
    pub role: Role,
    /// Capability tags. The wildcard `"*"` grants everything.
    #[serde(default)]
    pub permissions: BTreeSet<String>,
    pub session_id: SessionId,
    pub issued_at: Timestamp,
    pub expires_at: Timestamp,
}

impl AuthenticatedPrincipal {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
