use crate::errors::AuthError;
use crate::model::Credential;
use async_trait::async_trait;
use ledgerbase_types::prelude::AuthenticatedPrincipal;

#[cfg(feature = "authn-jwt")]
pub mod jwt;

#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(
        &self,
        credential: Credential,
    ) -> Result<AuthenticatedPrincipal, AuthError>;
}
