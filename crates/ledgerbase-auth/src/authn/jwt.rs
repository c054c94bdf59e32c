use super::Authenticator;
use crate::config::{AuthnConfig, JwtAlgorithm};
use crate::errors::{self, AuthError};
use crate::model::Credential;
use jsonwebtoken::{errors::ErrorKind as JwtErrorKind, Algorithm, DecodingKey, Validation};
use ledgerbase_types::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Claims schema applied immediately after signature verification. A token
/// whose payload does not deserialize into this shape is invalid; no
/// loosely-typed claim bag travels past this point.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub permissions: Vec<String>,
    pub session_id: String,
    pub iat: i64,
    pub exp: i64,
    pub iss: String,
    pub aud: String,
}

impl TokenClaims {
    fn into_principal(self) -> Result<AuthenticatedPrincipal, AuthError> {
        if self.sub.is_empty() {
            return Err(errors::token_invalid("sub claim is empty"));
        }
        if self.session_id.is_empty() {
            return Err(errors::token_invalid("session_id claim is empty"));
        }
        Ok(AuthenticatedPrincipal {
            id: PrincipalId(self.sub),
            email: self.email,
            role: self.role,
            permissions: self.permissions.into_iter().collect::<BTreeSet<_>>(),
            session_id: SessionId(self.session_id),
            issued_at: Timestamp(self.iat * 1000),
            expires_at: Timestamp(self.exp * 1000),
        })
    }
}

pub struct JwtAuthenticator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtAuthenticator {
    pub fn new(config: &AuthnConfig) -> Result<Self, AuthError> {
        config.validate()?;

        let (algorithm, decoding_key) = match config.algorithm {
            JwtAlgorithm::Hs256 => {
                let secret = config
                    .shared_secret
                    .as_deref()
                    .ok_or_else(|| errors::config_invalid("HS256 requires a shared secret"))?;
                (Algorithm::HS256, DecodingKey::from_secret(secret.as_bytes()))
            }
            JwtAlgorithm::Rs256 => {
                let pem = config
                    .public_key_pem
                    .as_deref()
                    .ok_or_else(|| errors::config_invalid("RS256 requires a PEM public key"))?;
                let key = DecodingKey::from_rsa_pem(pem.as_bytes())
                    .map_err(|e| errors::config_invalid(&format!("bad RSA public key: {e}")))?;
                (Algorithm::RS256, key)
            }
        };

        let mut validation = Validation::new(algorithm);
        validation.leeway = 0;
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.set_required_spec_claims(&["exp", "iss", "aud"]);

        Ok(Self {
            decoding_key,
            validation,
        })
    }

    fn verify(&self, token: &str) -> Result<AuthenticatedPrincipal, AuthError> {
        let data = jsonwebtoken::decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map_err(map_jwt_error)?;
        data.claims.into_principal()
    }
}

#[async_trait::async_trait]
impl Authenticator for JwtAuthenticator {
    async fn authenticate(
        &self,
        credential: Credential,
    ) -> Result<AuthenticatedPrincipal, AuthError> {
        self.verify(credential.token())
    }
}

fn map_jwt_error(err: jsonwebtoken::errors::Error) -> AuthError {
    match err.kind() {
        JwtErrorKind::ExpiredSignature => errors::token_expired(),
        JwtErrorKind::InvalidToken
        | JwtErrorKind::InvalidSignature
        | JwtErrorKind::InvalidAlgorithm
        | JwtErrorKind::InvalidIssuer
        | JwtErrorKind::InvalidAudience
        | JwtErrorKind::ImmatureSignature
        | JwtErrorKind::MissingRequiredClaim(_)
        | JwtErrorKind::Base64(_)
        | JwtErrorKind::Json(_)
        | JwtErrorKind::Utf8(_) => errors::token_invalid(&err.to_string()),
        _ => errors::unauthenticated(&err.to_string()),
    }
}
