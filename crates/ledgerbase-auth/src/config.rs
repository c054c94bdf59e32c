use crate::errors::{self, AuthError};

pub const ENV_PREFIX: &str = "LEDGER_AUTH";

const DEFAULT_TOKEN_TTL_SECS: u64 = 900;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JwtAlgorithm {
    /// Symmetric HMAC-SHA256; requires a shared secret.
    Hs256,
    /// Asymmetric RSA-SHA256; requires a PEM public key.
    Rs256,
}

impl JwtAlgorithm {
    fn parse(value: &str) -> Result<Self, AuthError> {
        match value.to_ascii_uppercase().as_str() {
            "HS256" => Ok(JwtAlgorithm::Hs256),
            "RS256" => Ok(JwtAlgorithm::Rs256),
            other => Err(errors::config_invalid(&format!(
                "unsupported signing algorithm: {other}"
            ))),
        }
    }
}

/// Token verification settings, read once at process start. Construction
/// fails when the chosen algorithm's key material is absent, so a
/// misconfigured deployment refuses to serve rather than silently skipping
/// verification.
#[derive(Clone, Debug)]
pub struct AuthnConfig {
    pub algorithm: JwtAlgorithm,
    pub shared_secret: Option<String>,
    pub public_key_pem: Option<String>,
    pub issuer: String,
    pub audience: String,
    pub token_ttl_secs: u64,
}

impl AuthnConfig {
    pub fn new(
        algorithm: JwtAlgorithm,
        shared_secret: Option<String>,
        public_key_pem: Option<String>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
    ) -> Result<Self, AuthError> {
        let config = Self {
            algorithm,
            shared_secret,
            public_key_pem,
            issuer: issuer.into(),
            audience: audience.into(),
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load from `LEDGER_AUTH_*` environment variables:
    /// `ALGORITHM`, `SECRET`, `PUBLIC_KEY_PEM`, `ISSUER`, `AUDIENCE`,
    /// `TOKEN_TTL_SECS`.
    pub fn from_env() -> Result<Self, AuthError> {
        let algorithm = JwtAlgorithm::parse(&require_var("ALGORITHM")?)?;
        let config = Self {
            algorithm,
            shared_secret: read_var("SECRET"),
            public_key_pem: read_var("PUBLIC_KEY_PEM"),
            issuer: require_var("ISSUER")?,
            audience: require_var("AUDIENCE")?,
            token_ttl_secs: read_var("TOKEN_TTL_SECS")
                .map(|raw| {
                    raw.parse::<u64>().map_err(|_| {
                        errors::config_invalid(&format!("TOKEN_TTL_SECS is not an integer: {raw}"))
                    })
                })
                .transpose()?
                .unwrap_or(DEFAULT_TOKEN_TTL_SECS),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AuthError> {
        match self.algorithm {
            JwtAlgorithm::Hs256 => {
                let secret = self
                    .shared_secret
                    .as_deref()
                    .ok_or_else(|| errors::config_invalid("HS256 requires a shared secret"))?;
                if secret.len() < 32 {
                    return Err(errors::config_invalid(
                        "HS256 shared secret must be at least 32 bytes",
                    ));
                }
            }
            JwtAlgorithm::Rs256 => {
                if self.public_key_pem.as_deref().map_or(true, str::is_empty) {
                    return Err(errors::config_invalid("RS256 requires a PEM public key"));
                }
            }
        }
        if self.issuer.is_empty() {
            return Err(errors::config_invalid("issuer must not be empty"));
        }
        if self.audience.is_empty() {
            return Err(errors::config_invalid("audience must not be empty"));
        }
        Ok(())
    }
}

fn read_var(suffix: &str) -> Option<String> {
    std::env::var(format!("{ENV_PREFIX}_{suffix}"))
        .ok()
        .filter(|value| !value.is_empty())
}

fn require_var(suffix: &str) -> Result<String, AuthError> {
    read_var(suffix)
        .ok_or_else(|| errors::config_invalid(&format!("{ENV_PREFIX}_{suffix} is not set")))
}
