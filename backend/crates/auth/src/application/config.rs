//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use base64::{Engine, engine::general_purpose::STANDARD};
use thiserror::Error;

/// Minimum decoded length of the token signing secret
pub const MIN_SECRET_LEN: usize = 32;

/// Token lifetime when `JWT_EXPIRES_IN_SECS` is unset
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(3600);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("JWT_SECRET is not set")]
    MissingSecret,

    #[error("JWT_SECRET is not valid base64")]
    InvalidSecret,

    #[error("JWT_SECRET must decode to at least {min} bytes, got {actual}")]
    SecretTooShort { min: usize, actual: usize },

    #[error("JWT_EXPIRES_IN_SECS must be a positive integer")]
    InvalidTtl,

    #[error("PASSWORD_PEPPER is not valid base64")]
    InvalidPepper,
}

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HS256 signing secret for session tokens
    pub jwt_secret: Vec<u8>,
    /// Session token lifetime (`exp - iat`)
    pub token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: Vec::new(),
            token_ttl: DEFAULT_TOKEN_TTL,
            password_pepper: None,
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl AuthConfig {
    /// Create config with a random signing secret
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = vec![0u8; MIN_SECRET_LEN];
        rand::rng().fill_bytes(&mut secret);
        Self {
            jwt_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development. Tokens do not survive a restart.
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    /// Read `JWT_SECRET`, `JWT_EXPIRES_IN_SECS` and `PASSWORD_PEPPER` from
    /// the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build config from any variable source
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let secret = var("JWT_SECRET")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::MissingSecret)?;
        let jwt_secret = STANDARD
            .decode(secret.trim())
            .map_err(|_| ConfigError::InvalidSecret)?;
        if jwt_secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::SecretTooShort {
                min: MIN_SECRET_LEN,
                actual: jwt_secret.len(),
            });
        }

        let token_ttl = match var("JWT_EXPIRES_IN_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTtl),
            },
            None => DEFAULT_TOKEN_TTL,
        };

        let password_pepper = var("PASSWORD_PEPPER")
            .filter(|s| !s.trim().is_empty())
            .map(|p| STANDARD.decode(p.trim()).map_err(|_| ConfigError::InvalidPepper))
            .transpose()?;

        Ok(Self {
            jwt_secret,
            token_ttl,
            password_pepper,
        })
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
