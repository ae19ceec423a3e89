//! Signed Bearer Tokens
//!
//! HS256-signed JWTs around an arbitrary claims payload. The signer adds the
//! registered `iat` and `exp` claims, so callers only describe their own
//! payload and the lifetime stays a property of the signer.

use std::time::Duration;

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

pub use jsonwebtoken::errors::Error as TokenError;

/// Claims payload plus the registered time claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registered<C> {
    #[serde(flatten)]
    pub claims: C,
    /// Issued-at (UTC Unix timestamp)
    pub iat: i64,
    /// Expiration (UTC Unix timestamp)
    pub exp: i64,
}

/// HS256 token signer and verifier sharing one secret
#[derive(Clone)]
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenSigner {
    pub fn hs256(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    /// Sign `claims`, stamping `iat = now` and `exp = now + ttl`
    pub fn sign<C: Serialize>(&self, claims: &C) -> Result<String, TokenError> {
        let now = chrono::Utc::now().timestamp();
        let ttl_secs = i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX);

        let registered = Registered {
            claims,
            iat: now,
            exp: now.saturating_add(ttl_secs),
        };

        encode(&Header::default(), &registered, &self.encoding)
    }

    /// Check signature and expiry, then return the payload with its time claims
    pub fn verify<C: DeserializeOwned>(&self, token: &str) -> Result<Registered<C>, TokenError> {
        // HS256, exp required and validated with the default 60s leeway
        let data = decode::<Registered<C>>(token, &self.decoding, &Validation::default())?;
        Ok(data.claims)
    }
}

impl std::fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSigner")
            .field("algorithm", &"HS256")
            .field("ttl", &self.ttl)
            .finish()
    }
}
