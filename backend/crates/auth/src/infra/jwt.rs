//! JWT Token Issuer
//!
//! HS256 session tokens via `platform::token`.

use platform::token::TokenSigner;

use crate::application::config::AuthConfig;
use crate::domain::issuer::{Claims, TokenIssuer};
use crate::error::AuthResult;

#[derive(Debug, Clone)]
pub struct JwtTokenIssuer {
    signer: TokenSigner,
}

impl JwtTokenIssuer {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            signer: TokenSigner::hs256(&config.jwt_secret, config.token_ttl),
        }
    }

    /// Check signature and expiry and return the embedded claims
    pub fn verify(&self, token: &str) -> AuthResult<Claims> {
        Ok(self.signer.verify::<Claims>(token)?.claims)
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn sign(&self, claims: &Claims) -> AuthResult<String> {
        Ok(self.signer.sign(claims)?)
    }
}
