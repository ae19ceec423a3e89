//! Token Issuer Port
//!
//! The workflow hands a [`Claims`] payload to a [`TokenIssuer`] and returns
//! whatever opaque string comes back. Algorithm, secret and lifetime belong to
//! the issuer.

use serde::{Deserialize, Serialize};

use crate::domain::value_object::{AccountId, role_type::RoleType};
use crate::error::AuthResult;

/// Payload embedded in a session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub id: AccountId,
    pub email: String,
    pub username: String,
    pub roles: Vec<RoleType>,
}

/// Signs claims into a bearer token
pub trait TokenIssuer: Send + Sync {
    fn sign(&self, claims: &Claims) -> AuthResult<String>;
}
