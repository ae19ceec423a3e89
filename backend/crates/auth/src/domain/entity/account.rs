//! Account Entity
//!
//! A persisted identity: login handle, contact email, password hash and roles.
//! Accounts are created once at signup and only read afterwards.

use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

use crate::domain::issuer::Claims;
use crate::domain::value_object::{
    AccountId, email::Email, role_type::RoleType, user_name::UserName,
    user_password::UserPassword,
};

#[derive(Debug, Clone)]
pub struct Account {
    /// System-assigned identifier
    pub account_id: AccountId,
    /// Unique login handle
    pub username: UserName,
    /// Unique, lowercased
    pub email: Email,
    /// Argon2id PHC string, never plaintext
    pub password_hash: UserPassword,
    pub roles: BTreeSet<RoleType>,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Materialize a new account with the default role
    pub fn from_new(new_account: NewAccount) -> Self {
        Self {
            account_id: AccountId::new(),
            username: new_account.username,
            email: new_account.email,
            password_hash: new_account.password_hash,
            roles: BTreeSet::from([RoleType::default()]),
            created_at: Utc::now(),
        }
    }

    /// Token payload describing this account
    pub fn claims(&self) -> Claims {
        Claims {
            id: self.account_id,
            email: self.email.as_str().to_string(),
            username: self.username.as_str().to_string(),
            roles: self.roles.iter().copied().collect(),
        }
    }
}

/// Everything signup decides; the store fills in id, roles and timestamps.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: UserName,
    pub email: Email,
    pub password_hash: UserPassword,
}
