//! Repository Traits
//!
//! The credential store the workflow runs against. Implementations live in
//! the infrastructure layer.

use crate::domain::entity::account::{Account, NewAccount};
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::AuthResult;

/// Which account(s) a lookup matches
#[derive(Debug, Clone, Copy)]
pub enum AccountFilter<'a> {
    /// Exactly this user name
    Username(&'a UserName),
    /// This user name, or this email, or both
    UsernameOrEmail {
        username: &'a UserName,
        email: &'a Email,
    },
}

impl AccountFilter<'_> {
    pub fn matches(&self, account: &Account) -> bool {
        match self {
            AccountFilter::Username(username) => account.username == **username,
            AccountFilter::UsernameOrEmail { username, email } => {
                account.username == **username || account.email == **email
            }
        }
    }
}

/// Account repository trait
#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// First account matching `filter`
    async fn find_one(&self, filter: &AccountFilter<'_>) -> AuthResult<Option<Account>>;

    /// Persist a new account and return it with id and default roles
    /// assigned. A username or email already taken fails with
    /// `AuthError::AccountExists`, even when a concurrent insert won the race.
    async fn insert(&self, account: &NewAccount) -> AuthResult<Account>;
}
