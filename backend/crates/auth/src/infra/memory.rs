//! In-Process Repository Implementation
//!
//! Account store for tests and local development. Lookup and the uniqueness
//! check share one lock with the insert, so concurrent signups for the same
//! name cannot both succeed.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entity::account::{Account, NewAccount};
use crate::domain::repository::{AccountFilter, AccountRepository};
use crate::domain::value_object::{
    AccountId, email::Email, user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// In-memory account repository. Clones share the same accounts.
#[derive(Clone, Default)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<AccountId, Account>>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts
    pub async fn count(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn get(&self, account_id: AccountId) -> Option<Account> {
        self.accounts.read().await.get(&account_id).cloned()
    }

    /// Insert an account directly. The password policy is not applied, so
    /// fixtures may use short passwords.
    pub async fn seed(
        &self,
        username: &str,
        email: &str,
        password: &str,
        pepper: Option<&[u8]>,
    ) -> AuthResult<Account> {
        let raw = RawPassword::presented(password.to_string());
        let new_account = NewAccount {
            username: UserName::new(username).map_err(AuthError::Invalid)?,
            email: Email::new(email).map_err(AuthError::Invalid)?,
            password_hash: UserPassword::from_raw(&raw, pepper)?,
        };
        self.insert(&new_account).await
    }
}

impl AccountRepository for InMemoryAccountRepository {
    async fn find_one(&self, filter: &AccountFilter<'_>) -> AuthResult<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|a| filter.matches(a)).cloned())
    }

    async fn insert(&self, account: &NewAccount) -> AuthResult<Account> {
        let mut accounts = self.accounts.write().await;

        let filter = AccountFilter::UsernameOrEmail {
            username: &account.username,
            email: &account.email,
        };
        if accounts.values().any(|a| filter.matches(a)) {
            return Err(AuthError::AccountExists);
        }

        let account = Account::from_new(account.clone());
        accounts.insert(account.account_id, account.clone());

        tracing::debug!(account_id = %account.account_id, "Account stored in memory");

        Ok(account)
    }
}
