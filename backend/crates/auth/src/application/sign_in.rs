//! Sign In Use Case
//!
//! Verifies a password and issues a signed session token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::issuer::TokenIssuer;
use crate::domain::repository::{AccountFilter, AccountRepository};
use crate::domain::value_object::{user_name::UserName, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub username: String,
    pub password: String,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    /// Signed bearer token
    pub token: String,
}

/// Sign in use case
pub struct SignInUseCase<R, T>
where
    R: AccountRepository,
    T: TokenIssuer,
{
    account_repo: Arc<R>,
    issuer: Arc<T>,
    config: Arc<AuthConfig>,
}

impl<R, T> SignInUseCase<R, T>
where
    R: AccountRepository,
    T: TokenIssuer,
{
    pub fn new(account_repo: Arc<R>, issuer: Arc<T>, config: Arc<AuthConfig>) -> Self {
        Self {
            account_repo,
            issuer,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        // A name that could never have been registered has no account
        let Ok(username) = UserName::new(&input.username) else {
            return Err(AuthError::AccountNotFound);
        };

        let account = self
            .account_repo
            .find_one(&AccountFilter::Username(&username))
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        let presented = RawPassword::presented(input.password);
        if !account.password_hash.verify(&presented, self.config.pepper()) {
            tracing::debug!(account_id = %account.account_id, "Password mismatch");
            return Err(AuthError::InvalidCredentials);
        }
        drop(presented);

        let token = self.issuer.sign(&account.claims())?;

        tracing::info!(account_id = %account.account_id, "Account signed in");

        Ok(SignInOutput { token })
    }
}
