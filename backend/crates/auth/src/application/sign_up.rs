//! Sign Up Use Case
//!
//! Creates a new account when neither the user name nor the email is taken.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::account::NewAccount;
use crate::domain::repository::{AccountFilter, AccountRepository};
use crate::domain::value_object::{
    AccountId, email::Email, user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Sign up output
#[derive(Debug)]
pub struct SignUpOutput {
    pub account_id: AccountId,
}

/// Sign up use case
pub struct SignUpUseCase<R>
where
    R: AccountRepository,
{
    account_repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> SignUpUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(account_repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self {
            account_repo,
            config,
        }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        let username = UserName::new(&input.username).map_err(AuthError::Invalid)?;
        let email = Email::new(input.email).map_err(AuthError::Invalid)?;

        let filter = AccountFilter::UsernameOrEmail {
            username: &username,
            email: &email,
        };
        if self.account_repo.find_one(&filter).await?.is_some() {
            tracing::debug!(username = %username, "Signup rejected, account exists");
            return Err(AuthError::AccountExists);
        }

        // Password policy only once the account is known to be new
        let raw_password = RawPassword::new(input.password).map_err(AuthError::Invalid)?;
        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())?;
        drop(raw_password);

        let account = self
            .account_repo
            .insert(&NewAccount {
                username,
                email,
                password_hash,
            })
            .await?;

        tracing::info!(
            account_id = %account.account_id,
            username = %account.username,
            "Account signed up"
        );

        Ok(SignUpOutput {
            account_id: account.account_id,
        })
    }
}
