//! PostgreSQL Repository Implementation
//!
//! Expects an `accounts` table with unique `username` and `email` columns and
//! `roles TEXT[]`. The schema itself is managed outside this crate.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::collections::BTreeSet;
use uuid::Uuid;

use crate::domain::entity::account::{Account, NewAccount};
use crate::domain::repository::{AccountFilter, AccountRepository};
use crate::domain::value_object::{
    AccountId, email::Email, role_type::RoleType, user_name::UserName,
    user_password::UserPassword,
};
use crate::error::{AuthError, AuthResult};

const SELECT_ACCOUNT: &str = r#"
    SELECT
        account_id,
        username,
        email,
        password_hash,
        roles,
        created_at
    FROM accounts
"#;

/// PostgreSQL-backed account repository
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl AccountRepository for PgAccountRepository {
    async fn find_one(&self, filter: &AccountFilter<'_>) -> AuthResult<Option<Account>> {
        let row = match filter {
            AccountFilter::Username(username) => {
                sqlx::query_as::<_, AccountRow>(&format!(
                    "{SELECT_ACCOUNT} WHERE username = $1 LIMIT 1"
                ))
                .bind(username.as_str())
                .fetch_optional(&self.pool)
                .await?
            }
            AccountFilter::UsernameOrEmail { username, email } => {
                sqlx::query_as::<_, AccountRow>(&format!(
                    "{SELECT_ACCOUNT} WHERE username = $1 OR email = $2 LIMIT 1"
                ))
                .bind(username.as_str())
                .bind(email.as_str())
                .fetch_optional(&self.pool)
                .await?
            }
        };

        row.map(AccountRow::into_account).transpose()
    }

    async fn insert(&self, account: &NewAccount) -> AuthResult<Account> {
        let account = Account::from_new(account.clone());
        let roles: Vec<&str> = account.roles.iter().map(|r| r.code()).collect();

        sqlx::query(
            r#"
            INSERT INTO accounts (
                account_id,
                username,
                email,
                password_hash,
                roles,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(account.account_id.as_uuid())
        .bind(account.username.as_str())
        .bind(account.email.as_str())
        .bind(account.password_hash.as_phc_string())
        .bind(roles.as_slice())
        .bind(account.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_insert_error)?;

        Ok(account)
    }
}

/// A unique index rejecting the row means another signup got there first
fn map_insert_error(err: sqlx::Error) -> AuthError {
    if matches!(&err, sqlx::Error::Database(db) if db.is_unique_violation()) {
        return AuthError::AccountExists;
    }
    AuthError::Database(err)
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct AccountRow {
    account_id: Uuid,
    username: String,
    email: String,
    password_hash: String,
    roles: Vec<String>,
    created_at: DateTime<Utc>,
}

impl AccountRow {
    fn into_account(self) -> AuthResult<Account> {
        let password_hash = UserPassword::from_phc_string(self.password_hash)
            .map_err(|e| AuthError::Internal(format!("Invalid password_hash: {}", e)))?;

        let roles = self
            .roles
            .iter()
            .map(|code| {
                RoleType::from_code(code)
                    .ok_or_else(|| AuthError::Internal(format!("Unknown role: {}", code)))
            })
            .collect::<AuthResult<BTreeSet<_>>>()?;

        Ok(Account {
            account_id: AccountId::from_uuid(self.account_id),
            username: UserName::from_db(self.username),
            email: Email::from_db(self.email),
            password_hash,
            roles,
            created_at: self.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_password::RawPassword;

    fn row(roles: &[&str]) -> AccountRow {
        let raw = RawPassword::presented("secret".to_string());
        AccountRow {
            account_id: Uuid::new_v4(),
            username: "alice".to_string(),
            email: "a@x.com".to_string(),
            password_hash: UserPassword::from_raw(&raw, None)
                .unwrap()
                .as_phc_string()
                .to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_row_into_account() {
        let account = row(&["USER", "ADMIN"]).into_account().unwrap();
        assert_eq!(account.username.as_str(), "alice");
        assert_eq!(
            account.roles,
            BTreeSet::from([RoleType::Admin, RoleType::User])
        );
    }

    #[test]
    fn test_row_with_unknown_role_is_internal() {
        let err = row(&["ROOT"]).into_account().unwrap_err();
        assert!(matches!(err, AuthError::Internal(_)));
    }

    #[test]
    fn test_row_with_bad_hash_is_internal() {
        let mut bad = row(&["USER"]);
        bad.password_hash = "plaintext".to_string();
        assert!(matches!(bad.into_account(), Err(AuthError::Internal(_))));
    }

    #[derive(Debug)]
    struct FakeDbError {
        unique: bool,
    }

    impl std::fmt::Display for FakeDbError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "database error (unique: {})", self.unique)
        }
    }

    impl std::error::Error for FakeDbError {}

    impl sqlx::error::DatabaseError for FakeDbError {
        fn message(&self) -> &str {
            "duplicate key value violates unique constraint"
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> sqlx::error::ErrorKind {
            if self.unique {
                sqlx::error::ErrorKind::UniqueViolation
            } else {
                sqlx::error::ErrorKind::Other
            }
        }
    }

    #[test]
    fn test_unique_violation_on_insert_is_account_exists() {
        let err = sqlx::Error::Database(Box::new(FakeDbError { unique: true }));
        assert!(matches!(map_insert_error(err), AuthError::AccountExists));
    }

    #[test]
    fn test_other_constraint_errors_stay_database_errors() {
        let err = sqlx::Error::Database(Box::new(FakeDbError { unique: false }));
        assert!(matches!(map_insert_error(err), AuthError::Database(_)));
    }

    #[test]
    fn test_non_unique_errors_stay_database_errors() {
        assert!(matches!(
            map_insert_error(sqlx::Error::RowNotFound),
            AuthError::Database(_)
        ));
    }
}
