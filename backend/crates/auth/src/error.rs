//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::password::PasswordHashError;
use platform::token::TokenError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Signup with a username or email that is already registered.
    /// Which of the two collided is deliberately not reported.
    #[error("username or email already exist")]
    AccountExists,

    /// Signin with a username that has no account
    #[error("user does not exist")]
    AccountNotFound,

    /// Signin with the wrong password
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Rejected input (user name, email or password policy)
    #[error("{}", .0.message())]
    Invalid(AppError),

    #[error("Password hash error: {0}")]
    PasswordHash(#[from] PasswordHashError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::AccountExists => ErrorKind::Conflict,
            AuthError::AccountNotFound => ErrorKind::NotFound,
            AuthError::InvalidCredentials => ErrorKind::Unauthorized,
            AuthError::Invalid(err) => err.kind(),
            AuthError::PasswordHash(_)
            | AuthError::Token(_)
            | AuthError::Database(_)
            | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Convert to AppError. Server-side details stay in `source` only.
    pub fn into_app_error(self) -> AppError {
        match self {
            AuthError::AccountExists | AuthError::AccountNotFound | AuthError::InvalidCredentials => {
                AppError::new(self.kind(), self.to_string())
            }
            AuthError::Invalid(err) => err,
            AuthError::Database(err) => AppError::from(err),
            AuthError::PasswordHash(err) => AppError::internal("Password processing failed").with_source(err),
            AuthError::Token(err) => AppError::internal("Failed to issue session token").with_source(err),
            AuthError::Internal(_) => AppError::internal("Internal error"),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        if self.kind().is_server_error() {
            tracing::error!(error = %self, "Auth server error");
            return;
        }
        match self {
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid signin attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workflow_errors_map_to_statuses() {
        assert_eq!(AuthError::AccountExists.status_code(), StatusCode::CONFLICT);
        assert_eq!(AuthError::AccountNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AuthError::InvalidCredentials.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_messages() {
        assert_eq!(AuthError::AccountExists.to_string(), "username or email already exist");
        assert_eq!(AuthError::AccountNotFound.to_string(), "user does not exist");
        assert_eq!(AuthError::InvalidCredentials.to_string(), "invalid credentials");
    }

    #[test]
    fn test_invalid_keeps_app_error() {
        let err = AuthError::Invalid(AppError::bad_request("Invalid email format").with_action("Fix it"));
        assert_eq!(err.kind(), ErrorKind::BadRequest);
        assert_eq!(err.to_string(), "Invalid email format");

        let app_err = err.into_app_error();
        assert_eq!(app_err.action(), Some("Fix it"));
    }

    #[test]
    fn test_internal_details_hidden() {
        let app_err = AuthError::Internal("row had unknown role".to_string()).into_app_error();
        assert_eq!(app_err.status_code(), 500);
        assert!(!app_err.message().contains("role"));
    }

    #[test]
    fn test_database_error_is_server_error() {
        let err = AuthError::from(sqlx::Error::PoolTimedOut);
        assert_eq!(err.kind(), ErrorKind::InternalServerError);
        assert!(err.kind().is_server_error());
        assert!(!AuthError::InvalidCredentials.kind().is_server_error());
        assert_eq!(err.into_app_error().status_code(), 503);
    }
}
