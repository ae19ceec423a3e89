//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{SignInInput, SignInUseCase, SignUpInput, SignUpUseCase};
use crate::domain::issuer::TokenIssuer;
use crate::domain::repository::AccountRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{SignInRequest, SignInResponse, SignUpRequest};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R, T>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
    T: TokenIssuer + Clone + 'static,
{
    pub repo: Arc<R>,
    pub issuer: Arc<T>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /api/auth/signup
pub async fn sign_up<R, T>(
    State(state): State<AuthAppState<R, T>>,
    Json(req): Json<SignUpRequest>,
) -> AuthResult<StatusCode>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
    T: TokenIssuer + Clone + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone());

    let input = SignUpInput {
        username: req.username,
        email: req.email,
        password: req.password,
    };

    use_case.execute(input).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /api/auth/signin
pub async fn sign_in<R, T>(
    State(state): State<AuthAppState<R, T>>,
    Json(req): Json<SignInRequest>,
) -> AuthResult<Json<SignInResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
    T: TokenIssuer + Clone + 'static,
{
    let use_case = SignInUseCase::new(
        state.repo.clone(),
        state.issuer.clone(),
        state.config.clone(),
    );

    let input = SignInInput {
        username: req.username,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(SignInResponse {
        token: output.token,
    }))
}
