//! Auth Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::issuer::TokenIssuer;
use crate::domain::repository::AccountRepository;
use crate::infra::jwt::JwtTokenIssuer;
use crate::infra::postgres::PgAccountRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with PostgreSQL repository and JWT issuer
pub fn auth_router(repo: PgAccountRepository, config: AuthConfig) -> Router {
    let issuer = JwtTokenIssuer::new(&config);
    auth_router_generic(repo, issuer, config)
}

/// Create a generic Auth router for any repository and issuer implementation
pub fn auth_router_generic<R, T>(repo: R, issuer: T, config: AuthConfig) -> Router
where
    R: AccountRepository + Clone + Send + Sync + 'static,
    T: TokenIssuer + Clone + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        issuer: Arc::new(issuer),
        config: Arc::new(config),
    };

    Router::new()
        .route("/signup", post(handlers::sign_up::<R, T>))
        .route("/signin", post(handlers::sign_in::<R, T>))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::InMemoryAccountRepository;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    struct TestApp {
        router: Router,
        repo: InMemoryAccountRepository,
        issuer: JwtTokenIssuer,
    }

    fn test_app() -> TestApp {
        let config = AuthConfig::development();
        let repo = InMemoryAccountRepository::new();
        let issuer = JwtTokenIssuer::new(&config);
        TestApp {
            router: auth_router_generic(repo.clone(), issuer.clone(), config),
            repo,
            issuer,
        }
    }

    async fn post_json(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    fn alice_signup() -> Value {
        json!({ "username": "alice", "email": "a@x.com", "password": "Correct-Horse-7" })
    }

    #[tokio::test]
    async fn test_signup_returns_no_content() {
        let app = test_app();
        let (status, body) = post_json(&app.router, "/signup", alice_signup()).await;

        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, Value::Null);
        assert_eq!(app.repo.count().await, 1);
    }

    #[tokio::test]
    async fn test_duplicate_signup_is_problem_document() {
        let app = test_app();
        post_json(&app.router, "/signup", alice_signup()).await;

        let (status, body) = post_json(
            &app.router,
            "/signup",
            json!({ "username": "bob", "email": "a@x.com", "password": "Correct-Horse-7" }),
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["status"], 409);
        assert_eq!(body["title"], "Conflict");
        assert_eq!(body["detail"], "username or email already exist");
    }

    #[tokio::test]
    async fn test_invalid_signup_is_bad_request() {
        let app = test_app();
        let (status, body) = post_json(
            &app.router,
            "/signup",
            json!({ "username": "alice", "email": "a@x.com", "password": "short" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["action"].is_string());
        assert_eq!(app.repo.count().await, 0);
    }

    #[tokio::test]
    async fn test_signin_flow() {
        let app = test_app();
        post_json(&app.router, "/signup", alice_signup()).await;

        let (status, body) = post_json(
            &app.router,
            "/signin",
            json!({ "username": "alice", "password": "Correct-Horse-7" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let token = body["token"].as_str().unwrap();
        assert_eq!(app.issuer.verify(token).unwrap().username, "alice");

        let (status, body) = post_json(
            &app.router,
            "/signin",
            json!({ "username": "alice", "password": "Wrong-Horse-7" }),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["detail"], "invalid credentials");

        let (status, body) = post_json(
            &app.router,
            "/signin",
            json!({ "username": "bob", "password": "Correct-Horse-7" }),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "user does not exist");
    }
}
