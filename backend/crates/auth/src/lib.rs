//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Account entity, value objects, store and issuer traits
//! - `application/` - Signup and signin use cases, configuration
//! - `infra/` - PostgreSQL and in-memory stores, JWT issuer
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Signup with username, email and password
//! - Signin with username and password, returning a signed bearer token
//! - Roles (User, Admin) carried in the token claims
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optional application pepper
//! - Plaintext passwords zeroized after use
//! - Unknown user and wrong password are distinct errors (404 / 401)

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::{AuthConfig, ConfigError};
pub use domain::issuer::{Claims, TokenIssuer};
pub use error::{AuthError, AuthResult};
pub use infra::{InMemoryAccountRepository, JwtTokenIssuer, PgAccountRepository};
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
