//! Infrastructure Layer
//!
//! Credential store implementations and the token issuer.

pub mod jwt;
pub mod memory;
pub mod postgres;

pub use jwt::JwtTokenIssuer;
pub use memory::InMemoryAccountRepository;
pub use postgres::PgAccountRepository;
