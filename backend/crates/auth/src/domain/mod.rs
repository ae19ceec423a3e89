//! Domain Layer
//!
//! Contains entities, value objects, and the ports the workflow depends on.

pub mod entity;
pub mod issuer;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::account::{Account, NewAccount};
pub use issuer::{Claims, TokenIssuer};
pub use repository::{AccountFilter, AccountRepository};
