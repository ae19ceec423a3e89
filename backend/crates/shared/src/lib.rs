//! Shared Kernel - Domain-crossing minimal core
//!
//! Vocabulary every backend crate agrees on:
//! - The unified error type, its classification and result alias
//! - Typed identifiers for persisted entities
//!
//! Anything placed here must mean the same thing in every crate that uses it.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
