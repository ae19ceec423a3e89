//! Platform Crate - Technical Infrastructure
//!
//! Domain-free building blocks shared by the backend crates:
//! - Password hashing (Argon2id, NIST SP 800-63B policy)
//! - Signed bearer tokens (HS256 JWT)

pub mod password;
pub mod token;
