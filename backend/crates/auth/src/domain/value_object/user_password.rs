//! User Password Value Objects
//!
//! Domain wrappers over `platform::password`.
//!
//! - [`RawPassword`]: plaintext from a request, zeroized on drop
//! - [`UserPassword`]: Argon2id PHC hash, the only form ever stored

use kernel::error::app_error::{AppError, AppResult};
use platform::password::{
    ClearTextPassword, HashedPassword, PasswordHashError, PasswordPolicyError,
};
use std::fmt;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// A password being chosen at signup. Policy violations become 400s with
    /// a hint for the user.
    pub fn new(raw: String) -> AppResult<Self> {
        let clear_text = ClearTextPassword::new(raw).map_err(|e| {
            let action = match e {
                PasswordPolicyError::TooShort { .. } => "Please choose a longer password",
                PasswordPolicyError::TooLong { .. } => "Please choose a shorter password",
                PasswordPolicyError::EmptyOrWhitespace => "Please enter a password",
                PasswordPolicyError::InvalidCharacter => {
                    "Please remove any special control characters"
                }
                PasswordPolicyError::CommonPattern => "Please choose a more unique password",
            };
            AppError::bad_request(e.to_string()).with_action(action)
        })?;

        Ok(Self(clear_text))
    }

    /// A password presented at signin. Never rejected here.
    pub fn presented(raw: String) -> Self {
        Self(ClearTextPassword::for_verification(raw))
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash with Argon2id. `pepper` must stay the same for the life of the hash.
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> Result<Self, PasswordHashError> {
        raw.0.hash(pepper).map(Self)
    }

    pub fn from_phc_string(phc_string: impl Into<String>) -> Result<Self, PasswordHashError> {
        HashedPassword::from_phc_string(phc_string).map(Self)
    }

    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Constant-time check of `raw` against this hash
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(&raw.0, pepper)
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}
