//! User Name Value Object
//!
//! The login handle of an account. Unique across accounts and compared
//! exactly as stored after normalization.
//!
//! ## Invariants
//! - NFKC normalized, surrounding whitespace trimmed
//! - 3 to 30 characters
//! - ASCII letters, digits and `_ . -` only
//! - Starts and ends with a letter, digit or `_`
//! - No consecutive dots

use kernel::error::app_error::{AppError, AppResult};
use std::fmt;
use unicode_normalization::UnicodeNormalization;

pub const USER_NAME_MIN_LENGTH: usize = 3;
pub const USER_NAME_MAX_LENGTH: usize = 30;

const ALLOWED_SPECIAL_CHARS: &[char] = &['_', '.', '-'];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserName(String);

impl UserName {
    pub fn new(raw: impl AsRef<str>) -> AppResult<Self> {
        let normalized: String = raw.as_ref().nfkc().collect();
        let name = normalized.trim();

        let length = name.chars().count();
        if length < USER_NAME_MIN_LENGTH || length > USER_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "User name must be {}-{} characters (got {})",
                USER_NAME_MIN_LENGTH, USER_NAME_MAX_LENGTH, length
            ))
            .with_action("Please choose a user name of valid length"));
        }

        if let Some(c) = name
            .chars()
            .find(|c| !c.is_ascii_alphanumeric() && !ALLOWED_SPECIAL_CHARS.contains(c))
        {
            return Err(AppError::bad_request(format!(
                "User name contains an invalid character: {:?}",
                c
            ))
            .with_action("Use letters, digits, '_', '.' or '-'"));
        }

        let is_edge_char = |c: char| c.is_ascii_alphanumeric() || c == '_';
        let starts_ok = name.chars().next().is_some_and(is_edge_char);
        let ends_ok = name.chars().next_back().is_some_and(is_edge_char);
        if !starts_ok || !ends_ok {
            return Err(AppError::bad_request(
                "User name must start and end with a letter, digit or '_'",
            ));
        }

        if name.contains("..") {
            return Err(AppError::bad_request(
                "User name cannot contain consecutive dots",
            ));
        }

        Ok(Self(name.to_string()))
    }

    /// Rebuild from a stored value, which was validated on the way in
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_name_valid() {
        for name in ["alice", "bob", "Alice_01", "j.doe", "x-y-z", "_hidden_"] {
            assert!(UserName::new(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn test_user_name_length_bounds() {
        assert!(UserName::new("ab").is_err());
        assert!(UserName::new("a".repeat(USER_NAME_MAX_LENGTH)).is_ok());
        assert!(UserName::new("a".repeat(USER_NAME_MAX_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_user_name_invalid_characters() {
        assert!(UserName::new("al ice").is_err());
        assert!(UserName::new("alice!").is_err());
        assert!(UserName::new("ありす").is_err());
        assert!(UserName::new(".alice").is_err());
        assert!(UserName::new("alice-").is_err());
        assert!(UserName::new("al..ice").is_err());
    }

    #[test]
    fn test_user_name_is_trimmed_and_case_preserved() {
        let name = UserName::new("  Alice  ").unwrap();
        assert_eq!(name.as_str(), "Alice");
        assert_ne!(name, UserName::new("alice").unwrap());
    }

    #[test]
    fn test_user_name_nfkc() {
        // Full-width ASCII folds to plain ASCII
        let name = UserName::new("ａｌｉｃｅ").unwrap();
        assert_eq!(name.as_str(), "alice");
    }
}
