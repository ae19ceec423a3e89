use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of account roles
///
/// Serialized by code (`"ADMIN"`, `"USER"`) both in tokens and in storage.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleType {
    Admin,
    /// Assigned to every new account
    #[default]
    User,
}

impl RoleType {
    pub const ALL: [RoleType; 2] = [RoleType::Admin, RoleType::User];

    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            RoleType::Admin => "ADMIN",
            RoleType::User => "USER",
        }
    }

    /// Parse a stored code. Unknown codes are `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.code() == code)
    }
}

impl fmt::Display for RoleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
