//! Role Value Object
//!
//! Roles are free-form labels supplied at registration ("admin", "user",
//! "auditor", ...). The store records them verbatim and attaches no
//! semantics: authorization decisions are based on ownership, not role.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Maximum role length in characters
pub const MAX_ROLE_LENGTH: usize = 64;

/// Role validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoleError {
    /// Role is empty or whitespace only
    #[error("Role cannot be empty")]
    Empty,

    /// Role exceeds the maximum length
    #[error("Role must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },
}

/// Free-form role label
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Role(String);

impl Role {
    /// Create a role from user input
    ///
    /// Trims surrounding whitespace. Any non-empty label up to
    /// [`MAX_ROLE_LENGTH`] characters is accepted.
    pub fn new(input: impl AsRef<str>) -> Result<Self, RoleError> {
        let trimmed = input.as_ref().trim();

        if trimmed.is_empty() {
            return Err(RoleError::Empty);
        }

        let char_count = trimmed.chars().count();
        if char_count > MAX_ROLE_LENGTH {
            return Err(RoleError::TooLong {
                max: MAX_ROLE_LENGTH,
                actual: char_count,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Restore from a database value, skipping validation
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the role as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Role {
    type Error = RoleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Role {
    type Error = RoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.0
    }
}

impl AsRef<str> for Role {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Role({:?})", self.0)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_labels_accepted() {
        for label in ["admin", "user", "guest", "read-only auditor"] {
            assert!(Role::new(label).is_ok(), "expected {:?} to be valid", label);
        }
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(Role::new("").unwrap_err(), RoleError::Empty);
        assert_eq!(Role::new("   ").unwrap_err(), RoleError::Empty);
    }

    #[test]
    fn test_too_long_rejected() {
        let long = "r".repeat(MAX_ROLE_LENGTH + 1);
        assert!(matches!(
            Role::new(long).unwrap_err(),
            RoleError::TooLong { .. }
        ));
    }

    #[test]
    fn test_whitespace_trimmed() {
        let role = Role::new("  admin  ").unwrap();
        assert_eq!(role.as_str(), "admin");
    }

    #[test]
    fn test_serde_roundtrip() {
        let role = Role::new("admin").unwrap();
        let json = serde_json::to_string(&role).unwrap();
        assert_eq!(json, r#""admin""#);

        let back: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(back, role);
    }
}
