//! Username Value Object
//!
//! Usernames are stored and compared exactly as the caller supplied them
//! after Unicode NFKC normalization and trimming. There is no reserved-word
//! list and no case folding. Uniqueness is enforced by the store.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

/// Maximum username length in characters (after normalization)
pub const MAX_USERNAME_LENGTH: usize = 64;

/// Username validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsernameError {
    /// Username is empty or whitespace only
    #[error("Username cannot be empty")]
    Empty,

    /// Username exceeds the maximum length
    #[error("Username must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    /// Username contains control characters
    #[error("Username contains invalid characters")]
    InvalidCharacter,
}

/// Validated username
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Create a username from user input
    ///
    /// ## Validation Rules
    /// - Unicode NFKC normalized
    /// - Leading and trailing whitespace trimmed
    /// - Must not be empty
    /// - At most [`MAX_USERNAME_LENGTH`] characters
    /// - No control characters
    ///
    /// ## Example
    /// ```rust
    /// use identity::domain::value_object::username::Username;
    ///
    /// let name = Username::new("alice")?;
    /// assert_eq!(name.as_str(), "alice");
    /// # Ok::<(), identity::domain::value_object::username::UsernameError>(())
    /// ```
    pub fn new(input: impl AsRef<str>) -> Result<Self, UsernameError> {
        let normalized: String = input.as_ref().nfkc().collect();
        let trimmed = normalized.trim();

        if trimmed.is_empty() {
            return Err(UsernameError::Empty);
        }

        let char_count = trimmed.chars().count();
        if char_count > MAX_USERNAME_LENGTH {
            return Err(UsernameError::TooLong {
                max: MAX_USERNAME_LENGTH,
                actual: char_count,
            });
        }

        if trimmed.chars().any(char::is_control) {
            return Err(UsernameError::InvalidCharacter);
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Restore from a database value, skipping validation
    ///
    /// Values in the database were validated at registration time.
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the username as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Username {
    type Error = UsernameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Username {
    type Error = UsernameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Username> for String {
    fn from(name: Username) -> Self {
        name.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Username({:?})", self.0)
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod validation {
        use super::*;

        #[test]
        fn test_plain_ascii_accepted() {
            let name = Username::new("alice").unwrap();
            assert_eq!(name.as_str(), "alice");
        }

        #[test]
        fn test_single_character_accepted() {
            // No minimum length
            assert!(Username::new("a").is_ok());
        }

        #[test]
        fn test_empty_rejected() {
            assert_eq!(Username::new("").unwrap_err(), UsernameError::Empty);
            assert_eq!(Username::new("   ").unwrap_err(), UsernameError::Empty);
        }

        #[test]
        fn test_too_long_rejected() {
            let long = "a".repeat(MAX_USERNAME_LENGTH + 1);
            assert!(matches!(
                Username::new(long).unwrap_err(),
                UsernameError::TooLong { .. }
            ));
        }

        #[test]
        fn test_at_max_length_accepted() {
            let max = "a".repeat(MAX_USERNAME_LENGTH);
            assert!(Username::new(max).is_ok());
        }

        #[test]
        fn test_control_characters_rejected() {
            assert_eq!(
                Username::new("ali\x00ce").unwrap_err(),
                UsernameError::InvalidCharacter
            );
            assert_eq!(
                Username::new("ali\tce").unwrap_err(),
                UsernameError::InvalidCharacter
            );
        }

        #[test]
        fn test_interior_space_accepted() {
            let name = Username::new("alice smith").unwrap();
            assert_eq!(name.as_str(), "alice smith");
        }

        #[test]
        fn test_unicode_accepted() {
            let name = Username::new("山田太郎").unwrap();
            assert_eq!(name.as_str(), "山田太郎");
        }
    }

    mod normalization {
        use super::*;

        #[test]
        fn test_whitespace_trimmed() {
            let name = Username::new("  alice  ").unwrap();
            assert_eq!(name.as_str(), "alice");
        }

        #[test]
        fn test_nfkc_applied() {
            // Full-width latin normalizes to ASCII
            let name = Username::new("ａｌｉｃｅ").unwrap();
            assert_eq!(name.as_str(), "alice");
        }

        #[test]
        fn test_case_preserved() {
            // No case folding: Alice and alice stay distinct values
            let upper = Username::new("Alice").unwrap();
            let lower = Username::new("alice").unwrap();
            assert_ne!(upper, lower);
        }
    }

    mod serde_impls {
        use super::*;

        #[test]
        fn test_serialize_as_plain_string() {
            let name = Username::new("alice").unwrap();
            let json = serde_json::to_string(&name).unwrap();
            assert_eq!(json, r#""alice""#);
        }

        #[test]
        fn test_deserialize_validates() {
            let ok: Result<Username, _> = serde_json::from_str(r#""alice""#);
            assert!(ok.is_ok());

            let err: Result<Username, _> = serde_json::from_str(r#""""#);
            assert!(err.is_err());
        }
    }

    #[test]
    fn test_from_db_skips_validation() {
        let name = Username::from_db("stored-name");
        assert_eq!(name.as_str(), "stored-name");
    }
}
