//! User ID Value Object
//!
//! Unlike most identifiers in this system, user ids are not generated by
//! the store. Callers assign them at registration time and the value is
//! simply required to be globally unique.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-assigned user identifier
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Create a user id from a caller-supplied value
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw integer value
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Debug for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UserId({})", self.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_as_i64() {
        let id = UserId::new(42);
        assert_eq!(id.as_i64(), 42);
    }

    #[test]
    fn test_display_and_debug() {
        let id = UserId::new(7);
        assert_eq!(id.to_string(), "7");
        assert_eq!(format!("{:?}", id), "UserId(7)");
    }

    #[test]
    fn test_serde_transparent() {
        let id = UserId::new(123);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "123");

        let back: UserId = serde_json::from_str("123").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_negative_values_allowed() {
        // The store does not constrain the integer range callers pick from
        let id = UserId::new(-5);
        assert_eq!(id.as_i64(), -5);
    }
}
