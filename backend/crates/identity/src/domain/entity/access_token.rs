//! Access Token Entity
//!
//! A server-side record of an issued bearer token. The wire token is the
//! record id signed with HMAC; the record itself carries ownership and
//! expiry. Parsing and signing live in the application layer.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::value_object::user_id::UserId;

/// Issued access token record
#[derive(Debug, Clone)]
pub struct AccessToken {
    /// Random token id, embedded in the wire token
    pub token_id: Uuid,
    /// Owner of the token
    pub user_id: UserId,
    /// Expiry timestamp in Unix milliseconds
    pub expires_at_ms: i64,
    pub created_at: DateTime<Utc>,
}

impl AccessToken {
    /// Create a new token record for a user
    pub fn new(user_id: UserId, ttl_ms: i64) -> Self {
        let now = Utc::now();
        Self {
            token_id: Uuid::new_v4(),
            user_id,
            expires_at_ms: now.timestamp_millis() + ttl_ms,
            created_at: now,
        }
    }

    /// Check whether the token has passed its expiry
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() >= self.expires_at_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_token() {
        let token = AccessToken::new(UserId::new(1), 3_600_000);

        assert_eq!(token.user_id.as_i64(), 1);
        assert!(!token.is_expired());
        assert!(token.expires_at_ms > Utc::now().timestamp_millis());
    }

    #[test]
    fn test_expired_token() {
        let token = AccessToken::new(UserId::new(1), -1);
        assert!(token.is_expired());
    }

    #[test]
    fn test_token_ids_are_random() {
        let a = AccessToken::new(UserId::new(1), 1000);
        let b = AccessToken::new(UserId::new(1), 1000);
        assert_ne!(a.token_id, b.token_id);
    }
}
