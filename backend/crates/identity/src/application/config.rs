//! Application Configuration
//!
//! Configuration for the Identity application layer.

use std::time::Duration;

/// Identity application configuration
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    /// Token secret key for HMAC signing (32 bytes)
    pub token_secret: [u8; 32],
    /// Access token TTL (1 hour)
    pub token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            token_secret: [0u8; 32],
            token_ttl: Duration::from_secs(3600), // 1 hour
            password_pepper: None,
        }
    }
}

impl IdentityConfig {
    /// Create config with a random token secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            token_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    /// Get token TTL in milliseconds
    pub fn token_ttl_ms(&self) -> i64 {
        self.token_ttl.as_millis() as i64
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
