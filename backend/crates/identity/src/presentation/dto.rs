//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entity::user::User;

// ============================================================================
// Register
// ============================================================================

/// Register request
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub role: String,
}

/// User response, returned by register and by the current-user endpoint
///
/// Never carries password material in any form.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub role: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.as_i64(),
            username: user.username.into(),
            role: user.role.into(),
        }
    }
}

// ============================================================================
// Token
// ============================================================================

/// Token request (form-encoded credentials)
#[derive(Debug, Clone, Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

/// Token response
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}
