//! User Entity

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    role::Role, user_id::UserId, user_password::UserPassword, username::Username,
};

/// User account
///
/// The id is caller-assigned at registration; everything else is
/// validated on the way in and stored verbatim.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub hashed_password: UserPassword,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user at registration time
    pub fn new(id: UserId, username: Username, hashed_password: UserPassword, role: Role) -> Self {
        Self {
            id,
            username,
            hashed_password,
            role,
            created_at: Utc::now(),
        }
    }
}
