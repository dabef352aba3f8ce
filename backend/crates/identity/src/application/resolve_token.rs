//! Resolve Token Use Case
//!
//! Maps a wire token back to its user. Runs on every authenticated
//! request; nothing about the result is cached.

use std::sync::Arc;

use crate::application::config::IdentityConfig;
use crate::application::token::parse_access_token;
use crate::domain::entity::user::User;
use crate::domain::repository::{AccessTokenRepository, UserRepository};
use crate::error::{IdentityError, IdentityResult};

/// Use case for resolving an access token to its user
pub struct ResolveTokenUseCase<U, T>
where
    U: UserRepository,
    T: AccessTokenRepository,
{
    user_repo: Arc<U>,
    token_repo: Arc<T>,
    config: Arc<IdentityConfig>,
}

impl<U, T> ResolveTokenUseCase<U, T>
where
    U: UserRepository,
    T: AccessTokenRepository,
{
    pub fn new(user_repo: Arc<U>, token_repo: Arc<T>, config: Arc<IdentityConfig>) -> Self {
        Self {
            user_repo,
            token_repo,
            config,
        }
    }

    /// Execute the resolution
    ///
    /// Bad signature, unknown token id, expired record, and missing user
    /// all collapse into `InvalidToken`. Storage failures stay distinct.
    pub async fn execute(&self, wire_token: &str) -> IdentityResult<User> {
        let token_id = parse_access_token(wire_token, &self.config.token_secret)?;

        let record = self
            .token_repo
            .find_by_id(token_id)
            .await?
            .ok_or(IdentityError::InvalidToken)?;

        if record.is_expired() {
            // Expired records are removed on sight
            self.token_repo.delete(token_id).await?;
            return Err(IdentityError::InvalidToken);
        }

        let user = self
            .user_repo
            .find_by_id(record.user_id)
            .await?
            .ok_or(IdentityError::InvalidToken)?;

        Ok(user)
    }
}
