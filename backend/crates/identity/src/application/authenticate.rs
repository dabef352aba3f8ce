//! Authenticate Use Case
//!
//! Verifies credentials and issues a signed access token.

use std::sync::Arc;

use crate::application::config::IdentityConfig;
use crate::application::token::generate_access_token;
use crate::domain::entity::access_token::AccessToken;
use crate::domain::repository::{AccessTokenRepository, UserRepository};
use crate::domain::value_object::{user_password::RawPassword, username::Username};
use crate::error::{IdentityError, IdentityResult};

/// Authenticate input
#[derive(Debug)]
pub struct AuthenticateInput {
    pub username: String,
    pub password: String,
}

/// Authenticate output
#[derive(Debug)]
pub struct AuthenticateOutput {
    /// Signed wire token for the Authorization header
    pub access_token: String,
    /// Expiry timestamp in Unix milliseconds
    pub expires_at_ms: i64,
}

/// Use case for authenticating a user
pub struct AuthenticateUseCase<U, T>
where
    U: UserRepository,
    T: AccessTokenRepository,
{
    user_repo: Arc<U>,
    token_repo: Arc<T>,
    config: Arc<IdentityConfig>,
}

impl<U, T> AuthenticateUseCase<U, T>
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

    /// Execute the authentication
    ///
    /// Unknown username, malformed input, and wrong password all collapse
    /// into `InvalidCredentials` so the response never reveals whether an
    /// account exists.
    pub async fn execute(&self, input: AuthenticateInput) -> IdentityResult<AuthenticateOutput> {
        let username =
            Username::new(&input.username).map_err(|_| IdentityError::InvalidCredentials)?;
        let raw_password =
            RawPassword::new(input.password).map_err(|_| IdentityError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or(IdentityError::InvalidCredentials)?;

        if !user.hashed_password.verify(&raw_password, self.config.pepper()) {
            return Err(IdentityError::InvalidCredentials);
        }

        let token = AccessToken::new(user.id, self.config.token_ttl_ms());
        self.token_repo.create(&token).await?;

        let access_token = generate_access_token(&token.token_id, &self.config.token_secret);

        tracing::info!(user_id = %user.id, "User authenticated");

        Ok(AuthenticateOutput {
            access_token,
            expires_at_ms: token.expires_at_ms,
        })
    }
}
