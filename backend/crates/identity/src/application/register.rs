//! Register Use Case
//!
//! Creates a new user account with a caller-assigned id.

use std::sync::Arc;

use crate::application::config::IdentityConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    role::Role,
    user_id::UserId,
    user_password::{RawPassword, UserPassword},
    username::Username,
};
use crate::error::{IdentityError, IdentityResult};

/// Register input
#[derive(Debug)]
pub struct RegisterInput {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub role: String,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    pub user: User,
}

/// Use case for registering a new user
pub struct RegisterUseCase<R>
where
    R: UserRepository,
{
    user_repo: Arc<R>,
    config: Arc<IdentityConfig>,
}

impl<R> RegisterUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: Arc<R>, config: Arc<IdentityConfig>) -> Self {
        Self { user_repo, config }
    }

    /// Execute the registration
    ///
    /// Conflicts are detected in a fixed order: the id is checked before
    /// the username, so a request colliding on both reports the id. The
    /// unique indexes backstop these checks under concurrency.
    pub async fn execute(&self, input: RegisterInput) -> IdentityResult<RegisterOutput> {
        let username =
            Username::new(&input.username).map_err(|e| IdentityError::Validation(e.to_string()))?;
        let role = Role::new(&input.role).map_err(|e| IdentityError::Validation(e.to_string()))?;
        let raw_password = RawPassword::new(input.password)?;

        let id = UserId::new(input.id);

        if self.user_repo.exists_by_id(id).await? {
            return Err(IdentityError::DuplicateId);
        }

        if self.user_repo.exists_by_username(&username).await? {
            return Err(IdentityError::DuplicateUsername);
        }

        // Hash only after the cheap uniqueness checks have passed
        let hashed_password = UserPassword::from_raw(&raw_password, self.config.pepper())?;

        let user = User::new(id, username, hashed_password, role);
        self.user_repo.create(&user).await?;

        tracing::info!(
            user_id = %user.id,
            username = %user.username,
            role = %user.role,
            "User registered"
        );

        Ok(RegisterOutput { user })
    }
}
