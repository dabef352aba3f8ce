//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use uuid::Uuid;

use crate::domain::entity::{access_token::AccessToken, user::User};
use crate::domain::value_object::{user_id::UserId, username::Username};
use crate::error::IdentityResult;

/// User repository trait
///
/// `create` must be atomic with respect to uniqueness: a concurrent
/// insert racing on id or username surfaces as `DuplicateId` or
/// `DuplicateUsername` from the storage layer, never as a second row.
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Persist a new user
    async fn create(&self, user: &User) -> IdentityResult<()>;

    /// Find a user by id
    async fn find_by_id(&self, id: UserId) -> IdentityResult<Option<User>>;

    /// Find a user by exact username
    async fn find_by_username(&self, username: &Username) -> IdentityResult<Option<User>>;

    /// Check whether a user with this id exists
    async fn exists_by_id(&self, id: UserId) -> IdentityResult<bool>;

    /// Check whether a user with this username exists
    async fn exists_by_username(&self, username: &Username) -> IdentityResult<bool>;
}

/// Access token repository trait
#[trait_variant::make(AccessTokenRepository: Send)]
pub trait LocalAccessTokenRepository {
    /// Persist a new token record
    async fn create(&self, token: &AccessToken) -> IdentityResult<()>;

    /// Get a token record by id
    async fn find_by_id(&self, token_id: Uuid) -> IdentityResult<Option<AccessToken>>;

    /// Delete a token record
    async fn delete(&self, token_id: Uuid) -> IdentityResult<()>;

    /// Delete all expired token records, returning how many were removed
    async fn cleanup_expired(&self) -> IdentityResult<u64>;
}
