//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{access_token::AccessToken, user::User};
use crate::domain::repository::{AccessTokenRepository, UserRepository};
use crate::domain::value_object::{
    role::Role, user_id::UserId, user_password::UserPassword, username::Username,
};
use crate::error::{IdentityError, IdentityResult};

/// PostgreSQL-backed identity repository
#[derive(Clone)]
pub struct PgIdentityRepository {
    pool: PgPool,
}

impl PgIdentityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Clean up expired access tokens
    pub async fn cleanup_expired(&self) -> IdentityResult<u64> {
        let now_ms = Utc::now().timestamp_millis();

        let deleted = sqlx::query("DELETE FROM access_tokens WHERE expires_at_ms < $1")
            .bind(now_ms)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::info!(tokens_deleted = deleted, "Cleaned up expired access tokens");

        Ok(deleted)
    }
}

/// Map a unique violation onto the conflict it represents
///
/// Pre-insert existence checks race under concurrency; the unique
/// indexes are the authority, and their constraint names tell us which
/// field collided.
fn map_unique_violation(err: sqlx::Error) -> IdentityError {
    let constraint = match &err {
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
            db_err.constraint().map(str::to_owned)
        }
        _ => None,
    };

    match constraint.as_deref() {
        Some("users_pkey") => IdentityError::DuplicateId,
        Some("users_username_key") => IdentityError::DuplicateUsername,
        _ => IdentityError::Database(err),
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgIdentityRepository {
    async fn create(&self, user: &User) -> IdentityResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (
                id,
                username,
                hashed_password,
                role,
                created_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user.id.as_i64())
        .bind(user.username.as_str())
        .bind(user.hashed_password.as_phc_string())
        .bind(user.role.as_str())
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> IdentityResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                id,
                username,
                hashed_password,
                role,
                created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_username(&self, username: &Username) -> IdentityResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                id,
                username,
                hashed_password,
                role,
                created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn exists_by_id(&self, id: UserId) -> IdentityResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
            .bind(id.as_i64())
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    async fn exists_by_username(&self, username: &Username) -> IdentityResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
                .bind(username.as_str())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }
}

// ============================================================================
// Access Token Repository Implementation
// ============================================================================

impl AccessTokenRepository for PgIdentityRepository {
    async fn create(&self, token: &AccessToken) -> IdentityResult<()> {
        sqlx::query(
            r#"
            INSERT INTO access_tokens (
                token_id,
                user_id,
                expires_at_ms,
                created_at
            ) VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(token.token_id)
        .bind(token.user_id.as_i64())
        .bind(token.expires_at_ms)
        .bind(token.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, token_id: Uuid) -> IdentityResult<Option<AccessToken>> {
        // Expired rows are returned as-is; expiry is the caller's decision
        let row = sqlx::query_as::<_, AccessTokenRow>(
            r#"
            SELECT
                token_id,
                user_id,
                expires_at_ms,
                created_at
            FROM access_tokens
            WHERE token_id = $1
            "#,
        )
        .bind(token_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_token()))
    }

    async fn delete(&self, token_id: Uuid) -> IdentityResult<()> {
        sqlx::query("DELETE FROM access_tokens WHERE token_id = $1")
            .bind(token_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn cleanup_expired(&self) -> IdentityResult<u64> {
        self.cleanup_expired().await
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    hashed_password: String,
    role: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> IdentityResult<User> {
        let hashed_password = UserPassword::from_phc_string(self.hashed_password)
            .map_err(|e| IdentityError::Internal(format!("Invalid password hash: {}", e)))?;

        Ok(User {
            id: UserId::new(self.id),
            username: Username::from_db(self.username),
            hashed_password,
            role: Role::from_db(self.role),
            created_at: self.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct AccessTokenRow {
    token_id: Uuid,
    user_id: i64,
    expires_at_ms: i64,
    created_at: DateTime<Utc>,
}

impl AccessTokenRow {
    fn into_token(self) -> AccessToken {
        AccessToken {
            token_id: self.token_id,
            user_id: UserId::new(self.user_id),
            expires_at_ms: self.expires_at_ms,
            created_at: self.created_at,
        }
    }
}
