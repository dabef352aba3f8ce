//! Identity Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - User registration with caller-assigned integer ids
//! - Credential authentication issuing bearer access tokens
//! - Token resolution for authenticated requests
//!
//! ## Security Model
//! - Passwords hashed with Argon2id
//! - Wire tokens are HMAC-signed opaque ids; user and expiry live server-side
//! - Unknown username and wrong password are indistinguishable to callers
//! - Uniqueness of id and username is enforced by the store, atomically
//!   with the insert

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::IdentityConfig;
pub use domain::value_object::user_id::UserId;
pub use error::{IdentityError, IdentityResult};
pub use infra::postgres::PgIdentityRepository;
pub use presentation::middleware::CurrentUser;
pub use presentation::router::identity_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgIdentityRepository as IdentityStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
