//! Contacts Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, ownership rules, repository trait
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Ownership Model
//! - Every contact belongs to exactly one user, fixed at creation
//! - Ownership is checked against the stored row on every read, write,
//!   and delete; decisions are never cached
//! - Listing selects only the caller's rows, so it needs no per-row check

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use domain::entities::{Contact, ContactFields};
pub use domain::ownership::{AccessDecision, authorize_contact_access};
pub use error::{ContactError, ContactResult};
pub use infra::postgres::PgContactRepository;
pub use presentation::router::contacts_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgContactRepository as ContactStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
