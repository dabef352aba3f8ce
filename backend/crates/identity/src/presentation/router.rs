//! Identity Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::IdentityConfig;
use crate::domain::repository::{AccessTokenRepository, UserRepository};
use crate::infra::postgres::PgIdentityRepository;
use crate::presentation::handlers::{self, IdentityAppState};

/// Create the identity router with PostgreSQL repository
///
/// Routes are absolute; merge this router at the application root.
pub fn identity_router(repo: PgIdentityRepository, config: IdentityConfig) -> Router {
    identity_router_generic(repo, config)
}

/// Create a generic identity router for any repository implementation
pub fn identity_router_generic<R>(repo: R, config: IdentityConfig) -> Router
where
    R: UserRepository + AccessTokenRepository + Clone + Send + Sync + 'static,
{
    let state = IdentityAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/auth/token", post(handlers::issue_token::<R>))
        .route("/users/register", post(handlers::register::<R>))
        .route("/users/me", get(handlers::current_user::<R>))
        .with_state(state)
}
