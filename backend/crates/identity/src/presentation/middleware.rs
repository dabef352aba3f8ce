//! Identity Middleware
//!
//! Middleware for requiring a valid access token on protected routes.

use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use platform::bearer::extract_bearer_token;
use std::sync::Arc;

use crate::application::config::IdentityConfig;
use crate::application::ResolveTokenUseCase;
use crate::domain::repository::{AccessTokenRepository, UserRepository};
use crate::domain::value_object::user_id::UserId;
use crate::error::IdentityError;

/// Middleware state
#[derive(Clone)]
pub struct IdentityMiddlewareState<R>
where
    R: UserRepository + AccessTokenRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<IdentityConfig>,
}

/// Authenticated caller, stored in request extensions
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser {
    pub user_id: UserId,
}

/// Middleware that requires a valid access token
///
/// The token is resolved against the store on every request. On success
/// the caller is inserted into request extensions as [`CurrentUser`].
pub async fn require_access_token<R>(
    state: IdentityMiddlewareState<R>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: UserRepository + AccessTokenRepository + Clone + Send + Sync + 'static,
{
    let token = match extract_bearer_token(req.headers()) {
        Some(token) => token,
        None => return Err(IdentityError::InvalidToken.into_response()),
    };

    let use_case = ResolveTokenUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.config.clone(),
    );

    let user = match use_case.execute(&token).await {
        Ok(user) => user,
        Err(e) => return Err(e.into_response()),
    };

    req.extensions_mut().insert(CurrentUser { user_id: user.id });

    Ok(next.run(req).await)
}
