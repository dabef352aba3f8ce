//! HTTP Handlers

use axum::Json;
use axum::extract::{Form, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use std::sync::Arc;

use platform::bearer::extract_bearer_token;

use crate::application::config::IdentityConfig;
use crate::application::{
    AuthenticateInput, AuthenticateUseCase, RegisterInput, RegisterUseCase, ResolveTokenUseCase,
};
use crate::domain::repository::{AccessTokenRepository, UserRepository};
use crate::error::{IdentityError, IdentityResult};
use crate::presentation::dto::{RegisterRequest, TokenRequest, TokenResponse, UserResponse};

/// Shared state for identity handlers
#[derive(Clone)]
pub struct IdentityAppState<R>
where
    R: UserRepository + AccessTokenRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<IdentityConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /users/register
pub async fn register<R>(
    State(state): State<IdentityAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> IdentityResult<impl IntoResponse>
where
    R: UserRepository + AccessTokenRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let input = RegisterInput {
        id: req.id,
        username: req.username,
        password: req.password,
        role: req.role,
    };

    let output = use_case.execute(input).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(output.user))))
}

// ============================================================================
// Issue Token
// ============================================================================

/// POST /auth/token
pub async fn issue_token<R>(
    State(state): State<IdentityAppState<R>>,
    Form(req): Form<TokenRequest>,
) -> IdentityResult<Json<TokenResponse>>
where
    R: UserRepository + AccessTokenRepository + Clone + Send + Sync + 'static,
{
    let use_case = AuthenticateUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.config.clone(),
    );

    let input = AuthenticateInput {
        username: req.username,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(TokenResponse {
        access_token: output.access_token,
        token_type: "bearer".to_string(),
    }))
}

// ============================================================================
// Current User
// ============================================================================

/// GET /users/me
pub async fn current_user<R>(
    State(state): State<IdentityAppState<R>>,
    headers: HeaderMap,
) -> IdentityResult<Json<UserResponse>>
where
    R: UserRepository + AccessTokenRepository + Clone + Send + Sync + 'static,
{
    let token = extract_bearer_token(&headers).ok_or(IdentityError::InvalidToken)?;

    let use_case = ResolveTokenUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.config.clone(),
    );

    let user = use_case.execute(&token).await?;

    Ok(Json(UserResponse::from(user)))
}
