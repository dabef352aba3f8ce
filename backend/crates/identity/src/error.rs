//! Identity Error Types
//!
//! This module provides identity-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Identity-specific result type alias
pub type IdentityResult<T> = Result<T, IdentityError>;

/// Identity-specific error variants
#[derive(Debug, Error)]
pub enum IdentityError {
    /// A user with the requested id already exists
    #[error("A user with this id already exists")]
    DuplicateId,

    /// A user with the requested username already exists
    #[error("A user with this username already exists")]
    DuplicateUsername,

    /// Invalid credentials (unknown username or wrong password)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Access token missing, malformed, expired, or otherwise unusable
    #[error("Invalid access token")]
    InvalidToken,

    /// Request payload failed validation
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IdentityError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            IdentityError::DuplicateId | IdentityError::DuplicateUsername => StatusCode::CONFLICT,
            IdentityError::InvalidCredentials | IdentityError::InvalidToken => {
                StatusCode::UNAUTHORIZED
            }
            IdentityError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            IdentityError::Database(_) | IdentityError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            IdentityError::DuplicateId | IdentityError::DuplicateUsername => ErrorKind::Conflict,
            IdentityError::InvalidCredentials | IdentityError::InvalidToken => {
                ErrorKind::Unauthorized
            }
            IdentityError::Validation(_) => ErrorKind::UnprocessableEntity,
            IdentityError::Database(_) | IdentityError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            IdentityError::Database(e) => {
                tracing::error!(error = %e, "Identity database error");
            }
            IdentityError::Internal(msg) => {
                tracing::error!(message = %msg, "Identity internal error");
            }
            IdentityError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            IdentityError::InvalidToken => {
                tracing::debug!("Rejected access token");
            }
            _ => {
                tracing::debug!(error = %self, "Identity error");
            }
        }
    }
}

impl IntoResponse for IdentityError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for IdentityError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadRequest | ErrorKind::UnprocessableEntity => {
                IdentityError::Validation(err.message().to_string())
            }
            _ => IdentityError::Internal(err.to_string()),
        }
    }
}
