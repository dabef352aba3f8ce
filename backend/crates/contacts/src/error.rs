//! Contact Error Types
//!
//! This module provides contact-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Contact-specific result type alias
pub type ContactResult<T> = Result<T, ContactError>;

/// Contact-specific error variants
#[derive(Debug, Error)]
pub enum ContactError {
    /// Contact does not exist
    #[error("Contact not found")]
    NotFound,

    /// Caller is not the owner of the contact
    #[error("You do not have access to this contact")]
    Denied,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ContactError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ContactError::NotFound => StatusCode::NOT_FOUND,
            ContactError::Denied => StatusCode::FORBIDDEN,
            ContactError::Database(_) | ContactError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ContactError::NotFound => ErrorKind::NotFound,
            ContactError::Denied => ErrorKind::Forbidden,
            ContactError::Database(_) | ContactError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ContactError::Database(e) => {
                tracing::error!(error = %e, "Contact database error");
            }
            ContactError::Internal(msg) => {
                tracing::error!(message = %msg, "Contact internal error");
            }
            ContactError::Denied => {
                tracing::warn!("Denied access to another user's contact");
            }
            _ => {
                tracing::debug!(error = %self, "Contact error");
            }
        }
    }
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
