//! Screening Error Types
//!
//! This module provides screening-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! Note: a rejected email is NOT an error on the `/validate` endpoint -
//! the verdict travels in the response body. [`ScreeningError::EmailRejected`]
//! exists for the signup path, where rejection aborts the operation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Screening-specific result type alias
pub type ScreeningResult<T> = Result<T, ScreeningError>;

/// Screening-specific error variants
#[derive(Debug, Error)]
pub enum ScreeningError {
    /// Email failed risk screening during signup
    #[error("Email rejected: {}", reasons.join(". "))]
    EmailRejected { reasons: Vec<String> },

    /// An account already exists for this email
    #[error("An account with this email already exists")]
    EmailAlreadyRegistered,

    /// Password validation error
    #[error("Password validation failed: {0}")]
    PasswordValidation(String),

    /// Request carried no email to evaluate
    #[error("Email is required")]
    EmailRequired,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Missing required header
    #[error("Missing required header: {0}")]
    MissingHeader(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ScreeningError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ScreeningError::EmailRejected { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ScreeningError::EmailAlreadyRegistered => StatusCode::CONFLICT,
            ScreeningError::EmailRequired
            | ScreeningError::PasswordValidation(_)
            | ScreeningError::MissingHeader(_) => StatusCode::BAD_REQUEST,
            ScreeningError::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
            ScreeningError::Database(_) | ScreeningError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScreeningError::EmailRejected { .. } => ErrorKind::UnprocessableEntity,
            ScreeningError::EmailAlreadyRegistered => ErrorKind::Conflict,
            ScreeningError::EmailRequired
            | ScreeningError::PasswordValidation(_)
            | ScreeningError::MissingHeader(_) => ErrorKind::BadRequest,
            ScreeningError::RateLimitExceeded => ErrorKind::TooManyRequests,
            ScreeningError::Database(_) | ScreeningError::Internal(_) => {
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
            ScreeningError::Database(e) => {
                tracing::error!(error = %e, "Screening database error");
            }
            ScreeningError::Internal(msg) => {
                tracing::error!(message = %msg, "Screening internal error");
            }
            ScreeningError::RateLimitExceeded => {
                tracing::warn!("Screening rate limit exceeded");
            }
            _ => {
                tracing::debug!(error = %self, "Screening error");
            }
        }
    }
}

impl IntoResponse for ScreeningError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for ScreeningError {
    fn from(err: AppError) -> Self {
        ScreeningError::Internal(err.to_string())
    }
}

impl From<platform::client::FingerprintError> for ScreeningError {
    fn from(err: platform::client::FingerprintError) -> Self {
        match err {
            platform::client::FingerprintError::MissingHeader(header) => {
                ScreeningError::MissingHeader(header)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let rejected = ScreeningError::EmailRejected {
            reasons: vec!["Disposable email addresses are not allowed".to_string()],
        };
        assert_eq!(rejected.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            ScreeningError::EmailAlreadyRegistered.status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ScreeningError::RateLimitExceeded.status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            ScreeningError::EmailRequired.status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_rejected_message_joins_reasons() {
        let err = ScreeningError::EmailRejected {
            reasons: vec!["Invalid email format".to_string(), "too risky".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Email rejected: Invalid email format. too risky"
        );
    }
}
