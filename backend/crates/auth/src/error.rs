//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! `Display` carries detail for logs. What the caller sees comes from
//! [`AuthError::public_message`] and never includes a source error.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::token::TokenError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Missing or unusable input field
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Email is already registered
    #[error("Email already registered")]
    DuplicateEmail,

    /// Registration could not be persisted for a reason other than a duplicate
    #[error("Registration failed: {0}")]
    RegistrationFailed(#[source] AppError),

    /// No user with that email
    #[error("User not found")]
    UserNotFound,

    /// Password did not match the stored hash
    #[error("Invalid password")]
    InvalidPassword,

    /// Request to a protected route without an `auth_token` cookie
    #[error("No token provided")]
    MissingToken,

    /// Bad signature, expired or malformed token
    #[error("Invalid token: {0}")]
    InvalidToken(#[from] TokenError),

    /// Credential store failure
    #[error("Store error: {0}")]
    Store(#[from] AppError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    ///
    /// Every user-correctable failure answers 400, except a missing token (401).
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_)
            | AuthError::DuplicateEmail
            | AuthError::RegistrationFailed(_)
            | AuthError::UserNotFound
            | AuthError::InvalidPassword
            | AuthError::InvalidToken(_) => ErrorKind::BadRequest,
            AuthError::MissingToken => ErrorKind::Unauthorized,
            AuthError::Store(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Body sent to the caller
    pub fn public_message(&self) -> String {
        match self {
            AuthError::Validation(msg) => msg.clone(),
            AuthError::DuplicateEmail => "Email already registered".to_string(),
            AuthError::RegistrationFailed(_) => "Error registering user".to_string(),
            AuthError::UserNotFound => "User not found".to_string(),
            AuthError::InvalidPassword => "Invalid password".to_string(),
            AuthError::MissingToken => "Access denied: No token provided".to_string(),
            AuthError::InvalidToken(_) => "Invalid token".to_string(),
            AuthError::Store(_) | AuthError::Internal(_) => "Internal server error".to_string(),
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.public_message())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Store(e) => {
                tracing::error!(error = %e, "Auth store error");
            }
            AuthError::RegistrationFailed(e) => {
                tracing::error!(error = %e, "Registration could not be stored");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidPassword => {
                tracing::warn!("Login attempt with invalid password");
            }
            AuthError::DuplicateEmail => {
                tracing::warn!("Registration attempt with an existing email");
            }
            AuthError::MissingToken => {
                tracing::warn!(reason = "missing_token", "Access denied");
            }
            AuthError::InvalidToken(e) => {
                tracing::warn!(reason = e.reason(), "Access denied");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<sqlx::Error> for AuthError {
    fn from(err: sqlx::Error) -> Self {
        AuthError::Store(AppError::from(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AuthError::Validation("email is required".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AuthError::DuplicateEmail.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AuthError::RegistrationFailed(AppError::service_unavailable("down")).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AuthError::UserNotFound.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AuthError::InvalidPassword.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AuthError::MissingToken.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AuthError::InvalidToken(TokenError::Expired).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AuthError::Store(AppError::internal("boom")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_public_message_hides_detail() {
        let err = AuthError::Store(AppError::internal("relation \"users\" does not exist"));
        assert_eq!(err.public_message(), "Internal server error");

        let err = AuthError::InvalidToken(TokenError::BadSignature);
        assert_eq!(err.public_message(), "Invalid token");
        assert!(err.to_string().contains("signature"));
    }

    #[test]
    fn test_into_response_status() {
        let response = AuthError::MissingToken.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = AuthError::UserNotFound.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
