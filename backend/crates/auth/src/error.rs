//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Required request field absent or blank
    #[error("{0} is required")]
    MissingField(&'static str),

    /// No usable session in the request
    #[error("Session not found or expired")]
    SessionInvalid,

    /// Identity source refused the credential; carries its message
    #[error("{0}")]
    ProviderRejected(String),

    /// Identity source accepted but returned no session
    #[error("Identity provider returned an empty session")]
    EmptySession,

    /// Identity source unreachable or failing
    #[error("Identity provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// Identity source answered with something we cannot read
    #[error("Unexpected identity provider response: {0}")]
    ProviderMalformed(String),

    /// Intermediate bundle cookie unreadable
    #[error("Session bundle malformed: {0}")]
    BundleMalformed(String),

    /// Client-side storage failed
    #[error("Client storage failure: {0}")]
    Storage(String),

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
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingField(_) | AuthError::BundleMalformed(_) => ErrorKind::BadRequest,
            AuthError::SessionInvalid
            | AuthError::ProviderRejected(_)
            | AuthError::EmptySession => ErrorKind::Unauthorized,
            AuthError::ProviderUnavailable(_) | AuthError::ProviderMalformed(_) => {
                ErrorKind::BadGateway
            }
            AuthError::Storage(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self) {
        match self {
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::Storage(msg) => {
                tracing::error!(message = %msg, "Client storage failure");
            }
            AuthError::ProviderUnavailable(msg) | AuthError::ProviderMalformed(msg) => {
                tracing::warn!(message = %msg, "Identity provider failure");
            }
            AuthError::ProviderRejected(msg) => {
                tracing::warn!(message = %msg, "Identity provider rejected credential");
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

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AuthError::ProviderMalformed(err.to_string())
        } else {
            AuthError::ProviderUnavailable(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AuthError::MissingField("pi_auth_token").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AuthError::SessionInvalid.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AuthError::ProviderUnavailable("timeout".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AuthError::Storage("quota".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_missing_field_message() {
        let err = AuthError::MissingField("pi_auth_token");
        assert_eq!(err.to_string(), "pi_auth_token is required");
        assert_eq!(err.to_app_error().message(), "pi_auth_token is required");
    }
}
