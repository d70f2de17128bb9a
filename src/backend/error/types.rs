/**
 * Backend Error Types
 *
 * The error taxonomy for the auth endpoints. Each variant maps to exactly
 * one HTTP status code, and the `Display` text is what the client sees in
 * the response body.
 *
 * # Categories
 *
 * - `Validation` - missing or malformed input, user-correctable (400)
 * - `EmailTaken` - registration with an email that already exists (409)
 * - `InvalidCredentials` - login failure; deliberately identical whether
 *   the user is unknown or the password is wrong (401)
 * - `Unauthorized` - protected endpoint called without a session cookie (401)
 * - `Forbidden` - session cookie present but invalid or expired (403)
 * - `NotFound` - a verified token references a user that no longer exists (404)
 * - `Internal` - unexpected failure; the detail is logged server-side and
 *   never surfaced to the caller (500)
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Errors produced by the auth endpoints
#[derive(Debug, Error)]
pub enum AuthError {
    /// Missing or malformed input
    #[error("{0}")]
    Validation(String),

    /// Email already registered
    #[error("Email already registered")]
    EmailTaken,

    /// Unknown user or wrong password; indistinguishable on purpose
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No session cookie on a protected endpoint
    #[error("Not authorized")]
    Unauthorized,

    /// Session cookie present but the token failed verification
    #[error("Invalid or expired token")]
    Forbidden,

    /// Token was valid but the referenced user is gone
    #[error("User not found")]
    NotFound,

    /// Unexpected failure; the payload is the server-side detail, which is
    /// logged but never shown to the caller
    #[error("Internal server error")]
    Internal(String),
}

impl AuthError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create an internal error carrying server-side detail
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal(detail.into())
    }

    /// The HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::EmailTaken => StatusCode::CONFLICT,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_code_mapping() {
        assert_eq!(
            AuthError::validation("missing field").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AuthError::EmailTaken.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            AuthError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AuthError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(AuthError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AuthError::internal("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_detail_is_not_in_display() {
        let error = AuthError::internal("bcrypt exploded: cost out of range");
        assert_eq!(error.to_string(), "Internal server error");
    }

    #[test]
    fn validation_message_is_displayed() {
        let error = AuthError::validation("email, password and name are required");
        assert_eq!(error.to_string(), "email, password and name are required");
    }
}
