/**
 * API Request and Response Types
 *
 * These types define the JSON bodies exchanged on the auth endpoints.
 * They are shared so the client façade and the server handlers cannot
 * drift apart.
 */

use serde::{Deserialize, Serialize};

use crate::shared::user::UserView;

/// Registration request
///
/// All three fields are required. They default to empty strings on
/// deserialization so that an absent field is reported as a validation
/// error by the handler rather than a deserialization rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// User's email address
    #[serde(default)]
    pub email: String,
    /// User's password (hashed before storage, never stored as-is)
    #[serde(default)]
    pub password: String,
    /// Display name
    #[serde(default)]
    pub name: String,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// User's email address
    #[serde(default)]
    pub email: String,
    /// User's password (verified against the stored hash)
    #[serde(default)]
    pub password: String,
}

/// Response for register and login
///
/// The session token itself travels in the `Set-Cookie` header, not in
/// the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Human-readable outcome message
    pub message: String,
    /// The redacted user record
    pub user: UserView,
}

/// Response for the profile endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    /// The redacted user record
    pub user: UserView,
}

/// Bare acknowledgment response (logout, liveness)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable outcome message
    pub message: String,
}

/// Error body returned by every failing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}
