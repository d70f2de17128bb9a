/**
 * Login Handler
 *
 * Implements user authentication for POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up the user by email
 * 2. Verify the password against the stored bcrypt hash
 * 3. Issue a session token and set the session cookie
 *
 * # Security
 *
 * - An unknown email and a wrong password produce the identical error,
 *   so the endpoint never reveals whether an account exists
 * - Password comparison is constant-time (via bcrypt)
 * - Passwords are never logged or returned in responses
 */

use axum::{extract::State, response::Json};
use axum_extra::extract::cookie::CookieJar;
use bcrypt::verify;

use crate::backend::auth::cookie::session_cookie;
use crate::backend::error::AuthError;
use crate::backend::server::state::AppState;
use crate::shared::api::{AuthResponse, LoginRequest};

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - unknown email or wrong password (indistinguishable)
/// * `500 Internal Server Error` - hash comparison or token signing failed
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), AuthError> {
    tracing::info!("login request for email: {}", request.email);

    let user = {
        let store = state.store.read().await;
        store.find_by_email(&request.email).cloned()
    }
    .ok_or_else(|| {
        tracing::warn!("login failed for {}: unknown email", request.email);
        AuthError::InvalidCredentials
    })?;

    let valid = verify(&request.password, &user.password_hash)
        .map_err(|e| AuthError::internal(format!("password verification failed: {e}")))?;

    if !valid {
        tracing::warn!("login failed for {}: wrong password", request.email);
        return Err(AuthError::InvalidCredentials);
    }

    let token = state
        .tokens
        .issue(user.id, &user.email)
        .map_err(|e| AuthError::internal(format!("token signing failed: {e}")))?;

    let jar = jar.add(session_cookie(token, state.config.secure_cookies()));

    tracing::info!("user logged in: {} ({})", user.name, user.email);

    Ok((
        jar,
        Json(AuthResponse {
            message: "Login successful".to_string(),
            user: user.to_view(),
        }),
    ))
}
