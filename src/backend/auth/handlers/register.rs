/**
 * Register Handler
 *
 * Implements user registration for POST /api/auth/register.
 *
 * # Registration Process
 *
 * 1. Validate that email, password, and name are present
 * 2. Reject emails without an '@'
 * 3. Reject emails that are already registered
 * 4. Hash the password with bcrypt
 * 5. Insert the user with the non-privileged role
 * 6. Issue a session token and set the session cookie
 *
 * The duplicate-email check and the insert happen under one write lock,
 * so two concurrent registrations for the same email cannot both succeed.
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt at DEFAULT_COST before storage
 * - The response body carries the redacted user view only
 * - Hashing or signing failures surface as an opaque 500
 */

use axum::{extract::State, http::StatusCode, response::Json};
use axum_extra::extract::cookie::CookieJar;
use bcrypt::{hash, DEFAULT_COST};

use crate::backend::auth::cookie::session_cookie;
use crate::backend::auth::store::NewUser;
use crate::backend::error::AuthError;
use crate::backend::server::state::AppState;
use crate::shared::api::{AuthResponse, RegisterRequest};
use crate::shared::user::Role;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - a required field is missing or the email is malformed
/// * `409 Conflict` - the email is already registered
/// * `500 Internal Server Error` - password hashing or token signing failed
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, CookieJar, Json<AuthResponse>), AuthError> {
    tracing::info!("register request for email: {}", request.email);

    if request.email.is_empty() || request.password.is_empty() || request.name.is_empty() {
        tracing::warn!("register request with missing fields");
        return Err(AuthError::validation(
            "email, password and name are required",
        ));
    }

    if !request.email.contains('@') {
        tracing::warn!("invalid email format: {}", request.email);
        return Err(AuthError::validation("Invalid email format"));
    }

    // Hash outside the lock; bcrypt is the slow part.
    let password_hash = hash(&request.password, DEFAULT_COST)
        .map_err(|e| AuthError::internal(format!("password hashing failed: {e}")))?;

    let user = {
        let mut store = state.store.write().await;

        if store.find_by_email(&request.email).is_some() {
            tracing::warn!("email already registered: {}", request.email);
            return Err(AuthError::EmailTaken);
        }

        store.insert(NewUser {
            email: request.email,
            password_hash,
            name: request.name,
            role: Role::User,
        })
    };

    let token = state
        .tokens
        .issue(user.id, &user.email)
        .map_err(|e| AuthError::internal(format!("token signing failed: {e}")))?;

    let jar = jar.add(session_cookie(token, state.config.secure_cookies()));

    tracing::info!("user registered: {} ({})", user.name, user.email);

    Ok((
        StatusCode::CREATED,
        jar,
        Json(AuthResponse {
            message: "Account created".to_string(),
            user: user.to_view(),
        }),
    ))
}
