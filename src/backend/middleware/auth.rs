/**
 * Authentication Gate
 *
 * Middleware protecting routes that require a session. It reads the session
 * cookie, verifies the token, and attaches the verified claims to the
 * request extensions for handlers to pick up via the `Session` extractor.
 *
 * The two failure modes are deliberately distinct:
 * - no cookie at all -> 401 Unauthorized
 * - cookie present but the token fails verification -> 403 Forbidden
 */

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::cookie::SESSION_COOKIE;
use crate::backend::auth::tokens::SessionClaims;
use crate::backend::error::AuthError;
use crate::backend::server::state::AppState;

/// Authentication gate middleware
///
/// Apply with `middleware::from_fn_with_state` to any route that requires
/// a valid session.
pub async fn require_session(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let cookie = jar.get(SESSION_COOKIE).ok_or_else(|| {
        tracing::warn!("session cookie missing");
        AuthError::Unauthorized
    })?;

    let claims = state.tokens.verify(cookie.value()).map_err(|e| {
        tracing::warn!("session token rejected: {e}");
        AuthError::Forbidden
    })?;

    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

/// Extractor for the verified session claims
///
/// Only succeeds on routes behind [`require_session`]; elsewhere the
/// extensions carry no claims and extraction fails with 401.
#[derive(Debug, Clone)]
pub struct Session(pub SessionClaims);

impl<S> axum::extract::FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionClaims>()
            .cloned()
            .map(Session)
            .ok_or_else(|| {
                tracing::warn!("session claims not found in request extensions");
                AuthError::Unauthorized
            })
    }
}
