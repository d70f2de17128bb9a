/**
 * Logout Handler
 *
 * Implements POST /api/auth/logout. Unconditionally clears the session
 * cookie and acknowledges; no token or credential validation is performed.
 *
 * Because tokens are stateless, an already-issued token stays verifiable
 * until its natural expiry. Logout only removes the cookie from the
 * browser.
 */

use axum::{extract::State, response::Json};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::cookie::clear_session_cookie;
use crate::backend::server::state::AppState;
use crate::shared::api::MessageResponse;

/// Logout handler
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    // The clearing cookie must carry the same attribute set the session
    // cookie was set with, or browsers will not remove it.
    let jar = jar.add(clear_session_cookie(state.config.secure_cookies()));

    tracing::info!("session cookie cleared");

    (
        jar,
        Json(MessageResponse {
            message: "Logged out".to_string(),
        }),
    )
}
