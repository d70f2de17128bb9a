/**
 * Current User Handler
 *
 * Implements GET /api/auth/me. The route sits behind the authentication
 * gate, so by the time this handler runs the token has already been
 * verified and the claims attached to the request.
 *
 * The store lookup can still fail: a token outlives its user if the
 * process restarted (the store is in-memory), in which case the verified
 * id no longer resolves and the endpoint answers 404.
 */

use axum::{extract::State, response::Json};

use crate::backend::error::AuthError;
use crate::backend::middleware::auth::Session;
use crate::backend::server::state::AppState;
use crate::shared::api::MeResponse;

/// Current user handler
///
/// # Errors
///
/// * `404 Not Found` - the token's user no longer exists
pub async fn me(
    State(state): State<AppState>,
    Session(claims): Session,
) -> Result<Json<MeResponse>, AuthError> {
    let store = state.store.read().await;

    let user = store.find_by_id(claims.user_id).ok_or_else(|| {
        tracing::warn!("user {} no longer exists", claims.user_id);
        AuthError::NotFound
    })?;

    Ok(Json(MeResponse {
        user: user.to_view(),
    }))
}
