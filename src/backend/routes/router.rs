/**
 * Router Configuration
 *
 * Assembles the Axum router:
 *
 * - `GET  /`                  - liveness probe
 * - `POST /api/auth/register` - account creation
 * - `POST /api/auth/login`    - credential check
 * - `POST /api/auth/logout`   - cookie clearing
 * - `GET  /api/auth/me`       - current user, behind the auth gate
 *
 * The CORS layer allows exactly one origin with credentials; a
 * credentialed cross-origin setup must name its origin explicitly, since
 * browsers reject `Access-Control-Allow-Origin: *` together with cookies.
 */

use axum::{
    http::{header, Method},
    middleware,
    response::Json,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::backend::auth::handlers::{login, logout, me, register};
use crate::backend::middleware::auth::require_session;
use crate::backend::server::state::AppState;
use crate::shared::api::MessageResponse;

/// Create the router with all routes configured
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(state.config.cors_origin.clone())
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    let protected = Router::new()
        .route("/api/auth/me", get(me))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ));

    Router::new()
        .route("/", get(health))
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .merge(protected)
        .layer(cors)
        .fallback(|| async { "404 Not Found" })
        .with_state(state)
}

/// Liveness probe
async fn health() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Server running".to_string(),
    })
}
