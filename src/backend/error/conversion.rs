/**
 * Error Conversion
 *
 * Converts `AuthError` into an HTTP response: one status code plus a JSON
 * body of the shape `{"error": "<message>"}`.
 *
 * Internal errors log their detail here, at the boundary, so handlers can
 * carry the detail in the error value without worrying about leaking it:
 * the response body only ever contains the opaque display text.
 */

use axum::response::{IntoResponse, Json, Response};

use crate::backend::error::types::AuthError;
use crate::shared::api::ErrorResponse;

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        if let AuthError::Internal(detail) = &self {
            tracing::error!("internal error: {detail}");
        }

        let status = self.status_code();
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn internal_error_response_is_opaque() {
        let response = AuthError::internal("secret detail").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error, "Internal server error");
        assert!(!String::from_utf8_lossy(&bytes).contains("secret detail"));
    }

    #[tokio::test]
    async fn error_body_shape() {
        let response = AuthError::InvalidCredentials.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Invalid credentials");
    }
}
