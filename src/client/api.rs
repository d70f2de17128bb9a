/**
 * Auth Client
 *
 * HTTP façade over the auth endpoints. The reqwest cookie store plays the
 * browser's role: the session cookie set by register/login is carried
 * automatically on subsequent requests and dropped when the server clears
 * it.
 *
 * # Error Surfacing
 *
 * Every non-2xx response is normalized into `ClientError::Api`, carrying
 * the server-supplied message when the body parses and a generic message
 * otherwise. The authenticated-fetch helper additionally treats HTTP 401
 * as a global session-expiry signal: it fires the registered expiry hook
 * (where a browser app would navigate to its login page) and fails with
 * `ClientError::SessionExpired`, independent of the call site.
 */

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::shared::api::{
    AuthResponse, ErrorResponse, LoginRequest, MeResponse, MessageResponse, RegisterRequest,
};
use crate::shared::user::UserView;

/// Default server URL
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Explicit request timeout; the environment provides none on its own
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors surfaced by the client façade
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-success status
    #[error("{message}")]
    Api {
        status: StatusCode,
        message: String,
    },

    /// An authenticated call hit 401: the session is gone
    #[error("Session expired")]
    SessionExpired,

    /// Transport or decoding failure
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

type ExpiredHook = Arc<dyn Fn() + Send + Sync>;

/// HTTP client for the auth endpoints
#[derive(Clone)]
pub struct AuthClient {
    http: Client,
    base_url: String,
    on_session_expired: Option<ExpiredHook>,
}

impl AuthClient {
    /// Build a client for the given server base URL
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = Client::builder()
            .cookie_store(true)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            on_session_expired: None,
        })
    }

    /// Build a client from `CLIENT_API_URL`, falling back to the default
    pub fn from_env() -> Result<Self, ClientError> {
        let url =
            std::env::var("CLIENT_API_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        Self::new(url)
    }

    /// Register a hook invoked whenever an authenticated call hits 401
    ///
    /// A UI would navigate to its login surface here.
    pub fn with_session_expired_handler(
        mut self,
        hook: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        self.on_session_expired = Some(Arc::new(hook));
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Register a new account
    ///
    /// On success the session cookie lands in the cookie store and the
    /// redacted user record is returned.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<UserView, ClientError> {
        let request = RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
            name: name.to_string(),
        };

        let response = self
            .http
            .post(self.url("/api/auth/register"))
            .json(&request)
            .send()
            .await?;

        let body: AuthResponse = into_json(response).await?;
        Ok(body.user)
    }

    /// Log in with email and password
    pub async fn login(&self, email: &str, password: &str) -> Result<UserView, ClientError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self
            .http
            .post(self.url("/api/auth/login"))
            .json(&request)
            .send()
            .await?;

        let body: AuthResponse = into_json(response).await?;
        Ok(body.user)
    }

    /// Log out, letting the server clear the session cookie
    pub async fn logout(&self) -> Result<(), ClientError> {
        let response = self.http.post(self.url("/api/auth/logout")).send().await?;
        into_json::<MessageResponse>(response).await?;
        Ok(())
    }

    /// Fetch the current user via the session cookie
    pub async fn me(&self) -> Result<UserView, ClientError> {
        let response = self
            .fetch_with_auth(self.http.get(self.url("/api/auth/me")))
            .await?;

        let body: MeResponse = into_json(response).await?;
        Ok(body.user)
    }

    /// Send a credential-carrying request, escalating 401 to session expiry
    ///
    /// Useful for any future protected endpoint, not just the profile
    /// call.
    pub async fn fetch_with_auth(&self, request: RequestBuilder) -> Result<Response, ClientError> {
        let response = request.send().await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            if let Some(hook) = &self.on_session_expired {
                hook();
            }
            return Err(ClientError::SessionExpired);
        }

        Ok(response)
    }
}

/// Normalize a response: decode success bodies, turn failures into `Api`
async fn into_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();

    if !status.is_success() {
        let message = response
            .json::<ErrorResponse>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| format!("request failed with status {status}"));
        return Err(ClientError::Api { status, message });
    }

    Ok(response.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn non_success_is_normalized_with_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(serde_json::json!({
                    "error": "Invalid credentials"
                })),
            )
            .mount(&server)
            .await;

        let client = AuthClient::new(server.uri()).unwrap();
        let error = client.login("a@example.com", "wrong").await.unwrap_err();

        match error {
            ClientError::Api { status, message } => {
                assert_eq!(status, StatusCode::UNAUTHORIZED);
                assert_eq!(message, "Invalid credentials");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unparseable_error_body_gets_a_generic_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/register"))
            .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = AuthClient::new(server.uri()).unwrap();
        let error = client.register("a@example.com", "pw", "A").await.unwrap_err();

        match error {
            ClientError::Api { status, message } => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert!(message.contains("500"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn authenticated_fetch_escalates_401_and_fires_hook() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auth/me"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "error": "Not authorized"
            })))
            .mount(&server)
            .await;

        static HOOK_FIRED: AtomicBool = AtomicBool::new(false);

        let client = AuthClient::new(server.uri())
            .unwrap()
            .with_session_expired_handler(|| {
                HOOK_FIRED.store(true, Ordering::SeqCst);
            });

        let error = client.me().await.unwrap_err();
        assert!(matches!(error, ClientError::SessionExpired));
        assert!(HOOK_FIRED.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn login_401_is_plain_credentials_error_not_expiry() {
        // The expiry escalation belongs to authenticated fetches only; a
        // failed login is an ordinary API error.
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "error": "Invalid credentials"
            })))
            .mount(&server)
            .await;

        let client = AuthClient::new(server.uri())
            .unwrap()
            .with_session_expired_handler(|| panic!("hook must not fire on login"));

        let error = client.login("a@example.com", "wrong").await.unwrap_err();
        assert!(matches!(error, ClientError::Api { .. }));
    }

    #[tokio::test]
    async fn forbidden_me_is_an_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auth/me"))
            .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
                "error": "Invalid or expired token"
            })))
            .mount(&server)
            .await;

        let client = AuthClient::new(server.uri()).unwrap();
        let error = client.me().await.unwrap_err();

        match error {
            ClientError::Api { status, message } => {
                assert_eq!(status, StatusCode::FORBIDDEN);
                assert_eq!(message, "Invalid or expired token");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }
}
