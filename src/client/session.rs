/**
 * Session Context
 *
 * Holds the client-side view of "who is logged in" as an explicit state
 * machine: `Loading` until the startup check settles, then
 * `Authenticated` or `Unauthenticated`.
 *
 * A UI rendering under this context must show nothing interactive while
 * the state is `Loading`; that is what prevents a flash of the login
 * screen for a user whose cookie is still valid.
 *
 * Login and register update the state directly from the response body, no
 * extra round trip. Logout notifies the server best-effort and clears the
 * local state unconditionally: for UI purposes, local state is
 * authoritative.
 */

use crate::client::api::{AuthClient, ClientError};
use crate::shared::user::UserView;

/// Client-side session state
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// The startup session check has not settled yet
    Loading,
    /// A user is logged in
    Authenticated(UserView),
    /// No user is logged in
    Unauthenticated,
}

/// Reactive holder of the current user
pub struct SessionContext {
    client: AuthClient,
    state: SessionState,
    last_error: Option<String>,
}

impl SessionContext {
    /// Create a context in the `Loading` state
    ///
    /// Call [`bootstrap`](Self::bootstrap) to settle it.
    pub fn new(client: AuthClient) -> Self {
        Self {
            client,
            state: SessionState::Loading,
            last_error: None,
        }
    }

    /// Settle the startup state by asking the server who we are
    ///
    /// Success means the cookie held a valid session; any failure, of any
    /// kind, settles to `Unauthenticated`.
    pub async fn bootstrap(&mut self) {
        self.state = SessionState::Loading;

        match self.client.me().await {
            Ok(user) => {
                tracing::info!("session restored for {}", user.email);
                self.state = SessionState::Authenticated(user);
            }
            Err(e) => {
                tracing::debug!("no active session: {e}");
                self.state = SessionState::Unauthenticated;
            }
        }
    }

    /// Log in; on success the state becomes `Authenticated`
    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), ClientError> {
        match self.client.login(email, password).await {
            Ok(user) => {
                self.last_error = None;
                self.state = SessionState::Authenticated(user);
                Ok(())
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Register; on success the state becomes `Authenticated`
    pub async fn register(
        &mut self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<(), ClientError> {
        match self.client.register(email, password, name).await {
            Ok(user) => {
                self.last_error = None;
                self.state = SessionState::Authenticated(user);
                Ok(())
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Log out: notify the server best-effort, clear local state always
    pub async fn logout(&mut self) {
        if let Err(e) = self.client.logout().await {
            tracing::warn!("logout request failed: {e}");
        }
        self.state = SessionState::Unauthenticated;
    }

    /// Current state
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The logged-in user, if any
    pub fn current_user(&self) -> Option<&UserView> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// Whether a user is logged in
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated(_))
    }

    /// Whether the startup check is still pending
    pub fn is_loading(&self) -> bool {
        matches!(self.state, SessionState::Loading)
    }

    /// Message from the most recent failed login/register, if any
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::user::Role;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn user_json() -> serde_json::Value {
        serde_json::json!({
            "id": 1,
            "email": "a@example.com",
            "name": "A",
            "role": "user",
            "createdAt": "2024-01-01T00:00:00Z"
        })
    }

    async fn context(server: &MockServer) -> SessionContext {
        SessionContext::new(AuthClient::new(server.uri()).unwrap())
    }

    #[tokio::test]
    async fn starts_loading_and_settles_unauthenticated_on_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auth/me"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "error": "Not authorized"
            })))
            .mount(&server)
            .await;

        let mut session = context(&server).await;
        assert!(session.is_loading());

        session.bootstrap().await;
        assert!(!session.is_loading());
        assert!(!session.is_authenticated());
        assert_eq!(*session.state(), SessionState::Unauthenticated);
    }

    #[tokio::test]
    async fn bootstrap_restores_a_valid_session() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auth/me"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "user": user_json() })),
            )
            .mount(&server)
            .await;

        let mut session = context(&server).await;
        session.bootstrap().await;

        assert!(session.is_authenticated());
        let user = session.current_user().unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.role, Role::User);
    }

    #[tokio::test]
    async fn login_success_sets_user_from_response_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "message": "Login successful",
                "user": user_json()
            })))
            .mount(&server)
            .await;

        let mut session = context(&server).await;
        session.login("a@example.com", "pw").await.unwrap();

        assert!(session.is_authenticated());
        assert!(session.last_error().is_none());
        assert_eq!(session.current_user().unwrap().email, "a@example.com");
    }

    #[tokio::test]
    async fn failed_login_records_the_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "error": "Invalid credentials"
            })))
            .mount(&server)
            .await;

        let mut session = context(&server).await;
        let result = session.login("a@example.com", "wrong").await;

        assert!(result.is_err());
        assert!(!session.is_authenticated());
        assert_eq!(session.last_error(), Some("Invalid credentials"));
    }

    #[tokio::test]
    async fn logout_clears_state_even_when_the_server_fails() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "message": "Login successful",
                "user": user_json()
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/auth/logout"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let mut session = context(&server).await;
        session.login("a@example.com", "pw").await.unwrap();
        assert!(session.is_authenticated());

        session.logout().await;
        assert!(!session.is_authenticated());
        assert_eq!(*session.state(), SessionState::Unauthenticated);
    }
}
