//! Client Module
//!
//! Consumer-side code for the auth service: an HTTP façade over the four
//! endpoints and a session-context state machine for UIs to render from.
//!
//! # Module Structure
//!
//! - **`api`** - `AuthClient`, one credential-carrying call per endpoint
//! - **`session`** - `SessionContext`, the reactive current-user holder
//!
//! The façade's cookie store stands in for the browser: the session
//! cookie travels automatically, so callers never touch the token.

/// HTTP façade over the auth endpoints
pub mod api;

/// Current-user state machine
pub mod session;

// Re-export commonly used types
pub use api::{AuthClient, ClientError};
pub use session::{SessionContext, SessionState};
