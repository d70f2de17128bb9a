//! Authgate - Session Authentication Service
//!
//! A minimal session-authentication service: register, login, logout, and
//! "who am I" endpoints backed by an in-memory user list, issuing a signed
//! JWT delivered via an HTTP-only cookie. A companion client façade and
//! session context consume the API.
//!
//! # Module Structure
//!
//! The library is organized into three main modules:
//!
//! - **`shared`** - Types shared between client and backend
//!   - The redacted user view and role enum
//!   - API request/response bodies
//!
//! - **`backend`** - Server-side code (only compiled with the `server`
//!   feature)
//!   - Axum HTTP server with the auth endpoints
//!   - In-memory credential store and JWT token service
//!   - Session cookie contract and authentication gate
//!
//! - **`client`** - Consumer-side code
//!   - `AuthClient`: credential-carrying HTTP calls with uniform error
//!     surfacing
//!   - `SessionContext`: the current-user state machine
//!
//! # Usage
//!
//! ## Server-Side
//!
//! ```rust,no_run
//! use authgate::backend::server::{config::ServerConfig, init::create_app};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(config)?;
//! // Serve `app` with axum
//! # Ok(())
//! # }
//! ```
//!
//! ## Client-Side
//!
//! ```rust,no_run
//! use authgate::client::{AuthClient, SessionContext};
//!
//! # async fn example() -> Result<(), authgate::client::ClientError> {
//! let client = AuthClient::new("http://127.0.0.1:3000")?;
//! let mut session = SessionContext::new(client);
//! session.bootstrap().await;
//! # Ok(())
//! # }
//! ```
//!
//! # Security Model
//!
//! - Passwords are bcrypt-hashed; hashes never appear in responses
//! - Sessions are stateless JWTs with a 24-hour expiry; logout clears the
//!   cookie but cannot revoke an issued token early
//! - The session cookie is HttpOnly, SameSite=Strict, and Secure in
//!   production
//! - The signing secret comes from validated configuration; startup fails
//!   without it

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "server")]
pub mod backend;

/// Client façade and session context
pub mod client;
