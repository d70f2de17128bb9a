//! Backend Module
//!
//! Server-side code: the Axum HTTP server, auth endpoints, and everything
//! they compose.
//!
//! # Module Structure
//!
//! - **`auth`** - credential store, token service, cookie contract, handlers
//! - **`middleware`** - the authentication gate
//! - **`error`** - error taxonomy and HTTP conversion
//! - **`routes`** - router assembly
//! - **`server`** - configuration, state, initialization

/// Authentication: store, tokens, cookies, handlers
pub mod auth;

/// Request middleware
pub mod middleware;

/// Error taxonomy
pub mod error;

/// Router assembly
pub mod routes;

/// Configuration, state, and initialization
pub mod server;
