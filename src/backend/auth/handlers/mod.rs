//! Authentication Handlers Module
//!
//! HTTP handlers for the auth endpoints.
//!
//! # Handlers
//!
//! - **`register`** - POST /api/auth/register - account creation
//! - **`login`** - POST /api/auth/login - credential check
//! - **`logout`** - POST /api/auth/logout - cookie clearing
//! - **`me`** - GET /api/auth/me - current user (behind the auth gate)
//!
//! Request state lives per request, never per session: each handler is
//! independent and "being logged in" is entirely encoded in the cookie
//! token.

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

/// Current user handler
pub mod me;

// Re-export handlers
pub use login::login;
pub use logout::logout;
pub use me::me;
pub use register::register;
