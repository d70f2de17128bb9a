//! Backend Error Module
//!
//! This module defines the error taxonomy used by the auth endpoints.
//! Every handler returns `Result<_, AuthError>`; the `IntoResponse`
//! implementation converts each variant into one HTTP status plus a
//! minimal JSON body, so nothing propagates past the endpoint layer
//! uncaught.
//!
//! # Module Structure
//!
//! - **`types`** - Error type definitions and status code mapping
//! - **`conversion`** - `IntoResponse` implementation

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::AuthError;
