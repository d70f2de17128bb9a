//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the backend and the client. All types are designed for serialization
//! and transmission over HTTP.
//!
//! # Overview
//!
//! - **`user`** - The public user view and role enum
//! - **`api`** - Request and response bodies for the auth endpoints
//!
//! The backend serializes these types into responses; the client
//! deserializes them back. Keeping them in one place guarantees both
//! sides agree on the wire format.

/// Public user representation and roles
pub mod user;

/// API request/response bodies
pub mod api;

/// Re-export commonly used types for convenience
pub use api::{AuthResponse, ErrorResponse, LoginRequest, MeResponse, MessageResponse, RegisterRequest};
pub use user::{Role, UserView};
