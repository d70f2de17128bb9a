//! Authentication Module
//!
//! This module handles user registration, login, and session management.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`store`** - In-memory credential store
//! - **`tokens`** - JWT issuance and verification
//! - **`cookie`** - Session cookie attribute contract
//! - **`handlers`** - HTTP handlers for the auth endpoints
//!
//! # Authentication Flow
//!
//! 1. **Register**: email, password, name -> user created -> cookie set
//! 2. **Login**: email, password -> credentials verified -> cookie set
//! 3. **Me**: session cookie -> token verified -> user info returned
//! 4. **Logout**: cookie cleared, no validation
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - JWT tokens are used for stateless authentication, expiring after 24h
//! - Invalid credentials return 401 with no information leakage
//! - The session cookie is HttpOnly and SameSite=Strict

/// In-memory credential store
pub mod store;

/// JWT token generation and validation
pub mod tokens;

/// Session cookie contract
pub mod cookie;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{login, logout, me, register};
pub use store::{NewUser, User, UserStore};
pub use tokens::{SessionClaims, TokenService};
