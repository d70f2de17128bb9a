//! Middleware Module
//!
//! Request-level middleware for the server. Currently this is only the
//! authentication gate protecting the profile endpoint.

/// Authentication gate and session extractor
pub mod auth;
