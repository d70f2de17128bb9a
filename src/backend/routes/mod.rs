//! Routes Module
//!
//! Router assembly for the HTTP surface.

/// Router creation
pub mod router;

pub use router::create_router;
