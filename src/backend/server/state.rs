/**
 * Application State
 *
 * The central state container handed to every handler. Constructed once at
 * startup and injected through Axum's state extraction, never reached as a
 * module-level singleton, so tests can build isolated instances.
 *
 * # Thread Safety
 *
 * - `Arc<RwLock<UserStore>>` allows concurrent reads with exclusive
 *   writes, serializing store mutations across requests
 * - `TokenService` holds precomputed keys and is cheap to clone
 * - `Arc<ServerConfig>` shares the validated configuration
 */

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::backend::auth::store::UserStore;
use crate::backend::auth::tokens::TokenService;
use crate::backend::server::config::ServerConfig;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// The credential store; writes must hold the write lock
    pub store: Arc<RwLock<UserStore>>,

    /// Token signing and verification
    pub tokens: TokenService,

    /// Validated server configuration
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Assemble state from a validated configuration and a prepared store
    pub fn new(config: ServerConfig, store: UserStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            tokens: TokenService::new(&config.jwt_secret),
            config: Arc::new(config),
        }
    }
}
