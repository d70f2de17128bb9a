/**
 * Server Initialization
 *
 * Builds the application from a validated configuration:
 *
 * 1. Create the empty in-memory credential store
 * 2. Seed the admin account when the configuration provides one
 * 3. Assemble the application state
 * 4. Create the router with all routes and layers
 *
 * Seeding hashes the admin password at startup; a hashing failure aborts
 * startup rather than leaving a half-initialized store.
 */

use axum::Router;

use crate::backend::auth::store::{NewUser, UserStore};
use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;
use crate::shared::user::Role;

/// Create and configure the application router
///
/// # Errors
///
/// Fails only when seeding the configured admin account cannot hash its
/// password.
pub fn create_app(config: ServerConfig) -> Result<Router, bcrypt::BcryptError> {
    tracing::info!("initializing auth service");

    let mut store = UserStore::new();

    if let Some(seed) = &config.admin_seed {
        let password_hash = bcrypt::hash(&seed.password, bcrypt::DEFAULT_COST)?;
        let admin = store.insert(NewUser {
            email: seed.email.clone(),
            password_hash,
            name: "Administrator".to_string(),
            role: Role::Admin,
        });
        tracing::info!("seeded admin account {} (id {})", admin.email, admin.id);
    }

    let state = AppState::new(config, store);

    Ok(create_router(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::server::config::AdminSeed;
    use axum::http::HeaderValue;

    fn config(admin_seed: Option<AdminSeed>) -> ServerConfig {
        ServerConfig {
            port: 0,
            jwt_secret: "test-secret".to_string(),
            production: false,
            cors_origin: HeaderValue::from_static("http://localhost:5173"),
            admin_seed,
        }
    }

    #[test]
    fn app_builds_without_admin_seed() {
        assert!(create_app(config(None)).is_ok());
    }

    #[test]
    fn app_builds_with_admin_seed() {
        let seed = AdminSeed {
            email: "admin@example.com".to_string(),
            password: "123456".to_string(),
        };
        assert!(create_app(config(Some(seed))).is_ok());
    }
}
