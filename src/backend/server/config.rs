/**
 * Server Configuration
 *
 * Loads and validates server configuration from environment variables.
 *
 * # Configuration Sources
 *
 * | Variable              | Meaning                            | Default                 |
 * |-----------------------|------------------------------------|-------------------------|
 * | `SERVER_PORT`         | listen port                        | 3000                    |
 * | `JWT_SECRET`          | token signing secret               | **required**            |
 * | `APP_ENV`             | `production` enables Secure cookies| development             |
 * | `CORS_ALLOWED_ORIGIN` | the credentialed browser origin    | http://localhost:5173   |
 * | `ADMIN_EMAIL`         | seeded admin account (optional)    | unset                   |
 * | `ADMIN_PASSWORD`      | seeded admin password (optional)   | unset                   |
 *
 * # Fail-Fast Validation
 *
 * A missing or empty `JWT_SECRET` is a startup error, not a silent
 * fallback: a service signing sessions with a known default constant is
 * worse than one that refuses to boot. The CORS origin must also parse as
 * a header value up front, since a credentialed CORS setup cannot use a
 * wildcard and a typo'd origin would lock every browser out at runtime.
 */

use axum::http::HeaderValue;
use thiserror::Error;

/// Default listen port
const DEFAULT_PORT: u16 = 3000;

/// Default allowed browser origin (the Vite dev server)
const DEFAULT_CLIENT_ORIGIN: &str = "http://localhost:5173";

/// Configuration loading failures
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `JWT_SECRET` absent or empty
    #[error("JWT_SECRET is not set; refusing to start without a signing secret")]
    MissingSecret,

    /// `SERVER_PORT` did not parse
    #[error("invalid SERVER_PORT: {0}")]
    InvalidPort(String),

    /// `CORS_ALLOWED_ORIGIN` is not a valid header value
    #[error("invalid CORS_ALLOWED_ORIGIN: {0}")]
    InvalidOrigin(String),
}

/// Admin account seeded into the store at startup
#[derive(Debug, Clone)]
pub struct AdminSeed {
    pub email: String,
    pub password: String,
}

/// Validated server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen port
    pub port: u16,
    /// Token signing secret
    pub jwt_secret: String,
    /// Whether this deployment runs behind TLS
    pub production: bool,
    /// The single origin allowed to make credentialed browser requests
    pub cors_origin: HeaderValue,
    /// Optional admin account to seed at startup
    pub admin_seed: Option<AdminSeed>,
}

impl ServerConfig {
    /// Load and validate configuration from the environment
    ///
    /// # Errors
    ///
    /// Fails when the signing secret is absent, the port does not parse,
    /// or the CORS origin is not a valid header value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let jwt_secret = std::env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingSecret)?;

        let production = std::env::var("APP_ENV")
            .map(|v| v == "production")
            .unwrap_or(false);

        let origin =
            std::env::var("CORS_ALLOWED_ORIGIN").unwrap_or_else(|_| DEFAULT_CLIENT_ORIGIN.to_string());
        let cors_origin = origin
            .parse::<HeaderValue>()
            .map_err(|_| ConfigError::InvalidOrigin(origin))?;

        let admin_seed = match (std::env::var("ADMIN_EMAIL"), std::env::var("ADMIN_PASSWORD")) {
            (Ok(email), Ok(password)) if !email.is_empty() && !password.is_empty() => {
                Some(AdminSeed { email, password })
            }
            _ => None,
        };

        Ok(Self {
            port,
            jwt_secret,
            production,
            cors_origin,
            admin_seed,
        })
    }

    /// Whether session cookies should carry the Secure flag
    pub fn secure_cookies(&self) -> bool {
        self.production
    }
}
