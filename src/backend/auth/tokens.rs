/**
 * Session Tokens
 *
 * JWT issuance and verification for user sessions. Tokens are signed with
 * HS256 over a secret supplied by validated configuration; there is no
 * in-code fallback secret, so a misconfigured deployment fails at startup
 * instead of silently signing with a known constant.
 *
 * Tokens are not stored server-side. Validity is purely a function of
 * signature and expiry, which means logout cannot invalidate an
 * already-issued token before its natural expiry.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Token lifetime: 24 hours
pub const TOKEN_TTL_SECS: u64 = 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Email
    pub email: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Verified session identity, extracted from a valid token
#[derive(Debug, Clone)]
pub struct SessionClaims {
    pub user_id: i64,
    pub email: String,
}

/// Why a token was rejected
#[derive(Debug, Error)]
pub enum InvalidToken {
    /// Signature mismatch, malformed payload, or elapsed expiry
    #[error("token rejected: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// The subject claim did not parse as a user id
    #[error("malformed subject claim")]
    BadSubject,
}

/// Signs and verifies session tokens
///
/// Keys are derived once from the configured secret and cloned into the
/// application state.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    /// Build a service from the signing secret
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_ref()),
            decoding_key: DecodingKey::from_secret(secret.as_ref()),
        }
    }

    /// Issue a signed token for a user
    ///
    /// Embeds the user id and email, with a fixed 24-hour expiry.
    pub fn issue(&self, user_id: i64, email: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let now = unix_now();

        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: now,
            exp: now + TOKEN_TTL_SECS,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
    }

    /// Verify a token and extract the session identity
    ///
    /// Fails if the signature does not match, the payload is malformed,
    /// or the expiry has elapsed.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, InvalidToken> {
        let validation = Validation::default();
        let data = decode::<Claims>(token, &self.decoding_key, &validation)?;

        let user_id = data
            .claims
            .sub
            .parse::<i64>()
            .map_err(|_| InvalidToken::BadSubject)?;

        Ok(SessionClaims {
            user_id,
            email: data.claims.email,
        })
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs()
}
