//! Stateless bearer token issuance and verification.
//!
//! Tokens are HS256-signed JWTs carrying the owner identity. Nothing is
//! persisted server-side; validity is determined purely by signature and
//! expiry at verification time, so verification is side-effect-free.

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::AppError;

/// JWT claims embedded in every session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// The account's username.
    pub username: String,
    /// The account's email -- the stable key used for ownership scoping.
    pub email: String,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
}

/// Authenticated caller identity extracted from a verified token.
///
/// Inserted into request extensions by the auth middleware and consumed by
/// owner-scoped handlers.
#[derive(Debug, Clone)]
pub struct Identity {
    pub username: String,
    pub email: String,
}

/// Service for issuing and verifying session tokens.
pub struct TokenService {
    secret: String,
    ttl_seconds: i64,
}

impl TokenService {
    /// Creates a new token service.
    ///
    /// # Arguments
    ///
    /// - `secret` - HMAC key; must match across all service instances
    /// - `ttl_seconds` - token lifetime from issuance
    pub fn new(secret: String, ttl_seconds: i64) -> Self {
        Self {
            secret,
            ttl_seconds,
        }
    }

    /// Issues an HS256 token for the given identity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if signing fails.
    pub fn issue(&self, username: &str, email: &str) -> Result<String, AppError> {
        let now = chrono::Utc::now().timestamp();

        let claims = Claims {
            username: username.to_string(),
            email: email.to_string(),
            iat: now,
            exp: now + self.ttl_seconds,
        };

        encode(
            &Header::default(), // HS256
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AppError::internal("Failed to sign token", json!({ "source": e.to_string() })))
    }

    /// Verifies a token and returns the embedded identity.
    ///
    /// Signature and expiry are both checked; an expired or tampered token
    /// is indistinguishable from a forged one in the response.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] for any invalid token.
    pub fn verify(&self, token: &str) -> Result<Identity, AppError> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(), // HS256, validates exp
        )
        .map_err(|_| {
            AppError::unauthorized(
                "Invalid token",
                json!({ "reason": "Bad signature or expired" }),
            )
        })?;

        Ok(Identity {
            username: data.claims.username,
            email: data.claims.email,
        })
    }
}
