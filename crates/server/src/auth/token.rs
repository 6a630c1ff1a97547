//! Signed session token codec.
//!
//! Issues and verifies the HS256-signed tokens that back admin sessions.
//! Verification fails closed: a bad signature, malformed token, or expired
//! `exp` all come back as an error. Role checking is deliberately left to
//! the caller - a valid token with the wrong role still decodes.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Session lifetime: 24 hours from issuance.
const SESSION_LIFETIME_HOURS: i64 = 24;

/// Role claim value carried by admin sessions.
pub const ADMIN_ROLE: &str = "admin";

/// Errors from token issuance or verification.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Token is malformed, has a bad signature, or is otherwise unusable.
    #[error("invalid token")]
    TokenInvalid,
    /// Token was valid once but its expiry has passed.
    #[error("expired token")]
    TokenExpired,
}

/// Claims carried by a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Role of the authenticated principal ("admin" for dashboard sessions).
    pub role: String,
    /// Issued-at, seconds since the epoch.
    pub iat: i64,
    /// Expiry, seconds since the epoch.
    pub exp: i64,
}

impl SessionClaims {
    /// Whether these claims grant admin access.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

/// Codec for encoding and verifying session tokens.
///
/// Pure function of the token and the signing secret; holds no mutable state
/// and is cheap to share behind the application state.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenCodec {
    /// Create a codec from the configured session secret.
    #[must_use]
    pub fn new(secret: &SecretString) -> Self {
        let bytes = secret.expose_secret().as_bytes();
        Self {
            encoding_key: EncodingKey::from_secret(bytes),
            decoding_key: DecodingKey::from_secret(bytes),
        }
    }

    /// Issue a new admin session token, valid for 24 hours.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenInvalid` if encoding fails.
    pub fn issue_admin(&self) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = now + Duration::hours(SESSION_LIFETIME_HOURS);

        let claims = SessionClaims {
            role: ADMIN_ROLE.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AuthError::TokenInvalid)
    }

    /// Decode and validate a session token, returning its claims.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenExpired` for an expired token and
    /// `AuthError::TokenInvalid` for every other failure mode.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // No clock-skew grace: a token is invalid the second it expires.
        validation.leeway = 0;

        let data = jsonwebtoken::decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::TokenInvalid,
            })?;

        Ok(data.claims)
    }

    /// Session lifetime in seconds, for the cookie max-age.
    #[must_use]
    pub const fn lifetime_seconds() -> i64 {
        SESSION_LIFETIME_HOURS * 60 * 60
    }
}
