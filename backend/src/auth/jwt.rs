//! JWT token issuance and verification
//!
//! Tokens are self-contained: {sub, iat, exp} signed with the
//! process-wide secret. There is no server-side session table, so a
//! token stays valid until its expiry; that is the only revocation
//! mechanism.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Default session lifetime: 7 days
pub const DEFAULT_TOKEN_EXPIRY_SECS: i64 = 604_800;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// Parse the subject back into a user ID
    pub fn user_id(&self) -> Result<Uuid, TokenError> {
        Uuid::parse_str(&self.sub).map_err(|_| TokenError::Malformed)
    }
}

/// Why a token was rejected. Distinguished internally for logging; the
/// HTTP boundary collapses all of these into one generic 401.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token is malformed")]
    Malformed,
    #[error("token signature is invalid")]
    SignatureInvalid,
    #[error("token has expired")]
    Expired,
    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

/// Pre-computed JWT keys, derived once at startup from the secret and
/// cached because derivation is too expensive for per-request work.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }
}

/// JWT service for token operations
///
/// Cheap to clone (Arc'd keys); create once and store in AppState.
#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    token_expiry_secs: i64,
    validation: Validation,
}

impl JwtService {
    /// Create a new JWT service with pre-computed keys
    pub fn new(secret: &str, token_expiry_secs: i64) -> Self {
        let mut validation = Validation::default();
        // Expiry is exact: a token one second past exp is rejected.
        validation.leeway = 0;

        Self {
            keys: JwtKeys::new(secret),
            token_expiry_secs,
            validation,
        }
    }

    /// Sign a session token for a user
    pub fn sign(&self, user_id: Uuid) -> Result<String, TokenError> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.token_expiry_secs);

        let claims = Claims {
            sub: user_id.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, &self.keys.encoding).map_err(TokenError::Signing)
    }

    /// Verify a token and return its claims
    ///
    /// Checks structure, then signature, then expiry, and reports which
    /// one failed.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let token_data = decode::<Claims>(token, &self.keys.decoding, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::SignatureInvalid,
                _ => TokenError::Malformed,
            })?;

        Ok(token_data.claims)
    }

    /// Session lifetime in seconds
    #[inline]
    pub fn token_expiry_secs(&self) -> i64 {
        self.token_expiry_secs
    }
}
