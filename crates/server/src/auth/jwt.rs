// JWT token service for authentication
// Decision: Use HS256 algorithm (symmetric key from process configuration)
// Decision: Tokens are stateless and never stored; they die at natural expiry
// Decision: Zero leeway on expiry so an elapsed token is always rejected

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use super::config::JwtConfig;

/// JWT claims carried by an authentication token
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    /// Claimed identity
    pub id: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

#[derive(Debug, Error)]
pub enum TokenError {
    /// Bad signature, malformed token or elapsed expiry
    #[error("invalid token: {0}")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),
    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

/// JWT service for token issuance and verification
#[derive(Clone)]
pub struct JwtService {
    token_lifetime: Duration,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtService {
    pub fn new(config: &JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            token_lifetime: config.token_lifetime,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issue a token for `identity`, expiring one lifetime from now
    pub fn issue(&self, identity: i64) -> Result<String, TokenError> {
        self.issue_at(identity, Utc::now())
    }

    /// Issue a token as if the current time were `now`
    pub fn issue_at(&self, identity: i64, now: DateTime<Utc>) -> Result<String, TokenError> {
        let iat = now.timestamp();
        let claims = TokenClaims {
            id: identity,
            iat,
            exp: iat.saturating_add(self.token_lifetime_secs()),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(TokenError::Signing)
    }

    /// Verify signature and expiry, returning the embedded identity
    pub fn verify(&self, token: &str) -> Result<i64, TokenError> {
        self.decode_claims(token).map(|claims| claims.id)
    }

    /// Verify signature and expiry, returning all claims
    pub fn decode_claims(&self, token: &str) -> Result<TokenClaims, TokenError> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(TokenError::InvalidToken)
    }

    /// Token lifetime in seconds, clamped to the timestamp range
    pub fn token_lifetime_secs(&self) -> i64 {
        i64::try_from(self.token_lifetime.as_secs()).unwrap_or(i64::MAX)
    }
}
