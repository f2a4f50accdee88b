use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// Claims carried by a bearer token.
///
/// Standard RFC 7519 fields only: the subject is the decimal user id, and
/// every token is stamped with issued-at and expiration timestamps. Fields
/// stay optional so that foreign tokens decode far enough to be rejected
/// with a precise error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Subject (decimal user id)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Expiration time (Unix timestamp, seconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Issued at (Unix timestamp, seconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl Claims {
    /// Create claims for a user token with a bounded lifetime.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier, becomes the `sub` claim
    /// * `expiration_hours` - Hours until the token expires
    pub fn for_user(user_id: u64, expiration_hours: i64) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(expiration_hours);

        Self {
            sub: Some(user_id.to_string()),
            exp: Some(expiration.timestamp()),
            iat: Some(now.timestamp()),
        }
    }

    /// Decode the subject claim back into a user id.
    ///
    /// # Errors
    /// * `MissingClaim` - the token carries no subject
    /// * `InvalidSubject` - the subject is not a decimal unsigned 64-bit id
    pub fn user_id(&self) -> Result<u64, JwtError> {
        let subject = self
            .sub
            .as_deref()
            .ok_or_else(|| JwtError::MissingClaim("sub".to_string()))?;

        subject
            .parse::<u64>()
            .map_err(|_| JwtError::InvalidSubject(subject.to_string()))
    }
}
