use thiserror::Error;

/// Error type for JWT operations.
#[derive(Debug, Clone, Error)]
pub enum JwtError {
    #[error("Token is an empty string")]
    EmptyToken,

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is not a well-formed JWT: {0}")]
    Malformed(String),

    #[error("Token was signed with an unexpected algorithm")]
    AlgorithmMismatch,

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is expired")]
    TokenExpired,

    #[error("Missing required claim: {0}")]
    MissingClaim(String),

    #[error("Subject claim is not a valid user id: {0}")]
    InvalidSubject(String),
}
