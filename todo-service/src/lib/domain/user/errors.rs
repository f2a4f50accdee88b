use auth::JwtError;
use auth::PasswordError;
use thiserror::Error;

use crate::user::models::UserId;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid user id: {0}")]
    InvalidFormat(String),
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Field-level request validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("email is required")]
    EmailRequired,

    #[error("password is required")]
    PasswordRequired,

    #[error("passwords do not match")]
    PasswordConfirmationMismatch,
}

/// Top-level error for all authentication operations
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    // Request validation errors (automatically converted via #[from])
    #[error("Invalid request: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid user id: {0}")]
    InvalidUserId(#[from] UserIdError),

    // Domain-level errors
    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("User not found: {0}")]
    NotFound(UserId),

    #[error("User not found with email: {0}")]
    NotFoundByEmail(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    // Credential primitive errors
    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] JwtError),

    // Signup is not transactional: the user row already exists when token
    // signing fails, so the created id travels with the error.
    #[error("User {user_id} was created but token issuance failed: {source}")]
    TokenIssuanceFailed { user_id: UserId, source: JwtError },

    // Infrastructure errors
    #[error("Database error: {0}")]
    Database(String),
}
