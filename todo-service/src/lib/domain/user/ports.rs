use async_trait::async_trait;

use crate::user::errors::AuthError;
use crate::user::models::LoginRequest;
use crate::user::models::NewUser;
use crate::user::models::SignupRequest;
use crate::user::models::User;
use crate::user::models::UserId;

/// Port for the authentication service.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user and issue a bearer token for them.
    ///
    /// # Arguments
    /// * `request` - Raw signup credentials (email, password, confirmation)
    ///
    /// # Returns
    /// Signed bearer token for the created user
    ///
    /// # Errors
    /// * `Validation` / `InvalidEmail` - a field failed validation
    /// * `EmailAlreadyExists` - email is already registered
    /// * `TokenIssuanceFailed` - user was created but signing failed
    /// * `Database` - store operation failed
    async fn signup(&self, request: SignupRequest) -> Result<String, AuthError>;

    /// Verify credentials and issue a bearer token.
    ///
    /// # Arguments
    /// * `request` - Raw login credentials (email, password)
    ///
    /// # Returns
    /// Signed bearer token for the authenticated user
    ///
    /// # Errors
    /// * `Validation` - a field is empty
    /// * `NotFoundByEmail` - no user with this email
    /// * `InvalidCredentials` - password does not match
    /// * `Database` - store operation failed
    async fn login(&self, request: LoginRequest) -> Result<String, AuthError>;

    /// Resolve a bearer token back to the user it was issued for.
    ///
    /// # Arguments
    /// * `token` - Compact token string, already stripped of any scheme
    ///
    /// # Returns
    /// The user identified by the token's subject
    ///
    /// # Errors
    /// * `Token` - empty, malformed, mis-signed, or expired token
    /// * `NotFound` - subject no longer resolves to a stored user
    /// * `Database` - store operation failed
    async fn resolve_token(&self, token: &str) -> Result<User, AuthError>;
}

/// Persistence operations for the user store.
///
/// `Ok(None)` means "no such user"; `Err` is reserved for transport and
/// storage failures, so callers can map the two differently.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user; the store assigns the id.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - unique-email constraint violated
    /// * `Database` - store operation failed
    async fn create(&self, user: NewUser) -> Result<User, AuthError>;

    /// Retrieve a user by email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError>;

    /// Retrieve a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, AuthError>;
}
