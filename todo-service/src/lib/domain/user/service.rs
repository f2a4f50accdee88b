use std::sync::Arc;

use async_trait::async_trait;
use auth::Claims;
use auth::JwtError;
use auth::JwtHandler;
use auth::PasswordHasher;

use crate::user::errors::AuthError;
use crate::user::errors::ValidationError;
use crate::user::models::EmailAddress;
use crate::user::models::LoginRequest;
use crate::user::models::NewUser;
use crate::user::models::SignupRequest;
use crate::user::models::User;
use crate::user::models::UserId;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserRepository;

/// Authentication core.
///
/// Orchestrates signup, login, and token-to-identity resolution over an
/// injected user store and the credential primitives from the auth crate.
/// Stateless between calls; the only shared data is the read-only signing
/// key inside the codec.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: PasswordHasher,
    token_codec: JwtHandler,
    token_ttl_hours: i64,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new authentication service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `jwt_secret` - Symmetric signing key, owned by the caller's config
    /// * `token_ttl_hours` - Lifetime stamped into issued tokens
    pub fn new(repository: Arc<UR>, jwt_secret: &[u8], token_ttl_hours: i64) -> Self {
        Self {
            repository,
            password_hasher: PasswordHasher::new(),
            token_codec: JwtHandler::new(jwt_secret),
            token_ttl_hours,
        }
    }

    fn issue_token_for(&self, user_id: UserId) -> Result<String, JwtError> {
        let claims = Claims::for_user(user_id.as_u64(), self.token_ttl_hours);
        self.token_codec.encode(&claims)
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn signup(&self, request: SignupRequest) -> Result<String, AuthError> {
        if request.password.is_empty() {
            return Err(ValidationError::PasswordRequired.into());
        }

        if request.email.is_empty() {
            return Err(ValidationError::EmailRequired.into());
        }

        if request.password != request.password_confirmation {
            return Err(ValidationError::PasswordConfirmationMismatch.into());
        }

        let email = EmailAddress::new(request.email)?;
        let password_hash = self.password_hasher.hash(&request.password)?;

        let user = self
            .repository
            .create(NewUser {
                email,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = %user.id, "User registered");

        // The user row is not rolled back on signing failure; the created
        // id travels with the error so the caller can recover.
        self.issue_token_for(user.id)
            .map_err(|source| AuthError::TokenIssuanceFailed {
                user_id: user.id,
                source,
            })
    }

    async fn login(&self, request: LoginRequest) -> Result<String, AuthError> {
        if request.password.is_empty() {
            return Err(ValidationError::PasswordRequired.into());
        }

        if request.email.is_empty() {
            return Err(ValidationError::EmailRequired.into());
        }

        // Lookup precedes verification, so the hasher never runs for an
        // unknown email.
        let user = self
            .repository
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AuthError::NotFoundByEmail(request.email.clone()))?;

        let password_matches = self
            .password_hasher
            .verify(&request.password, &user.password_hash)?;

        if !password_matches {
            tracing::warn!(user_id = %user.id, "Login rejected: password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        Ok(self.issue_token_for(user.id)?)
    }

    async fn resolve_token(&self, token: &str) -> Result<User, AuthError> {
        if token.trim().is_empty() {
            return Err(JwtError::EmptyToken.into());
        }

        let claims: Claims = self.token_codec.decode(token)?;
        let user_id = UserId(claims.user_id()?);

        // A valid signature can still outlive its user (deleted account).
        self.repository
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::NotFound(user_id))
    }
}
