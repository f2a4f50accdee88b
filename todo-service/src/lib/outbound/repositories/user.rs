use async_trait::async_trait;
use sqlx::PgPool;

use crate::user::errors::AuthError;
use crate::user::models::EmailAddress;
use crate::user::models::NewUser;
use crate::user::models::User;
use crate::user::models::UserId;
use crate::user::ports::UserRepository;

/// Postgres-backed user store.
///
/// Ids are `BIGSERIAL` values assigned by the database; the unique index on
/// `email` enforces one account per address, and its violation is surfaced
/// as `EmailAlreadyExists` rather than a generic storage error.
pub struct PostgresUserRepository {
    pool: PgPool,
}

#[derive(Debug, Clone, sqlx::FromRow)]
struct UserRow {
    id: i64,
    email: String,
    password_hash: String,
}

impl UserRow {
    fn into_user(self) -> Result<User, AuthError> {
        Ok(User {
            id: UserId(self.id as u64),
            email: EmailAddress::new(self.email)
                .map_err(|e| AuthError::Database(format!("Corrupt email column: {}", e)))?,
            password_hash: self.password_hash,
        })
    }
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, AuthError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (email, password_hash)
            VALUES ($1, $2)
            RETURNING id, email, password_hash
            "#,
        )
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AuthError::EmailAlreadyExists(user.email.as_str().to_string());
                }
            }
            AuthError::Database(e.to_string())
        })?;

        row.into_user()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password_hash
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::Database(e.to_string()))?;

        row.map(UserRow::into_user).transpose()
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, AuthError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password_hash
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.as_u64() as i64)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::Database(e.to_string()))?;

        row.map(UserRow::into_user).transpose()
    }
}
