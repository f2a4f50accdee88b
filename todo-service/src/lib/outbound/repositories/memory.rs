use std::collections::HashMap;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::user::errors::AuthError;
use crate::user::models::NewUser;
use crate::user::models::User;
use crate::user::models::UserId;
use crate::user::ports::UserRepository;

/// In-memory user store.
///
/// Same id-assignment and unique-email semantics as the Postgres store,
/// without the I/O. Integration tests run against this so they need no
/// database.
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<u64, User>>,
    next_id: AtomicU64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<u64, User>>, AuthError> {
        self.users
            .lock()
            .map_err(|_| AuthError::Database("User store mutex poisoned".to_string()))
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, AuthError> {
        let mut users = self.lock()?;

        if users
            .values()
            .any(|existing| existing.email == user.email)
        {
            return Err(AuthError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let created = User {
            id: UserId(id),
            email: user.email,
            password_hash: user.password_hash,
        };
        users.insert(id, created.clone());

        Ok(created)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        let users = self.lock()?;
        Ok(users
            .values()
            .find(|user| user.email.as_str() == email)
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, AuthError> {
        let users = self.lock()?;
        Ok(users.get(&id.as_u64()).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::models::EmailAddress;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            email: EmailAddress::new(email.to_string()).unwrap(),
            password_hash: "$argon2id$unused".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryUserRepository::new();

        let first = repo.create(new_user("a@b.com")).await.unwrap();
        let second = repo.create(new_user("c@d.com")).await.unwrap();

        assert_eq!(first.id, UserId(1));
        assert_eq!(second.id, UserId(2));
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_email() {
        let repo = InMemoryUserRepository::new();

        repo.create(new_user("a@b.com")).await.unwrap();
        let result = repo.create(new_user("a@b.com")).await;

        assert!(matches!(
            result.unwrap_err(),
            AuthError::EmailAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_lookups_distinguish_absent_from_present() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(new_user("a@b.com")).await.unwrap();

        assert_eq!(
            repo.find_by_email("a@b.com").await.unwrap(),
            Some(created.clone())
        );
        assert_eq!(repo.find_by_email("ghost@b.com").await.unwrap(), None);
        assert_eq!(repo.find_by_id(created.id).await.unwrap(), Some(created));
        assert_eq!(repo.find_by_id(UserId(999)).await.unwrap(), None);
    }
}
