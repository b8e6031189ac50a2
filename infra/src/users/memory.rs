//! In-process user record store
//!
//! Keeps registered users in a `RwLock`-guarded map keyed by lowercased
//! email. Suitable for development and integration tests; a durable
//! store plugs in behind the same `UserRepository` trait.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use ge_core::domain::entities::user::User;
use ge_core::errors::{DomainError, DomainResult};
use ge_core::repositories::UserRepository;

/// Thread-safe in-memory user repository.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&email.to_lowercase()).cloned())
    }

    async fn create(&self, user: User) -> DomainResult<User> {
        let mut users = self.users.write().await;
        let key = user.email.to_lowercase();

        if users.contains_key(&key) {
            return Err(DomainError::conflict(format!(
                "{} has already been registered",
                user.email
            )));
        }

        debug!(user_id = %user.id, "user record stored");
        users.insert(key, user.clone());
        Ok(user)
    }

    async fn admin_exists(&self) -> DomainResult<bool> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.is_admin()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ge_core::domain::entities::user::{NewUser, Role};

    fn sample_user(email: &str, role: Role) -> User {
        User::new(
            NewUser {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                email: email.to_string(),
                phone: "0412345678".to_string(),
                country_code: "+61".to_string(),
                password: "difference engine".to_string(),
            },
            role,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_and_find_by_email() {
        let repo = InMemoryUserRepository::new();
        let user = sample_user("ada@example.com", Role::User);

        repo.create(user.clone()).await.unwrap();

        let found = repo.find_by_email("ada@example.com").await.unwrap();
        assert_eq!(found.map(|u| u.id), Some(user.id));
    }

    #[tokio::test]
    async fn test_email_lookup_is_case_insensitive() {
        let repo = InMemoryUserRepository::new();
        repo.create(sample_user("Ada@Example.com", Role::User))
            .await
            .unwrap();

        let found = repo.find_by_email("ada@example.com").await.unwrap();
        assert!(found.is_some());
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let repo = InMemoryUserRepository::new();
        repo.create(sample_user("ada@example.com", Role::User))
            .await
            .unwrap();

        let err = repo
            .create(sample_user("ada@example.com", Role::User))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_admin_exists() {
        let repo = InMemoryUserRepository::new();
        assert!(!repo.admin_exists().await.unwrap());

        repo.create(sample_user("user@example.com", Role::User))
            .await
            .unwrap();
        assert!(!repo.admin_exists().await.unwrap());

        repo.create(sample_user("root@example.com", Role::Admin))
            .await
            .unwrap();
        assert!(repo.admin_exists().await.unwrap());
    }
}
