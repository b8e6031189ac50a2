//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult};

use super::r#trait::UserRepository;

/// In-memory user repository for tests, keyed by lowercased email.
#[derive(Default)]
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
    failing: AtomicBool,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call fail with a store error.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check_failure(&self) -> DomainResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::store("mock user repository unavailable"));
        }
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        self.check_failure()?;
        let users = self.users.read().await;
        Ok(users.get(&email.to_lowercase()).cloned())
    }

    async fn create(&self, user: User) -> DomainResult<User> {
        self.check_failure()?;
        let mut users = self.users.write().await;
        let key = user.email.to_lowercase();

        if users.contains_key(&key) {
            return Err(DomainError::conflict(format!(
                "{} has already been registered",
                user.email
            )));
        }

        users.insert(key, user.clone());
        Ok(user)
    }

    async fn admin_exists(&self) -> DomainResult<bool> {
        self.check_failure()?;
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.is_admin()))
    }
}
