//! Mock implementation of SessionStore for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::{DomainError, DomainResult};

use super::r#trait::SessionStore;

/// In-memory session store for tests.
#[derive(Default)]
pub struct MockSessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, String>>>,
    failing: AtomicBool,
}

impl MockSessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call fail with a store error.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check_failure(&self) -> DomainResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::store("mock session store unavailable"));
        }
        Ok(())
    }

    /// Number of live session records.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Current session value for a user, if any.
    pub async fn get(&self, user_id: Uuid) -> Option<String> {
        self.sessions.read().await.get(&user_id).cloned()
    }
}

#[async_trait]
impl SessionStore for MockSessionStore {
    async fn put(&self, user_id: Uuid, value: &str) -> DomainResult<()> {
        self.check_failure()?;
        let mut sessions = self.sessions.write().await;
        sessions.insert(user_id, value.to_string());
        Ok(())
    }

    async fn delete(&self, user_id: Uuid) -> DomainResult<bool> {
        self.check_failure()?;
        let mut sessions = self.sessions.write().await;
        Ok(sessions.remove(&user_id).is_some())
    }

    async fn exists(&self, user_id: Uuid) -> DomainResult<bool> {
        self.check_failure()?;
        let sessions = self.sessions.read().await;
        Ok(sessions.contains_key(&user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_overwrites() {
        let store = MockSessionStore::new();
        let user_id = Uuid::new_v4();

        store.put(user_id, "first").await.unwrap();
        store.put(user_id, "second").await.unwrap();

        assert_eq!(store.len().await, 1);
        assert_eq!(store.get(user_id).await.as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn test_delete_reports_existence() {
        let store = MockSessionStore::new();
        let user_id = Uuid::new_v4();

        store.put(user_id, "value").await.unwrap();
        assert!(store.delete(user_id).await.unwrap());
        assert!(!store.delete(user_id).await.unwrap());
        assert!(!store.exists(user_id).await.unwrap());
    }

    #[tokio::test]
    async fn test_failing_store_surfaces_errors() {
        let store = MockSessionStore::new();
        store.set_failing(true);

        let result = store.put(Uuid::new_v4(), "value").await;
        assert!(matches!(result, Err(DomainError::Store { .. })));
    }
}
