//! Session store trait defining the interface for refresh session records.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::DomainResult;

/// Key-value contract for refresh session records.
///
/// One record per user: the key is the user id, the value identifies the
/// refresh token backing the current session (its `jti`). A record
/// exists exactly while a not-yet-revoked refresh token for that user is
/// considered live. The store never auto-expires entries; cleanup is an
/// explicit `delete` or the token-level expiry check upstream.
///
/// Implementations must provide atomic per-key semantics; concurrent
/// writers resolve last-write-wins.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Upsert the session record for a user.
    async fn put(&self, user_id: Uuid, value: &str) -> DomainResult<()>;

    /// Remove the session record for a user.
    ///
    /// # Returns
    /// * `Ok(true)` - a record existed and was removed
    /// * `Ok(false)` - no record existed (not an error)
    /// * `Err(DomainError)` - store failure
    async fn delete(&self, user_id: Uuid) -> DomainResult<bool>;

    /// Whether a session record exists for a user.
    async fn exists(&self, user_id: Uuid) -> DomainResult<bool>;
}
