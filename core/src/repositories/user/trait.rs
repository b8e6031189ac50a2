//! User repository trait defining the interface for user record persistence.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainResult;

/// Contract the auth service needs from a user record store.
///
/// The service only consumes identity and role from the records it gets
/// back; everything else about persistence is the implementation's
/// business.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Look up a user by email address.
    ///
    /// # Returns
    /// * `Ok(Some(User))` - user found
    /// * `Ok(None)` - no user registered under this email
    /// * `Err(DomainError)` - store failure
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    /// Persist a new user record.
    ///
    /// # Returns
    /// * `Ok(User)` - the stored record
    /// * `Err(DomainError::Conflict)` - email already registered
    /// * `Err(DomainError)` - store failure
    async fn create(&self, user: User) -> DomainResult<User>;

    /// Whether any admin account exists yet.
    async fn admin_exists(&self) -> DomainResult<bool>;
}
