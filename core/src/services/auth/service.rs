//! Main authentication service implementation

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::{NewUser, Role, User};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{SessionStore, UserRepository};
use crate::services::token::TokenService;

use super::filters::capitalize;

/// Authentication service for the complete credential flow.
///
/// Acts as the refresh coordinator: rotation and logout consult the
/// session store through here, while pure token issuance and
/// verification stay in [`TokenService`].
pub struct AuthService<U, S>
where
    U: UserRepository,
    S: SessionStore,
{
    /// User record store
    users: Arc<U>,
    /// Token issuance and verification
    tokens: Arc<TokenService<S>>,
    /// Session revocation store
    sessions: Arc<S>,
}

impl<U, S> AuthService<U, S>
where
    U: UserRepository,
    S: SessionStore,
{
    pub fn new(users: Arc<U>, tokens: Arc<TokenService<S>>, sessions: Arc<S>) -> Self {
        Self {
            users,
            tokens,
            sessions,
        }
    }

    /// Registers a new user and issues their first token pair.
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - user created, session opened
    /// * `Err(DomainError::Conflict)` - email already registered
    pub async fn register(&self, input: NewUser) -> DomainResult<TokenPair> {
        self.create_user(input, Role::User).await
    }

    /// Registers the admin account.
    ///
    /// Only one admin may exist; a second attempt is rejected before the
    /// email uniqueness check.
    pub async fn register_admin(&self, input: NewUser) -> DomainResult<TokenPair> {
        if self.users.admin_exists().await? {
            return Err(DomainError::conflict("Admin already exists"));
        }
        self.create_user(input, Role::Admin).await
    }

    async fn create_user(&self, mut input: NewUser, role: Role) -> DomainResult<TokenPair> {
        input.first_name = capitalize(&input.first_name);
        input.last_name = capitalize(&input.last_name);

        if self.users.find_by_email(&input.email).await?.is_some() {
            return Err(DomainError::conflict(format!(
                "{} has already been registered",
                input.email
            )));
        }

        let user = self.users.create(User::new(input, role)?).await?;
        info!(user_id = %user.id, role = %user.role, "user registered");

        self.tokens.issue_pair(user.id, user.role).await
    }

    /// Authenticates by email and password and issues a token pair.
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - credentials accepted
    /// * `Err(DomainError::NotFound)` - no user under this email
    /// * `Err(DomainError::Unauthenticated)` - password mismatch
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<TokenPair> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| DomainError::not_found("User is not registered"))?;

        if !user.verify_password(password)? {
            return Err(DomainError::unauthenticated_with(
                "Username/Password is not valid",
            ));
        }

        debug!(user_id = %user.id, "login accepted");
        self.tokens.issue_pair(user.id, user.role).await
    }

    /// Rotates a refresh token into a fresh token pair.
    ///
    /// The presented token must verify and its user must still have a
    /// live session record. Issuing the new pair overwrites that record,
    /// which is what retires the old session.
    ///
    /// Revocation granularity is one live session per user: a stale
    /// refresh token from a superseded session still rotates as long as
    /// its signature is valid and any session exists for the user.
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<TokenPair> {
        if refresh_token.is_empty() {
            return Err(DomainError::invalid_request("refreshToken is required"));
        }

        let claims = self.tokens.verify_refresh_token(refresh_token)?;
        let user_id = claims_user_id(&claims.aud)?;

        if !self.sessions.exists(user_id).await? {
            return Err(DomainError::unauthenticated_with("no active session"));
        }

        debug!(%user_id, "rotating refresh session");
        self.tokens.issue_pair(user_id, claims.role).await
    }

    /// Ends the user's refresh session.
    ///
    /// Verifying the token yields the user id; deleting a session that
    /// is already gone is a no-op success.
    pub async fn logout(&self, refresh_token: &str) -> DomainResult<()> {
        if refresh_token.is_empty() {
            return Err(DomainError::invalid_request("refreshToken is required"));
        }

        let claims = self.tokens.verify_refresh_token(refresh_token)?;
        let user_id = claims_user_id(&claims.aud)?;

        let existed = self.sessions.delete(user_id).await?;
        info!(%user_id, existed, "refresh session deleted");

        Ok(())
    }
}

/// The audience claim carries the user id; a token that verified but
/// holds a malformed audience is a claim mismatch.
fn claims_user_id(aud: &str) -> DomainResult<Uuid> {
    Uuid::parse_str(aud).map_err(|_| DomainError::unauthenticated_with("invalid audience claim"))
}
