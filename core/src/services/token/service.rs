//! Token issuance and verification

use std::sync::Arc;

use jsonwebtoken::{decode, encode, Algorithm, Header, Validation};
use tracing::debug;
use uuid::Uuid;

use crate::domain::entities::token::{Claims, TokenKind, TokenPair};
use crate::domain::entities::user::Role;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::SessionStore;

use super::config::TokenConfig;
use super::key_manager::SigningKeys;

/// Issues and verifies RS256-signed access and refresh tokens.
///
/// Issuing a refresh token also writes the user's session record, so the
/// session store is part of this service; verification of access tokens
/// is pure signature/claim checking and never touches the store.
pub struct TokenService<S: SessionStore> {
    sessions: Arc<S>,
    config: TokenConfig,
    keys: SigningKeys,
    validation: Validation,
}

impl<S: SessionStore> TokenService<S> {
    /// Creates a token service around loaded key material.
    pub fn new(sessions: Arc<S>, keys: SigningKeys, config: TokenConfig) -> Self {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_issuer(&[&config.issuer]);
        // The audience carries a per-user id, checked by the callers
        // after decoding rather than against a fixed allow-list.
        validation.validate_aud = false;

        Self {
            sessions,
            config,
            keys,
            validation,
        }
    }

    /// Signs a new access token for a user.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - the encoded token
    /// * `Err(DomainError::Signing)` - the signature operation failed
    pub fn issue_access_token(&self, user_id: Uuid, role: Role) -> DomainResult<String> {
        let claims = Claims::access(
            user_id,
            role,
            &self.config.issuer,
            self.config.access_token_expiry_secs,
        );
        self.encode(&claims)
    }

    /// Signs a new refresh token for a user and records the session.
    ///
    /// The session record is keyed by user id and overwritten on every
    /// issuance, which is what retires the previous refresh session.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - the encoded token
    /// * `Err(DomainError::Signing)` - the signature operation failed
    /// * `Err(DomainError::Store)` - the session store was unreachable
    pub async fn issue_refresh_token(&self, user_id: Uuid, role: Role) -> DomainResult<String> {
        let claims = Claims::refresh(
            user_id,
            role,
            &self.config.issuer,
            self.config.refresh_token_expiry_secs,
        );
        let token = self.encode(&claims)?;

        self.sessions.put(user_id, &claims.jti).await?;
        debug!(%user_id, jti = %claims.jti, "refresh session recorded");

        Ok(token)
    }

    /// Issues an access + refresh pair in one step.
    pub async fn issue_pair(&self, user_id: Uuid, role: Role) -> DomainResult<TokenPair> {
        let access_token = self.issue_access_token(user_id, role)?;
        let refresh_token = self.issue_refresh_token(user_id, role).await?;
        Ok(TokenPair::new(access_token, refresh_token))
    }

    /// Verifies an access token and returns its claims.
    ///
    /// Checks the RS256 signature, expiry and issuer, and that the token
    /// is actually an access token. Signature and format failures come
    /// back opaque; semantic failures carry a reason.
    pub fn verify_access_token(&self, token: &str) -> DomainResult<Claims> {
        let claims = self.decode(token)?;

        if claims.token_use != TokenKind::Access {
            return Err(DomainError::unauthenticated_with("not an access token"));
        }

        Ok(claims)
    }

    /// Verifies a refresh token and returns its claims.
    ///
    /// Same signature/expiry/issuer checks as access tokens; the session
    /// existence check belongs to the refresh coordinator, not here.
    pub fn verify_refresh_token(&self, token: &str) -> DomainResult<Claims> {
        let claims = self.decode(token)?;

        if claims.token_use != TokenKind::Refresh {
            return Err(DomainError::unauthenticated_with("not a refresh token"));
        }

        Ok(claims)
    }

    pub(crate) fn encode(&self, claims: &Claims) -> DomainResult<String> {
        let header = Header::new(Algorithm::RS256);
        encode(&header, claims, self.keys.encoding_key())
            .map_err(|e| DomainError::signing(format!("token encoding failed: {e}")))
    }

    fn decode(&self, token: &str) -> DomainResult<Claims> {
        let data = decode::<Claims>(token, self.keys.decoding_key(), &self.validation)
            .map_err(map_decode_error)?;
        Ok(data.claims)
    }
}

/// Maps a decode failure onto the error policy: expiry and claim
/// mismatches are semantic and get a descriptive detail, everything
/// signature- or format-shaped stays opaque.
fn map_decode_error(error: jsonwebtoken::errors::Error) -> DomainError {
    use jsonwebtoken::errors::ErrorKind;

    match error.kind() {
        ErrorKind::ExpiredSignature => DomainError::unauthenticated_with("token expired"),
        ErrorKind::ImmatureSignature => DomainError::unauthenticated_with("token not yet valid"),
        ErrorKind::InvalidIssuer => DomainError::unauthenticated_with("issuer mismatch"),
        _ => DomainError::unauthenticated(),
    }
}
