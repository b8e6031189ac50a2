//! Token claims and the token pair handed back to clients.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::user::Role;

/// Access token lifetime (1 hour)
pub const ACCESS_TOKEN_EXPIRY_SECS: i64 = 3600;

/// Refresh token lifetime (365 days)
pub const REFRESH_TOKEN_EXPIRY_SECS: i64 = 31_536_000;

/// Issuer claim stamped into every token
pub const JWT_ISSUER: &str = "goodeats.com";

/// Discriminates access tokens from refresh tokens.
///
/// Both are signed with the same key pair; the claim shape plus the
/// lifetime is what tells them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// JWT payload.
///
/// The audience carries the user id; the subject is issuer-chosen and
/// left empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject, unused
    #[serde(default)]
    pub sub: String,

    /// Audience (the user id)
    pub aud: String,

    /// Issuer
    pub iss: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Unique token identifier
    pub jti: String,

    /// Access or refresh
    pub token_use: TokenKind,

    /// Role of the audience user
    pub role: Role,
}

impl Claims {
    /// Claims for a new access token.
    pub fn access(user_id: Uuid, role: Role, issuer: &str, expiry_secs: i64) -> Self {
        Self::build(user_id, role, issuer, expiry_secs, TokenKind::Access)
    }

    /// Claims for a new refresh token.
    ///
    /// The role rides along so a rotation can mint an equivalent access
    /// token without a user-record lookup.
    pub fn refresh(user_id: Uuid, role: Role, issuer: &str, expiry_secs: i64) -> Self {
        Self::build(user_id, role, issuer, expiry_secs, TokenKind::Refresh)
    }

    fn build(user_id: Uuid, role: Role, issuer: &str, expiry_secs: i64, kind: TokenKind) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(expiry_secs);

        Self {
            sub: String::new(),
            aud: user_id.to_string(),
            iss: issuer.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            jti: Uuid::new_v4().to_string(),
            token_use: kind,
            role,
        }
    }

    /// Parses the audience claim back into a user id.
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.aud)
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Access + refresh token pair returned on register, login and refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

impl TokenPair {
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }
}
