//! Configuration for the token service

use ge_shared::config::JwtConfig;

use crate::domain::entities::token::{
    ACCESS_TOKEN_EXPIRY_SECS, JWT_ISSUER, REFRESH_TOKEN_EXPIRY_SECS,
};

/// Lifetimes and issuer identity for issued tokens.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Issuer claim
    pub issuer: String,
    /// Access token lifetime in seconds
    pub access_token_expiry_secs: i64,
    /// Refresh token lifetime in seconds, must exceed the access lifetime
    pub refresh_token_expiry_secs: i64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            issuer: JWT_ISSUER.to_string(),
            access_token_expiry_secs: ACCESS_TOKEN_EXPIRY_SECS,
            refresh_token_expiry_secs: REFRESH_TOKEN_EXPIRY_SECS,
        }
    }
}

impl From<&JwtConfig> for TokenConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            issuer: config.issuer.clone(),
            access_token_expiry_secs: config.access_token_expiry,
            refresh_token_expiry_secs: config.refresh_token_expiry,
        }
    }
}
