//! Token signing configuration

use serde::{Deserialize, Serialize};

/// JWT signing configuration.
///
/// The service signs tokens with an RS256 key pair read from the two
/// configured file paths at startup. Both lifetimes are expressed in
/// seconds; the refresh lifetime must exceed the access lifetime.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Path to the PEM-encoded RSA private key
    pub private_key_path: String,

    /// Path to the PEM-encoded RSA public key
    pub public_key_path: String,

    /// Issuer claim stamped into every token
    pub issuer: String,

    /// Access token lifetime in seconds
    pub access_token_expiry: i64,

    /// Refresh token lifetime in seconds
    pub refresh_token_expiry: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            private_key_path: String::from("keys/private.pem"),
            public_key_path: String::from("keys/public.pem"),
            issuer: String::from("goodeats.com"),
            access_token_expiry: 3600,        // 1 hour
            refresh_token_expiry: 31_536_000, // 365 days
        }
    }
}

impl JwtConfig {
    /// Create from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            private_key_path: std::env::var("JWT_PRIVATE_KEY_PATH")
                .unwrap_or(defaults.private_key_path),
            public_key_path: std::env::var("JWT_PUBLIC_KEY_PATH")
                .unwrap_or(defaults.public_key_path),
            issuer: std::env::var("JWT_ISSUER").unwrap_or(defaults.issuer),
            access_token_expiry: std::env::var("JWT_ACCESS_TOKEN_EXPIRY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.access_token_expiry),
            refresh_token_expiry: std::env::var("JWT_REFRESH_TOKEN_EXPIRY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.refresh_token_expiry),
        }
    }

    /// Set the access token lifetime in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry = minutes * 60;
        self
    }

    /// Set the refresh token lifetime in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_token_expiry = days * 86400;
        self
    }

    /// Checks that the configured lifetimes are usable: the refresh
    /// lifetime must exceed the access lifetime.
    pub fn validate(&self) -> Result<(), String> {
        if self.access_token_expiry <= 0 {
            return Err("JWT_ACCESS_TOKEN_EXPIRY must be positive".to_string());
        }
        if self.refresh_token_expiry <= self.access_token_expiry {
            return Err(
                "JWT_REFRESH_TOKEN_EXPIRY must exceed JWT_ACCESS_TOKEN_EXPIRY".to_string(),
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_default() {
        let config = JwtConfig::default();
        assert_eq!(config.issuer, "goodeats.com");
        assert_eq!(config.access_token_expiry, 3600);
        assert_eq!(config.refresh_token_expiry, 31_536_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_jwt_config_builder() {
        let config = JwtConfig::default()
            .with_access_expiry_minutes(30)
            .with_refresh_expiry_days(14);

        assert_eq!(config.access_token_expiry, 1800);
        assert_eq!(config.refresh_token_expiry, 1_209_600);
    }

    #[test]
    fn test_refresh_must_outlive_access() {
        let mut config = JwtConfig::default();
        config.refresh_token_expiry = config.access_token_expiry;
        assert!(config.validate().is_err());

        config.refresh_token_expiry = config.access_token_expiry - 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_access_expiry_must_be_positive() {
        let mut config = JwtConfig::default();
        config.access_token_expiry = 0;
        assert!(config.validate().is_err());
    }
}
