//! Domain error taxonomy.
//!
//! One closed enum covers every failure the service surfaces. The
//! presentation layer decides the user-visible mapping; `Signing` and
//! `Store` carry internal diagnostics that must be logged, never echoed
//! to clients.

use thiserror::Error;

/// Failures surfaced by the domain layer.
#[derive(Error, Debug)]
pub enum DomainError {
    /// Missing or malformed caller input.
    #[error("invalid request: {message}")]
    InvalidRequest { message: String },

    /// Bad credentials or a bad/expired/missing token.
    ///
    /// `detail` is populated only for semantic failures (expiry, claim
    /// mismatch); signature and format failures stay opaque.
    #[error("unauthenticated: {}", .detail.as_deref().unwrap_or("invalid credentials"))]
    Unauthenticated { detail: Option<String> },

    /// Duplicate resource.
    #[error("conflict: {message}")]
    Conflict { message: String },

    /// No such record.
    #[error("not found: {message}")]
    NotFound { message: String },

    /// Cryptographic dependency failure (token signing, key material,
    /// password hashing).
    #[error("signing failure: {message}")]
    Signing { message: String },

    /// Session store communication failure.
    #[error("session store failure: {message}")]
    Store { message: String },
}

impl DomainError {
    /// Opaque authentication failure, no diagnostic detail.
    pub fn unauthenticated() -> Self {
        Self::Unauthenticated { detail: None }
    }

    /// Authentication failure with a caller-visible reason.
    pub fn unauthenticated_with(detail: impl Into<String>) -> Self {
        Self::Unauthenticated {
            detail: Some(detail.into()),
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn signing(message: impl Into<String>) -> Self {
        Self::Signing {
            message: message.into(),
        }
    }

    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_unauthenticated_display() {
        let err = DomainError::unauthenticated();
        assert_eq!(err.to_string(), "unauthenticated: invalid credentials");
    }

    #[test]
    fn test_detailed_unauthenticated_display() {
        let err = DomainError::unauthenticated_with("token expired");
        assert_eq!(err.to_string(), "unauthenticated: token expired");
    }

    #[test]
    fn test_conflict_display() {
        let err = DomainError::conflict("a@b.com has already been registered");
        assert_eq!(
            err.to_string(),
            "conflict: a@b.com has already been registered"
        );
    }
}
