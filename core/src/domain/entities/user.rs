//! User entity for the GoodEats auth service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{DomainError, DomainResult};

/// Role assigned to an identity at registration. Immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => f.write_str("USER"),
            Role::Admin => f.write_str("ADMIN"),
        }
    }
}

/// Registration input as supplied by the caller, password still in
/// plain text. Hashing happens when the `User` is constructed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub country_code: String,
    pub password: String,
}

/// A registered user.
///
/// The password is stored as a bcrypt hash and never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned once at registration
    pub id: Uuid,

    pub first_name: String,

    pub last_name: String,

    pub email: String,

    pub phone: String,

    pub country_code: String,

    #[serde(skip_serializing)]
    pub password_hash: String,

    pub role: Role,

    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a user from registration input, hashing the password.
    pub fn new(input: NewUser, role: Role) -> DomainResult<Self> {
        let password_hash = bcrypt::hash(&input.password, bcrypt::DEFAULT_COST)
            .map_err(|e| DomainError::signing(format!("password hashing failed: {e}")))?;

        Ok(Self {
            id: Uuid::new_v4(),
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            phone: input.phone,
            country_code: input.country_code,
            password_hash,
            role,
            created_at: Utc::now(),
        })
    }

    /// Compares a candidate password against the stored hash.
    pub fn verify_password(&self, candidate: &str) -> DomainResult<bool> {
        bcrypt::verify(candidate, &self.password_hash)
            .map_err(|e| DomainError::signing(format!("password verification failed: {e}")))
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
