use serde::{Deserialize, Serialize};
use validator::Validate;

use ge_core::domain::entities::token::TokenPair;
use ge_core::domain::entities::user::NewUser;

/// Body for POST /v1/auth/register and /v1/auth/sa/create-admin.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 50, message = "must be between 1 and 50 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 50, message = "must be between 1 and 50 characters"))]
    pub last_name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 10, max = 15, message = "must be between 10 and 15 digits"))]
    pub phone: String,
    #[validate(length(min = 1, max = 5, message = "must be between 1 and 5 characters"))]
    pub country_code: String,
    #[validate(length(min = 8, message = "must be at least 8 characters"))]
    pub password: String,
}

impl From<RegisterRequest> for NewUser {
    fn from(request: RegisterRequest) -> Self {
        NewUser {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            phone: request.phone,
            country_code: request.country_code,
            password: request.password,
        }
    }
}

/// Body for POST /v1/auth/login.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "is required"))]
    pub password: String,
}

/// Body for POST /v1/auth/refresh-token and /v1/auth/logout.
///
/// The field defaults to empty when absent so the service can reject it
/// as a missing input rather than a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    #[serde(default)]
    pub refresh_token: String,
}

/// Token pair response for register, login and refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub success: bool,
    pub access_token: String,
    pub refresh_token: String,
}

impl From<TokenPair> for TokenResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            success: true,
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        }
    }
}

/// Acknowledgement for POST /v1/auth/logout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub success: bool,
    pub message: String,
}

/// Identity echo for GET /v1/auth/me.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub user_id: String,
    pub role: String,
}
