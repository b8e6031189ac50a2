use actix_web::{web, HttpResponse};

use ge_core::repositories::{SessionStore, UserRepository};

use crate::dto::auth::{RefreshTokenRequest, TokenResponse};
use crate::handlers::handle_domain_error;

use super::AppState;

/// Handler for POST /v1/auth/refresh-token
///
/// Rotates a refresh token into a fresh pair. The old session record is
/// overwritten by the new one.
///
/// # Request Body
///
/// ```json
/// { "refreshToken": "eyJ..." }
/// ```
///
/// # Responses
/// - 200 OK: `{"success":true,"accessToken":...,"refreshToken":...}`
/// - 400 Bad Request: refresh token missing
/// - 401 Unauthorized: token invalid, expired or session revoked
/// - 500 Internal Server Error: signing or store failure
pub async fn refresh_token<U, S>(
    state: web::Data<AppState<U, S>>,
    request: web::Json<RefreshTokenRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionStore + 'static,
{
    match state.auth_service.refresh(&request.refresh_token).await {
        Ok(pair) => HttpResponse::Ok().json(TokenResponse::from(pair)),
        Err(error) => handle_domain_error(&error),
    }
}
