use actix_web::{web, HttpResponse};

use ge_core::repositories::{SessionStore, UserRepository};

use crate::dto::auth::{LogoutResponse, RefreshTokenRequest};
use crate::handlers::handle_domain_error;

use super::AppState;

/// Handler for POST /v1/auth/logout
///
/// Verifies the refresh token and deletes the user's session record.
/// Deleting an already-gone record still succeeds.
///
/// # Request Body
///
/// ```json
/// { "refreshToken": "eyJ..." }
/// ```
///
/// # Responses
/// - 200 OK: `{"success":true,"message":"Logout Successful"}`
/// - 400 Bad Request: refresh token missing
/// - 401 Unauthorized: token invalid or expired
/// - 500 Internal Server Error: store failure
pub async fn logout<U, S>(
    state: web::Data<AppState<U, S>>,
    request: web::Json<RefreshTokenRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionStore + 'static,
{
    match state.auth_service.logout(&request.refresh_token).await {
        Ok(()) => HttpResponse::Ok().json(LogoutResponse {
            success: true,
            message: "Logout Successful".to_string(),
        }),
        Err(error) => handle_domain_error(&error),
    }
}
