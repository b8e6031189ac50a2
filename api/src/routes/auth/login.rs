use actix_web::{web, HttpResponse};
use validator::Validate;

use ge_core::repositories::{SessionStore, UserRepository};

use crate::dto::auth::{LoginRequest, TokenResponse};
use crate::dto::ErrorResponse;
use crate::handlers::{handle_domain_error, validation_message};

use super::AppState;

/// Handler for POST /v1/auth/login
///
/// Authenticates by email and password.
///
/// # Responses
/// - 200 OK: `{"success":true,"accessToken":...,"refreshToken":...}`
/// - 400 Bad Request: validation failure
/// - 401 Unauthorized: password mismatch
/// - 404 Not Found: email not registered
/// - 500 Internal Server Error: signing or store failure
pub async fn login<U, S>(
    state: web::Data<AppState<U, S>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionStore + 'static,
{
    if let Err(errors) = request.validate() {
        return ErrorResponse::new("invalid_request", validation_message(&errors))
            .to_response(actix_web::http::StatusCode::BAD_REQUEST);
    }

    match state
        .auth_service
        .login(&request.email, &request.password)
        .await
    {
        Ok(pair) => HttpResponse::Ok().json(TokenResponse::from(pair)),
        Err(error) => handle_domain_error(&error),
    }
}
