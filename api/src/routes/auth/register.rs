use actix_web::{web, HttpResponse};
use validator::Validate;

use ge_core::repositories::{SessionStore, UserRepository};

use crate::dto::auth::{RegisterRequest, TokenResponse};
use crate::dto::ErrorResponse;
use crate::handlers::{handle_domain_error, validation_message};

use super::AppState;

/// Handler for POST /v1/auth/register
///
/// Registers a new user and returns their first token pair.
///
/// # Responses
/// - 201 Created: `{"success":true,"accessToken":...,"refreshToken":...}`
/// - 400 Bad Request: validation failure
/// - 409 Conflict: email already registered
/// - 500 Internal Server Error: signing or store failure
pub async fn register<U, S>(
    state: web::Data<AppState<U, S>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionStore + 'static,
{
    if let Err(errors) = request.validate() {
        return ErrorResponse::new("invalid_request", validation_message(&errors))
            .to_response(actix_web::http::StatusCode::BAD_REQUEST);
    }

    match state.auth_service.register(request.into_inner().into()).await {
        Ok(pair) => HttpResponse::Created().json(TokenResponse::from(pair)),
        Err(error) => handle_domain_error(&error),
    }
}
