//! Domain error to HTTP response mapping

use actix_web::{http::StatusCode, HttpResponse};
use tracing::{debug, error};
use validator::ValidationErrors;

use ge_core::errors::DomainError;

use crate::dto::ErrorResponse;

/// Maps a domain failure to its HTTP response.
///
/// Internal failures (`Signing`, `Store`) are logged with their
/// diagnostics and answered with a generic body; nothing about keys or
/// store internals reaches the client.
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::InvalidRequest { message } => {
            debug!("rejected request: {message}");
            ErrorResponse::new("invalid_request", message.clone())
                .to_response(StatusCode::BAD_REQUEST)
        }
        DomainError::Unauthenticated { detail } => ErrorResponse::new(
            "unauthenticated",
            detail.clone().unwrap_or_else(|| "Unauthorized".to_string()),
        )
        .to_response(StatusCode::UNAUTHORIZED),
        DomainError::NotFound { message } => {
            ErrorResponse::new("not_found", message.clone()).to_response(StatusCode::NOT_FOUND)
        }
        DomainError::Conflict { message } => {
            ErrorResponse::new("conflict", message.clone()).to_response(StatusCode::CONFLICT)
        }
        DomainError::Signing { .. } | DomainError::Store { .. } => {
            error!("internal failure: {error}");
            ErrorResponse::new("internal_error", "An internal error occurred")
                .to_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// First field failure out of a validation run, as "field message".
pub fn validation_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .next()
        .map(|(field, field_errors)| {
            let detail = field_errors
                .first()
                .and_then(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| "is invalid".to_string());
            format!("{field} {detail}")
        })
        .unwrap_or_else(|| "invalid request body".to_string())
}
