use actix_web::HttpResponse;

use crate::dto::auth::MeResponse;
use crate::middleware::auth::AuthContext;

/// Handler for GET /v1/auth/me
///
/// Echoes the identity carried by the verified access token. Routed
/// behind the JWT middleware.
///
/// # Responses
/// - 200 OK: `{"userId":...,"role":...}`
/// - 401 Unauthorized: missing or invalid access token
pub async fn me(auth: AuthContext) -> HttpResponse {
    HttpResponse::Ok().json(MeResponse {
        user_id: auth.user_id.to_string(),
        role: auth.role.to_string(),
    })
}
