//! CORS configuration for browser clients.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use std::env;

/// Creates the CORS middleware for the current environment.
///
/// Development is permissive; production only allows the origins listed
/// in `ALLOWED_ORIGINS`.
pub fn create_cors() -> Cors {
    let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

    let cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600);

    if environment == "production" {
        let mut cors = cors;
        if let Ok(allowed_origins) = env::var("ALLOWED_ORIGINS") {
            for origin in allowed_origins.split(',').map(|s| s.trim()) {
                if !origin.is_empty() {
                    cors = cors.allowed_origin(origin);
                }
            }
        }
        cors
    } else {
        cors.allow_any_origin()
    }
}
