//! Application factory
//!
//! Assembles the actix-web application from the shared state, the token
//! verifier and the route table.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, Error, HttpResponse};
use tracing_actix_web::TracingLogger;

use ge_core::repositories::{SessionStore, UserRepository};

use crate::middleware::auth::{AccessTokenVerifier, JwtAuth};
use crate::middleware::cors::create_cors;
use crate::routes::auth::{
    create_admin::create_admin, login::login, logout::logout, me::me, refresh::refresh_token,
    register::register, AppState,
};

/// Create and configure the application with all dependencies.
pub fn create_app<U, S>(
    app_state: web::Data<AppState<U, S>>,
    verifier: web::Data<Arc<dyn AccessTokenVerifier>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    S: SessionStore + 'static,
{
    let cors = create_cors();

    App::new()
        .app_data(app_state)
        .app_data(verifier)
        .wrap(TracingLogger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/v1").service(
                web::scope("/auth")
                    .route("/register", web::post().to(register::<U, S>))
                    .route("/sa/create-admin", web::post().to(create_admin::<U, S>))
                    .route("/login", web::post().to(login::<U, S>))
                    .route("/refresh-token", web::post().to(refresh_token::<U, S>))
                    .route("/logout", web::post().to(logout::<U, S>))
                    .route("/me", web::get().to(me).wrap(JwtAuth::new())),
            ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler.
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "goodeats-auth",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
