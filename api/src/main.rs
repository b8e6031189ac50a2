use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ge_api::app::create_app;
use ge_api::middleware::auth::AccessTokenVerifier;
use ge_api::routes::auth::AppState;
use ge_core::services::auth::AuthService;
use ge_core::services::token::{SigningKeys, TokenConfig, TokenService};
use ge_infra::{InMemoryUserRepository, RedisSessionStore};
use ge_shared::config::{CacheConfig, JwtConfig, ServerConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let server_config = ServerConfig::from_env();
    let jwt_config = JwtConfig::from_env();
    jwt_config
        .validate()
        .map_err(|e| anyhow::anyhow!("invalid token configuration: {e}"))?;
    let cache_config = CacheConfig::from_env();

    // Key material is loaded once; without it the process must not
    // serve requests.
    let keys = SigningKeys::load(&jwt_config.private_key_path, &jwt_config.public_key_path)
        .context("failed to load signing keys")?;

    let sessions = Arc::new(
        RedisSessionStore::new(&cache_config)
            .await
            .context("failed to connect session store")?,
    );
    let users = Arc::new(InMemoryUserRepository::new());
    let tokens = Arc::new(TokenService::new(
        Arc::clone(&sessions),
        keys,
        TokenConfig::from(&jwt_config),
    ));
    let auth_service = Arc::new(AuthService::new(
        users,
        Arc::clone(&tokens),
        Arc::clone(&sessions),
    ));

    let app_state = web::Data::new(AppState { auth_service });
    let verifier: Arc<dyn AccessTokenVerifier> = tokens;
    let verifier = web::Data::new(verifier);

    let bind_address = server_config.bind_address();
    info!("goodeats auth service listening on {bind_address}");

    HttpServer::new(move || create_app(app_state.clone(), verifier.clone()))
        .bind(&bind_address)?
        .run()
        .await?;

    Ok(())
}
