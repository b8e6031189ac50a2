//! Environment-driven configuration for the auth service.

mod auth;
mod cache;
mod server;

pub use auth::JwtConfig;
pub use cache::CacheConfig;
pub use server::ServerConfig;
