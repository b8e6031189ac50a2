//! Authentication route handlers
//!
//! Endpoints under `/v1/auth`: registration, admin bootstrap, login,
//! refresh-token rotation, logout and the authenticated identity echo.

pub mod create_admin;
pub mod login;
pub mod logout;
pub mod me;
pub mod refresh;
pub mod register;

use std::sync::Arc;

use ge_core::repositories::{SessionStore, UserRepository};
use ge_core::services::auth::AuthService;

/// Shared services handed to every handler.
pub struct AppState<U, S>
where
    U: UserRepository,
    S: SessionStore,
{
    pub auth_service: Arc<AuthService<U, S>>,
}
