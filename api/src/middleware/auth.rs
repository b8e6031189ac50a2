//! JWT authentication middleware for protected endpoints.
//!
//! Extracts the Bearer token from the Authorization header, verifies it
//! through the shared token service and injects an [`AuthContext`] into
//! the request for handlers to extract.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use uuid::Uuid;

use ge_core::domain::entities::token::Claims;
use ge_core::domain::entities::user::Role;
use ge_core::errors::{DomainError, DomainResult};
use ge_core::repositories::SessionStore;
use ge_core::services::token::TokenService;

/// Verifies access tokens; object-safe so the middleware does not need
/// to carry the token service's generics.
pub trait AccessTokenVerifier: Send + Sync {
    fn verify_access_token(&self, token: &str) -> DomainResult<Claims>;
}

impl<S: SessionStore> AccessTokenVerifier for TokenService<S> {
    fn verify_access_token(&self, token: &str) -> DomainResult<Claims> {
        TokenService::verify_access_token(self, token)
    }
}

/// Authenticated identity injected into requests.
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User id from the audience claim
    pub user_id: Uuid,
    /// Role claim
    pub role: Role,
}

impl AuthContext {
    /// Builds the context from verified claims.
    pub fn from_claims(claims: &Claims) -> DomainResult<Self> {
        let user_id = claims
            .user_id()
            .map_err(|_| DomainError::unauthenticated_with("invalid audience claim"))?;
        Ok(Self {
            user_id,
            role: claims.role,
        })
    }
}

/// JWT authentication middleware factory.
pub struct JwtAuth;

impl JwtAuth {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JwtAuth {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// JWT authentication middleware service.
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    return Err(ErrorUnauthorized("Unauthorized"));
                }
            };

            let verifier = req
                .app_data::<web::Data<Arc<dyn AccessTokenVerifier>>>()
                .ok_or_else(|| ErrorUnauthorized("token verification not configured"))?;

            let auth_context = verifier
                .verify_access_token(&token)
                .and_then(|claims| AuthContext::from_claims(&claims))
                .map_err(|e| ErrorUnauthorized(e.to_string()))?;

            req.extensions_mut().insert(auth_context);

            service.call(req).await
        })
    }
}

/// Pulls the token out of a `Bearer` Authorization header.
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

/// Extractor for required authentication.
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized("Unauthorized"));

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bearer_token() {
        use actix_web::test;

        let req = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req), Some("token_123".to_string()));

        let req_no_bearer = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_bearer), None);

        let req_no_header = test::TestRequest::default().to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_header), None);
    }
}
