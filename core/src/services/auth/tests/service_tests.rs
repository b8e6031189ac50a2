//! Tests for registration, login, refresh rotation and logout

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::entities::token::Claims;
use crate::domain::entities::user::{NewUser, Role};
use crate::errors::DomainError;
use crate::repositories::session::MockSessionStore;
use crate::repositories::user::MockUserRepository;
use crate::repositories::{SessionStore, UserRepository};
use crate::services::auth::AuthService;
use crate::services::token::{SigningKeys, TokenConfig, TokenService};

struct Fixture {
    auth: AuthService<MockUserRepository, MockSessionStore>,
    tokens: Arc<TokenService<MockSessionStore>>,
    users: Arc<MockUserRepository>,
    sessions: Arc<MockSessionStore>,
}

fn fixture() -> Fixture {
    let rsa = openssl::rsa::Rsa::generate(2048).expect("rsa keygen");
    let private_pem = String::from_utf8(rsa.private_key_to_pem().unwrap()).unwrap();
    let public_pem = String::from_utf8(rsa.public_key_to_pem().unwrap()).unwrap();
    let keys = SigningKeys::from_pem_strings(&private_pem, &public_pem).unwrap();

    let users = Arc::new(MockUserRepository::new());
    let sessions = Arc::new(MockSessionStore::new());
    let tokens = Arc::new(TokenService::new(
        Arc::clone(&sessions),
        keys,
        TokenConfig::default(),
    ));
    let auth = AuthService::new(
        Arc::clone(&users),
        Arc::clone(&tokens),
        Arc::clone(&sessions),
    );

    Fixture {
        auth,
        tokens,
        users,
        sessions,
    }
}

fn registration(email: &str) -> NewUser {
    NewUser {
        first_name: "ada".to_string(),
        last_name: "lovelace".to_string(),
        email: email.to_string(),
        phone: "0412345678".to_string(),
        country_code: "+61".to_string(),
        password: "difference engine".to_string(),
    }
}

#[tokio::test]
async fn test_register_issues_pair_and_opens_session() {
    let fx = fixture();

    let pair = fx.auth.register(registration("ada@example.com")).await.unwrap();

    let claims = fx.tokens.verify_access_token(&pair.access_token).unwrap();
    assert_eq!(claims.role, Role::User);
    assert!(fx
        .sessions
        .exists(claims.user_id().unwrap())
        .await
        .unwrap());

    let stored = fx
        .users
        .find_by_email("ada@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.first_name, "Ada");
    assert_eq!(stored.last_name, "Lovelace");
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let fx = fixture();

    fx.auth.register(registration("ada@example.com")).await.unwrap();
    let err = fx
        .auth
        .register(registration("ada@example.com"))
        .await
        .unwrap_err();

    match err {
        DomainError::Conflict { message } => {
            assert_eq!(message, "ada@example.com has already been registered");
        }
        other => panic!("expected Conflict, got {other:?}"),
    }
}

#[tokio::test]
async fn test_register_admin_only_once() {
    let fx = fixture();

    let pair = fx
        .auth
        .register_admin(registration("root@example.com"))
        .await
        .unwrap();
    let claims = fx.tokens.verify_access_token(&pair.access_token).unwrap();
    assert_eq!(claims.role, Role::Admin);

    let err = fx
        .auth
        .register_admin(registration("root2@example.com"))
        .await
        .unwrap_err();
    match err {
        DomainError::Conflict { message } => assert_eq!(message, "Admin already exists"),
        other => panic!("expected Conflict, got {other:?}"),
    }
}

#[tokio::test]
async fn test_login_with_valid_credentials() {
    let fx = fixture();
    fx.auth.register(registration("ada@example.com")).await.unwrap();

    let pair = fx
        .auth
        .login("ada@example.com", "difference engine")
        .await
        .unwrap();

    assert!(fx.tokens.verify_access_token(&pair.access_token).is_ok());
}

#[tokio::test]
async fn test_login_unknown_email_is_not_found() {
    let fx = fixture();

    let err = fx
        .auth
        .login("nobody@example.com", "whatever")
        .await
        .unwrap_err();
    match err {
        DomainError::NotFound { message } => assert_eq!(message, "User is not registered"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_login_wrong_password_is_unauthenticated() {
    let fx = fixture();
    fx.auth.register(registration("ada@example.com")).await.unwrap();

    let err = fx
        .auth
        .login("ada@example.com", "analytical engine")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Unauthenticated { .. }));
}

#[tokio::test]
async fn test_refresh_rotates_session() {
    let fx = fixture();
    let pair = fx.auth.register(registration("ada@example.com")).await.unwrap();
    let user_id = fx
        .tokens
        .verify_refresh_token(&pair.refresh_token)
        .unwrap()
        .user_id()
        .unwrap();

    let rotated = fx.auth.refresh(&pair.refresh_token).await.unwrap();

    assert_ne!(rotated.refresh_token, pair.refresh_token);
    assert_eq!(fx.sessions.len().await, 1);

    let new_jti = fx
        .tokens
        .verify_refresh_token(&rotated.refresh_token)
        .unwrap()
        .jti;
    assert_eq!(fx.sessions.get(user_id).await.as_deref(), Some(new_jti.as_str()));
}

#[tokio::test]
async fn test_refresh_preserves_role() {
    let fx = fixture();
    let pair = fx
        .auth
        .register_admin(registration("root@example.com"))
        .await
        .unwrap();

    let rotated = fx.auth.refresh(&pair.refresh_token).await.unwrap();

    let claims = fx.tokens.verify_access_token(&rotated.access_token).unwrap();
    assert_eq!(claims.role, Role::Admin);
}

#[tokio::test]
async fn test_refresh_with_empty_token_never_touches_store() {
    let fx = fixture();
    // A failing store would turn any access into a Store error, so an
    // InvalidRequest here proves the store was never consulted.
    fx.sessions.set_failing(true);

    let err = fx.auth.refresh("").await.unwrap_err();
    assert!(matches!(err, DomainError::InvalidRequest { .. }));
}

#[tokio::test]
async fn test_refresh_with_expired_token_is_unauthenticated() {
    let fx = fixture();
    let pair = fx.auth.register(registration("ada@example.com")).await.unwrap();
    let user_id = fx
        .tokens
        .verify_refresh_token(&pair.refresh_token)
        .unwrap()
        .user_id()
        .unwrap();

    let mut claims = Claims::refresh(user_id, Role::User, "goodeats.com", 3600);
    claims.iat = Utc::now().timestamp() - 10_800;
    claims.exp = Utc::now().timestamp() - 7200;
    let expired = fx.tokens.encode(&claims).unwrap();

    let err = fx.auth.refresh(&expired).await.unwrap_err();
    match err {
        DomainError::Unauthenticated { detail } => {
            assert_eq!(detail.as_deref(), Some("token expired"));
        }
        other => panic!("expected Unauthenticated, got {other:?}"),
    }
    // The live session is untouched.
    assert!(fx.sessions.exists(user_id).await.unwrap());
}

#[tokio::test]
async fn test_refresh_after_logout_is_unauthenticated() {
    let fx = fixture();
    let pair = fx.auth.register(registration("ada@example.com")).await.unwrap();

    fx.auth.logout(&pair.refresh_token).await.unwrap();
    let err = fx.auth.refresh(&pair.refresh_token).await.unwrap_err();

    match err {
        DomainError::Unauthenticated { detail } => {
            assert_eq!(detail.as_deref(), Some("no active session"));
        }
        other => panic!("expected Unauthenticated, got {other:?}"),
    }
}

/// Documents the single-session-per-user granularity: after a rotation
/// the superseded refresh token still verifies and still operates on
/// the user's (new) session record.
#[tokio::test]
async fn test_stale_refresh_token_still_reaches_the_session() {
    let fx = fixture();
    let original = fx.auth.register(registration("ada@example.com")).await.unwrap();
    let user_id = fx
        .tokens
        .verify_refresh_token(&original.refresh_token)
        .unwrap()
        .user_id()
        .unwrap();

    let _rotated = fx.auth.refresh(&original.refresh_token).await.unwrap();

    // Logout with the stale token still deletes the user's session.
    fx.auth.logout(&original.refresh_token).await.unwrap();
    assert!(!fx.sessions.exists(user_id).await.unwrap());
}

#[tokio::test]
async fn test_logout_with_empty_token_never_touches_store() {
    let fx = fixture();
    fx.sessions.set_failing(true);

    let err = fx.auth.logout("").await.unwrap_err();
    assert!(matches!(err, DomainError::InvalidRequest { .. }));
}

#[tokio::test]
async fn test_double_logout_is_idempotent() {
    let fx = fixture();
    let pair = fx.auth.register(registration("ada@example.com")).await.unwrap();

    fx.auth.logout(&pair.refresh_token).await.unwrap();
    // The record is already gone; the delete is a no-op success.
    fx.auth.logout(&pair.refresh_token).await.unwrap();
}

#[tokio::test]
async fn test_logout_store_failure_is_store_error() {
    let fx = fixture();
    let pair = fx.auth.register(registration("ada@example.com")).await.unwrap();

    fx.sessions.set_failing(true);
    let err = fx.auth.logout(&pair.refresh_token).await.unwrap_err();

    assert!(matches!(err, DomainError::Store { .. }));
}

#[tokio::test]
async fn test_concurrent_refreshes_leave_one_session() {
    let fx = fixture();
    let pair = fx.auth.register(registration("ada@example.com")).await.unwrap();
    let auth = Arc::new(fx.auth);

    let (a, b, c) = tokio::join!(
        auth.refresh(&pair.refresh_token),
        auth.refresh(&pair.refresh_token),
        auth.refresh(&pair.refresh_token),
    );

    assert!(a.is_ok() && b.is_ok() && c.is_ok());
    assert_eq!(fx.sessions.len().await, 1);
}
