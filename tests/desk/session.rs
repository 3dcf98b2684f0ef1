use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use mockall::mock;

use paper_trading_desk::desk::SessionManager;
use paper_trading_desk::domain::constants::{MSG_INVALID_CREDENTIALS, MSG_INVALID_PAN, SESSION_TOKEN_KEY};
use paper_trading_desk::domain::errors::DeskError;
use paper_trading_desk::domain::model::user::{LoginResponse, Registration, SessionClaims, User};
use paper_trading_desk::domain::traits::{AuthApi, KeyValueStore};
use paper_trading_desk::infrastructure::mock::auth_api::encode_token;
use paper_trading_desk::infrastructure::mock::MockAuthApi;
use paper_trading_desk::infrastructure::storage::MemoryStore;

mock! {
    Auth {}
    #[async_trait]
    impl AuthApi for Auth {
        async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, DeskError>;
        async fn register(&self, registration: &Registration) -> Result<(), DeskError>;
        async fn profile(&self, claims: &SessionClaims) -> Result<User, DeskError>;
    }
}

#[tokio::test(start_paused = true)]
async fn test_login_survives_restart() -> Result<()> {
    let store = Arc::new(MemoryStore::new());
    let auth = Arc::new(MockAuthApi::default());

    let mut session = SessionManager::restore(store.clone(), auth.clone()).await;
    assert!(!session.is_logged_in());
    session.login("user@example.com", "password123").await?;

    let restored = SessionManager::restore(store.clone(), auth).await;
    let user = restored.user().expect("restored session has a user");
    assert_eq!(user.email, "user@example.com");
    assert_eq!(user.pan, "ABCDE1234F");
    assert_eq!(restored.token(), session.token());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_garbage_token_is_discarded() -> Result<()> {
    let store = Arc::new(MemoryStore::with_entries([(SESSION_TOKEN_KEY, "not-a-token!!")]));

    let session = SessionManager::restore(store.clone(), Arc::new(MockAuthApi::default())).await;

    assert!(!session.is_logged_in());
    assert_eq!(store.get(SESSION_TOKEN_KEY)?, None);
    Ok(())
}

#[tokio::test]
async fn test_rejected_profile_logs_out() -> Result<()> {
    let claims = SessionClaims {
        email: "gone@example.com".to_string(),
        pan: "ABCDE1234F".to_string(),
    };
    let store = Arc::new(MemoryStore::with_entries([(SESSION_TOKEN_KEY, encode_token(&claims)?)]));

    let mut auth = MockAuth::new();
    auth.expect_profile()
        .times(1)
        .returning(|_| Err(DeskError::Auth("Unknown account".to_string())));

    let session = SessionManager::restore(store.clone(), Arc::new(auth)).await;

    assert!(!session.is_logged_in());
    assert_eq!(store.get(SESSION_TOKEN_KEY)?, None);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_failed_login_stores_nothing() {
    let store = Arc::new(MemoryStore::new());
    let mut session = SessionManager::new(store.clone(), Arc::new(MockAuthApi::default()));

    let err = session.login("user@example.com", "hunter2").await.unwrap_err();

    assert_eq!(err, DeskError::Auth(MSG_INVALID_CREDENTIALS.to_string()));
    assert!(!session.is_logged_in());
    assert_eq!(store.get(SESSION_TOKEN_KEY).unwrap(), None);
}

#[tokio::test(start_paused = true)]
async fn test_logout_clears_token() -> Result<()> {
    let store = Arc::new(MemoryStore::new());
    let mut session = SessionManager::new(store.clone(), Arc::new(MockAuthApi::default()));

    session.login("user@example.com", "password123").await?;
    assert!(store.get(SESSION_TOKEN_KEY)?.is_some());

    session.logout()?;
    assert!(!session.is_logged_in());
    assert_eq!(store.get(SESSION_TOKEN_KEY)?, None);
    Ok(())
}

#[tokio::test]
async fn test_invalid_registration_never_reaches_the_api() {
    let mut auth = MockAuth::new();
    auth.expect_register().never();

    let session = SessionManager::new(Arc::new(MemoryStore::new()), Arc::new(auth));
    let err = session
        .register(&Registration {
            name: "Ravi".to_string(),
            email: "ravi@example.com".to_string(),
            password: "secret99".to_string(),
            pan: "ABC123".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), MSG_INVALID_PAN);
}

#[tokio::test]
async fn test_registration_sends_uppercased_pan() -> Result<()> {
    let mut auth = MockAuth::new();
    auth.expect_register()
        .withf(|r| r.pan == "PQRST6789Z")
        .times(1)
        .returning(|_| Ok(()));

    let session = SessionManager::new(Arc::new(MemoryStore::new()), Arc::new(auth));
    session
        .register(&Registration {
            name: "Ravi".to_string(),
            email: "ravi@example.com".to_string(),
            password: "secret99".to_string(),
            pan: "pqrst6789z".to_string(),
        })
        .await?;
    Ok(())
}
