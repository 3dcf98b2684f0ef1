use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use log::{info, warn};
use tokio::time::{sleep, Duration};

use crate::domain::constants::MSG_INVALID_CREDENTIALS;
use crate::domain::errors::DeskError;
use crate::domain::model::user::{LoginResponse, Registration, SessionClaims, User};
use crate::domain::traits::AuthApi;

pub const AUTH_LATENCY_MS: u64 = 500;

struct MockAccount {
    email: &'static str,
    password: &'static str,
    pan: &'static str,
    name: &'static str,
    account_balance: f64,
}

const ACCOUNTS: &[MockAccount] = &[MockAccount {
    email: "user@example.com",
    password: "password123",
    pan: "ABCDE1234F",
    name: "John Doe",
    account_balance: 100_000.0,
}];

impl MockAccount {
    fn to_user(&self) -> User {
        User {
            name: self.name.to_string(),
            email: self.email.to_string(),
            pan: self.pan.to_string(),
            account_balance: self.account_balance,
        }
    }
}

/// Encode claims the way the session layer stores them: base64 of JSON
pub fn encode_token(claims: &SessionClaims) -> Result<String, DeskError> {
    let json = serde_json::to_string(claims)?;
    Ok(BASE64.encode(json))
}

/// In-process account directory with simulated latency
#[derive(Clone, Debug)]
pub struct MockAuthApi {
    latency: Duration,
}

impl Default for MockAuthApi {
    fn default() -> Self {
        Self::new(Duration::from_millis(AUTH_LATENCY_MS))
    }
}

impl MockAuthApi {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl AuthApi for MockAuthApi {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, DeskError> {
        sleep(self.latency).await;

        let account = ACCOUNTS
            .iter()
            .find(|a| a.email == email && a.password == password)
            .ok_or_else(|| {
                warn!("Rejected login for {}", email);
                DeskError::Auth(MSG_INVALID_CREDENTIALS.to_string())
            })?;

        let user = account.to_user();
        let token = encode_token(&SessionClaims::from(&user))?;
        info!("Logged in {}", user.email);
        Ok(LoginResponse { token, user })
    }

    async fn register(&self, registration: &Registration) -> Result<(), DeskError> {
        sleep(self.latency).await;
        // Always succeeds, duplicates are not checked
        info!("Registered {}", registration.email);
        Ok(())
    }

    async fn profile(&self, claims: &SessionClaims) -> Result<User, DeskError> {
        // Profile details are not carried in the token, so any decodable
        // claims resolve to the demo profile
        let template = ACCOUNTS
            .first()
            .ok_or_else(|| DeskError::Auth("No accounts configured".to_string()))?;

        Ok(User {
            email: claims.email.clone(),
            pan: claims.pan.clone(),
            ..template.to_user()
        })
    }
}
