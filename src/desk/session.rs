use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::constants::{MSG_INVALID_PAN, MSG_SHORT_PASSWORD, SESSION_TOKEN_KEY};
use crate::domain::errors::DeskError;
use crate::domain::model::user::{Registration, SessionClaims, User};
use crate::domain::traits::{AuthApi, KeyValueStore};

use super::config;

// Indian PAN: five letters, four digits, one letter
static PAN_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("PAN pattern is valid"));

/// Login state, backed by an opaque token in durable storage
pub struct SessionManager {
    store: Arc<dyn KeyValueStore>,
    auth: Arc<dyn AuthApi>,
    user: Option<User>,
    token: Option<String>,
}

impl SessionManager {
    /// Start logged out without looking at storage
    pub fn new(store: Arc<dyn KeyValueStore>, auth: Arc<dyn AuthApi>) -> Self {
        Self {
            store,
            auth,
            user: None,
            token: None,
        }
    }

    /// Resume from a stored token. A token that cannot be decoded is
    /// deleted and the session starts logged out.
    pub async fn restore(store: Arc<dyn KeyValueStore>, auth: Arc<dyn AuthApi>) -> Self {
        let mut session = Self::new(store, auth);

        let token = match session.store.get(SESSION_TOKEN_KEY) {
            Ok(Some(token)) => token,
            Ok(None) => return session,
            Err(e) => {
                warn!("Failed to read session token: {}", e);
                return session;
            }
        };

        let restored = match decode_token(&token) {
            Ok(claims) => session.auth.profile(&claims).await,
            Err(e) => Err(e),
        };

        match restored {
            Ok(user) => {
                info!("Restored session for {}", user.email);
                session.user = Some(user);
                session.token = Some(token);
            }
            Err(e) => {
                warn!("Discarding stored session token: {}", e);
                if let Err(e) = session.store.remove(SESSION_TOKEN_KEY) {
                    warn!("Failed to remove session token: {}", e);
                }
            }
        }

        session
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<&User, DeskError> {
        let response = self.auth.login(email, password).await?;
        self.store.set(SESSION_TOKEN_KEY, &response.token)?;

        self.token = Some(response.token);
        Ok(&*self.user.insert(response.user))
    }

    pub fn logout(&mut self) -> Result<(), DeskError> {
        self.store.remove(SESSION_TOKEN_KEY)?;
        if let Some(user) = self.user.take() {
            info!("Logged out {}", user.email);
        }
        self.token = None;
        Ok(())
    }

    /// Validate the sign-up form, then hand it to the auth API
    pub async fn register(&self, registration: &Registration) -> Result<(), DeskError> {
        let registration = validate_registration(registration)?;
        self.auth.register(&registration).await
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }
}

/// Normalise the PAN to uppercase and check the PAN format and password length
pub fn validate_registration(registration: &Registration) -> Result<Registration, DeskError> {
    let pan = registration.pan.trim().to_uppercase();
    if !PAN_FORMAT.is_match(&pan) {
        return Err(DeskError::validation(MSG_INVALID_PAN));
    }
    if registration.password.chars().count() < config::MIN_PASSWORD_LEN {
        return Err(DeskError::validation(MSG_SHORT_PASSWORD));
    }

    Ok(Registration {
        pan,
        ..registration.clone()
    })
}

fn decode_token(token: &str) -> Result<SessionClaims, DeskError> {
    let bytes = BASE64
        .decode(token.trim())
        .map_err(|e| DeskError::Auth(format!("token is not base64: {}", e)))?;
    serde_json::from_slice(&bytes).map_err(|e| DeskError::Auth(format!("token payload is invalid: {}", e)))
}
