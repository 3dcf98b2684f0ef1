use serde::{Deserialize, Serialize};

/// Profile of the logged-in user
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub pan: String,
    pub account_balance: f64,
}

/// Payload carried inside the session token
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub email: String,
    pub pan: String,
}

impl From<&User> for SessionClaims {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            pan: user.pan.clone(),
        }
    }
}

/// Successful login: the opaque token plus the resolved profile
#[derive(Clone, Debug, PartialEq)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Sign-up form
#[derive(Clone, Debug, PartialEq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub pan: String,
}
