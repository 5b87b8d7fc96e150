//! Wire types for the Quotedeck API.
//!
//! The server wraps user-facing write bodies in a `user` envelope:
//! `{ "user": { "login": ..., ... } }`.

use serde::{Deserialize, Serialize};

/// `POST /users` body. Immutable once constructed; sent exactly once
/// per submit action.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationRequest {
    pub user: RegistrationBody,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegistrationBody {
    pub login: String,
    pub email: String,
    pub password: String,
}

impl RegistrationRequest {
    pub fn new(login: String, email: String, password: String) -> Self {
        Self {
            user: RegistrationBody {
                login,
                email,
                password,
            },
        }
    }
}

/// Successful registration payload.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationResponse {
    pub id: u64,
    pub login: String,
    pub email: String,
}

/// `POST /sessions` body.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub user: LoginBody,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginBody {
    pub login: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(login: String, password: String) -> Self {
        Self {
            user: LoginBody { login, password },
        }
    }
}

/// Successful login payload.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub id: u64,
    pub login: String,
    pub token: String,
}

/// One entry of the quote list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Quote {
    pub symbol: String,
    pub bid: f64,
    pub ask: f64,
}
