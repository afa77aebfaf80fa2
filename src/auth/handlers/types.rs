/**
 * Authentication Handler Types
 *
 * Request and response types shared by the auth handlers. Request fields
 * are optional so the validator can enumerate every missing or malformed
 * field in one pass instead of failing at deserialization.
 */

use serde::{Deserialize, Serialize};

use crate::auth::tokens::TokenData;
use crate::users::model::Role;

/// Sign up request body
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    /// Plaintext password, hashed before storage (minimum 8 characters)
    pub password: Option<String>,
}

/// Login request body
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login response data
///
/// Carries the bearer token, its validity window, the caller's role, and
/// the cookie-encoded representation also sent via `Set-Cookie`.
#[derive(Serialize, Debug)]
pub struct LoginData {
    pub cookie: String,
    pub role: Role,
    pub token: String,
    pub expires_in: u64,
}

impl LoginData {
    pub fn new(token_data: TokenData, role: Role) -> Self {
        Self {
            cookie: token_data.cookie(),
            role,
            token: token_data.token,
            expires_in: token_data.expires_in,
        }
    }
}
