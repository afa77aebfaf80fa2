/**
 * Token Issuer
 *
 * This module signs and verifies the compact bearer tokens that bind a
 * user identity. Tokens are self-contained: there is no server-side
 * session store, no refresh mechanism, and no revocation list. A token
 * stays valid until its fixed 3600-second lifetime elapses.
 */

use jsonwebtoken::{
    decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Fixed token validity window in seconds
pub const TOKEN_LIFETIME_SECS: u64 = 60 * 60;

/// JWT claims structure
///
/// The payload carries only the identity reference plus the standard
/// time claims.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Owning user's ID
    #[serde(rename = "_id")]
    pub user_id: String,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// Issued token plus its validity window
#[derive(Debug, Clone, Serialize)]
pub struct TokenData {
    pub token: String,
    pub expires_in: u64,
}

impl TokenData {
    /// Cookie-encoded representation of this token
    ///
    /// `Authorization=<token>; HttpOnly; Max-Age=<seconds>;`
    pub fn cookie(&self) -> String {
        format!(
            "Authorization={}; HttpOnly; Max-Age={};",
            self.token, self.expires_in
        )
    }
}

/// Signs and verifies bearer tokens with a server-held secret
#[derive(Clone)]
pub struct TokenIssuer {
    secret: String,
}

impl TokenIssuer {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Issue a token for a user
    ///
    /// # Arguments
    /// * `user_id` - The identity reference stored in the payload
    ///
    /// # Returns
    /// The signed token and its lifetime in seconds
    pub fn issue(&self, user_id: &str) -> Result<TokenData, jsonwebtoken::errors::Error> {
        let now = unix_now().as_secs();

        let claims = Claims {
            user_id: user_id.to_string(),
            iat: now,
            exp: now + TOKEN_LIFETIME_SECS,
        };

        let key = EncodingKey::from_secret(self.secret.as_ref());
        let token = encode(&Header::default(), &claims, &key)?;

        Ok(TokenData {
            token,
            expires_in: TOKEN_LIFETIME_SECS,
        })
    }

    /// Verify a token and extract the identity reference
    ///
    /// # Errors
    ///
    /// Fails if the signature does not verify, the token is malformed,
    /// or it has expired.
    pub fn decode(&self, token: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let key = DecodingKey::from_secret(self.secret.as_ref());
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = decode::<Claims>(token, &key, &validation)?;
        Ok(data.claims.user_id)
    }
}

fn unix_now() -> Duration {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
}
