/**
 * User Model
 *
 * This module defines the persisted user entity and its enumerated
 * role/status attributes. The same serde representation is used for both
 * the document store and JSON responses, so field names follow the wire
 * contract (`_id`, `profilePhoto`, `createdAt`, `updatedAt`).
 */

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// User role
///
/// Restricted to the enumerated set; `user` is the default for signup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
    Guest,
}

impl Role {
    /// Parse a role from its wire spelling
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(Self::Admin),
            "user" => Some(Self::User),
            "guest" => Some(Self::Guest),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
            Self::Guest => "guest",
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Self::User
    }
}

/// Account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    Inactive,
}

impl Default for Status {
    fn default() -> Self {
        Self::Active
    }
}

/// User struct representing a user document in the store
///
/// The `password` field always holds a bcrypt hash after creation; it is
/// serialized into responses unchanged, reproducing the documented API
/// contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Opaque stable ID (ObjectId hex), assigned at creation
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name, always `"{firstName} {lastName}"` from the most
    /// recent mutating call
    pub name: String,
    /// Email address (unique across all users, stored case-sensitively)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password: String,
    /// Role (admin, user, guest)
    #[serde(default)]
    pub role: Role,
    /// Account status (active, inactive)
    #[serde(default)]
    pub status: Status,
    /// Optional profile photo path or URL
    #[serde(rename = "profilePhoto", skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
    /// Created at timestamp
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build a new user with a fresh ID, derived display name, default
    /// status, and automatic timestamps
    ///
    /// # Arguments
    /// * `first_name` / `last_name` - Name components, concatenated into `name`
    /// * `email` - Email address (uniqueness is the caller's check)
    /// * `password_hash` - Already-hashed password, never plaintext
    /// * `role` - Role for the new account
    pub fn new(
        first_name: &str,
        last_name: &str,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        role: Role,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: ObjectId::new().to_hex(),
            name: derive_name(first_name, last_name),
            email: email.into(),
            password: password_hash.into(),
            role,
            status: Status::default(),
            profile_photo: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Derive the display name from its components
pub fn derive_name(first_name: &str, last_name: &str) -> String {
    format!("{first_name} {last_name}")
}
