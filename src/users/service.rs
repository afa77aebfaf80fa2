/**
 * User Service
 *
 * This module orchestrates admin-gated CRUD over the user store, plus
 * the bulk seed and bulk delete utilities. Every gated operation checks
 * the caller's role before touching the store; the auth middleware does
 * no role checks of its own.
 *
 * # Default Passwords
 *
 * Admin-added and seeded users get a password derived from their
 * lower-cased last name. This is a weak, guessable credential carried
 * over from the API contract; see DESIGN.md for the flag.
 */

use std::sync::Arc;

use chrono::Utc;

use crate::auth::password;
use crate::error::ApiError;
use crate::store::UserStore;
use crate::users::model::{derive_name, Role, User};
use crate::users::seed::SAMPLE_USERS;
use crate::validation::UpsertUserData;

/// Orchestrates admin-gated user CRUD and bulk utilities
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Add a user on behalf of an administrator
    ///
    /// Fails with `Conflict` for a duplicate email. The new account's
    /// password defaults to the lower-cased last name, hashed.
    pub async fn add_user(
        &self,
        caller: &User,
        data: UpsertUserData,
    ) -> Result<User, ApiError> {
        require_admin(caller)?;

        if self.users.find_by_email(&data.email).await?.is_some() {
            return Err(ApiError::Conflict(format!(
                "This email {} already exists",
                data.email
            )));
        }

        let password_hash = password::hash(&data.last_name.to_lowercase())?;
        let mut user = User::new(
            &data.first_name,
            &data.last_name,
            data.email,
            password_hash,
            data.role,
        );
        user.profile_photo = data.profile_photo;

        let user = self.users.insert(user).await?;
        tracing::info!("User added by admin: {} ({})", user.name, user.email);
        Ok(user)
    }

    /// List every user
    pub async fn get_users(&self, caller: &User) -> Result<Vec<User>, ApiError> {
        require_admin(caller)?;
        Ok(self.users.find_all().await?)
    }

    /// Get one user by ID
    pub async fn get_user(&self, caller: &User, user_id: &str) -> Result<User, ApiError> {
        require_admin(caller)?;

        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("User does not exist".to_string()))
    }

    /// Update a user's mutable attributes
    ///
    /// Only the name components, role, and profile photo change; the
    /// stored email and password hash are left untouched. The photo is
    /// kept when the request carries none.
    pub async fn update_user(
        &self,
        caller: &User,
        user_id: &str,
        data: UpsertUserData,
    ) -> Result<User, ApiError> {
        require_admin(caller)?;

        let mut user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("User does not exist".to_string()))?;

        user.name = derive_name(&data.first_name, &data.last_name);
        user.role = data.role;
        user.profile_photo = data.profile_photo.or(user.profile_photo);
        user.updated_at = Utc::now();

        self.users.replace(&user).await?;
        tracing::info!("User updated: {}", user.id);
        Ok(user)
    }

    /// Delete one user by ID, returning the removed record
    pub async fn delete_user(&self, caller: &User, user_id: &str) -> Result<User, ApiError> {
        require_admin(caller)?;

        let user = self.users.find_by_id(user_id).await?;
        let deleted = self.users.delete_by_id(user_id).await?;
        let (Some(user), true) = (user, deleted) else {
            return Err(ApiError::NotFound(
                "An error occured deleting user".to_string(),
            ));
        };

        tracing::info!("User deleted: {user_id}");
        Ok(user)
    }

    /// Insert the fixed sample set
    ///
    /// Ungated; the seed route is public. Every sample user gets the
    /// last-name-derived default password.
    pub async fn seed_users(&self) -> Result<Vec<User>, ApiError> {
        let mut users = Vec::with_capacity(SAMPLE_USERS.len());
        for sample in SAMPLE_USERS {
            let password_hash = password::hash(&sample.last_name.to_lowercase())?;
            users.push(User::new(
                sample.first_name,
                sample.last_name,
                sample.email,
                password_hash,
                sample.role,
            ));
        }

        let users = self.users.insert_many(users).await?;
        tracing::info!("Seeded {} sample users", users.len());
        Ok(users)
    }

    /// Delete every user
    ///
    /// Fails with `BadRequest` when the store was already empty;
    /// otherwise returns how many records were removed.
    pub async fn delete_all_users(&self, caller: &User) -> Result<u64, ApiError> {
        require_admin(caller)?;

        let deleted = self.users.delete_all().await?;
        if deleted == 0 {
            return Err(ApiError::BadRequest("No users found to delete".to_string()));
        }

        tracing::info!("Deleted all {deleted} users");
        Ok(deleted)
    }
}

/// Reject any caller whose role is not administrator
fn require_admin(caller: &User) -> Result<(), ApiError> {
    if caller.role != Role::Admin {
        tracing::warn!(
            "Admin-gated operation rejected for {} (role {})",
            caller.email,
            caller.role.as_str()
        );
        return Err(ApiError::Forbidden(
            "Unauthorized to perform this operation".to_string(),
        ));
    }
    Ok(())
}
