/**
 * User HTTP Handlers
 *
 * Handlers for the `/api/v1/user` endpoints. Bearer authentication is
 * applied by the router; the admin-role check lives in the service, so
 * an authenticated non-admin reaches the handler and is rejected there.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::middleware::auth::CurrentUser;
use crate::routes::ApiResponse;
use crate::server::state::AppState;
use crate::users::model::User;
use crate::validation;

/// Add-user / update-user request body
///
/// Fields are optional so the validator can enumerate every violation in
/// one pass. `profilePhoto` is genuinely optional.
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpsertUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    /// Role spelling: one of `admin`, `user`, `guest`
    pub role: Option<String>,
    pub profile_photo: Option<String>,
}

/// Add a user (admin only)
pub async fn add_user(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    Json(request): Json<UpsertUserRequest>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let data = validation::upsert_user(&request)?;
    let user = state.users.add_user(&caller, data).await?;
    Ok(Json(ApiResponse::new(user, "User added successfully")))
}

/// List every user (admin only)
pub async fn get_users(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
) -> Result<Json<ApiResponse<Vec<User>>>, ApiError> {
    let users = state.users.get_users(&caller).await?;
    Ok(Json(ApiResponse::new(
        users,
        "Users retreived successfully",
    )))
}

/// Get one user by ID (admin only)
pub async fn get_user(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user = state.users.get_user(&caller, &user_id).await?;
    Ok(Json(ApiResponse::new(user, "User retreived successfully")))
}

/// Update a user's name, role, or photo (admin only)
pub async fn update_user(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    Path(user_id): Path<String>,
    Json(request): Json<UpsertUserRequest>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let data = validation::upsert_user(&request)?;
    let user = state.users.update_user(&caller, &user_id, data).await?;
    Ok(Json(ApiResponse::new(user, "User updated successfully")))
}

/// Delete one user by ID (admin only)
pub async fn delete_user(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user = state.users.delete_user(&caller, &user_id).await?;
    Ok(Json(ApiResponse::new(user, "User deleted successfully")))
}

/// Insert the fixed sample set (public)
pub async fn seed_users(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<User>>>, ApiError> {
    let users = state.users.seed_users().await?;
    Ok(Json(ApiResponse::new(users, "Users seeded successfully")))
}
