/**
 * Profile Handler
 *
 * Implements GET /api/v1/auth. The auth middleware resolves the caller;
 * the service re-fetches the record by email so a deleted account fails
 * with 401 even while its token is still formally valid.
 *
 * Responds 201, matching the documented contract for this endpoint.
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::error::ApiError;
use crate::middleware::auth::CurrentUser;
use crate::routes::ApiResponse;
use crate::server::state::AppState;
use crate::users::model::User;

/// Get the caller's own profile
pub async fn profile(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
) -> Result<(StatusCode, Json<ApiResponse<User>>), ApiError> {
    let user = state.auth.profile(&identity).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            user,
            "User profile retrieved successfully",
        )),
    ))
}
