/**
 * Logout Handler
 *
 * Implements POST /api/v1/auth/logout. Tokens are self-contained and not
 * revocable, so logout is a stateless acknowledgement: the service
 * confirms the caller still matches a stored record, and the response
 * clears the bearer cookie client-side.
 */

use axum::{
    extract::State,
    http::{header::SET_COOKIE, StatusCode},
    response::{IntoResponse, Json},
};

use crate::error::ApiError;
use crate::middleware::auth::CurrentUser;
use crate::routes::ApiResponse;
use crate::server::state::AppState;

/// Cookie value that expires the bearer cookie immediately
const CLEARING_COOKIE: &str = "Authorization=; Max-age=0";

/// Log out handler
///
/// # Errors
///
/// * `409 Conflict` - No stored record matches the caller's email and
///   password hash
pub async fn logout(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.auth.logout(&identity).await?;
    tracing::info!("User logged out: {}", user.email);

    Ok((
        StatusCode::OK,
        [(SET_COOKIE, CLEARING_COOKIE)],
        Json(ApiResponse::new(user, "logout")),
    ))
}
