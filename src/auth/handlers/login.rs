/**
 * Login Handler
 *
 * Implements user authentication for POST /api/v1/auth/login.
 *
 * # Authentication Process
 *
 * 1. Validate the request body against the login schema
 * 2. Look the user up by email and verify the password hash
 * 3. Issue a one-hour bearer token
 * 4. Respond 200 with the token data and a `Set-Cookie` header carrying
 *    the cookie-encoded token
 *
 * # Security
 *
 * Unknown email and wrong password both respond 401, so the two cases
 * are indistinguishable to a caller.
 */

use axum::{
    extract::State,
    http::{header::SET_COOKIE, StatusCode},
    response::{IntoResponse, Json},
};

use crate::auth::handlers::types::{LoginData, LoginRequest};
use crate::error::ApiError;
use crate::routes::ApiResponse;
use crate::server::state::AppState;
use crate::validation;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - Validation failed
/// * `401 Unauthorized` - Unknown email or wrong password
/// * `500 Internal Server Error` - Store, hash, or signing failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let data = validation::login(&request)?;
    tracing::info!("Login request for email: {}", data.email);

    let (token_data, role) = state.auth.login(data).await?;
    let data = LoginData::new(token_data, role);
    let cookie = data.cookie.clone();

    Ok((
        StatusCode::OK,
        [(SET_COOKIE, cookie)],
        Json(ApiResponse::new(data, "Loggedin successfull")),
    ))
}
