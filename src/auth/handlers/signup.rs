/**
 * Signup Handler
 *
 * Implements user registration for POST /api/v1/auth/signup.
 *
 * # Registration Process
 *
 * 1. Validate the request body against the signup schema
 * 2. Check email uniqueness, hash the password, persist the user
 * 3. Respond 201 with the persisted record
 *
 * # Validation
 *
 * - firstName and lastName are required
 * - Email must have a valid shape
 * - Password must be at least 8 characters long
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::auth::handlers::types::SignupRequest;
use crate::error::ApiError;
use crate::routes::ApiResponse;
use crate::server::state::AppState;
use crate::users::model::User;
use crate::validation;

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - Validation failed (every violated field listed)
/// * `409 Conflict` - Email already registered
/// * `500 Internal Server Error` - Hashing or persistence failed
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<ApiResponse<User>>), ApiError> {
    let data = validation::signup(&request)?;
    tracing::info!("Signup request for email: {}", data.email);

    let user = state.auth.signup(data).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(user, "User created successfully")),
    ))
}
