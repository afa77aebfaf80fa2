/**
 * Authentication Middleware
 *
 * Route guard for every protected endpoint. It:
 *
 * 1. Extracts the bearer token from the `Authorization` cookie or the
 *    `Authorization: Bearer` header
 * 2. Verifies and decodes it via the token issuer
 * 3. Resolves the identity reference to a live user record
 * 4. Attaches the resolved user to the request extensions
 *
 * A missing, invalid, or expired token fails with 401, as does a token
 * whose user no longer exists. No role check happens here; role checks
 * are each service's own responsibility.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::header::{AUTHORIZATION, COOKIE},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::error::ApiError;
use crate::server::state::AppState;
use crate::users::model::User;

/// The authenticated caller, resolved by the middleware
///
/// Handlers receive this as an extractor instead of reading mutated
/// request state themselves.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub User);

/// Bearer-token route guard
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token(request.headers()).ok_or_else(|| {
        tracing::warn!("Missing authentication token");
        ApiError::Unauthorized("Authentication token missing".to_string())
    })?;

    let user_id = state.tokens.decode(&token).map_err(|e| {
        tracing::warn!("Invalid token: {e}");
        ApiError::Unauthorized("Wrong authentication token".to_string())
    })?;

    let user = state
        .store
        .find_by_id(&user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Token references a user that no longer exists: {user_id}");
            ApiError::Unauthorized("Wrong authentication token".to_string())
        })?;

    request.extensions_mut().insert(CurrentUser(user));
    Ok(next.run(request).await)
}

/// Pull the bearer token from the cookie or the Authorization header
///
/// The cookie takes precedence, matching the login flow that sets it.
fn extract_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = authorization_cookie(headers) {
        return Some(token);
    }

    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::to_string)
}

fn authorization_cookie(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == "Authorization" && !value.is_empty()).then(|| value.to_string())
    })
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<CurrentUser>().cloned().ok_or_else(|| {
            tracing::warn!("CurrentUser not found in request extensions");
            ApiError::Unauthorized("Authentication token missing".to_string())
        })
    }
}
