/**
 * API Error Types
 *
 * This module defines the error taxonomy used across services, handlers
 * and middleware. Each variant carries an HTTP status code so the
 * centralized conversion layer can serialize it without per-handler
 * catch logic.
 *
 * # Status Mapping
 *
 * Two mappings are carried over literally from the documented API
 * contract even though they differ from the conceptually correct codes:
 *
 * - `Forbidden` responds with 401 (conceptually 403)
 * - `NotFound` responds with 400 (conceptually 404)
 */

use axum::http::StatusCode;
use thiserror::Error;

/// A single violated field reported by the validator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Name of the violated field (request-body spelling, e.g. `firstName`)
    pub field: String,
    /// Human-readable reason
    pub reason: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Backend error taxonomy
///
/// Every service-layer failure is one of these variants. Handlers never
/// catch errors locally; they propagate with `?` and the `IntoResponse`
/// implementation in `conversion.rs` serializes the final body.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed request input; enumerates every violated field
    #[error("validation failed: {}", format_fields(.0))]
    Validation(Vec<FieldError>),

    /// Uniqueness or state conflict (409)
    #[error("{0}")]
    Conflict(String),

    /// Missing or invalid credential or token (401)
    #[error("{0}")]
    Unauthorized(String),

    /// Insufficient role (responds 401 per the API contract)
    #[error("{0}")]
    Forbidden(String),

    /// Missing resource (responds 400 per the API contract)
    #[error("{0}")]
    NotFound(String),

    /// Generic precondition failure (400)
    #[error("{0}")]
    BadRequest(String),

    /// Store failure, surfaces as 500
    #[error("store error: {0}")]
    Store(#[from] crate::store::StoreError),

    /// Password hashing failure, surfaces as 500
    #[error("hash error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Token signing failure, surfaces as 500
    ///
    /// Token *decoding* failures are mapped to `Unauthorized` by the auth
    /// middleware before they ever reach this variant.
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

fn format_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(FieldError::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            // Carried literally from the API contract, not the conceptual 403/404.
            Self::Forbidden(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::BAD_REQUEST,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Store(_) | Self::Hash(_) | Self::Token(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the message serialized to the client
    ///
    /// Infrastructure failures are collapsed to a generic message so
    /// internal details never leak into responses.
    pub fn message(&self) -> String {
        match self {
            Self::Validation(errors) => format_fields(errors),
            Self::Conflict(message)
            | Self::Unauthorized(message)
            | Self::Forbidden(message)
            | Self::NotFound(message)
            | Self::BadRequest(message) => message.clone(),
            Self::Store(_) | Self::Hash(_) | Self::Token(_) => {
                "Something went wrong".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        let conflict = ApiError::Conflict("exists".into());
        assert_eq!(conflict.status_code(), StatusCode::CONFLICT);

        let unauthorized = ApiError::Unauthorized("no token".into());
        assert_eq!(unauthorized.status_code(), StatusCode::UNAUTHORIZED);

        // The contract responds 401 for role failures and 400 for missing
        // resources, not the conceptual 403/404.
        let forbidden = ApiError::Forbidden("admins only".into());
        assert_eq!(forbidden.status_code(), StatusCode::UNAUTHORIZED);

        let not_found = ApiError::NotFound("User does not exist".into());
        assert_eq!(not_found.status_code(), StatusCode::BAD_REQUEST);

        let bad_request = ApiError::BadRequest("empty".into());
        assert_eq!(bad_request.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_validation_enumerates_every_field() {
        let error = ApiError::Validation(vec![
            FieldError::new("email", "must be a valid email"),
            FieldError::new("password", "must have a minimum of 8 characters"),
        ]);

        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        let message = error.message();
        assert!(message.contains("email"));
        assert!(message.contains("password"));
    }

    #[test]
    fn test_infrastructure_errors_hide_details() {
        let error = ApiError::Store(crate::store::StoreError::Corrupt(
            "secret detail".into(),
        ));
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.message(), "Something went wrong");
    }
}
