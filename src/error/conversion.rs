/**
 * Error Conversion
 *
 * This module provides the `IntoResponse` implementation that turns an
 * `ApiError` into the uniform error body served to clients.
 *
 * # Response Format
 *
 * ```json
 * { "message": "This email a@b.com already exists" }
 * ```
 *
 * The HTTP status code is the one carried by the error variant
 * (see `types.rs`), defaulting to 500 for infrastructure failures.
 */

use axum::{
    body::Body,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!("request failed: {self}");
        } else {
            tracing::warn!("request rejected ({}): {message}", status.as_u16());
        }

        let body = serde_json::json!({ "message": message });

        Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap_or_else(
                |_| format!(r#"{{"message":"{message}"}}"#),
            )))
            .unwrap_or_else(|_| {
                Response::builder()
                    .status(StatusCode::INTERNAL_SERVER_ERROR)
                    .body(Body::from("Internal Server Error"))
                    .unwrap()
            })
    }
}
