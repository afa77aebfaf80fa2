//! Routes Module
//!
//! Router assembly and the uniform JSON response envelope.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs        - ApiResponse envelope
//! ├── router.rs     - Router assembly, layers, static mount
//! └── api_routes.rs - /api/v1 auth and user route tables
//! ```

use serde::Serialize;

/// Router assembly
pub mod router;

/// API route tables
pub mod api_routes;

pub use router::create_router;

/// Uniform success envelope: `{ data, message }`
///
/// Every successful response serializes through this wrapper; errors use
/// the `{ message }` body produced by `ApiError::into_response`.
#[derive(Serialize, Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: message.into(),
        }
    }
}
