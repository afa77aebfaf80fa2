//! API Error Module
//!
//! This module defines the error taxonomy shared by every service and
//! handler in the backend.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # Error Types
//!
//! - `Validation` - Malformed request input (enumerates every bad field)
//! - `Conflict` - Uniqueness or state conflict
//! - `Unauthorized` - Missing or invalid credential or token
//! - `Forbidden` - Insufficient role
//! - `NotFound` - Missing resource
//! - `BadRequest` - Generic precondition failure
//! - `Store` / `Hash` / `Token` - Infrastructure failures
//!
//! # HTTP Response Conversion
//!
//! `ApiError` implements `IntoResponse`, so handlers return it directly
//! with `?` and a centralized conversion serializes `{"message"}` with the
//! status the error carries.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
