//! Middleware Module
//!
//! Cross-cutting request guards. Currently only bearer-token
//! authentication; CORS, compression, and security headers are plain
//! tower-http layers applied in the router.

pub mod auth;

pub use auth::{auth_middleware, CurrentUser};
