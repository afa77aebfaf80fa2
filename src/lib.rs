//! Cyzygy Backend - Main Library
//!
//! A conventional REST backend providing user authentication (signup,
//! login, logout, profile) and administrator-gated user CRUD, backed by
//! a document database.
//!
//! # Overview
//!
//! The crate is a thin composition of third-party building blocks: an
//! Axum HTTP router, a bcrypt password hasher, a JWT token signer, and
//! the MongoDB driver as object-document mapper. No component performs
//! original algorithmic work.
//!
//! # Module Structure
//!
//! - **`server`** - Configuration, shared state, startup wiring
//! - **`routes`** - Router assembly and the `{ data, message }` envelope
//! - **`auth`** - Password hashing, bearer tokens, session operations
//! - **`users`** - User entity and admin-gated CRUD
//! - **`store`** - `UserStore` trait with MongoDB and in-memory backends
//! - **`validation`** - Declarative request validators
//! - **`middleware`** - Bearer-token route guard
//! - **`error`** - `ApiError` taxonomy and HTTP conversion
//!
//! # Request Flow
//!
//! ```text
//! HTTP layer → validator / auth middleware → handler → service
//!           → store / hasher / token issuer → handler → JSON response
//! ```

pub mod auth;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod store;
pub mod users;
pub mod validation;
