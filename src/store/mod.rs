//! User Store Module
//!
//! This module defines the persistence boundary for user documents and
//! its two implementations:
//!
//! - **`mongo`** - `MongoUserStore`, backed by the MongoDB driver
//! - **`memory`** - `MemoryUserStore`, an in-process map used by the test
//!   suite and for running the server without a database
//!
//! # Design
//!
//! Services receive an `Arc<dyn UserStore>` constructed once at process
//! start, so persistence is an explicit injected dependency rather than a
//! module-level singleton. The store owns the persisted representation;
//! services only hold transient copies for the duration of one request.
//!
//! # Atomicity
//!
//! Every operation touches at most one document (or an unconditional bulk
//! of them); the underlying engine's single-document atomicity is the
//! only consistency guarantee, and no cross-document transactions exist.

use async_trait::async_trait;
use thiserror::Error;

use crate::users::model::User;

pub mod memory;
pub mod mongo;

pub use memory::MemoryUserStore;
pub use mongo::MongoUserStore;

/// Store failure
///
/// Propagates directly to the caller; no retries are attempted anywhere.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Driver-level database failure
    #[error(transparent)]
    Database(#[from] mongodb::error::Error),

    /// A stored document could not be decoded into a `User`
    #[error("corrupt user document: {0}")]
    Corrupt(String),
}

/// Persistence operations for user documents
///
/// Implementations must be safe to share across concurrent requests.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new user document
    async fn insert(&self, user: User) -> Result<User, StoreError>;

    /// Persist a batch of user documents in one call
    async fn insert_many(&self, users: Vec<User>) -> Result<Vec<User>, StoreError>;

    /// Find one user by its opaque ID
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError>;

    /// Find one user by exact email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Find one user matching both email and stored password hash
    async fn find_by_email_and_password(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<Option<User>, StoreError>;

    /// List every user
    async fn find_all(&self) -> Result<Vec<User>, StoreError>;

    /// Replace the stored document with the given one, matched by ID
    async fn replace(&self, user: &User) -> Result<(), StoreError>;

    /// Delete one user by ID; returns whether a document was removed
    async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError>;

    /// Delete every user; returns the number of documents removed
    async fn delete_all(&self) -> Result<u64, StoreError>;
}
