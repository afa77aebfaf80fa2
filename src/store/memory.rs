/**
 * In-Memory User Store
 *
 * This module implements `UserStore` over a map guarded by a `RwLock`.
 * It backs the test suite and lets the server run without a database;
 * listings are ordered by creation time so responses are deterministic.
 */

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::store::{StoreError, UserStore};
use crate::users::model::User;

/// In-process user store
///
/// Cloning shares the underlying map, matching the shared-handle
/// semantics of a driver connection pool.
#[derive(Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, user: User) -> Result<User, StoreError> {
        self.users
            .write()
            .await
            .insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn insert_many(&self, users: Vec<User>) -> Result<Vec<User>, StoreError> {
        let mut guard = self.users.write().await;
        for user in &users {
            guard.insert(user.id.clone(), user.clone());
        }
        Ok(users)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn find_by_email_and_password(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<Option<User>, StoreError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|user| user.email == email && user.password == password_hash)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        let mut users: Vec<User> = self.users.read().await.values().cloned().collect();
        users.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(users)
    }

    async fn replace(&self, user: &User) -> Result<(), StoreError> {
        self.users
            .write()
            .await
            .insert(user.id.clone(), user.clone());
        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.users.write().await.remove(id).is_some())
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        let mut guard = self.users.write().await;
        let count = guard.len() as u64;
        guard.clear();
        Ok(count)
    }
}
