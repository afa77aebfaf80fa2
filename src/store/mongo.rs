/**
 * MongoDB User Store
 *
 * This module implements `UserStore` against a MongoDB collection using
 * the official driver. Documents are (de)serialized straight through the
 * `User` serde representation, so the collection layout matches the wire
 * contract (`_id`, `profilePhoto`, `createdAt`, `updatedAt`).
 *
 * # Uniqueness
 *
 * A unique index on `email` is created at connect time. Services still
 * perform their own lookup-before-insert check so duplicate emails fail
 * with a 409 rather than a raw driver error.
 */

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::doc,
    options::IndexOptions,
    Client, Collection, IndexModel,
};

use crate::store::{StoreError, UserStore};
use crate::users::model::User;

/// MongoDB-backed user store
#[derive(Clone)]
pub struct MongoUserStore {
    users: Collection<User>,
}

impl MongoUserStore {
    /// Connect to MongoDB and prepare the `users` collection
    ///
    /// # Arguments
    /// * `url` - MongoDB connection string
    /// * `database` - Database name
    ///
    /// # Errors
    ///
    /// Fails if the client cannot be constructed or the unique email
    /// index cannot be created.
    pub async fn connect(url: &str, database: &str) -> Result<Self, StoreError> {
        tracing::info!("Connecting to document store at {database}...");

        let client = Client::with_uri_str(url).await?;
        let users = client.database(database).collection::<User>("users");

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        users.create_index(email_index).await?;

        tracing::info!("Document store connection established");
        Ok(Self { users })
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn insert(&self, user: User) -> Result<User, StoreError> {
        self.users.insert_one(&user).await?;
        Ok(user)
    }

    async fn insert_many(&self, users: Vec<User>) -> Result<Vec<User>, StoreError> {
        if users.is_empty() {
            return Ok(users);
        }
        self.users.insert_many(&users).await?;
        Ok(users)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.find_one(doc! { "_id": id }).await?)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.find_one(doc! { "email": email }).await?)
    }

    async fn find_by_email_and_password(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<Option<User>, StoreError> {
        Ok(self
            .users
            .find_one(doc! { "email": email, "password": password_hash })
            .await?)
    }

    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        let cursor = self.users.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn replace(&self, user: &User) -> Result<(), StoreError> {
        self.users
            .replace_one(doc! { "_id": &user.id }, user)
            .await?;
        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let result = self.users.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count == 1)
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        let result = self.users.delete_many(doc! {}).await?;
        Ok(result.deleted_count)
    }
}
