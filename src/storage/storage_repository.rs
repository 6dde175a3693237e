use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::Result;
use crate::schema::app_storage::dsl::*;

use super::storage_model::AppStorageEntry;

/// Trait defining the contract for the on-device key-value store.
///
/// Reads are synchronous; writes go through the single-writer actor and can
/// be awaited for durability.
#[async_trait]
pub trait AppStorageRepositoryTrait: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: String) -> Result<()>;
    async fn remove(&self, key: &str) -> Result<()>;
}

/// SQLite-backed key-value store for guest/device state
pub struct AppStorageRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl AppStorageRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl AppStorageRepositoryTrait for AppStorageRepository {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = get_connection(&self.pool)?;
        let result = app_storage
            .find(key)
            .select(storage_value)
            .first::<String>(&mut conn)
            .optional()?;
        Ok(result)
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        let entry = AppStorageEntry::new(key, value);
        self.writer
            .exec(move |conn| {
                diesel::replace_into(app_storage).values(&entry).execute(conn)?;
                Ok(())
            })
            .await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let key = key.to_string();
        self.writer
            .exec(move |conn| {
                // Deleting an absent key is a no-op, not an error
                diesel::delete(app_storage.find(key)).execute(conn)?;
                Ok(())
            })
            .await
    }
}
