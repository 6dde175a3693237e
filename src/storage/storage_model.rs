use chrono::NaiveDateTime;
use diesel::prelude::*;

/// One key-value row of on-device app storage
#[derive(Queryable, Insertable, Identifiable, AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::app_storage)]
#[diesel(primary_key(storage_key))]
pub struct AppStorageEntry {
    pub storage_key: String,
    pub storage_value: String,
    pub updated_at: NaiveDateTime,
}

impl AppStorageEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            storage_key: key.into(),
            storage_value: value.into(),
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}
