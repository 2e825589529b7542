use async_trait::async_trait;
use diesel::prelude::*;
use log::debug;
use std::sync::Arc;

use super::model::KvSlotDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::kv_slots::dsl::*;
use goalplanner_core::errors::Result;
use goalplanner_core::kv::KeyValueStoreTrait;

/// Key-value store persisted in the `kv_slots` table.
///
/// Reads use a pooled connection; writes go through the single writer actor.
pub struct SqliteKeyValueStore {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SqliteKeyValueStore {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        SqliteKeyValueStore { pool, writer }
    }
}

#[async_trait]
impl KeyValueStoreTrait for SqliteKeyValueStore {
    fn get_value(&self, key: &str) -> Result<Option<String>> {
        let mut conn = get_connection(&self.pool)?;
        let value = kv_slots
            .filter(slot_key.eq(key))
            .select(slot_value)
            .first::<String>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(value)
    }

    async fn set_value(&self, key: &str, value: &str) -> Result<()> {
        let row = KvSlotDB {
            slot_key: key.to_string(),
            slot_value: value.to_string(),
        };
        debug!("Writing slot '{}' ({} bytes)", row.slot_key, row.slot_value.len());
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                diesel::replace_into(kv_slots)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }
}
