use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use super::kv_traits::KeyValueStoreTrait;
use crate::errors::{Error, Result};

/// Process-local key-value store. Contents are lost when dropped.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    slots: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with one slot already written.
    pub fn with_slot(key: &str, value: &str) -> Self {
        let mut slots = HashMap::new();
        slots.insert(key.to_string(), value.to_string());
        Self {
            slots: RwLock::new(slots),
        }
    }
}

#[async_trait]
impl KeyValueStoreTrait for InMemoryKeyValueStore {
    fn get_value(&self, key: &str) -> Result<Option<String>> {
        let slots = self
            .slots
            .read()
            .map_err(|_| Error::Storage("In-memory slot lock poisoned".to_string()))?;
        Ok(slots.get(key).cloned())
    }

    async fn set_value(&self, key: &str, value: &str) -> Result<()> {
        let mut slots = self
            .slots
            .write()
            .map_err(|_| Error::Storage("In-memory slot lock poisoned".to_string()))?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
