//! Key-value store trait.
//!
//! The contract is intentionally tiny: whole documents are read and written
//! under a named slot, with no partial updates.

use async_trait::async_trait;

use crate::errors::Result;

/// Trait defining a persistent key-value store of string documents.
#[async_trait]
pub trait KeyValueStoreTrait: Send + Sync {
    /// Reads the document stored under `key`, or `None` if the slot was never written.
    fn get_value(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the document stored under `key`.
    async fn set_value(&self, key: &str, value: &str) -> Result<()>;
}
