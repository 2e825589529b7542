//! Key-value slot storage used by the local goal store.

mod kv_memory;
mod kv_traits;

pub use kv_memory::InMemoryKeyValueStore;
pub use kv_traits::KeyValueStoreTrait;
