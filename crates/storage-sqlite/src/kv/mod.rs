//! SQLite storage implementation for key-value slots.

mod model;
mod repository;

pub use model::KvSlotDB;
pub use repository::SqliteKeyValueStore;
