//! SQLite storage implementation for the goal planner.
//!
//! This crate provides the persistent key-value store behind the local goal
//! store, using Diesel ORM with SQLite. It contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - A single-writer actor that serializes all writes
//! - The [`kv::SqliteKeyValueStore`] implementation of `KeyValueStoreTrait`
//!
//! ```text
//!     core (LocalGoalStore)
//!              │
//!              ▼  KeyValueStoreTrait
//!     storage-sqlite (this crate)
//!              │
//!              ▼
//!          SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod kv;
pub mod schema;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};
pub use kv::SqliteKeyValueStore;

// Re-export from goalplanner-core for convenience
pub use goalplanner_core::errors::{Error, Result};
