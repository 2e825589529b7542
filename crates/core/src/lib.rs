//! Goal Planner Core - Savings goal model, stores and services.
//!
//! This crate contains the business logic of the goal planner: the goal
//! record, the progress and deadline calculations, and the collection
//! service used by presentation layers. Persistence is reached through the
//! [`goals::GoalStoreTrait`] and [`kv::KeyValueStoreTrait`] seams, which are
//! implemented here for in-memory use and by the `storage-sqlite` and
//! `remote` crates for real deployments.

pub mod constants;
pub mod errors;
pub mod goals;
pub mod kv;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
