//! Goal Planner Remote - REST-backed implementation of the goal store.
//!
//! This crate provides an HTTP client for the goal planner REST API and a
//! [`RemoteGoalStore`] that exposes it through `GoalStoreTrait`, so the
//! collection service works the same whether goals live locally or on a
//! server.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use goalplanner_core::goals::GoalCollectionService;
//! use goalplanner_core::utils::SystemClock;
//! use goalplanner_remote::RemoteGoalStore;
//!
//! let store = RemoteGoalStore::new("http://localhost:8080/api/v1")?;
//! let service = GoalCollectionService::new(Arc::new(store), Arc::new(SystemClock));
//! let snapshot = service.snapshot().await?;
//! ```

mod client;
mod error;
mod store;
mod types;

pub use client::GoalApiClient;
pub use error::{RemoteError, Result};
pub use store::RemoteGoalStore;
pub use types::*;
