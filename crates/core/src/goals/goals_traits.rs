//! Goal store and collection service traits.
//!
//! These traits define the contract for goal operations without any
//! storage-specific types. The local store (key-value slot) and the remote
//! store (REST backend) both implement [`GoalStoreTrait`]; a deployment picks
//! exactly one.

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::goals_model::{
    DepositOption, Goal, GoalCollectionSnapshot, GoalOverview, GoalUpdate, GoalWithProgress,
    NewGoal,
};
use crate::errors::Result;

/// Trait defining the contract for goal persistence.
#[async_trait]
pub trait GoalStoreTrait: Send + Sync {
    /// Lists all goals in creation order.
    async fn list(&self) -> Result<Vec<Goal>>;

    /// Retrieves a goal by its ID.
    async fn get(&self, goal_id: &str) -> Result<Goal>;

    /// Creates a goal, assigning its id, a zero saved amount and today's date.
    async fn create(&self, new_goal: NewGoal) -> Result<Goal>;

    /// Merges the provided metadata fields into an existing goal.
    async fn update(&self, goal_id: &str, goal_update: GoalUpdate) -> Result<Goal>;

    /// Deletes a goal by its ID.
    async fn remove(&self, goal_id: &str) -> Result<()>;

    /// Adds a strictly positive amount to the goal's saved amount.
    async fn deposit(&self, goal_id: &str, amount: Decimal) -> Result<Goal>;
}

/// Trait defining the operations a presentation layer needs.
///
/// Mutating operations return a fresh [`GoalCollectionSnapshot`] so the caller
/// can re-render in a single round trip.
#[async_trait]
pub trait GoalCollectionServiceTrait: Send + Sync {
    async fn list_goals_with_progress(&self) -> Result<Vec<GoalWithProgress>>;

    async fn overview_stats(&self) -> Result<GoalOverview>;

    /// Goals that can still receive deposits, in list order.
    async fn depositable_goals(&self) -> Result<Vec<Goal>>;

    /// Labelled entries for a deposit-target selector.
    async fn deposit_options(&self) -> Result<Vec<DepositOption>>;

    /// Current state without any mutation.
    async fn snapshot(&self) -> Result<GoalCollectionSnapshot>;

    async fn add_goal(&self, new_goal: NewGoal) -> Result<GoalCollectionSnapshot>;

    async fn edit_goal(
        &self,
        goal_id: &str,
        goal_update: GoalUpdate,
    ) -> Result<GoalCollectionSnapshot>;

    async fn delete_goal(&self, goal_id: &str) -> Result<GoalCollectionSnapshot>;

    async fn make_deposit(&self, goal_id: &str, amount: Decimal)
        -> Result<GoalCollectionSnapshot>;
}
