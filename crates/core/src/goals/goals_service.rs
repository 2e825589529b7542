//! Collection service: progress snapshots, overview counters and deposit options.

use async_trait::async_trait;
use log::{debug, warn};
use rust_decimal::Decimal;
use std::sync::Arc;

use super::goals_model::{
    DepositOption, Goal, GoalCollectionSnapshot, GoalOverview, GoalUpdate, GoalWithProgress,
    NewGoal,
};
use super::goals_progress::{is_completed, GoalProgress};
use super::goals_traits::{GoalCollectionServiceTrait, GoalStoreTrait};
use crate::constants::DEFAULT_CURRENCY_PREFIX;
use crate::errors::{Error, Result};
use crate::utils::Clock;

/// Service exposing the goal collection to a presentation layer.
///
/// The service owns its store; nothing else holds the goal list, and every
/// read goes through a single `list()` call on the store.
pub struct GoalCollectionService {
    store: Arc<dyn GoalStoreTrait>,
    clock: Arc<dyn Clock>,
    currency_prefix: String,
}

impl GoalCollectionService {
    pub fn new(store: Arc<dyn GoalStoreTrait>, clock: Arc<dyn Clock>) -> Self {
        GoalCollectionService {
            store,
            clock,
            currency_prefix: DEFAULT_CURRENCY_PREFIX.to_string(),
        }
    }

    /// Sets the prefix used in deposit option labels (e.g. `Ksh.` or `$`).
    pub fn with_currency_prefix(mut self, currency_prefix: impl Into<String>) -> Self {
        self.currency_prefix = currency_prefix.into();
        self
    }

    fn with_progress(&self, goals: Vec<Goal>) -> Vec<GoalWithProgress> {
        let today = self.clock.today();
        goals
            .into_iter()
            .map(|goal| {
                let progress = GoalProgress::compute(&goal, today);
                GoalWithProgress { goal, progress }
            })
            .collect()
    }

    fn deposit_label(&self, goal: &Goal) -> String {
        format!(
            "{} ({prefix}{}/{prefix}{})",
            goal.name,
            goal.saved_amount.normalize(),
            goal.target_amount.normalize(),
            prefix = self.currency_prefix
        )
    }

    async fn refreshed(&self) -> Result<GoalCollectionSnapshot> {
        let goals = self.store.list().await?;
        let overview = build_overview(&goals)?;
        Ok(GoalCollectionSnapshot {
            goals: self.with_progress(goals),
            overview,
        })
    }
}

/// Aggregates counters over a goal list.
///
/// Fails when the saved amounts add up to more than a `Decimal` can hold.
pub fn build_overview(goals: &[Goal]) -> Result<GoalOverview> {
    let total_goals = goals.len();
    let completed_goals = goals.iter().filter(|g| is_completed(g)).count();
    let total_saved = goals
        .iter()
        .try_fold(Decimal::ZERO, |acc, g| acc.checked_add(g.saved_amount))
        .ok_or_else(|| Error::Unexpected("Total saved amount overflowed".to_string()))?;
    Ok(GoalOverview {
        total_goals,
        total_saved,
        completed_goals,
        active_goals: total_goals - completed_goals,
    })
}

#[async_trait]
impl GoalCollectionServiceTrait for GoalCollectionService {
    async fn list_goals_with_progress(&self) -> Result<Vec<GoalWithProgress>> {
        let goals = self.store.list().await?;
        Ok(self.with_progress(goals))
    }

    async fn overview_stats(&self) -> Result<GoalOverview> {
        let goals = self.store.list().await?;
        build_overview(&goals)
    }

    async fn depositable_goals(&self) -> Result<Vec<Goal>> {
        let goals = self.store.list().await?;
        Ok(goals.into_iter().filter(|g| !is_completed(g)).collect())
    }

    async fn deposit_options(&self) -> Result<Vec<DepositOption>> {
        let goals = self.depositable_goals().await?;
        Ok(goals
            .iter()
            .map(|g| DepositOption {
                goal_id: g.id.clone(),
                label: self.deposit_label(g),
            })
            .collect())
    }

    async fn snapshot(&self) -> Result<GoalCollectionSnapshot> {
        self.refreshed().await
    }

    async fn add_goal(&self, new_goal: NewGoal) -> Result<GoalCollectionSnapshot> {
        let goal = self.store.create(new_goal).await?;
        debug!("Added goal {} ('{}')", goal.id, goal.name);
        self.refreshed().await
    }

    async fn edit_goal(
        &self,
        goal_id: &str,
        goal_update: GoalUpdate,
    ) -> Result<GoalCollectionSnapshot> {
        self.store.update(goal_id, goal_update).await?;
        self.refreshed().await
    }

    async fn delete_goal(&self, goal_id: &str) -> Result<GoalCollectionSnapshot> {
        self.store.remove(goal_id).await?;
        self.refreshed().await
    }

    async fn make_deposit(
        &self,
        goal_id: &str,
        amount: Decimal,
    ) -> Result<GoalCollectionSnapshot> {
        if amount <= Decimal::ZERO {
            warn!("Rejected deposit of {} into goal {}", amount, goal_id);
            return Err(Error::InvalidAmount(amount));
        }
        let goal = self.store.deposit(goal_id, amount).await?;
        if is_completed(&goal) {
            debug!("Goal {} reached its target", goal.id);
        }
        self.refreshed().await
    }
}
