//! `GoalStoreTrait` over the REST API.

use async_trait::async_trait;
use log::{error, warn};
use rust_decimal::Decimal;
use std::time::Duration;

use crate::client::GoalApiClient;
use crate::error::RemoteError;
use goalplanner_core::errors::{Error, Result};
use goalplanner_core::goals::{DepositRequest, Goal, GoalStoreTrait, GoalUpdate, NewGoal};

/// Goal store backed by a remote goal planner server.
///
/// Ids, saved amounts and creation dates are assigned by the server. Every
/// operation is a single request; failures are never retried here.
#[derive(Debug, Clone)]
pub struct RemoteGoalStore {
    client: GoalApiClient,
}

impl RemoteGoalStore {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = GoalApiClient::new(base_url).map_err(Error::from)?;
        Ok(Self { client })
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = GoalApiClient::with_timeout(base_url, timeout).map_err(Error::from)?;
        Ok(Self { client })
    }

    pub fn from_client(client: GoalApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &GoalApiClient {
        &self.client
    }
}

fn surface(
    operation: &str,
    goal_id: Option<&str>,
    err: RemoteError,
    amount: Option<Decimal>,
) -> Error {
    let core = match (err.into_core(amount), goal_id) {
        // Report the id we asked for rather than the server's message.
        (Error::NotFound(_), Some(goal_id)) => Error::not_found(goal_id),
        (core, _) => core,
    };
    match &core {
        Error::RemoteUnavailable(reason) => {
            error!("Remote goal store failed to {}: {}", operation, reason)
        }
        other => warn!("Remote goal store refused to {}: {}", operation, other),
    }
    core
}

#[async_trait]
impl GoalStoreTrait for RemoteGoalStore {
    async fn list(&self) -> Result<Vec<Goal>> {
        self.client
            .list_goals()
            .await
            .map_err(|e| surface("list goals", None, e, None))
    }

    async fn get(&self, goal_id: &str) -> Result<Goal> {
        self.client
            .get_goal(goal_id)
            .await
            .map_err(|e| surface("load goal", Some(goal_id), e, None))
    }

    async fn create(&self, new_goal: NewGoal) -> Result<Goal> {
        new_goal.validate()?;
        self.client
            .create_goal(&new_goal)
            .await
            .map_err(|e| surface("create goal", None, e, None))
    }

    async fn update(&self, goal_id: &str, goal_update: GoalUpdate) -> Result<Goal> {
        goal_update.validate()?;
        self.client
            .update_goal(goal_id, &goal_update)
            .await
            .map_err(|e| surface("update goal", Some(goal_id), e, None))
    }

    async fn remove(&self, goal_id: &str) -> Result<()> {
        self.client
            .delete_goal(goal_id)
            .await
            .map_err(|e| surface("delete goal", Some(goal_id), e, None))
    }

    async fn deposit(&self, goal_id: &str, amount: Decimal) -> Result<Goal> {
        if amount <= Decimal::ZERO {
            return Err(Error::InvalidAmount(amount));
        }
        self.client
            .deposit(goal_id, &DepositRequest { amount })
            .await
            .map_err(|e| surface("deposit", Some(goal_id), e, Some(amount)))
    }
}
