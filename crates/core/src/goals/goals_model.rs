//! Goals domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::goals_progress::GoalProgress;
use crate::{errors::ValidationError, Error, Result};

/// Domain model representing a savings goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target_amount: Decimal,
    pub saved_amount: Decimal,
    pub category: String,
    pub deadline: NaiveDate,
    pub created_at: NaiveDate,
}

/// Input model for creating a new goal.
///
/// The store assigns `id`, `saved_amount` and `created_at`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub name: String,
    pub target_amount: Decimal,
    pub category: String,
    pub deadline: NaiveDate,
}

impl NewGoal {
    /// Validates the new goal data.
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        validate_target_amount(self.target_amount)
    }

    /// Builds the full record once the store has picked an id and a creation date.
    pub fn into_goal(self, id: String, created_at: NaiveDate) -> Goal {
        Goal {
            id,
            name: self.name.trim().to_string(),
            target_amount: self.target_amount,
            saved_amount: Decimal::ZERO,
            category: self.category,
            deadline: self.deadline,
            created_at,
        }
    }
}

/// Input model for editing goal metadata. Absent fields are left untouched.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
}

impl GoalUpdate {
    /// Validates the provided fields.
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(target_amount) = self.target_amount {
            validate_target_amount(target_amount)?;
        }
        Ok(())
    }

    /// Merges the provided fields into `goal`.
    ///
    /// `id`, `saved_amount` and `created_at` are never touched, so lowering the
    /// target below the saved amount silently completes the goal.
    pub fn apply_to(&self, goal: &mut Goal) {
        if let Some(name) = &self.name {
            goal.name = name.trim().to_string();
        }
        if let Some(target_amount) = self.target_amount {
            goal.target_amount = target_amount;
        }
        if let Some(category) = &self.category {
            goal.category = category.clone();
        }
        if let Some(deadline) = self.deadline {
            goal.deadline = deadline;
        }
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Goal name cannot be empty".to_string(),
        )));
    }
    Ok(())
}

fn validate_target_amount(target_amount: Decimal) -> Result<()> {
    if target_amount < Decimal::ZERO {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Target amount cannot be negative: {}",
            target_amount
        ))));
    }
    Ok(())
}

/// Request body for a deposit.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DepositRequest {
    pub amount: Decimal,
}

/// A goal together with its derived progress fields, ready to render.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalWithProgress {
    #[serde(flatten)]
    pub goal: Goal,
    pub progress: GoalProgress,
}

/// Aggregate counters over the whole goal collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GoalOverview {
    pub total_goals: usize,
    pub total_saved: Decimal,
    pub completed_goals: usize,
    pub active_goals: usize,
}

/// Everything a presentation layer needs to re-render after an operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalCollectionSnapshot {
    pub goals: Vec<GoalWithProgress>,
    pub overview: GoalOverview,
}

/// Entry of the deposit-target selector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DepositOption {
    pub goal_id: String,
    pub label: String,
}
