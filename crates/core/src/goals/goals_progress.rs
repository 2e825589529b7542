//! Progress and deadline calculations.
//!
//! Everything here is a pure function of a [`Goal`] and, for deadlines, the
//! current calendar date. No validation happens at this level: inputs are
//! assumed to have passed the store boundary.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::goals_model::Goal;
use crate::constants::{DEADLINE_DISPLAY_FORMAT, DEADLINE_WARNING_DAYS};
use crate::utils::days_until;

/// Visual emphasis of a deadline, from least to most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UrgencySeverity {
    /// Goal is completed; the deadline no longer matters
    None,
    Normal,
    Warning,
    Critical,
}

/// Deadline classification shown next to a goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeadlineUrgency {
    pub label: String,
    pub severity: UrgencySeverity,
}

/// Derived progress fields for a single goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub progress_ratio: Decimal,
    pub display_percent: Decimal,
    pub remaining_amount: Decimal,
    pub is_completed: bool,
    pub urgency: DeadlineUrgency,
}

impl GoalProgress {
    pub fn compute(goal: &Goal, today: NaiveDate) -> Self {
        Self {
            progress_ratio: progress_ratio(goal),
            display_percent: display_percent(goal),
            remaining_amount: remaining_amount(goal),
            is_completed: is_completed(goal),
            urgency: deadline_urgency(goal, today),
        }
    }
}

/// Saved amount as a percentage of the target, clamped to `[0, 100]`.
///
/// A zero target yields 0 even though such a goal counts as completed.
pub fn progress_ratio(goal: &Goal) -> Decimal {
    if goal.target_amount <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let ratio = goal
        .saved_amount
        .checked_div(goal.target_amount)
        .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::ONE_HUNDRED);
    ratio.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
}

/// Progress ratio rounded to a whole percent (half away from zero).
pub fn display_percent(goal: &Goal) -> Decimal {
    progress_ratio(goal).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Amount still missing to reach the target; never negative.
pub fn remaining_amount(goal: &Goal) -> Decimal {
    (goal.target_amount - goal.saved_amount).max(Decimal::ZERO)
}

/// Completion uses the unclamped comparison, so over-saving still counts.
pub fn is_completed(goal: &Goal) -> bool {
    goal.saved_amount >= goal.target_amount
}

/// Classifies the goal deadline relative to `today`.
pub fn deadline_urgency(goal: &Goal, today: NaiveDate) -> DeadlineUrgency {
    if is_completed(goal) {
        return DeadlineUrgency {
            label: "Completed".to_string(),
            severity: UrgencySeverity::None,
        };
    }

    let diff_days = days_until(today, goal.deadline);
    if diff_days < 0 {
        DeadlineUrgency {
            label: "Overdue".to_string(),
            severity: UrgencySeverity::Critical,
        }
    } else if diff_days <= DEADLINE_WARNING_DAYS {
        DeadlineUrgency {
            label: format!("{} days left", diff_days),
            severity: UrgencySeverity::Warning,
        }
    } else {
        DeadlineUrgency {
            label: goal.deadline.format(DEADLINE_DISPLAY_FORMAT).to_string(),
            severity: UrgencySeverity::Normal,
        }
    }
}
