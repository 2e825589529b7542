//! Goals module - domain models, progress calculations, stores and services.

mod goals_local_store;
mod goals_model;
mod goals_progress;
mod goals_samples;
mod goals_service;
mod goals_traits;


pub use goals_local_store::LocalGoalStore;
pub use goals_model::{
    DepositOption, DepositRequest, Goal, GoalCollectionSnapshot, GoalOverview, GoalUpdate,
    GoalWithProgress, NewGoal,
};
pub use goals_progress::{
    deadline_urgency, display_percent, is_completed, progress_ratio, remaining_amount,
    DeadlineUrgency, GoalProgress, UrgencySeverity,
};
pub use goals_samples::sample_goals;
pub use goals_service::{build_overview, GoalCollectionService};
pub use goals_traits::{GoalCollectionServiceTrait, GoalStoreTrait};
