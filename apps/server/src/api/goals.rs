//! The goals resource: the REST face of the goal store.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use goalplanner_core::goals::{DepositRequest, Goal, GoalUpdate, NewGoal};

use crate::{error::ApiResult, main_lib::AppState};

async fn list_goals(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Goal>>> {
    let goals = state.goal_store.list().await?;
    Ok(Json(goals))
}

async fn get_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Goal>> {
    let goal = state.goal_store.get(&id).await?;
    Ok(Json(goal))
}

async fn create_goal(
    State(state): State<Arc<AppState>>,
    body: Result<Json<NewGoal>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Goal>)> {
    let Json(goal) = body?;
    let g = state.goal_store.create(goal).await?;
    tracing::info!("Created goal {}", g.id);
    Ok((StatusCode::CREATED, Json(g)))
}

async fn update_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    body: Result<Json<GoalUpdate>, JsonRejection>,
) -> ApiResult<Json<Goal>> {
    let Json(update) = body?;
    let g = state.goal_store.update(&id, update).await?;
    Ok(Json(g))
}

async fn delete_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.goal_store.remove(&id).await?;
    tracing::info!("Deleted goal {}", id);
    Ok(StatusCode::NO_CONTENT)
}

async fn deposit(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    body: Result<Json<DepositRequest>, JsonRejection>,
) -> ApiResult<Json<Goal>> {
    let Json(request) = body?;
    let g = state.goal_store.deposit(&id, request.amount).await?;
    Ok(Json(g))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/goals", get(list_goals).post(create_goal))
        .route(
            "/goals/{id}",
            get(get_goal).patch(update_goal).delete(delete_goal),
        )
        .route("/goals/{id}/deposits", post(deposit))
}
