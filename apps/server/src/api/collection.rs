//! Read-only collection view for presentation layers.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use goalplanner_core::goals::{DepositOption, GoalCollectionSnapshot};

use crate::{error::ApiResult, main_lib::AppState};

async fn get_collection(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<GoalCollectionSnapshot>> {
    let snapshot = state.goal_service.snapshot().await?;
    Ok(Json(snapshot))
}

async fn get_deposit_options(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<DepositOption>>> {
    let options = state.goal_service.deposit_options().await?;
    Ok(Json(options))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/collection", get(get_collection))
        .route("/collection/deposit-options", get(get_deposit_options))
}
