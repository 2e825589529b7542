use std::sync::Arc;

use crate::config::Config;
use goalplanner_core::{
    goals::{
        GoalCollectionService, GoalCollectionServiceTrait, GoalStoreTrait, LocalGoalStore,
    },
    kv::KeyValueStoreTrait,
    utils::{Clock, SystemClock},
};
use goalplanner_storage_sqlite::{db, SqliteKeyValueStore};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub goal_store: Arc<dyn GoalStoreTrait>,
    pub goal_service: Arc<dyn GoalCollectionServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("GP_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    let kv: Arc<dyn KeyValueStoreTrait> = Arc::new(SqliteKeyValueStore::new(pool, writer));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let local_store = if config.seed_sample_goals {
        LocalGoalStore::open_seeded(kv, config.goals_slot.clone(), clock.clone()).await?
    } else {
        LocalGoalStore::open(kv, config.goals_slot.clone(), clock.clone())?
    };
    tracing::info!(
        "Goal store ready (db: {}, slot: {})",
        db_path,
        local_store.slot()
    );
    let goal_store: Arc<dyn GoalStoreTrait> = Arc::new(local_store);

    let goal_service = Arc::new(
        GoalCollectionService::new(goal_store.clone(), clock)
            .with_currency_prefix(config.currency_prefix.clone()),
    );

    Ok(Arc::new(AppState {
        goal_store,
        goal_service,
    }))
}
