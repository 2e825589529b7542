use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use goalplanner_core::constants::{DEFAULT_CURRENCY_PREFIX, DEFAULT_GOALS_SLOT};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub goals_slot: String,
    pub seed_sample_goals: bool,
    pub currency_prefix: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    /// Reads the configuration from `GP_*` environment variables, loading `.env` first.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("GP_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid GP_LISTEN_ADDR")?;
        let db_path = std::env::var("GP_DB_PATH").unwrap_or_else(|_| "./db/goals.db".into());
        let goals_slot =
            std::env::var("GP_GOALS_SLOT").unwrap_or_else(|_| DEFAULT_GOALS_SLOT.into());
        let seed_sample_goals = std::env::var("GP_SEED_SAMPLE_GOALS")
            .map(|v| parse_flag(&v))
            .unwrap_or(true);
        let currency_prefix = std::env::var("GP_CURRENCY_PREFIX")
            .unwrap_or_else(|_| DEFAULT_CURRENCY_PREFIX.into());
        let cors_allow = std::env::var("GP_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("GP_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        Ok(Self {
            listen_addr,
            db_path,
            goals_slot,
            seed_sample_goals,
            currency_prefix,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
        })
    }

    /// Configuration for a database file, with defaults for everything else.
    pub fn for_db_path(db_path: impl Into<String>) -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            db_path: db_path.into(),
            goals_slot: DEFAULT_GOALS_SLOT.to_string(),
            seed_sample_goals: false,
            currency_prefix: DEFAULT_CURRENCY_PREFIX.to_string(),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_secs(30),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
