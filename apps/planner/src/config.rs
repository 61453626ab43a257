use anyhow::{Context, Result};

use crate::beds::policy::{CountFormula, PlanningPolicy, SelectionHeuristic};

/// Application configuration loaded from environment variables.
/// The planning policy has no default: the deployment must name it.
#[derive(Debug, Clone)]
pub struct Config {
    pub policy: PlanningPolicy,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let count_formula: CountFormula = require_env("PLANNER_COUNT_FORMULA")?
            .parse()
            .context("PLANNER_COUNT_FORMULA is invalid")?;
        let heuristic: SelectionHeuristic = require_env("PLANNER_SELECTION_HEURISTIC")?
            .parse()
            .context("PLANNER_SELECTION_HEURISTIC is invalid")?;
        let min_block_length = require_env("PLANNER_MIN_BLOCK_LENGTH")?
            .parse::<u32>()
            .context("PLANNER_MIN_BLOCK_LENGTH must be a positive integer")?;

        Ok(Config {
            policy: PlanningPolicy::new(count_formula, heuristic, min_block_length)
                .context("Deployment planning policy is invalid")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
