pub mod cli;
pub mod core;

use anyhow::Result;
use tracing::{debug, info};

pub use crate::core::config::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    Dashboard,
    Strategy,
    Projection,
}

/// Per-field overrides of the saved profile, already parsed to numbers.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputOverrides {
    pub monthly_income: Option<i64>,
    pub monthly_expenses: Option<i64>,
    pub current_savings: Option<i64>,
    pub gold_grams: Option<f64>,
    pub gold_ratio: Option<u8>,
}

pub fn run_command(
    command: AppCommand,
    config_path: Option<&str>,
    overrides: InputOverrides,
) -> Result<()> {
    info!("Budget planner starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let input = config.resolve_input(
        overrides.monthly_income,
        overrides.monthly_expenses,
        overrides.current_savings,
        overrides.gold_grams,
        overrides.gold_ratio,
    )?;
    debug!("Resolved input: {input:#?}");

    match command {
        AppCommand::Dashboard => cli::dashboard::run(&input, config.gold_price_per_gram),
        AppCommand::Strategy => cli::strategy::run(&input, config.gold_price_per_gram),
        AppCommand::Projection => cli::projection::run(&input, config.gold_price_per_gram),
    }
}
