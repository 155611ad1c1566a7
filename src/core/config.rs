use crate::core::input::{DEFAULT_ALLOCATION_RATIO, FinancialInput};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

/// Reference gold price in rupiah per gram, used when the config does not
/// override it.
pub const DEFAULT_GOLD_PRICE_PER_GRAM: i64 = 1_350_000;

/// A saved financial snapshot, so the planner can run without retyping
/// every amount. CLI flags override individual fields.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Profile {
    #[serde(default)]
    pub monthly_income: i64,
    #[serde(default)]
    pub monthly_expenses: i64,
    #[serde(default)]
    pub current_savings: i64,
    #[serde(default)]
    pub gold_grams: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_gold_price")]
    pub gold_price_per_gram: i64,
    /// Percent of the monthly surplus directed to gold.
    #[serde(default = "default_allocation_ratio")]
    pub allocation_ratio: u8,
    pub profile: Option<Profile>,
}

fn default_gold_price() -> i64 {
    DEFAULT_GOLD_PRICE_PER_GRAM
}

fn default_allocation_ratio() -> u8 {
    DEFAULT_ALLOCATION_RATIO
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            gold_price_per_gram: DEFAULT_GOLD_PRICE_PER_GRAM,
            allocation_ratio: DEFAULT_ALLOCATION_RATIO,
            profile: None,
        }
    }
}

impl AppConfig {
    /// Loads the config from the default location, falling back to the
    /// built-in defaults when no file exists yet.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!("No config file found, using defaults");
            return Ok(AppConfig::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("id", "zetfour", "arta")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    /// Builds the input snapshot from the saved profile, with each field
    /// individually overridable.
    pub fn resolve_input(
        &self,
        income: Option<i64>,
        expenses: Option<i64>,
        savings: Option<i64>,
        gold_grams: Option<f64>,
        gold_ratio: Option<u8>,
    ) -> Result<FinancialInput> {
        let profile = self.profile.clone().unwrap_or_default();
        FinancialInput::new(
            income.unwrap_or(profile.monthly_income),
            expenses.unwrap_or(profile.monthly_expenses),
            savings.unwrap_or(profile.current_savings),
            gold_grams.unwrap_or(profile.gold_grams),
            gold_ratio.unwrap_or(self.allocation_ratio),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
gold_price_per_gram: 1400000
allocation_ratio: 35
profile:
  monthly_income: 5000000
  monthly_expenses: 3000000
  current_savings: 10000000
  gold_grams: 2.5
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.gold_price_per_gram, 1_400_000);
        assert_eq!(config.allocation_ratio, 35);
        let profile = config.profile.expect("Expected a profile");
        assert_eq!(profile.monthly_income, 5_000_000);
        assert_eq!(profile.monthly_expenses, 3_000_000);
        assert_eq!(profile.current_savings, 10_000_000);
        assert_eq!(profile.gold_grams, 2.5);
    }

    #[test]
    fn test_config_defaults_apply() {
        let config: AppConfig = serde_yaml::from_str("profile:\n  monthly_income: 1000000\n")
            .expect("Failed to deserialize");
        assert_eq!(config.gold_price_per_gram, DEFAULT_GOLD_PRICE_PER_GRAM);
        assert_eq!(config.allocation_ratio, DEFAULT_ALLOCATION_RATIO);
        let profile = config.profile.expect("Expected a profile");
        assert_eq!(profile.monthly_income, 1_000_000);
        assert_eq!(profile.monthly_expenses, 0);
        assert_eq!(profile.gold_grams, 0.0);
    }

    #[test]
    fn test_resolve_input_prefers_overrides() {
        let config = AppConfig {
            profile: Some(Profile {
                monthly_income: 5_000_000,
                monthly_expenses: 3_000_000,
                current_savings: 10_000_000,
                gold_grams: 2.0,
            }),
            ..AppConfig::default()
        };

        let input = config
            .resolve_input(Some(6_000_000), None, None, None, Some(50))
            .unwrap();
        assert_eq!(input.monthly_income, 6_000_000);
        assert_eq!(input.monthly_expenses, 3_000_000);
        assert_eq!(input.current_savings, 10_000_000);
        assert_eq!(input.gold_grams, 2.0);
        assert_eq!(input.allocation_ratio, 50);
    }

    #[test]
    fn test_resolve_input_without_profile() {
        let config = AppConfig::default();
        let input = config.resolve_input(None, None, None, None, None).unwrap();
        assert_eq!(input.monthly_income, 0);
        assert_eq!(input.allocation_ratio, DEFAULT_ALLOCATION_RATIO);
    }
}
