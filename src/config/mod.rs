pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::{AppError, Result};
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "gastos-app")]
#[command(about = "Expense summary with localized (es-PE) currency output")]
pub struct CliConfig {
    /// Expense amounts, e.g. --amounts 1000,49.9
    #[arg(long, value_delimiter = ',')]
    pub amounts: Vec<String>,

    /// Node id the app instance mounts to
    #[arg(long, default_value = "app")]
    pub mount_point: String,

    /// Optional budget; exceeding it raises a warning alert
    #[arg(long)]
    pub budget: Option<f64>,

    /// Load settings from a TOML file instead of the flags above
    #[arg(long)]
    pub config_file: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn raw_amounts(&self) -> Vec<String> {
        self.amounts.clone()
    }

    fn mount_selector(&self) -> &str {
        &self.mount_point
    }

    fn budget(&self) -> Option<f64> {
        self.budget
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_selector("mount_point", &self.mount_point)?;

        if self.amounts.is_empty() {
            return Err(AppError::MissingConfig {
                field: "amounts".to_string(),
            });
        }
        for raw in &self.amounts {
            validation::parse_amount("amounts", raw)?;
        }

        if let Some(budget) = self.budget {
            if !budget.is_finite() || budget < 0.0 {
                return Err(AppError::InvalidConfigValue {
                    field: "budget".to_string(),
                    value: budget.to_string(),
                    reason: "Budget must be a non-negative number".to_string(),
                });
            }
        }

        Ok(())
    }
}
