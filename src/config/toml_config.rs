use crate::domain::ports::ConfigProvider;
use crate::utils::error::{AppError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File-based configuration, the alternative to command-line flags.
///
/// ```toml
/// [app]
/// name = "gastos"
/// mount_point = "app"
///
/// [expenses]
/// amounts = [1000.0, 49.9]
/// budget = 1200.0
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub app: AppSection,
    pub expenses: ExpensesSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSection {
    pub name: String,
    pub mount_point: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpensesSection {
    pub amounts: Vec<f64>,
    pub budget: Option<f64>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: TomlConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

impl ConfigProvider for TomlConfig {
    fn raw_amounts(&self) -> Vec<String> {
        self.expenses.amounts.iter().map(f64::to_string).collect()
    }

    fn mount_selector(&self) -> &str {
        &self.app.mount_point
    }

    fn budget(&self) -> Option<f64> {
        self.expenses.budget
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("app.name", &self.app.name)?;
        validation::validate_selector("app.mount_point", &self.app.mount_point)?;

        if self.expenses.amounts.is_empty() {
            return Err(AppError::MissingConfig {
                field: "expenses.amounts".to_string(),
            });
        }
        for amount in &self.expenses.amounts {
            if !amount.is_finite() {
                return Err(AppError::InvalidAmount {
                    field: "expenses.amounts".to_string(),
                    value: amount.to_string(),
                });
            }
        }

        if let Some(budget) = self.expenses.budget {
            if !budget.is_finite() || budget < 0.0 {
                return Err(AppError::InvalidConfigValue {
                    field: "expenses.budget".to_string(),
                    value: budget.to_string(),
                    reason: "Budget must be a non-negative number".to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_validate() {
        let config: TomlConfig = toml::from_str(
            r#"
            [app]
            name = "gastos"
            mount_point = "app"

            [expenses]
            amounts = [1000.0, 49.9]
            budget = 1200.0
            "#,
        )
        .unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.mount_selector(), "app");
        assert_eq!(config.budget(), Some(1200.0));
        assert_eq!(config.raw_amounts(), vec!["1000", "49.9"]);
    }

    #[test]
    fn test_missing_section_is_a_parse_error() {
        let result: std::result::Result<TomlConfig, _> = toml::from_str("[app]\nname = \"x\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_amounts_fail_validation() {
        let config: TomlConfig = toml::from_str(
            r#"
            [app]
            name = "gastos"
            mount_point = "app"

            [expenses]
            amounts = []
            "#,
        )
        .unwrap();
        assert!(matches!(
            config.validate(),
            Err(AppError::MissingConfig { .. })
        ));
    }
}
