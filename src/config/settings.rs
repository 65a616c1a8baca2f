//! User settings for ClearCoin
//!
//! Display preferences and the budget used before the user sets one.

use std::fmt::Write;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::paths::ClearCoinPaths;
use crate::error::ClearCoinError;
use crate::models::Money;

/// User settings for ClearCoin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Monthly budget used when none has been persisted yet
    #[serde(default = "default_budget")]
    pub default_budget: Money,

    /// Date format for display (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_budget() -> Money {
    Money::DEFAULT_BUDGET
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            default_budget: default_budget(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ClearCoinPaths) -> Result<Self, ClearCoinError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| ClearCoinError::Io(format!("Failed to read settings file: {}", e)))?;

        let mut settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| ClearCoinError::Config(format!("Failed to parse settings file: {}", e)))?;

        if settings.default_budget.is_negative() {
            return Err(ClearCoinError::Config("default_budget must not be negative".into()));
        }

        if !is_date_format(&settings.date_format) {
            warn!(
                date_format = %settings.date_format,
                "Date format cannot render a date; using the default"
            );
            settings.date_format = default_date_format();
        }

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ClearCoinPaths) -> Result<(), ClearCoinError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ClearCoinError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ClearCoinError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

/// Whether a strftime pattern formats a date without time fields or
/// unknown specifiers
pub fn is_date_format(format: &str) -> bool {
    let mut output = String::new();
    write!(output, "{}", NaiveDate::MIN.format(format)).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.default_budget, Money::from_cents(100_000));
        assert_eq!(settings.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ClearCoinPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            currency_symbol: "€".to_string(),
            default_budget: Money::from_cents(50_000),
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(loaded.default_budget, Money::from_cents(50_000));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ClearCoinPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"currency_symbol": "£"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "£");
        assert_eq!(loaded.default_budget, Money::DEFAULT_BUDGET);
        assert_eq!(loaded.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_negative_default_budget_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ClearCoinPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"default_budget": -5}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ClearCoinError::Config(_)));
    }

    #[test]
    fn test_unusable_date_format_replaced() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ClearCoinPaths::with_base_dir(temp_dir.path().to_path_buf());

        for format in ["%H:%M", "%Q", "%Y-%"] {
            let contents = serde_json::json!({ "date_format": format }).to_string();
            std::fs::write(paths.settings_file(), contents).unwrap();

            let loaded = Settings::load_or_create(&paths).unwrap();
            assert_eq!(loaded.date_format, "%Y-%m-%d", "kept {:?}", format);
        }
    }

    #[test]
    fn test_is_date_format() {
        assert!(is_date_format("%d/%m/%Y"));
        assert!(is_date_format("%b %e, %Y"));
        assert!(!is_date_format("%H:%M"));
        assert!(!is_date_format("%Q"));
    }
}
