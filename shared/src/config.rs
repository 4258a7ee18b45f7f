//! Tracker settings. Every field has a default so a host can override only what
//! it needs.

use serde::{Deserialize, Serialize};

use crate::repository::DEFAULT_STORAGE_KEY;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid tracker configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid tracker configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TrackerConfig {
    /// Key-value slot the entry collection is saved under
    pub storage_key: String,
    pub currency_symbol: String,
    pub export_file_name: String,
    pub csv_export_file_name: String,
    /// One of error, warn, info, debug, trace
    pub log_level: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            currency_symbol: "₹".to_string(),
            export_file_name: "expenses.json".to_string(),
            csv_export_file_name: "expenses.csv".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl TrackerConfig {
    /// Parse a (possibly partial) JSON object on top of the defaults
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: TrackerConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid("storage_key cannot be empty".to_string()));
        }
        if self.export_file_name.trim().is_empty() || self.csv_export_file_name.trim().is_empty() {
            return Err(ConfigError::Invalid("export file names cannot be empty".to_string()));
        }
        self.log_level_filter()?;
        Ok(())
    }

    pub fn log_level_filter(&self) -> Result<log::LevelFilter, ConfigError> {
        self.log_level
            .parse::<log::LevelFilter>()
            .map_err(|_| ConfigError::Invalid(format!("unknown log level '{}'", self.log_level)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TrackerConfig::default();
        assert_eq!(config.storage_key, "my_personal_expenses_v1");
        assert_eq!(config.export_file_name, "expenses.json");
        assert_eq!(config.log_level_filter().unwrap(), log::LevelFilter::Info);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_override() {
        let config = TrackerConfig::from_json(r#"{"currency_symbol": "$", "log_level": "debug"}"#).unwrap();
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.log_level_filter().unwrap(), log::LevelFilter::Debug);
        assert_eq!(config.storage_key, "my_personal_expenses_v1");
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(matches!(
            TrackerConfig::from_json(r#"{"storage": "x"}"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            TrackerConfig::from_json(r#"{"storage_key": " "}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            TrackerConfig::from_json(r#"{"log_level": "loud"}"#),
            Err(ConfigError::Invalid(_))
        ));
    }
}
