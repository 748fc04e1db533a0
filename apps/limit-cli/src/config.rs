//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use serde::{Deserialize, Serialize};
use std::env;

/// Default log filter when neither `RUST_LOG` nor `FURUSATO_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "info,furusato_core=debug,furusato_limit_cli=debug";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// tracing filter directive
    pub log_filter: String,

    /// Pretty-print JSON output
    pub pretty_json: bool,

    /// Largest annual income this boundary accepts, in yen
    pub max_income: i64,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            pretty_json: false,
            max_income: 10_000_000_000,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = CliConfig::default();

        let config = CliConfig {
            log_filter: lookup("FURUSATO_LOG").unwrap_or(defaults.log_filter),

            pretty_json: match lookup("FURUSATO_PRETTY_JSON") {
                Some(raw) => parse_bool(&raw)
                    .ok_or_else(|| ConfigError::InvalidValue("FURUSATO_PRETTY_JSON".to_string()))?,
                None => defaults.pretty_json,
            },

            max_income: match lookup("FURUSATO_MAX_INCOME") {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("FURUSATO_MAX_INCOME".to_string()))?,
                None => defaults.max_income,
            },
        };

        if config.max_income <= 0 || config.max_income > furusato_core::MAX_AMOUNT {
            return Err(ConfigError::OutOfRange {
                key: "FURUSATO_MAX_INCOME".to_string(),
                max: furusato_core::MAX_AMOUNT,
            });
        }

        Ok(config)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("{key} must be between 1 and {max}")]
    OutOfRange { key: String, max: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<CliConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CliConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config, CliConfig::default());
        assert!(!config.pretty_json);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("FURUSATO_LOG", "warn"),
            ("FURUSATO_PRETTY_JSON", "Yes"),
            ("FURUSATO_MAX_INCOME", "50000000"),
        ])
        .unwrap();
        assert_eq!(config.log_filter, "warn");
        assert!(config.pretty_json);
        assert_eq!(config.max_income, 50_000_000);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            load(&[("FURUSATO_PRETTY_JSON", "maybe")]),
            Err(ConfigError::InvalidValue(_))
        ));
        assert!(matches!(
            load(&[("FURUSATO_MAX_INCOME", "lots")]),
            Err(ConfigError::InvalidValue(_))
        ));
        assert!(matches!(
            load(&[("FURUSATO_MAX_INCOME", "0")]),
            Err(ConfigError::OutOfRange { .. })
        ));
    }
}
