//! Engine configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Engine configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Materiality settings for the validation pass.
    #[serde(default)]
    pub materiality: MaterialityConfig,
}

/// Materiality settings for the validation pass.
///
/// Variances on accounts whose raw sum is below the floor never warn,
/// regardless of percentage, to avoid noise on immaterial accounts.
#[derive(Debug, Clone, Deserialize)]
pub struct MaterialityConfig {
    /// Minimum raw sum (in currency units) before variance warnings apply.
    #[serde(default = "default_floor")]
    pub floor: Decimal,
    /// Variance percentage above which a warning is raised.
    #[serde(default = "default_threshold_pct")]
    pub threshold_pct: Decimal,
}

fn default_floor() -> Decimal {
    Decimal::from(10_000)
}

fn default_threshold_pct() -> Decimal {
    Decimal::from(5)
}

impl Default for MaterialityConfig {
    fn default() -> Self {
        Self {
            floor: default_floor(),
            threshold_pct: default_threshold_pct(),
        }
    }
}

impl EngineConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("GRUPPO").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            materiality: MaterialityConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_materiality_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.materiality.floor, dec!(10000));
        assert_eq!(config.materiality.threshold_pct, dec!(5));
    }

    #[test]
    fn test_materiality_deserialize_overrides() {
        let json = serde_json::json!({
            "materiality": { "floor": "25000", "threshold_pct": "2.5" }
        });
        let config: EngineConfig = serde_json::from_value(json).unwrap();
        assert_eq!(config.materiality.floor, dec!(25000));
        assert_eq!(config.materiality.threshold_pct, dec!(2.5));
    }

    #[test]
    fn test_materiality_deserialize_empty_uses_defaults() {
        let config: EngineConfig = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(config.materiality.floor, dec!(10000));
    }
}
