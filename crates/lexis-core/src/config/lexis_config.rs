//! Top-level Lexis configuration.

use serde::{Deserialize, Serialize};

use super::{
    ConsistencyConfig, EngineConfig, FactsConfig, ReadabilityConfig, RuleConfiguration,
    ScoringConfig, StructureConfig,
};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Loaded from TOML by the host; the engine never touches the file system
/// or the environment. Unknown keys are ignored (forward-compatible).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LexisConfig {
    /// Engine-level rule defaults; per-call configuration is merged on top.
    pub rules: RuleConfiguration,
    pub engine: EngineConfig,
    pub consistency: ConsistencyConfig,
    pub facts: FactsConfig,
    pub structure: StructureConfig,
    pub readability: ReadabilityConfig,
    pub scoring: ScoringConfig,
}

impl LexisConfig {
    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: LexisConfig = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            source_name: "<string>".to_string(),
            message: e.to_string(),
        })?;
        if let Err(e) = config.validate() {
            tracing::warn!(error = %e, "rejected configuration");
            return Err(e);
        }
        tracing::debug!(
            enabled_rules = config.rules.enabled_rules().len(),
            parallel = config.engine.parallel,
            "loaded configuration"
        );
        Ok(config)
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            source_name: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let c = &self.consistency;
        if !(0.0..=1.0).contains(&c.similarity_floor) {
            return Err(out_of_range("consistency.similarity_floor", "must be between 0.0 and 1.0"));
        }
        if !(0.0..=1.0).contains(&c.similarity_ceiling) {
            return Err(out_of_range(
                "consistency.similarity_ceiling",
                "must be between 0.0 and 1.0",
            ));
        }
        if c.similarity_floor >= c.similarity_ceiling {
            return Err(invalid(
                "consistency.similarity_floor",
                "must be below consistency.similarity_ceiling",
            ));
        }
        if c.max_distinct_terms == 0 {
            return Err(out_of_range("consistency.max_distinct_terms", "must be greater than 0"));
        }
        if !(0.0..=1.0).contains(&c.bullet_tolerance) {
            return Err(out_of_range("consistency.bullet_tolerance", "must be between 0.0 and 1.0"));
        }

        let r = &self.readability;
        if r.min_avg_words > r.max_avg_words {
            return Err(invalid(
                "readability.min_avg_words",
                "must not exceed readability.max_avg_words",
            ));
        }
        if r.max_passive_percent < 0.0 {
            return Err(out_of_range("readability.max_passive_percent", "must be non-negative"));
        }

        if self.facts.staleness_years < 0 {
            return Err(out_of_range("facts.staleness_years", "must be non-negative"));
        }

        if self.scoring.weights.total() == 0 {
            return Err(invalid("scoring.weights", "at least one weight must be non-zero"));
        }
        Ok(())
    }
}

/// A cross-field constraint that does not hold.
fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// A single value outside its allowed range.
fn out_of_range(field: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message: message.to_string(),
    }
}
