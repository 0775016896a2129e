//! Configuration system for Lexis.
//! TOML-based; every section falls back to compiled defaults.

pub mod checker_config;
pub mod defaults;
pub mod engine_config;
pub mod lexis_config;
pub mod rule_config;
pub mod scoring_config;

pub use checker_config::{ConsistencyConfig, FactsConfig, ReadabilityConfig, StructureConfig};
pub use engine_config::EngineConfig;
pub use lexis_config::LexisConfig;
pub use rule_config::RuleConfiguration;
pub use scoring_config::{RuleWeights, ScoringConfig};
