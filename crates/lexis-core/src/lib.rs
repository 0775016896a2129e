//! # lexis-core
//!
//! Foundation crate for the Lexis document validator.
//! Defines the report data model, rule identifiers, traits, errors,
//! config, tracing setup, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::{LexisConfig, RuleConfiguration};
pub use errors::{CheckError, ConfigError, LexisError, LexisResult};
pub use models::{CheckResult, HeadingEntry, Issue, IssueKind, RuleName, Severity, ValidationReport};
pub use traits::{Cancellable, CancellationToken, CheckContext, Checker, DeadlineToken};
