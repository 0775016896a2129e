//! # lexis-validation
//!
//! Document quality scoring: six heuristic checkers, fuzzy term matching,
//! and weighted multi-criteria scoring.
//!
//! ## Rules (canonical order)
//! 1. **Grammar**: fixed surface patterns (articles, homophones)
//! 2. **Spelling**: table of known misspellings
//! 3. **Consistency**: near-duplicate terms, heading continuity, bullet markers
//! 4. **Facts**: advisory only; claim density and stale years
//! 5. **Structure**: title, sections, conclusion, paragraph length
//! 6. **Readability**: advisory only; sentence length and passive voice
//!
//! The engine performs no file, network, or environment access.

pub mod checkers;
pub mod engine;
pub mod scorer;
pub mod similarity;

pub use checkers::CheckerRegistry;
pub use engine::ValidationEngine;
pub use scorer::Scorer;

use lexis_core::{RuleConfiguration, ValidationReport};

/// Validate `content` with the default engine.
pub fn validate(content: &str, rules: &RuleConfiguration) -> ValidationReport {
    ValidationEngine::default().validate(content, rules)
}
