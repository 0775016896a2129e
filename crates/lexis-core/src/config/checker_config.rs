//! Per-checker tuning knobs.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Consistency checker configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsistencyConfig {
    /// Only tokens strictly longer than this many characters are counted.
    pub min_term_length: usize,
    /// Pairs must be strictly more similar than this.
    pub similarity_floor: f64,
    /// Pairs must be strictly less similar than this.
    pub similarity_ceiling: f64,
    /// Maximum character-length difference for a compared pair.
    pub max_length_delta: usize,
    /// Cap on distinct terms entering the pairwise scan.
    pub max_distinct_terms: usize,
    /// Fraction of non-dominant bullet markers tolerated.
    pub bullet_tolerance: f64,
}

impl Default for ConsistencyConfig {
    fn default() -> Self {
        Self {
            min_term_length: defaults::DEFAULT_MIN_TERM_LENGTH,
            similarity_floor: defaults::DEFAULT_SIMILARITY_FLOOR,
            similarity_ceiling: defaults::DEFAULT_SIMILARITY_CEILING,
            max_length_delta: defaults::DEFAULT_MAX_LENGTH_DELTA,
            max_distinct_terms: defaults::DEFAULT_MAX_DISTINCT_TERMS,
            bullet_tolerance: defaults::DEFAULT_BULLET_TOLERANCE,
        }
    }
}

/// Facts checker configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FactsConfig {
    /// A claim pattern matching more often than this triggers a suggestion.
    pub claim_threshold: usize,
    /// Years older than `reference_year - staleness_years` are stale.
    pub staleness_years: i32,
}

impl Default for FactsConfig {
    fn default() -> Self {
        Self {
            claim_threshold: defaults::DEFAULT_CLAIM_THRESHOLD,
            staleness_years: defaults::DEFAULT_STALENESS_YEARS,
        }
    }
}

/// Structure checker configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StructureConfig {
    /// Content longer than this (characters) should carry a conclusion.
    pub conclusion_min_chars: usize,
    /// Paragraphs longer than this (characters) are flagged.
    pub long_paragraph_chars: usize,
}

impl Default for StructureConfig {
    fn default() -> Self {
        Self {
            conclusion_min_chars: defaults::DEFAULT_CONCLUSION_MIN_CHARS,
            long_paragraph_chars: defaults::DEFAULT_LONG_PARAGRAPH_CHARS,
        }
    }
}

/// Readability checker configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadabilityConfig {
    pub max_avg_words: f64,
    pub min_avg_words: f64,
    pub max_passive_percent: f64,
}

impl Default for ReadabilityConfig {
    fn default() -> Self {
        Self {
            max_avg_words: defaults::DEFAULT_MAX_AVG_WORDS,
            min_avg_words: defaults::DEFAULT_MIN_AVG_WORDS,
            max_passive_percent: defaults::DEFAULT_MAX_PASSIVE_PERCENT,
        }
    }
}
