//! Compiled defaults. These are heuristic tuning knobs, not proven optima.

// Consistency
pub const DEFAULT_MIN_TERM_LENGTH: usize = 6;
pub const DEFAULT_SIMILARITY_FLOOR: f64 = 0.7;
pub const DEFAULT_SIMILARITY_CEILING: f64 = 1.0;
pub const DEFAULT_MAX_LENGTH_DELTA: usize = 2;
pub const DEFAULT_MAX_DISTINCT_TERMS: usize = 500;
pub const DEFAULT_BULLET_TOLERANCE: f64 = 0.1;

// Facts
pub const DEFAULT_CLAIM_THRESHOLD: usize = 5;
pub const DEFAULT_STALENESS_YEARS: i32 = 5;

// Structure
pub const DEFAULT_CONCLUSION_MIN_CHARS: usize = 1000;
pub const DEFAULT_LONG_PARAGRAPH_CHARS: usize = 500;

// Readability
pub const DEFAULT_MAX_AVG_WORDS: f64 = 25.0;
pub const DEFAULT_MIN_AVG_WORDS: f64 = 10.0;
pub const DEFAULT_MAX_PASSIVE_PERCENT: f64 = 30.0;

// Scoring
pub const DEFAULT_GRAMMAR_WEIGHT: u32 = 20;
pub const DEFAULT_SPELLING_WEIGHT: u32 = 15;
pub const DEFAULT_CONSISTENCY_WEIGHT: u32 = 20;
pub const DEFAULT_FACTS_WEIGHT: u32 = 20;
pub const DEFAULT_STRUCTURE_WEIGHT: u32 = 15;
pub const DEFAULT_READABILITY_WEIGHT: u32 = 10;
pub const DEFAULT_ISSUE_PENALTY: u32 = 2;

// Engine
pub const DEFAULT_PARALLEL: bool = true;
