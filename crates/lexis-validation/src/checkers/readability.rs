//! Readability: sentence length and passive voice. Advisory only.

use lexis_core::config::ReadabilityConfig;
use lexis_core::errors::CheckError;
use lexis_core::models::{CheckResult, RuleName};
use lexis_core::traits::{CheckContext, Checker};

use super::{is_blank, require};

lazy_pattern!(RE_SENTENCE_END, r"[.!?]+");
lazy_pattern!(
    RE_PASSIVE_AUXILIARY,
    r"(?i)(?-u:\b)(?:is|are|was|were|be|been|being)\s+(?-u:\w)+ed(?-u:\b)"
);
lazy_pattern!(RE_PASSIVE_BY_GERUND, r"(?i)(?-u:\b)by\s+(?-u:\w)+ing(?-u:\b)");

/// Raw counts behind the readability advisories.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadabilityMetrics {
    pub words: usize,
    pub sentences: usize,
    pub passive_matches: usize,
}

impl ReadabilityMetrics {
    pub fn avg_words_per_sentence(&self) -> f64 {
        if self.sentences == 0 {
            return 0.0;
        }
        self.words as f64 / self.sentences as f64
    }

    pub fn passive_percentage(&self) -> f64 {
        if self.sentences == 0 {
            return 0.0;
        }
        self.passive_matches as f64 / self.sentences as f64 * 100.0
    }
}

/// Count whitespace-separated words, sentences and passive constructions.
/// A document with words but no terminal punctuation is one sentence.
pub fn measure(content: &str) -> Result<ReadabilityMetrics, CheckError> {
    let sentence_end = require(RuleName::Readability, "sentence_end", &RE_SENTENCE_END)?;
    let auxiliary = require(
        RuleName::Readability,
        "passive_auxiliary",
        &RE_PASSIVE_AUXILIARY,
    )?;
    let by_gerund = require(
        RuleName::Readability,
        "passive_by_gerund",
        &RE_PASSIVE_BY_GERUND,
    )?;

    let words = content.split_whitespace().count();
    let mut sentences = sentence_end
        .split(content)
        .filter(|s| !s.trim().is_empty())
        .count();
    if words > 0 {
        sentences = sentences.max(1);
    }
    let passive_matches =
        auxiliary.find_iter(content).count() + by_gerund.find_iter(content).count();

    Ok(ReadabilityMetrics {
        words,
        sentences,
        passive_matches,
    })
}

pub struct ReadabilityChecker {
    config: ReadabilityConfig,
}

impl ReadabilityChecker {
    pub fn new(config: ReadabilityConfig) -> Self {
        Self { config }
    }
}

impl Default for ReadabilityChecker {
    fn default() -> Self {
        Self::new(ReadabilityConfig::default())
    }
}

impl Checker for ReadabilityChecker {
    fn rule(&self) -> RuleName {
        RuleName::Readability
    }

    fn check(&self, content: &str, _ctx: &CheckContext<'_>) -> Result<CheckResult, CheckError> {
        if is_blank(content) {
            return Ok(CheckResult::clean(RuleName::Readability));
        }

        let metrics = measure(content)?;
        let mut suggestions = Vec::new();

        let avg = metrics.avg_words_per_sentence();
        if avg > self.config.max_avg_words {
            suggestions.push(
                "Average sentence length is quite long - consider shorter sentences".to_string(),
            );
        } else if avg < self.config.min_avg_words {
            suggestions.push(
                "Average sentence length is quite short - consider more complex sentences"
                    .to_string(),
            );
        }

        let passive = metrics.passive_percentage();
        if passive > self.config.max_passive_percent {
            suggestions.push(format!(
                "High passive voice usage ({passive:.1}%) - consider active voice"
            ));
        }

        Ok(CheckResult::from_parts(
            RuleName::Readability,
            Vec::new(),
            suggestions,
        ))
    }
}
