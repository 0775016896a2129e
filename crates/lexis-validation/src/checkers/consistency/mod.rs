//! Consistency: near-duplicate terms, heading-level continuity, and
//! bullet-marker uniformity. Sub-check results are concatenated.

pub mod formatting;
pub mod headings;
pub mod terms;

use lexis_core::config::ConsistencyConfig;
use lexis_core::errors::CheckError;
use lexis_core::models::{CheckResult, Issue, IssueKind, RuleName, Severity};
use lexis_core::traits::{CheckContext, Checker};
use tracing::warn;

use super::is_blank;
use terms::TermFrequencyMap;

const POSITIVE: &str = "Document shows good consistency throughout";

pub struct ConsistencyChecker {
    config: ConsistencyConfig,
}

impl ConsistencyChecker {
    pub fn new(config: ConsistencyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConsistencyConfig {
        &self.config
    }
}

impl Default for ConsistencyChecker {
    fn default() -> Self {
        Self::new(ConsistencyConfig::default())
    }
}

impl Checker for ConsistencyChecker {
    fn rule(&self) -> RuleName {
        RuleName::Consistency
    }

    fn check(&self, content: &str, ctx: &CheckContext<'_>) -> Result<CheckResult, CheckError> {
        if is_blank(content) {
            return Ok(CheckResult::from_parts(
                RuleName::Consistency,
                Vec::new(),
                vec![POSITIVE.to_string()],
            ));
        }

        let mut issues = Vec::new();
        let mut suggestions = Vec::new();

        // (a) Fuzzy term variants.
        let vocabulary = TermFrequencyMap::from_content(content, self.config.min_term_length)?;
        let distinct = vocabulary.len();
        let vocabulary = vocabulary.top_n(self.config.max_distinct_terms);
        if vocabulary.len() < distinct {
            warn!(
                kept = vocabulary.len(),
                distinct, "term variant scan truncated to most frequent terms"
            );
            suggestions.push(format!(
                "Term variant scan limited to the {} most frequent of {} distinct terms",
                vocabulary.len(),
                distinct
            ));
        }

        let scan = terms::find_variants(&vocabulary, &self.config, ctx.cancellation);
        for variant in &scan.variants {
            issues.push(
                Issue::new(
                    IssueKind::Consistency,
                    Severity::Medium,
                    format!(
                        "Inconsistent term usage: \"{}\", \"{}\"",
                        variant.first, variant.second
                    ),
                )
                .with_occurrences(variant.count),
            );
        }
        if scan.cancelled {
            warn!(
                found = scan.variants.len(),
                "term variant scan stopped early on cancellation"
            );
            suggestions
                .push("Term variant scan stopped early: validation deadline reached".to_string());
        }

        // (b) Heading-level continuity.
        let headings = headings::extract_headings(content)?;
        issues.extend(headings::check_continuity(&headings));

        // (c) Bullet-marker consistency.
        issues.extend(formatting::check_bullets(
            content,
            self.config.bullet_tolerance,
        )?);

        if issues.is_empty() {
            suggestions.push(POSITIVE.to_string());
        }

        Ok(CheckResult::from_parts(
            RuleName::Consistency,
            issues,
            suggestions,
        ))
    }
}
