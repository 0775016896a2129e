//! Facts: advisory only. Flags dense factual-looking content and stale
//! year references. Never produces blocking issues.

use lexis_core::config::FactsConfig;
use lexis_core::constants::{REFERENCE_YEAR_MAX, REFERENCE_YEAR_MIN};
use lexis_core::errors::CheckError;
use lexis_core::models::{CheckResult, RuleName};
use lexis_core::traits::{CheckContext, Checker};

use super::{is_blank, require};

// Word boundaries are ASCII-only so figures glued to CJK text still match.
lazy_pattern!(RE_YEAR, r"(?-u:\b)[0-9]{4}(?-u:\b)");
lazy_pattern!(RE_PERCENT, r"(?-u:\b)[0-9]+(?:\.[0-9]+)?%");
lazy_pattern!(
    RE_NUMBER,
    r"\$?(?-u:\b)[0-9]+(?:,[0-9]{3})*(?:\.[0-9]+)?(?-u:\b)"
);
lazy_pattern!(
    RE_RESEARCH_CLAIM,
    r"(?i)(?-u:\b)(?:according to|research shows|studies indicate)(?-u:\b)"
);

pub struct FactsChecker {
    config: FactsConfig,
}

impl FactsChecker {
    pub fn new(config: FactsConfig) -> Self {
        Self { config }
    }

    /// Oldest year in `REFERENCE_YEAR_MIN..=REFERENCE_YEAR_MAX` older than
    /// `reference_year - staleness_years`.
    pub fn oldest_stale_year(
        &self,
        content: &str,
        reference_year: i32,
    ) -> Result<Option<i32>, CheckError> {
        let years = require(RuleName::Facts, "year", &RE_YEAR)?;
        let cutoff = reference_year - self.config.staleness_years;
        Ok(years
            .find_iter(content)
            .filter_map(|m| m.as_str().parse::<i32>().ok())
            .filter(|year| (REFERENCE_YEAR_MIN..=REFERENCE_YEAR_MAX).contains(year))
            .filter(|&year| year < cutoff)
            .min())
    }
}

impl Default for FactsChecker {
    fn default() -> Self {
        Self::new(FactsConfig::default())
    }
}

impl Checker for FactsChecker {
    fn rule(&self) -> RuleName {
        RuleName::Facts
    }

    fn check(&self, content: &str, ctx: &CheckContext<'_>) -> Result<CheckResult, CheckError> {
        if is_blank(content) {
            return Ok(CheckResult::clean(RuleName::Facts));
        }

        let patterns = [
            ("year", &RE_YEAR),
            ("percent", &RE_PERCENT),
            ("number", &RE_NUMBER),
            ("research_claim", &RE_RESEARCH_CLAIM),
        ];

        let mut suggestions = Vec::new();
        for (name, pattern) in patterns {
            let regex = require(RuleName::Facts, name, pattern)?;
            let count = regex.find_iter(content).count();
            if count > self.config.claim_threshold {
                suggestions.push(format!("Consider verifying {count} factual statements"));
            }
        }

        if let Some(year) = self.oldest_stale_year(content, ctx.reference_year)? {
            suggestions.push(format!(
                "Some references are from {year} - consider updating"
            ));
        }

        Ok(CheckResult::from_parts(RuleName::Facts, Vec::new(), suggestions))
    }
}
