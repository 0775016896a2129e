//! Spelling: a fixed table of common misspellings.

use std::sync::LazyLock;

use lexis_core::errors::CheckError;
use lexis_core::models::{CheckResult, Issue, IssueKind, RuleName, Severity};
use lexis_core::traits::{CheckContext, Checker};
use regex::Regex;

use super::is_blank;

/// Known misspelling → correction, in reporting order.
pub const MISSPELLINGS: [(&str, &str); 6] = [
    ("occured", "occurred"),
    ("seperate", "separate"),
    ("recieve", "receive"),
    ("definately", "definitely"),
    ("neccessary", "necessary"),
    ("accomodate", "accommodate"),
];

const ADVISORY: &str = "Run spell check with a dictionary specific to your domain";

struct SpellingPattern {
    wrong: &'static str,
    right: &'static str,
    regex: Option<Regex>,
}

/// Case-insensitive whole-word matchers, one per table entry.
static SPELLING_PATTERNS: LazyLock<Vec<SpellingPattern>> = LazyLock::new(|| {
    MISSPELLINGS
        .iter()
        .map(|&(wrong, right)| SpellingPattern {
            wrong,
            right,
            regex: Regex::new(&format!(r"(?i)(?-u:\b){}(?-u:\b)", regex::escape(wrong))).ok(),
        })
        .collect()
});

pub struct SpellingChecker;

impl Checker for SpellingChecker {
    fn rule(&self) -> RuleName {
        RuleName::Spelling
    }

    fn check(&self, content: &str, _ctx: &CheckContext<'_>) -> Result<CheckResult, CheckError> {
        if is_blank(content) {
            return Ok(CheckResult::from_parts(
                RuleName::Spelling,
                Vec::new(),
                vec![ADVISORY.to_string()],
            ));
        }

        let mut issues = Vec::new();
        for pattern in SPELLING_PATTERNS.iter() {
            let regex = pattern
                .regex
                .as_ref()
                .ok_or_else(|| CheckError::PatternUnavailable {
                    rule: RuleName::Spelling,
                    pattern: pattern.wrong.to_string(),
                })?;
            let count = regex.find_iter(content).count();
            if count > 0 {
                issues.push(
                    Issue::new(
                        IssueKind::Spelling,
                        Severity::Low,
                        format!(
                            "Misspelled word: \"{}\" should be \"{}\"",
                            pattern.wrong, pattern.right
                        ),
                    )
                    .with_occurrences(count),
                );
            }
        }

        Ok(CheckResult::from_parts(
            RuleName::Spelling,
            issues,
            vec![ADVISORY.to_string()],
        ))
    }
}
