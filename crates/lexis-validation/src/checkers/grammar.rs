//! Grammar: a fixed list of surface patterns. Heuristic, not a parser.

use lexis_core::errors::CheckError;
use lexis_core::models::{CheckResult, Issue, IssueKind, RuleName, Severity};
use lexis_core::traits::{CheckContext, Checker};
use regex::Regex;
use std::sync::LazyLock;

use super::{is_blank, require};

lazy_pattern!(RE_ARTICLE_BEFORE_VOWEL, r"(?i)(?-u:\b)a\s+[aeiou]");
lazy_pattern!(RE_ITS_NEGATION, r"(?i)(?-u:\b)it['’]s\s+(?:not|never)(?-u:\b)");
lazy_pattern!(RE_THERE_HOMOPHONES, r"(?i)(?-u:\b)(?:there|their|they['’]re)(?-u:\b)");

const ADVISORY: &str = "Consider using a grammar checker for a thorough review";

/// A compiled grammar pattern.
struct GrammarPattern {
    name: &'static str,
    regex: &'static LazyLock<Option<Regex>>,
    message: &'static str,
}

fn all_patterns() -> [GrammarPattern; 3] {
    [
        GrammarPattern {
            name: "article_before_vowel",
            regex: &RE_ARTICLE_BEFORE_VOWEL,
            message: "Use \"an\" before vowels",
        },
        GrammarPattern {
            name: "its_negation",
            regex: &RE_ITS_NEGATION,
            message: "Use \"its\" for possessive, \"it's\" for \"it is\"",
        },
        GrammarPattern {
            name: "there_homophones",
            regex: &RE_THERE_HOMOPHONES,
            message: "Check usage of there/their/they're",
        },
    ]
}

/// One medium-severity issue per pattern that matches at least once.
pub struct GrammarChecker;

impl Checker for GrammarChecker {
    fn rule(&self) -> RuleName {
        RuleName::Grammar
    }

    fn check(&self, content: &str, _ctx: &CheckContext<'_>) -> Result<CheckResult, CheckError> {
        if is_blank(content) {
            return Ok(CheckResult::from_parts(
                RuleName::Grammar,
                Vec::new(),
                vec![ADVISORY.to_string()],
            ));
        }

        let mut issues = Vec::new();
        for pattern in all_patterns() {
            let regex = require(RuleName::Grammar, pattern.name, pattern.regex)?;
            let count = regex.find_iter(content).count();
            if count > 0 {
                issues.push(
                    Issue::new(IssueKind::Grammar, Severity::Medium, pattern.message)
                        .with_occurrences(count),
                );
            }
        }

        Ok(CheckResult::from_parts(
            RuleName::Grammar,
            issues,
            vec![ADVISORY.to_string()],
        ))
    }
}
