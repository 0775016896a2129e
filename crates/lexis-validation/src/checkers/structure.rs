//! Structure: main title, section headings, conclusion, paragraph length.
//! Only a missing title blocks; the rest is advisory.

use lexis_core::config::StructureConfig;
use lexis_core::errors::CheckError;
use lexis_core::models::{CheckResult, Issue, IssueKind, RuleName, Severity};
use lexis_core::traits::{CheckContext, Checker};

use super::{is_blank, require};

lazy_pattern!(RE_TITLE, r"(?m)^#[ \t]+\S");
lazy_pattern!(RE_SECTION, r"(?m)^#{2,6}[ \t]+\S");
lazy_pattern!(
    RE_CONCLUSION,
    r"(?i)(?-u:\b)(?:conclusion|summary|final|wrap[\s-]?up)(?-u:\b)"
);
lazy_pattern!(RE_PARAGRAPH_BREAK, r"\r?\n(?:[ \t]*\r?\n)+");

pub struct StructureChecker {
    config: StructureConfig,
}

impl StructureChecker {
    pub fn new(config: StructureConfig) -> Self {
        Self { config }
    }

    /// Number of blank-line separated paragraphs over the length limit.
    pub fn long_paragraphs(&self, content: &str) -> Result<usize, CheckError> {
        let breaks = require(RuleName::Structure, "paragraph_break", &RE_PARAGRAPH_BREAK)?;
        Ok(breaks
            .split(content)
            .filter(|p| p.chars().count() > self.config.long_paragraph_chars)
            .count())
    }
}

impl Default for StructureChecker {
    fn default() -> Self {
        Self::new(StructureConfig::default())
    }
}

impl Checker for StructureChecker {
    fn rule(&self) -> RuleName {
        RuleName::Structure
    }

    fn check(&self, content: &str, _ctx: &CheckContext<'_>) -> Result<CheckResult, CheckError> {
        if is_blank(content) {
            return Ok(CheckResult::clean(RuleName::Structure));
        }

        let title = require(RuleName::Structure, "title", &RE_TITLE)?;
        let section = require(RuleName::Structure, "section", &RE_SECTION)?;
        let conclusion = require(RuleName::Structure, "conclusion", &RE_CONCLUSION)?;

        let mut issues = Vec::new();
        let mut suggestions = Vec::new();

        if !title.is_match(content) {
            issues.push(Issue::new(
                IssueKind::Structure,
                Severity::High,
                "Document missing main title",
            ));
        }

        if !section.is_match(content) {
            suggestions.push("Consider adding section headings for better organization".to_string());
        }

        if content.chars().count() > self.config.conclusion_min_chars && !conclusion.is_match(content)
        {
            suggestions.push("Consider adding a conclusion section".to_string());
        }

        let long = self.long_paragraphs(content)?;
        if long > 0 {
            suggestions.push(format!(
                "{long} paragraphs are quite long - consider breaking them up"
            ));
        }

        Ok(CheckResult::from_parts(
            RuleName::Structure,
            issues,
            suggestions,
        ))
    }
}
