//! Heading extraction and level-continuity check.

use lexis_core::errors::CheckError;
use lexis_core::models::{HeadingEntry, Issue, IssueKind, RuleName, Severity};

use crate::checkers::require;

lazy_pattern!(RE_HEADING, r"(?m)^(#{1,6})[ \t]+(\S.*)$");

/// Extract `#`-style headings in document order.
pub fn extract_headings(content: &str) -> Result<Vec<HeadingEntry>, CheckError> {
    let heading = require(RuleName::Consistency, "heading", &RE_HEADING)?;
    Ok(heading
        .captures_iter(content)
        .map(|caps| HeadingEntry {
            level: caps[1].len() as u8,
            text: caps[2].trim().to_string(),
        })
        .collect())
}

/// Flag every step that descends more than one level at once.
/// Ascending (or staying level) is never flagged.
pub fn check_continuity(headings: &[HeadingEntry]) -> Vec<Issue> {
    headings
        .windows(2)
        .filter(|pair| pair[1].level > pair[0].level + 1)
        .map(|pair| {
            Issue::new(
                IssueKind::Structure,
                Severity::Medium,
                format!(
                    "Skipped heading level: from H{} to H{}",
                    pair[0].level, pair[1].level
                ),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_levels_and_trimmed_text() {
        let headings = extract_headings("# Title\r\ntext\n###  Deep  \n####### not one\n#nospace\n")
            .unwrap();
        assert_eq!(
            headings,
            vec![
                HeadingEntry { level: 1, text: "Title".into() },
                HeadingEntry { level: 3, text: "Deep".into() },
            ]
        );
    }

    #[test]
    fn skipping_a_level_is_flagged_once() {
        let headings = extract_headings("# Title\n### Sub\n").unwrap();
        let issues = check_continuity(&headings);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "Skipped heading level: from H1 to H3");
        assert_eq!(issues[0].kind, IssueKind::Structure);
    }

    #[test]
    fn stepping_down_and_back_up_is_fine() {
        let headings = extract_headings("# A\n## B\n### C\n# D\n## E\n").unwrap();
        assert!(check_continuity(&headings).is_empty());
    }
}
