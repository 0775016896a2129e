use serde::{Deserialize, Serialize};

use super::{Issue, RuleName};

/// Output of one checker run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    pub rule_name: RuleName,
    /// True iff `issues` is empty.
    pub passed: bool,
    pub issues: Vec<Issue>,
    /// Advisory only; never affects `passed` or the score.
    pub suggestions: Vec<String>,
}

impl CheckResult {
    /// Build a result, deriving `passed` from the issue list.
    pub fn from_parts(rule_name: RuleName, issues: Vec<Issue>, suggestions: Vec<String>) -> Self {
        Self {
            rule_name,
            passed: issues.is_empty(),
            issues,
            suggestions,
        }
    }

    /// A passing result with no issues and no suggestions.
    pub fn clean(rule_name: RuleName) -> Self {
        Self::from_parts(rule_name, Vec::new(), Vec::new())
    }

    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }
}
