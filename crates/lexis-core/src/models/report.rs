use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{CheckResult, Issue, RuleName};

/// Result of validating one document.
///
/// `per_rule` is keyed by `RuleName`, whose ordering is the canonical rule
/// order, so serialized reports are reproducible regardless of how the
/// checkers were scheduled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// AND of `passed` over every executed rule. False when every
    /// requested rule degraded and none produced a result.
    pub overall_passed: bool,
    /// 0..=100
    pub score: u8,
    /// All issues, concatenated in canonical rule order.
    pub issues: Vec<Issue>,
    /// All suggestions, concatenated in canonical rule order.
    pub suggestions: Vec<String>,
    /// Exactly the rules that were enabled and completed.
    pub per_rule: BTreeMap<RuleName, CheckResult>,
    /// Rules whose checker faulted and were excluded from scoring.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub degraded_rules: Vec<RuleName>,
}

impl ValidationReport {
    /// The report produced when no rule runs.
    pub fn empty() -> Self {
        Self {
            overall_passed: true,
            score: 0,
            issues: Vec::new(),
            suggestions: Vec::new(),
            per_rule: BTreeMap::new(),
            degraded_rules: Vec::new(),
        }
    }

    /// Result for a single rule, if it ran.
    pub fn rule(&self, rule: RuleName) -> Option<&CheckResult> {
        self.per_rule.get(&rule)
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
