use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::RuleName;

/// Maximum score contribution of each rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleWeights {
    pub grammar: u32,
    pub spelling: u32,
    pub consistency: u32,
    pub facts: u32,
    pub structure: u32,
    pub readability: u32,
}

impl RuleWeights {
    pub fn weight(&self, rule: RuleName) -> u32 {
        match rule {
            RuleName::Grammar => self.grammar,
            RuleName::Spelling => self.spelling,
            RuleName::Consistency => self.consistency,
            RuleName::Facts => self.facts,
            RuleName::Structure => self.structure,
            RuleName::Readability => self.readability,
        }
    }

    pub fn total(&self) -> u32 {
        RuleName::all().iter().map(|r| self.weight(*r)).sum()
    }
}

impl Default for RuleWeights {
    fn default() -> Self {
        Self {
            grammar: defaults::DEFAULT_GRAMMAR_WEIGHT,
            spelling: defaults::DEFAULT_SPELLING_WEIGHT,
            consistency: defaults::DEFAULT_CONSISTENCY_WEIGHT,
            facts: defaults::DEFAULT_FACTS_WEIGHT,
            structure: defaults::DEFAULT_STRUCTURE_WEIGHT,
            readability: defaults::DEFAULT_READABILITY_WEIGHT,
        }
    }
}

/// Scorer configuration.
///
/// The penalty is flat per issue and ignores severity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub weights: RuleWeights,
    /// Points deducted per issue from a failing rule's weight.
    pub issue_penalty: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: RuleWeights::default(),
            issue_penalty: defaults::DEFAULT_ISSUE_PENALTY,
        }
    }
}
