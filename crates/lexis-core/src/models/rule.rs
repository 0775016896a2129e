use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The 6 validation rules.
///
/// Declaration order is the canonical rule order; `Ord` follows it, so any
/// ordered collection keyed by `RuleName` iterates canonically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleName {
    Grammar,
    Spelling,
    Consistency,
    Facts,
    Structure,
    Readability,
}

impl RuleName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Grammar => "grammar",
            Self::Spelling => "spelling",
            Self::Consistency => "consistency",
            Self::Facts => "facts",
            Self::Structure => "structure",
            Self::Readability => "readability",
        }
    }

    /// All rules in canonical order.
    pub fn all() -> &'static [RuleName] {
        &[
            Self::Grammar,
            Self::Spelling,
            Self::Consistency,
            Self::Facts,
            Self::Structure,
            Self::Readability,
        ]
    }

    /// Position of this rule in the canonical order.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|rule| rule.as_str() == lowered)
            .ok_or_else(|| format!("unknown rule name: {s}"))
    }
}
