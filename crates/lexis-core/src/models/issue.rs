use std::fmt;

use serde::{Deserialize, Serialize};

use super::RuleName;

/// Qualitative importance of an issue. Informational only; scoring does
/// not weight by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Category of an issue. Not tied one-to-one to rules: the consistency
/// rule emits `Consistency`, `Structure` and `Formatting` issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Grammar,
    Spelling,
    Consistency,
    Structure,
    Formatting,
    /// A checker faulted and its rule was dropped from the run.
    Internal,
}

/// A blocking finding produced by a checker. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub kind: IssueKind,
    pub message: String,
    /// Always at least 1.
    pub occurrences: u32,
    pub severity: Severity,
}

impl Issue {
    /// Create an issue with a single occurrence.
    pub fn new(kind: IssueKind, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            occurrences: 1,
            severity,
        }
    }

    /// Set the occurrence count, clamped to at least 1.
    pub fn with_occurrences(mut self, occurrences: usize) -> Self {
        self.occurrences = u32::try_from(occurrences).unwrap_or(u32::MAX).max(1);
        self
    }

    /// The synthetic issue recorded when a rule's checker faults.
    pub fn internal(rule: RuleName) -> Self {
        Self::new(
            IssueKind::Internal,
            Severity::Low,
            format!("{rule} check unavailable"),
        )
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} (x{})", self.severity, self.message, self.occurrences)
    }
}
