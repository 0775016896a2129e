//! Checker faults. None of these abort a validation run; the engine turns
//! them into a degraded rule.

use super::error_code::{self, LexisErrorCode};
use crate::models::RuleName;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckError {
    #[error("{rule} pattern '{pattern}' is unavailable")]
    PatternUnavailable { rule: RuleName, pattern: String },

    #[error("{rule} checker panicked: {message}")]
    Panicked { rule: RuleName, message: String },

    #[error("no checker registered for {rule}")]
    NotRegistered { rule: RuleName },
}

impl CheckError {
    pub fn rule(&self) -> RuleName {
        match self {
            Self::PatternUnavailable { rule, .. }
            | Self::Panicked { rule, .. }
            | Self::NotRegistered { rule } => *rule,
        }
    }
}

impl LexisErrorCode for CheckError {
    fn error_code(&self) -> &'static str {
        error_code::CHECK_ERROR
    }
}
