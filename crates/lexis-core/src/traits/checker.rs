use crate::errors::CheckError;
use crate::models::{CheckResult, RuleName};

use super::Cancellable;

/// Per-call context handed to every checker.
///
/// Carries only read-only inputs, so checkers cannot observe each other.
pub struct CheckContext<'a> {
    /// Polled by checkers with unbounded cost.
    pub cancellation: &'a dyn Cancellable,
    /// Calendar year used for staleness checks. Captured once per call.
    pub reference_year: i32,
}

/// A single validation rule implementation.
///
/// Implementations must be pure functions of `(content, own tables)`.
/// Blank content must yield a clean pass.
pub trait Checker: Send + Sync {
    /// The rule this checker implements.
    fn rule(&self) -> RuleName;

    /// Run the check.
    fn check(&self, content: &str, ctx: &CheckContext<'_>) -> Result<CheckResult, CheckError>;
}
