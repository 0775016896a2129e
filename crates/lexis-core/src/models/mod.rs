//! Report data model: rules, issues, per-rule results, and the final report.

pub mod check_result;
pub mod heading;
pub mod issue;
pub mod report;
pub mod rule;

pub use check_result::CheckResult;
pub use heading::HeadingEntry;
pub use issue::{Issue, IssueKind, Severity};
pub use report::ValidationReport;
pub use rule::RuleName;
