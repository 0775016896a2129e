//! Bullet-marker uniformity.

use lexis_core::errors::CheckError;
use lexis_core::models::{Issue, IssueKind, RuleName, Severity};

use crate::checkers::require;

lazy_pattern!(RE_DASH_BULLET, r"(?m)^-[ \t]+");
lazy_pattern!(RE_STAR_BULLET, r"(?m)^\*[ \t]+");
lazy_pattern!(RE_PLUS_BULLET, r"(?m)^\+[ \t]+");

/// Line-leading bullet counts for `-`, `*`, `+`, in that order.
pub fn count_bullets(content: &str) -> Result<[usize; 3], CheckError> {
    let dash = require(RuleName::Consistency, "dash_bullet", &RE_DASH_BULLET)?;
    let star = require(RuleName::Consistency, "star_bullet", &RE_STAR_BULLET)?;
    let plus = require(RuleName::Consistency, "plus_bullet", &RE_PLUS_BULLET)?;
    Ok([
        dash.find_iter(content).count(),
        star.find_iter(content).count(),
        plus.find_iter(content).count(),
    ])
}

/// One low-severity issue when non-dominant markers exceed `tolerance`
/// of all bullets. The first style wins a tie for dominance.
pub fn check_bullets(content: &str, tolerance: f64) -> Result<Option<Issue>, CheckError> {
    let counts = count_bullets(content)?;
    let total: usize = counts.iter().sum();
    if total == 0 {
        return Ok(None);
    }

    let dominant = counts
        .iter()
        .enumerate()
        .fold(0, |best, (i, &c)| if c > counts[best] { i } else { best });
    let others = total - counts[dominant];

    if others as f64 > total as f64 * tolerance {
        return Ok(Some(Issue::new(
            IssueKind::Formatting,
            Severity::Low,
            "Inconsistent bullet point formatting detected",
        )));
    }
    Ok(None)
}
