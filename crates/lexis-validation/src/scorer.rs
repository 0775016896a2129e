//! Weighted multi-criteria score over the rules that actually ran.

use lexis_core::config::ScoringConfig;
use lexis_core::constants::{SCORE_MAX, SCORE_MIN};
use lexis_core::models::CheckResult;

/// Turns per-rule results into a 0–100 score.
///
/// A passing rule earns its full weight. A failing rule earns its weight
/// minus a flat per-issue penalty, floored at zero. The denominator is the
/// weight of the rules that ran, so disabled or faulted rules neither help
/// nor hurt.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    config: ScoringConfig,
}

impl Scorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Points earned by a single rule result.
    pub fn award(&self, result: &CheckResult) -> u32 {
        let weight = self.config.weights.weight(result.rule_name);
        if result.passed {
            return weight;
        }
        let issues = u32::try_from(result.issues.len()).unwrap_or(u32::MAX);
        weight.saturating_sub(issues.saturating_mul(self.config.issue_penalty))
    }

    /// Score the executed results. Zero results (or zero total weight) is 0.
    pub fn score<'a, I>(&self, results: I) -> u8
    where
        I: IntoIterator<Item = &'a CheckResult>,
    {
        let (awarded, total) = results.into_iter().fold((0u64, 0u64), |(a, t), r| {
            (
                a + u64::from(self.award(r)),
                t + u64::from(self.config.weights.weight(r.rule_name)),
            )
        });
        if total == 0 {
            return 0;
        }
        let pct = (awarded as f64 / total as f64 * f64::from(SCORE_MAX)).round();
        pct.clamp(f64::from(SCORE_MIN), f64::from(SCORE_MAX)) as u8
    }
}
