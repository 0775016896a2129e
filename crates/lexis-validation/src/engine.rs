//! ValidationEngine: resolves rules, runs checkers in isolation, assembles
//! the report in canonical order, and scores it.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::{Duration, Instant};

use chrono::{Datelike, Utc};
use lexis_core::errors::{CheckError, LexisErrorCode, LexisResult};
use lexis_core::models::{CheckResult, Issue, RuleName, ValidationReport};
use lexis_core::tracing::names;
use lexis_core::traits::{Cancellable, CancellationToken, CheckContext, DeadlineToken};
use lexis_core::{LexisConfig, RuleConfiguration};
use rayon::prelude::*;
use tracing::{debug, debug_span, info, info_span, warn};

use crate::checkers::CheckerRegistry;
use crate::scorer::Scorer;

/// Runs the enabled checkers over a document and scores the outcome.
///
/// Holds no per-call state; one engine can serve concurrent callers.
pub struct ValidationEngine {
    config: LexisConfig,
    registry: CheckerRegistry,
    scorer: Scorer,
    /// Fixed calendar year for staleness checks. `None` = current UTC year.
    reference_year: Option<i32>,
}

impl ValidationEngine {
    /// Build an engine from a validated configuration.
    pub fn new(config: LexisConfig) -> LexisResult<Self> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    fn from_validated(config: LexisConfig) -> Self {
        Self {
            registry: CheckerRegistry::from_config(&config),
            scorer: Scorer::new(config.scoring.clone()),
            config,
            reference_year: None,
        }
    }

    /// Replace the checker registry.
    pub fn with_registry(mut self, registry: CheckerRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Pin the year used by the facts checker.
    pub fn with_reference_year(mut self, year: i32) -> Self {
        self.reference_year = Some(year);
        self
    }

    pub fn config(&self) -> &LexisConfig {
        &self.config
    }

    pub fn registry(&self) -> &CheckerRegistry {
        &self.registry
    }

    /// Validate `content` under `rules`, layered over the engine's default
    /// rules. Honors `engine.deadline_ms` when configured.
    pub fn validate(&self, content: &str, rules: &RuleConfiguration) -> ValidationReport {
        match self.config.engine.deadline() {
            Some(budget) => self.validate_with_deadline(content, rules, budget),
            None => self.run(content, rules, &CancellationToken::new()),
        }
    }

    /// Validate with an overall time budget.
    pub fn validate_with_deadline(
        &self,
        content: &str,
        rules: &RuleConfiguration,
        budget: Duration,
    ) -> ValidationReport {
        self.run(content, rules, &DeadlineToken::after(budget))
    }

    /// Validate with a caller-owned cancellation signal. Ignores
    /// `engine.deadline_ms`.
    pub fn validate_with_cancellation(
        &self,
        content: &str,
        rules: &RuleConfiguration,
        cancellation: &dyn Cancellable,
    ) -> ValidationReport {
        self.run(content, rules, cancellation)
    }

    fn run(
        &self,
        content: &str,
        rules: &RuleConfiguration,
        cancellation: &dyn Cancellable,
    ) -> ValidationReport {
        let span = info_span!(names::VALIDATION, bytes = content.len());
        let _guard = span.enter();
        let start = Instant::now();

        let enabled = self.config.rules.merged_with(rules).enabled_rules();
        if enabled.is_empty() {
            info!("no rules enabled");
            return ValidationReport::empty();
        }

        let ctx = CheckContext {
            cancellation,
            reference_year: self
                .reference_year
                .unwrap_or_else(|| Utc::now().year()),
        };

        // Indexed collect keeps canonical order under rayon.
        let outcomes: Vec<(RuleName, Result<CheckResult, CheckError>)> =
            if self.config.engine.parallel {
                enabled
                    .par_iter()
                    .map(|&rule| (rule, self.run_rule(rule, content, &ctx)))
                    .collect()
            } else {
                enabled
                    .iter()
                    .map(|&rule| (rule, self.run_rule(rule, content, &ctx)))
                    .collect()
            };

        let report = self.assemble(outcomes);
        info!(
            score = report.score,
            overall_passed = report.overall_passed,
            rules = report.per_rule.len(),
            degraded = report.degraded_rules.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "validation complete"
        );
        report
    }

    /// Run one checker, converting a panic into `CheckError::Panicked`.
    fn run_rule(
        &self,
        rule: RuleName,
        content: &str,
        ctx: &CheckContext<'_>,
    ) -> Result<CheckResult, CheckError> {
        let checker = self
            .registry
            .get(rule)
            .ok_or(CheckError::NotRegistered { rule })?;

        let _span = debug_span!(names::CHECK, rule = %rule).entered();
        match catch_unwind(AssertUnwindSafe(|| checker.check(content, ctx))) {
            Ok(result) => result,
            Err(payload) => Err(CheckError::Panicked {
                rule,
                message: panic_message(payload.as_ref()),
            }),
        }
    }

    fn assemble(&self, outcomes: Vec<(RuleName, Result<CheckResult, CheckError>)>) -> ValidationReport {
        let mut report = ValidationReport::empty();

        for (rule, outcome) in outcomes {
            match outcome {
                Ok(result) => {
                    debug!(
                        rule = %rule,
                        passed = result.passed,
                        issues = result.issues.len(),
                        suggestions = result.suggestions.len(),
                        "rule completed"
                    );
                    report.issues.extend(result.issues.iter().cloned());
                    report.suggestions.extend(result.suggestions.iter().cloned());
                    report.per_rule.insert(rule, result);
                }
                Err(err) => {
                    warn!(
                        rule = %rule,
                        code = err.error_code(),
                        error = %err,
                        "rule degraded; excluded from scoring"
                    );
                    report.issues.push(Issue::internal(rule));
                    report.degraded_rules.push(rule);
                }
            }
        }

        // A run where every requested rule faulted proves nothing.
        let all_degraded = report.per_rule.is_empty() && !report.degraded_rules.is_empty();
        report.overall_passed = !all_degraded && report.per_rule.values().all(|r| r.passed);
        report.score = self.scorer.score(report.per_rule.values());
        report
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::from_validated(LexisConfig::default())
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
