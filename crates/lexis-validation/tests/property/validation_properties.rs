use lexis_core::{RuleConfiguration, RuleName};
use lexis_validation::similarity::{levenshtein, similarity};
use lexis_validation::ValidationEngine;
use proptest::prelude::*;

fn rule_config() -> impl Strategy<Value = RuleConfiguration> {
    prop::collection::vec(any::<bool>(), 6).prop_map(|flags| {
        RuleName::all()
            .iter()
            .zip(flags)
            .fold(RuleConfiguration::all_enabled(), |cfg, (rule, on)| {
                cfg.with(*rule, on)
            })
    })
}

proptest! {
    #[test]
    fn similarity_is_reflexive(s in ".{0,40}") {
        prop_assert_eq!(similarity(&s, &s), 1.0);
    }

    #[test]
    fn similarity_is_symmetric(a in ".{0,30}", b in ".{0,30}") {
        prop_assert_eq!(similarity(&a, &b), similarity(&b, &a));
    }

    #[test]
    fn similarity_is_bounded(a in ".{0,30}", b in ".{0,30}") {
        let s = similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&s), "similarity {} out of range", s);
    }

    #[test]
    fn levenshtein_respects_length_bounds(a in "[a-z]{0,20}", b in "[a-z]{0,20}") {
        let d = levenshtein(&a, &b);
        let (la, lb) = (a.chars().count(), b.chars().count());
        prop_assert!(d >= la.abs_diff(lb));
        prop_assert!(d <= la.max(lb));
    }

    #[test]
    fn score_is_bounded(content in "(?s).{0,400}", rules in rule_config()) {
        let engine = ValidationEngine::default().with_reference_year(2026);
        let report = engine.validate(&content, &rules);
        prop_assert!(report.score <= 100);
    }

    #[test]
    fn report_covers_exactly_the_enabled_rules(content in "[a-zA-Z#\\-\\* .\n]{0,300}", rules in rule_config()) {
        let engine = ValidationEngine::default().with_reference_year(2026);
        let report = engine.validate(&content, &rules);
        let ran: Vec<RuleName> = report.per_rule.keys().copied().collect();
        prop_assert_eq!(ran, rules.enabled_rules());
        prop_assert_eq!(report.overall_passed, report.per_rule.values().all(|r| r.passed));
        if rules.enabled_rules().is_empty() {
            prop_assert_eq!(report.score, 0);
        }
    }

    #[test]
    fn validation_is_deterministic(content in "(?s).{0,300}") {
        let engine = ValidationEngine::default().with_reference_year(2026);
        let rules = RuleConfiguration::all_enabled();
        let a = engine.validate(&content, &rules).to_json().unwrap();
        let b = engine.validate(&content, &rules).to_json().unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn advisory_rules_never_fail(content in "(?s).{0,400}") {
        let report = lexis_validation::validate(&content, &RuleConfiguration::all_enabled());
        prop_assert!(report.rule(RuleName::Facts).unwrap().passed);
        prop_assert!(report.rule(RuleName::Readability).unwrap().passed);
    }
}
