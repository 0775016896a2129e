use lexis_core::models::{Issue, IssueKind, Severity};
use lexis_core::{RuleConfiguration, RuleName};
use proptest::prelude::*;

fn rule() -> impl Strategy<Value = RuleName> {
    prop::sample::select(RuleName::all().to_vec())
}

fn rule_config() -> impl Strategy<Value = RuleConfiguration> {
    prop::collection::vec((rule(), any::<bool>()), 0..8).prop_map(|pairs| {
        pairs
            .into_iter()
            .fold(RuleConfiguration::all_enabled(), |cfg, (r, on)| cfg.with(r, on))
    })
}

proptest! {
    #[test]
    fn occurrences_are_at_least_one(n in 0usize..10_000) {
        let issue = Issue::new(IssueKind::Grammar, Severity::Low, "x").with_occurrences(n);
        prop_assert!(issue.occurrences >= 1);
        prop_assert_eq!(issue.occurrences as usize, n.max(1));
    }

    #[test]
    fn rule_name_display_parses_back(r in rule()) {
        prop_assert_eq!(r.to_string().to_uppercase().parse::<RuleName>(), Ok(r));
    }

    #[test]
    fn merge_lets_the_right_side_win(base in rule_config(), over in rule_config()) {
        let merged = base.merged_with(&over);
        for r in RuleName::all() {
            let expected = match over.overrides().get(r) {
                Some(v) => *v,
                None => base.is_enabled(*r),
            };
            prop_assert_eq!(merged.is_enabled(*r), expected);
        }
    }

    #[test]
    fn enabled_rules_stay_canonical(cfg in rule_config()) {
        let enabled = cfg.enabled_rules();
        let mut sorted = enabled.clone();
        sorted.sort();
        prop_assert_eq!(enabled, sorted);
    }

    #[test]
    fn rule_configuration_json_roundtrip(cfg in rule_config()) {
        let json = serde_json::to_string(&cfg).unwrap();
        let back: RuleConfiguration = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, cfg);
    }
}
