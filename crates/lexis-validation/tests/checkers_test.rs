//! Per-checker behavior through the public API.

use lexis_core::models::{IssueKind, Severity};
use lexis_core::traits::{Cancellable, CancellationToken, CheckContext, Checker};
use lexis_core::{RuleConfiguration, RuleName};
use lexis_validation::checkers::consistency::ConsistencyChecker;
use lexis_validation::checkers::{
    FactsChecker, GrammarChecker, ReadabilityChecker, SpellingChecker, StructureChecker,
};
use lexis_validation::similarity::similarity;
use lexis_validation::{validate, CheckerRegistry, ValidationEngine};

fn ctx(token: &CancellationToken) -> CheckContext<'_> {
    CheckContext {
        cancellation: token,
        reference_year: 2026,
    }
}

fn only(rule: RuleName) -> RuleConfiguration {
    RuleName::all()
        .iter()
        .fold(RuleConfiguration::none(), |cfg, r| cfg.with(*r, *r == rule))
}

// ─── Similarity ──────────────────────────────────────────────────────────────

#[test]
fn similarity_basics() {
    assert_eq!(similarity("", ""), 1.0);
    assert_eq!(similarity("policy", "policy"), 1.0);
    assert_eq!(similarity("kitten", "sitting"), similarity("sitting", "kitten"));
    let s = similarity("implement", "implememt");
    assert!((s - 8.0 / 9.0).abs() < 1e-12);
}

// ─── Grammar ─────────────────────────────────────────────────────────────────

#[test]
fn article_before_vowel_is_flagged() {
    let token = CancellationToken::new();
    let result = GrammarChecker.check("this is a apple", &ctx(&token)).unwrap();
    assert!(!result.passed);
    assert_eq!(result.issues.len(), 1);
    assert_eq!(result.issues[0].kind, IssueKind::Grammar);
    assert_eq!(result.issues[0].message, "Use \"an\" before vowels");
    assert!(result.issues[0].occurrences >= 1);
    assert_eq!(result.issues[0].severity, Severity::Medium);
}

#[test]
fn grammar_counts_every_occurrence() {
    let token = CancellationToken::new();
    let text = "There is a idea. Their plan is fine. It's not done, it’s never done.";
    let result = GrammarChecker.check(text, &ctx(&token)).unwrap();
    let messages: Vec<(&str, u32)> = result
        .issues
        .iter()
        .map(|i| (i.message.as_str(), i.occurrences))
        .collect();
    assert_eq!(
        messages,
        vec![
            ("Use \"an\" before vowels", 1),
            ("Use \"its\" for possessive, \"it's\" for \"it is\"", 2),
            ("Check usage of there/their/they're", 2),
        ]
    );
}

#[test]
fn grammar_always_suggests_a_full_checker() {
    let token = CancellationToken::new();
    let result = GrammarChecker.check("An orange sat here.", &ctx(&token)).unwrap();
    assert!(result.passed);
    assert_eq!(
        result.suggestions,
        vec!["Consider using a grammar checker for a thorough review".to_string()]
    );
}

// ─── Spelling ────────────────────────────────────────────────────────────────

#[test]
fn occured_suggests_occurred() {
    let token = CancellationToken::new();
    let result = SpellingChecker
        .check("The failure occured at noon.", &ctx(&token))
        .unwrap();
    assert!(!result.passed);
    assert_eq!(result.issues[0].kind, IssueKind::Spelling);
    assert_eq!(result.issues[0].severity, Severity::Low);
    assert!(result.issues[0].message.contains("\"occurred\""));
}

#[test]
fn spelling_is_whole_word_and_case_insensitive() {
    let token = CancellationToken::new();
    let result = SpellingChecker
        .check("RECIEVE it. Recieved is not in the table.", &ctx(&token))
        .unwrap();
    assert_eq!(result.issues.len(), 1);
    assert_eq!(result.issues[0].occurrences, 1);
    assert_eq!(
        result.issues[0].message,
        "Misspelled word: \"recieve\" should be \"receive\""
    );
}

// ─── Consistency ─────────────────────────────────────────────────────────────

#[test]
fn skipped_heading_level_is_flagged() {
    let token = CancellationToken::new();
    let checker = ConsistencyChecker::default();
    let skipped = checker.check("# Title\n### Sub\n", &ctx(&token)).unwrap();
    assert!(skipped
        .issues
        .iter()
        .any(|i| i.kind == IssueKind::Structure && i.message.contains("H1 to H3")));

    let continuous = checker.check("# Title\n## Sub\n", &ctx(&token)).unwrap();
    assert!(continuous.passed);
    assert_eq!(
        continuous.suggestions,
        vec!["Document shows good consistency throughout".to_string()]
    );
}

#[test]
fn near_duplicate_term_counts_both_spellings() {
    let token = CancellationToken::new();
    let text = "We implement logging, implement tracing and implement metrics, then implememt alerts.";
    let result = ConsistencyChecker::default()
        .check(text, &ctx(&token))
        .unwrap();
    assert_eq!(result.issues.len(), 1);
    let issue = &result.issues[0];
    assert_eq!(issue.kind, IssueKind::Consistency);
    assert_eq!(issue.severity, Severity::Medium);
    assert_eq!(issue.occurrences, 4);
    assert_eq!(issue.message, "Inconsistent term usage: \"implement\", \"implememt\"");
}

#[test]
fn term_cap_adds_a_suggestion() {
    let token = CancellationToken::new();
    let mut config = lexis_core::config::ConsistencyConfig::default();
    config.max_distinct_terms = 2;
    let checker = ConsistencyChecker::new(config);
    let text = "alphabet alphabet bulwarks bulwarks crescendo";
    let result = checker.check(text, &ctx(&token)).unwrap();
    assert!(result.suggestions.contains(
        &"Term variant scan limited to the 2 most frequent of 3 distinct terms".to_string()
    ));
}

#[test]
fn cancelled_scan_is_reported_not_failed() {
    let token = CancellationToken::new();
    token.cancel();
    let result = ConsistencyChecker::default()
        .check("implement implememt", &ctx(&token))
        .unwrap();
    assert!(result.issues.is_empty());
    assert!(result.suggestions.contains(
        &"Term variant scan stopped early: validation deadline reached".to_string()
    ));
}

// ─── Facts, Structure, Readability ───────────────────────────────────────────

#[test]
fn facts_never_blocks() {
    let token = CancellationToken::new();
    let text = "In 1990 and 1991 we saw 1%, 2%, 3%, 4%, 5%, 6% growth, according to reports.";
    let result = FactsChecker::default().check(text, &ctx(&token)).unwrap();
    assert!(result.passed);
    assert!(result.issues.is_empty());
    assert!(result
        .suggestions
        .contains(&"Some references are from 1990 - consider updating".to_string()));
}

#[test]
fn missing_title_is_high_and_costs_score() {
    let body = "## Background\n\nThe migration finished on schedule with no data loss.\n";
    let token = CancellationToken::new();
    let result = StructureChecker::default().check(body, &ctx(&token)).unwrap();
    assert_eq!(result.issues[0].severity, Severity::High);

    let rules = RuleConfiguration::all_enabled();
    let without = validate(body, &rules);
    let with = validate(&format!("# Migration\n\n{body}"), &rules);
    assert!(without.score < with.score);
    assert!(!without.overall_passed);
}

#[test]
fn readability_never_blocks() {
    let token = CancellationToken::new();
    let result = ReadabilityChecker::default()
        .check("Short. Very short. Tiny.", &ctx(&token))
        .unwrap();
    assert!(result.passed);
    assert_eq!(result.suggestions.len(), 1);
}

// ─── Blank content ───────────────────────────────────────────────────────────

#[test]
fn blank_content_passes_every_checker_with_only_fixed_advisories() {
    let token = CancellationToken::new();
    let registry = CheckerRegistry::default();
    for rule in RuleName::all() {
        let checker = registry.get(*rule).unwrap();
        let expected: Vec<String> = match rule {
            RuleName::Grammar => vec!["Consider using a grammar checker for a thorough review".into()],
            RuleName::Spelling => {
                vec!["Run spell check with a dictionary specific to your domain".into()]
            }
            RuleName::Consistency => vec!["Document shows good consistency throughout".into()],
            _ => Vec::new(),
        };
        for content in ["", "   \n\t  "] {
            let result = checker.check(content, &ctx(&token)).unwrap();
            assert!(result.passed, "{rule}");
            assert!(result.issues.is_empty(), "{rule}");
            assert_eq!(result.suggestions, expected, "{rule}");
        }
    }
    let report = ValidationEngine::default().validate("", &RuleConfiguration::all_enabled());
    assert_eq!(report.score, 100);
    assert!(report.overall_passed);
}

// ─── Single-rule runs ────────────────────────────────────────────────────────

#[test]
fn single_rule_run_scores_only_that_rule() {
    let report = validate("this is a apple", &only(RuleName::Grammar));
    assert_eq!(report.per_rule.len(), 1);
    // 20 - 2 = 18 of 20
    assert_eq!(report.score, 90);
}
