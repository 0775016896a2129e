//! The 6 rule checkers and the registry that maps rules to them.

/// Declare a lazily compiled pattern. A pattern that fails to compile is
/// `None` and surfaces as `CheckError::PatternUnavailable` when used.
/// Textually scoped: visible in every checker module declared below.
macro_rules! lazy_pattern {
    ($name:ident, $regex_str:expr) => {
        static $name: std::sync::LazyLock<Option<regex::Regex>> =
            std::sync::LazyLock::new(|| regex::Regex::new($regex_str).ok());
    };
}

pub mod consistency;
pub mod facts;
pub mod grammar;
pub mod readability;
pub mod spelling;
pub mod structure;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use lexis_core::errors::CheckError;
use lexis_core::models::RuleName;
use lexis_core::traits::Checker;
use lexis_core::LexisConfig;
use regex::Regex;

pub use consistency::ConsistencyChecker;
pub use facts::FactsChecker;
pub use grammar::GrammarChecker;
pub use readability::ReadabilityChecker;
pub use spelling::SpellingChecker;
pub use structure::StructureChecker;

/// Resolve a lazily compiled pattern or report it as unavailable.
pub(crate) fn require(
    rule: RuleName,
    name: &str,
    pattern: &'static LazyLock<Option<Regex>>,
) -> Result<&'static Regex, CheckError> {
    pattern.as_ref().ok_or_else(|| CheckError::PatternUnavailable {
        rule,
        pattern: name.to_string(),
    })
}

/// Empty or whitespace-only content short-circuits every checker.
pub(crate) fn is_blank(content: &str) -> bool {
    content.trim().is_empty()
}

/// Fixed registry mapping each rule to its checker implementation.
///
/// The engine only ever asks the registry; swapping or adding an
/// implementation never touches the orchestrator.
pub struct CheckerRegistry {
    checkers: BTreeMap<RuleName, Box<dyn Checker>>,
}

impl CheckerRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            checkers: BTreeMap::new(),
        }
    }

    /// Registry with the 6 default checkers tuned by `config`.
    pub fn from_config(config: &LexisConfig) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(GrammarChecker));
        registry.register(Box::new(SpellingChecker));
        registry.register(Box::new(ConsistencyChecker::new(config.consistency.clone())));
        registry.register(Box::new(FactsChecker::new(config.facts.clone())));
        registry.register(Box::new(StructureChecker::new(config.structure.clone())));
        registry.register(Box::new(ReadabilityChecker::new(config.readability.clone())));
        registry
    }

    /// Register a checker under its own rule, returning the one it replaced.
    pub fn register(&mut self, checker: Box<dyn Checker>) -> Option<Box<dyn Checker>> {
        self.checkers.insert(checker.rule(), checker)
    }

    pub fn get(&self, rule: RuleName) -> Option<&dyn Checker> {
        self.checkers.get(&rule).map(|c| c.as_ref())
    }

    /// Registered rules in canonical order.
    pub fn rules(&self) -> Vec<RuleName> {
        self.checkers.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.checkers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkers.is_empty()
    }
}

impl Default for CheckerRegistry {
    fn default() -> Self {
        Self::from_config(&LexisConfig::default())
    }
}
