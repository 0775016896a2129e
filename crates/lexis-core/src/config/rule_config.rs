//! Which rules run. Explicit overrides layered over an all-enabled default.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::models::RuleName;

/// Rule enable flags.
///
/// Only explicit overrides are stored; absent rules are enabled.
/// Deserializes from any string → bool map and silently drops unknown
/// rule names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "HashMap<String, bool>", into = "BTreeMap<String, bool>")]
pub struct RuleConfiguration {
    overrides: BTreeMap<RuleName, bool>,
}

impl RuleConfiguration {
    /// Every rule enabled.
    pub fn all_enabled() -> Self {
        Self::default()
    }

    /// Every rule explicitly disabled.
    pub fn none() -> Self {
        Self {
            overrides: RuleName::all().iter().map(|r| (*r, false)).collect(),
        }
    }

    /// Build from `(name, enabled)` pairs. Unknown names are ignored.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        let overrides = pairs
            .into_iter()
            .filter_map(|(name, enabled)| name.parse::<RuleName>().ok().map(|r| (r, enabled)))
            .collect();
        Self { overrides }
    }

    /// Return a copy with one rule explicitly set.
    pub fn with(mut self, rule: RuleName, enabled: bool) -> Self {
        self.overrides.insert(rule, enabled);
        self
    }

    pub fn is_enabled(&self, rule: RuleName) -> bool {
        self.overrides.get(&rule).copied().unwrap_or(true)
    }

    /// Enabled rules in canonical order.
    pub fn enabled_rules(&self) -> Vec<RuleName> {
        RuleName::all()
            .iter()
            .copied()
            .filter(|r| self.is_enabled(*r))
            .collect()
    }

    /// Layer `other` on top of `self`; `other`'s explicit values win.
    pub fn merged_with(&self, other: &RuleConfiguration) -> RuleConfiguration {
        let mut overrides = self.overrides.clone();
        for (rule, enabled) in &other.overrides {
            overrides.insert(*rule, *enabled);
        }
        RuleConfiguration { overrides }
    }

    /// Explicit overrides only.
    pub fn overrides(&self) -> &BTreeMap<RuleName, bool> {
        &self.overrides
    }
}

impl From<HashMap<String, bool>> for RuleConfiguration {
    fn from(map: HashMap<String, bool>) -> Self {
        Self::from_pairs(map.iter().map(|(k, v)| (k.as_str(), *v)))
    }
}

impl From<RuleConfiguration> for BTreeMap<String, bool> {
    fn from(config: RuleConfiguration) -> Self {
        config
            .overrides
            .into_iter()
            .map(|(rule, enabled)| (rule.as_str().to_string(), enabled))
            .collect()
    }
}
