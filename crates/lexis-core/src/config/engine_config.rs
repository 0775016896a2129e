use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Orchestrator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Run enabled checkers on the rayon pool.
    pub parallel: bool,
    /// Overall deadline for a validation call (milliseconds).
    /// Only the term-variant scan observes it.
    pub deadline_ms: Option<u64>,
}

impl EngineConfig {
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline_ms.map(Duration::from_millis)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            parallel: defaults::DEFAULT_PARALLEL,
            deadline_ms: None,
        }
    }
}
