/// Lowest score a report can carry.
pub const SCORE_MIN: u8 = 0;

/// Highest score a report can carry.
pub const SCORE_MAX: u8 = 100;

/// Earliest year the facts checker treats as a reference year.
pub const REFERENCE_YEAR_MIN: i32 = 1900;

/// Latest year the facts checker treats as a reference year.
pub const REFERENCE_YEAR_MAX: i32 = 2099;

/// Default tracing filter when `LEXIS_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "lexis=info";

/// Environment variable read by `tracing::init_tracing`.
pub const LOG_ENV_VAR: &str = "LEXIS_LOG";
