//! Observability for Lexis.
//! `tracing` crate with `EnvFilter`, per-target log levels.

pub mod setup;

pub use setup::init_tracing;

/// Span names as constants for programmatic use.
pub mod names {
    pub const VALIDATION: &str = "lexis.validation";
    pub const CHECK: &str = "lexis.check";
}
