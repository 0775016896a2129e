//! Error handling for Lexis.
//! One error enum per concern, `thiserror` only.

pub mod check_error;
pub mod config_error;
pub mod error_code;

pub use check_error::CheckError;
pub use config_error::ConfigError;
pub use error_code::LexisErrorCode;

/// Top-level error aggregating subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum LexisError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Check error: {0}")]
    Check(#[from] CheckError),
}

impl LexisErrorCode for LexisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Check(e) => e.error_code(),
        }
    }
}

pub type LexisResult<T> = Result<T, LexisError>;
