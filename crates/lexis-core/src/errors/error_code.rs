//! Stable error codes for callers that surface errors across a boundary.

/// Every error enum implements this to expose a structured code string.
pub trait LexisErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CHECK_ERROR: &str = "CHECK_ERROR";
