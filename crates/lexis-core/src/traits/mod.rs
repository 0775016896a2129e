//! Seams between the engine and pluggable behavior.

pub mod cancellation;
pub mod checker;

pub use cancellation::{Cancellable, CancellationToken, DeadlineToken};
pub use checker::{CheckContext, Checker};
