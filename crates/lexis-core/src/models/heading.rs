use serde::{Deserialize, Serialize};

/// A markdown heading extracted from content. Transient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingEntry {
    /// 1..=6
    pub level: u8,
    pub text: String,
}
