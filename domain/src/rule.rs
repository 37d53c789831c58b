//! Rule entries extracted from rule documents

use serde::{Deserialize, Serialize};

/// A single named rule extracted from one bullet of a rule document.
///
/// Entries are immutable once parsed and travel into conflict payloads so a
/// reported conflict can be traced back to the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleEntry {
    /// Bold label of the bullet
    pub name: String,

    /// Free text following the label
    pub description: String,
}

impl RuleEntry {
    /// Create a new rule entry.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// The single line the pattern matcher scans: name and description
    /// joined by a space.
    pub fn match_line(&self) -> String {
        format!("{} {}", self.name, self.description)
    }
}
