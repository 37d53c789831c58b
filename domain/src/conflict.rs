//! Conflict records - tagged payloads with deterministic identity
//!
//! A conflict is two sources asserting different, non-empty values for the
//! same recognized configurable fact. The payload is a closed tagged set
//! (`rule_conflict` | `doc_conflict`) over a shared base record, not a
//! free-form map, and the identity is a deterministic composite key so the
//! same document set always yields the same ids across runs.

use crate::rule::RuleEntry;
use crate::severity::Severity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminant for the two comparison protocols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    /// Rule documents of two applications disagree
    RuleConflict,

    /// Two documentation files within one application disagree
    DocConflict,
}

impl ConflictKind {
    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ConflictKind::RuleConflict => "rule_conflict",
            ConflictKind::DocConflict => "doc_conflict",
        }
    }
}

impl fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deterministic conflict identity.
///
/// Built from the kind, the discovered category, the two source identifiers
/// (sorted, so identity does not depend on comparison order) and the
/// pattern's stable position in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConflictId(String);

impl ConflictId {
    /// Build an id from its components.
    pub fn new(
        kind: ConflictKind,
        category: &str,
        sources: [&str; 2],
        pattern_index: usize,
    ) -> Self {
        let (first, second) = if sources[0] <= sources[1] {
            (sources[0], sources[1])
        } else {
            (sources[1], sources[0])
        };
        Self(format!(
            "{}:{}:{}:{}:p{}",
            kind.as_str(),
            category,
            first,
            second,
            pattern_index
        ))
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConflictId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One application's side of a rule conflict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSource {
    /// Application name
    pub application: String,

    /// Captured values, deduplicated, in first-seen order
    pub values: Vec<String>,

    /// Rule entries that produced the values
    pub rules: Vec<RuleEntry>,
}

/// One file's side of a documentation conflict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocSource {
    /// Documentation file path, relative to the project root
    pub file: String,

    /// Raw pattern matches, in document order
    pub values: Vec<String>,
}

/// Kind-specific conflict payload, carrying the explicit `type` discriminant
/// in serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConflictDetails {
    /// Two applications' rule sets disagree
    RuleConflict {
        /// The two participating applications, in comparison order
        sources: [RuleSource; 2],
    },

    /// Two documentation files of one application disagree
    DocConflict {
        /// Owning application name
        application: String,

        /// The two participating files, in comparison order
        sources: [DocSource; 2],
    },
}

/// A single detected conflict. Immutable once created.
///
/// Always references two distinct sources with non-empty, unequal value sets
/// for the same category and pattern; agreement never produces an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictItem {
    /// Deterministic identity
    pub id: ConflictId,

    /// Kind-specific payload with the `type` discriminant
    #[serde(flatten)]
    pub details: ConflictDetails,

    /// Discovered category the conflict was found under
    pub category: String,

    /// Classified severity
    pub severity: Severity,

    /// Human-readable title
    pub title: String,

    /// Human-readable description
    pub description: String,

    /// Templated resolution suggestion
    pub resolution_suggestion: String,

    /// Command for the rule-management workflow
    pub remediation_command: String,
}

impl ConflictItem {
    /// The conflict kind discriminant.
    pub fn kind(&self) -> ConflictKind {
        match self.details {
            ConflictDetails::RuleConflict { .. } => ConflictKind::RuleConflict,
            ConflictDetails::DocConflict { .. } => ConflictKind::DocConflict,
        }
    }

    /// Names of the applications participating in this conflict.
    pub fn applications(&self) -> Vec<&str> {
        match &self.details {
            ConflictDetails::RuleConflict { sources } => {
                sources.iter().map(|s| s.application.as_str()).collect()
            }
            ConflictDetails::DocConflict { application, .. } => vec![application.as_str()],
        }
    }

    /// Identifiers of the two conflicting sources: application names for
    /// rule conflicts, file paths for documentation conflicts.
    pub fn source_ids(&self) -> [&str; 2] {
        match &self.details {
            ConflictDetails::RuleConflict { sources } => [
                sources[0].application.as_str(),
                sources[1].application.as_str(),
            ],
            ConflictDetails::DocConflict { sources, .. } => {
                [sources[0].file.as_str(), sources[1].file.as_str()]
            }
        }
    }
}
