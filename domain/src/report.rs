//! Aggregated conflict report

use crate::conflict::ConflictItem;
use crate::severity::Severity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Conflict counts per severity bucket.
///
/// All four buckets are always present, zero-initialized, so serialized
/// reports keep a stable shape whether or not a severity occurred.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    /// Low-severity conflicts
    pub low: usize,

    /// Medium-severity conflicts
    pub medium: usize,

    /// High-severity conflicts
    pub high: usize,

    /// Critical conflicts
    pub critical: usize,
}

impl SeverityCounts {
    /// Count the conflicts in `items` per severity.
    pub fn tally(items: &[ConflictItem]) -> Self {
        let mut counts = Self::default();
        for item in items {
            match item.severity {
                Severity::Low => counts.low += 1,
                Severity::Medium => counts.medium += 1,
                Severity::High => counts.high += 1,
                Severity::Critical => counts.critical += 1,
            }
        }
        counts
    }

    /// Count for one severity.
    pub fn get(&self, severity: Severity) -> usize {
        match severity {
            Severity::Low => self.low,
            Severity::Medium => self.medium,
            Severity::High => self.high,
            Severity::Critical => self.critical,
        }
    }

    /// Sum across all buckets.
    pub fn total(&self) -> usize {
        self.low + self.medium + self.high + self.critical
    }

    /// (severity, count) pairs in ascending severity order.
    pub fn iter(&self) -> impl Iterator<Item = (Severity, usize)> + '_ {
        Severity::ALL.into_iter().map(|s| (s, self.get(s)))
    }
}

/// Complete result of one detection run.
///
/// Conflict order is detection order: all rule conflicts before all
/// documentation conflicts. Created once per run; the only permitted
/// mutation afterwards is [`filter_by_min_severity`](Self::filter_by_min_severity).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictReport {
    /// When the detection ran (RFC 3339)
    pub timestamp: String,

    /// Project name from configuration
    pub project_name: String,

    /// Project root the run analyzed
    pub project_path: String,

    /// Number of conflicts in `conflicts`
    pub total_conflicts: usize,

    /// Severity histogram
    pub conflicts_by_severity: SeverityCounts,

    /// Category histogram (dynamic keys)
    pub conflicts_by_category: BTreeMap<String, usize>,

    /// Detected conflicts
    pub conflicts: Vec<ConflictItem>,

    /// Prioritized recommendations
    pub recommendations: Vec<String>,

    /// One-line summary classified by the worst severity present
    pub summary: String,
}

impl ConflictReport {
    /// Tally the category histogram for `items`.
    pub fn category_histogram(items: &[ConflictItem]) -> BTreeMap<String, usize> {
        let mut histogram = BTreeMap::new();
        for item in items {
            *histogram.entry(item.category.clone()).or_insert(0) += 1;
        }
        histogram
    }

    /// Worst severity present, if any conflict remains.
    pub fn worst_severity(&self) -> Option<Severity> {
        self.conflicts.iter().map(|c| c.severity).max()
    }

    /// Whether any conflict at or above `min` remains.
    pub fn has_conflicts_at_least(&self, min: Severity) -> bool {
        self.conflicts.iter().any(|c| c.severity >= min)
    }

    /// Drop conflicts below `min` and recompute both histograms and the
    /// total from the filtered list.
    ///
    /// Summary and recommendations describe the unfiltered run and are kept.
    pub fn filter_by_min_severity(&mut self, min: Severity) {
        self.conflicts.retain(|c| c.severity >= min);
        self.total_conflicts = self.conflicts.len();
        self.conflicts_by_severity = SeverityCounts::tally(&self.conflicts);
        self.conflicts_by_category = Self::category_histogram(&self.conflicts);
    }
}
