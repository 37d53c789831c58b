//! Report aggregation

use crate::analyzer::MANAGE_RULES_FILE;
use chrono::Utc;
use concord_domain::{ConflictItem, ConflictReport, Severity, SeverityCounts};
use std::collections::BTreeSet;

/// Build the full report for a finished detection pass.
///
/// Conflict order is preserved: callers append all rule conflicts before all
/// documentation conflicts.
pub fn build_report(
    project_name: &str,
    project_path: &str,
    conflicts: Vec<ConflictItem>,
) -> ConflictReport {
    let conflicts_by_severity = SeverityCounts::tally(&conflicts);
    let conflicts_by_category = ConflictReport::category_histogram(&conflicts);
    let recommendations = recommendations(&conflicts);
    let summary = summary(&conflicts, &conflicts_by_severity);

    ConflictReport {
        timestamp: Utc::now().to_rfc3339(),
        project_name: project_name.to_string(),
        project_path: project_path.to_string(),
        total_conflicts: conflicts.len(),
        conflicts_by_severity,
        conflicts_by_category,
        conflicts,
        recommendations,
        summary,
    }
}

fn summary(conflicts: &[ConflictItem], counts: &SeverityCounts) -> String {
    if conflicts.is_empty() {
        "No conflicts detected! Your documentation system is consistent.".to_string()
    } else if counts.critical > 0 {
        format!(
            "CRITICAL: {} critical conflicts require immediate attention!",
            counts.critical
        )
    } else if counts.high > 0 {
        format!("HIGH: {} high-priority conflicts found.", counts.high)
    } else {
        format!("{} minor conflicts detected.", conflicts.len())
    }
}

fn recommendations(conflicts: &[ConflictItem]) -> Vec<String> {
    if conflicts.is_empty() {
        return vec!["Your documentation system is well-maintained!".to_string()];
    }

    let mut recommendations = vec![
        format!(
            "Use {} to resolve rule conflicts systematically.",
            MANAGE_RULES_FILE
        ),
        "Run conflict detection regularly to prevent issues.".to_string(),
    ];

    let critical = conflicts
        .iter()
        .filter(|c| c.severity == Severity::Critical)
        .count();
    let high = conflicts
        .iter()
        .filter(|c| c.severity == Severity::High)
        .count();

    if critical > 0 {
        recommendations.push(format!(
            "Address {} critical conflicts immediately!",
            critical
        ));
    }
    if high > 0 {
        recommendations.push(format!(
            "Prioritize resolving {} high-priority conflicts.",
            high
        ));
    }

    let categories: BTreeSet<&str> = conflicts.iter().map(|c| c.category.as_str()).collect();
    if categories.contains("security") {
        recommendations.push(
            "Security conflicts detected - review authentication and authorization rules."
                .to_string(),
        );
    }
    if categories.contains("performance") {
        recommendations.push(
            "Performance conflicts found - standardize timeout and resource settings.".to_string(),
        );
    }
    if categories.contains("implementation") {
        recommendations.push(
            "Implementation conflicts detected - choose consistent coding standards.".to_string(),
        );
    }

    recommendations
}
