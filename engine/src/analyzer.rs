//! Conflict analysis
//!
//! Two comparison protocols share the same core decision: collect both
//! sides' matches for one pattern, and emit a conflict only when both sides
//! are non-empty and their value sets differ. Equal sets are agreement and
//! stay silent.

use crate::catalog::{Pattern, catalog};
use crate::matcher::{self, RuleMatches};
use crate::parser::RuleSet;
use concord_domain::{
    Application, ConflictDetails, ConflictId, ConflictItem, ConflictKind, DocSource, RuleSource,
    Severity, category_matches,
};
use std::collections::BTreeSet;
use std::path::Path;

/// Manual remediation document referenced by every resolution suggestion.
pub const MANAGE_RULES_FILE: &str = "MANAGE_RULES.md";

const CRITICAL_CATEGORIES: [&str; 2] = ["security", "safety"];
const HIGH_IMPACT_SUBSTRINGS: [&str; 5] = ["port", "ssl", "jwt", "password", "timeout"];

/// Compare two applications' rule sets and collect rule conflicts.
///
/// For every category both applications declare, every catalog pattern whose
/// key matches the category runs over both sides. Non-empty, unequal value
/// sets produce exactly one conflict per (category, pattern).
pub fn compare_rule_sets(
    app_a: &Application,
    rules_a: &RuleSet,
    app_b: &Application,
    rules_b: &RuleSet,
) -> Vec<ConflictItem> {
    let mut conflicts = Vec::new();

    for (category, entries_a) in rules_a {
        let Some(entries_b) = rules_b.get(category) else {
            continue;
        };

        for block in catalog() {
            if !category_matches(category, block.key) {
                continue;
            }
            for pattern in &block.patterns {
                let matches_a = matcher::match_rule_entries(pattern, entries_a);
                let matches_b = matcher::match_rule_entries(pattern, entries_b);
                if matches_a.is_empty() || matches_b.is_empty() {
                    continue;
                }
                if value_set(&matches_a.values) == value_set(&matches_b.values) {
                    continue;
                }
                conflicts.push(rule_conflict(
                    app_a, matches_a, app_b, matches_b, category, pattern,
                ));
            }
        }
    }

    conflicts
}

/// Compare two documentation files of one application and collect conflicts.
///
/// Every catalog pattern runs over both raw texts. Documentation conflicts
/// are always medium severity regardless of category.
pub fn compare_documentation_files(
    app: &Application,
    file_a: &str,
    text_a: &str,
    file_b: &str,
    text_b: &str,
) -> Vec<ConflictItem> {
    let mut conflicts = Vec::new();

    for block in catalog() {
        for pattern in &block.patterns {
            let matches_a = matcher::match_text(pattern, text_a);
            let matches_b = matcher::match_text(pattern, text_b);
            if matches_a.is_empty() || matches_b.is_empty() {
                continue;
            }
            if value_set(&matches_a) == value_set(&matches_b) {
                continue;
            }
            conflicts.push(doc_conflict(
                app, file_a, &matches_a, file_b, &matches_b, block.key, pattern,
            ));
        }
    }

    conflicts
}

/// Classify a rule conflict's severity from its category alone.
///
/// The high-impact substring check runs before the exact performance check,
/// so a category like "performance_timeout" classifies as high, not medium.
pub fn classify_severity(category: &str) -> Severity {
    if CRITICAL_CATEGORIES.contains(&category) {
        return Severity::Critical;
    }
    if HIGH_IMPACT_SUBSTRINGS
        .iter()
        .any(|needle| category.contains(needle))
    {
        return Severity::High;
    }
    if category == "performance" {
        return Severity::Medium;
    }
    Severity::Low
}

fn rule_conflict(
    app_a: &Application,
    matches_a: RuleMatches,
    app_b: &Application,
    matches_b: RuleMatches,
    category: &str,
    pattern: &Pattern,
) -> ConflictItem {
    let resolution = resolution_suggestion(
        category,
        &app_a.name,
        &matches_a.values,
        &app_b.name,
        &matches_b.values,
    );
    let remediation = remediation_command(
        category,
        &app_a.name,
        &matches_a.values,
        &app_b.name,
        &matches_b.values,
    );

    ConflictItem {
        id: ConflictId::new(
            ConflictKind::RuleConflict,
            category,
            [&app_a.name, &app_b.name],
            pattern.index,
        ),
        details: ConflictDetails::RuleConflict {
            sources: [
                RuleSource {
                    application: app_a.name.clone(),
                    values: matches_a.values,
                    rules: matches_a.entries,
                },
                RuleSource {
                    application: app_b.name.clone(),
                    values: matches_b.values,
                    rules: matches_b.entries,
                },
            ],
        },
        category: category.to_string(),
        severity: classify_severity(category),
        title: format!(
            "{} Configuration Conflict: {} vs {}",
            title_case(category),
            app_a.name,
            app_b.name
        ),
        description: format!(
            "Different {} configurations detected between {} and {}",
            category, app_a.name, app_b.name
        ),
        resolution_suggestion: resolution,
        remediation_command: remediation,
    }
}

#[allow(clippy::too_many_arguments)]
fn doc_conflict(
    app: &Application,
    file_a: &str,
    matches_a: &[String],
    file_b: &str,
    matches_b: &[String],
    category: &str,
    pattern: &Pattern,
) -> ConflictItem {
    let name_a = file_name(file_a);
    let name_b = file_name(file_b);

    ConflictItem {
        id: ConflictId::new(
            ConflictKind::DocConflict,
            category,
            [file_a, file_b],
            pattern.index,
        ),
        details: ConflictDetails::DocConflict {
            application: app.name.clone(),
            sources: [
                DocSource {
                    file: file_a.to_string(),
                    values: matches_a.to_vec(),
                },
                DocSource {
                    file: file_b.to_string(),
                    values: matches_b.to_vec(),
                },
            ],
        },
        category: category.to_string(),
        severity: Severity::Medium,
        title: format!(
            "Documentation Conflict in {}: {} vs {}",
            app.name, name_a, name_b
        ),
        description: format!(
            "Conflicting {} information found in documentation files",
            category
        ),
        resolution_suggestion: format!(
            "Review {} configurations in {} and {}. \
             Ensure consistent values across all documentation.",
            category, name_a, name_b
        ),
        remediation_command: format!(
            "Update {} {} documentation: Standardize conflicting values between {} and {}",
            app.name, category, name_a, name_b
        ),
    }
}

fn resolution_suggestion(
    category: &str,
    app_a: &str,
    values_a: &[String],
    app_b: &str,
    values_b: &[String],
) -> String {
    let base = match category {
        "performance" => {
            "Standardize performance settings. Consider using the more restrictive value \
             for consistency."
                .to_string()
        }
        "security" => format!(
            "Use the most secure configuration. Review security requirements for both {} and {}.",
            app_a, app_b
        ),
        "implementation" => {
            "Choose one implementation approach and apply consistently across both applications."
                .to_string()
        }
        "architecture" => {
            "Ensure unique values where required (e.g., ports) or standardize where appropriate."
                .to_string()
        }
        _ => "Review and standardize the conflicting configurations.".to_string(),
    };

    format!(
        "{}\nCurrent values: {}: {:?}, {}: {:?}\nUse {} to update the conflicting rules.",
        base, app_a, values_a, app_b, values_b, MANAGE_RULES_FILE
    )
}

fn remediation_command(
    category: &str,
    app_a: &str,
    values_a: &[String],
    app_b: &str,
    values_b: &[String],
) -> String {
    // Root takes priority as the remediation target when it participates.
    let target = if app_a == Application::ROOT_NAME || app_b == Application::ROOT_NAME {
        Application::ROOT_NAME
    } else {
        app_a
    };

    if category == "security" || category == "performance" {
        format!(
            "Update {} {} rule: Standardize conflicting values from {} ({:?}) and {} ({:?})",
            target, category, app_a, values_a, app_b, values_b
        )
    } else {
        format!(
            "Add {} rule to {}: Standardize implementation between {} and {}",
            category, target, app_a, app_b
        )
    }
}

fn value_set(values: &[String]) -> BTreeSet<&str> {
    values.iter().map(String::as_str).collect()
}

fn file_name(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}

fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
