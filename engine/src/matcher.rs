//! Pattern matching over rule entries and raw documentation text

use crate::catalog::Pattern;
use concord_domain::RuleEntry;
use regex::Captures;

/// Matches produced by one pattern over one application's rule entries.
#[derive(Debug, Clone, Default)]
pub struct RuleMatches {
    /// Captured values, deduplicated, in first-seen order
    pub values: Vec<String>,

    /// Entries that produced at least one value
    pub entries: Vec<RuleEntry>,
}

impl RuleMatches {
    /// Whether the pattern matched nothing.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Run one pattern over a set of rule entries.
///
/// Each entry is scanned as a single line (name plus description). The
/// captured value is the first capture group, or the whole match for a
/// pattern without groups.
pub fn match_rule_entries(pattern: &Pattern, entries: &[RuleEntry]) -> RuleMatches {
    let mut matches = RuleMatches::default();

    for entry in entries {
        let line = entry.match_line();
        let mut hit = false;
        for caps in pattern.regex.captures_iter(&line) {
            hit = true;
            let value = captured_value(&caps);
            if !matches.values.contains(&value) {
                matches.values.push(value);
            }
        }
        if hit {
            matches.entries.push(entry.clone());
        }
    }

    matches
}

/// Run one pattern over raw documentation text.
///
/// Every capture group of a match contributes to its rendered value, so
/// "timeout 30 seconds" and "timeout 30 ms" stay distinguishable when
/// documentation files are compared.
pub fn match_text(pattern: &Pattern, text: &str) -> Vec<String> {
    pattern
        .regex
        .captures_iter(text)
        .map(|caps| rendered_match(&caps))
        .collect()
}

fn captured_value(caps: &Captures<'_>) -> String {
    match caps.get(1) {
        Some(group) => group.as_str().to_string(),
        None => caps[0].to_string(),
    }
}

fn rendered_match(caps: &Captures<'_>) -> String {
    let groups: Vec<&str> = caps
        .iter()
        .skip(1)
        .flatten()
        .map(|group| group.as_str())
        .collect();
    if groups.is_empty() {
        caps[0].to_string()
    } else {
        groups.join(" ")
    }
}
