//! Rule document parsing
//!
//! Rule documents group bullet rules under headings whose text ends in
//! "Rule" or "Rules", e.g.
//!
//! ```text
//! ## Performance Rules
//! - **API Timeout**: All requests must complete within 30 seconds
//! ```
//!
//! Section labels become lower-cased categories. Bullets that do not match
//! the `- **name**: description` shape are dropped without complaint.

use concord_domain::RuleEntry;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use std::collections::BTreeMap;

/// Rules grouped by normalized category, ordered by category name.
pub type RuleSet = BTreeMap<String, Vec<RuleEntry>>;

static RULE_HEADING: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"^##+\s*(.*?)\s*rules?\s*$")
        .case_insensitive(true)
        .build()
        .expect("heading pattern must compile")
});

static BULLET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-\s*\*\*([^*]+)\*\*[:\s]*(.+)").expect("bullet pattern must compile"));

/// Parse rule-document text into rules grouped by category.
///
/// A heading that does not end in "Rule"/"Rules" (or carries no label at
/// all) closes the current section without opening a new one. A rule
/// section with no matching bullets still registers an empty category. An
/// empty map means the document carried no rule sections at all.
pub fn parse_rule_document(text: &str) -> RuleSet {
    let mut rules: RuleSet = BTreeMap::new();
    let mut current: Option<String> = None;

    for line in text.lines() {
        if let Some(caps) = RULE_HEADING.captures(line) {
            let category = caps[1].trim().to_lowercase();
            if !category.is_empty() {
                rules.entry(category.clone()).or_default();
                current = Some(category);
                continue;
            }
        }
        if line.starts_with("##") {
            current = None;
            continue;
        }
        if let Some(category) = &current {
            if let Some(caps) = BULLET.captures(line) {
                if let Some(entries) = rules.get_mut(category) {
                    entries.push(RuleEntry::new(caps[1].trim(), caps[2].trim()));
                }
            }
        }
    }

    rules
}
