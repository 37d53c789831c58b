//! Pattern catalog
//!
//! A fixed table of category → configuration-value patterns, compiled once
//! on first use. Patterns are intentionally loose: a fuzzy keyword plus a
//! numeric or enumerated capture. The goal is conflict surfacing for human
//! review, not exact parsing, so false positives are acceptable.
//!
//! Catalog keys are independent of the categories discovered in documents;
//! `category_matches` in the domain crate bridges the two by substring
//! containment.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// One catalog pattern.
#[derive(Debug)]
pub struct Pattern {
    /// Stable position across the whole catalog, part of conflict identity
    pub index: usize,

    /// Compiled case-insensitive expression whose first capture group is the
    /// configurable value
    pub regex: Regex,
}

/// All patterns for one catalog category.
#[derive(Debug)]
pub struct CategoryPatterns {
    /// Catalog key matched against discovered categories
    pub key: &'static str,

    /// Ordered patterns
    pub patterns: Vec<Pattern>,
}

const PERFORMANCE: &[&str] = &[
    r"timeout.*?(\d+).*?(second|minute|ms)",
    r"response.*?time.*?(\d+).*?(ms|second)",
    r"memory.*?limit.*?(\d+).*?(mb|gb)",
    r"max.*?connections.*?(\d+)",
    r"cache.*?ttl.*?(\d+)",
];

const SECURITY: &[&str] = &[
    r"jwt.*?expir.*?(\d+).*?(hour|minute|day)",
    r"password.*?length.*?(\d+)",
    r"ssl.*?version.*?(1\.\d|2\.\d|3\.\d)",
    r"rate.*?limit.*?(\d+)",
    r"session.*?timeout.*?(\d+)",
];

const IMPLEMENTATION: &[&str] = &[
    r"use.*?(css grid|flexbox)",
    r"database.*?(postgres|mysql|sqlite)",
    r"framework.*?(django|fastapi|flask)",
    r"port.*?(\d{4,5})",
    r"coding.*?style.*?(pep8|google|airbnb)",
];

const ARCHITECTURE: &[&str] = &[
    r"port.*?(\d{4,5})",
    r"container.*?name.*?([a-zA-Z0-9\-_]+)",
    r"network.*?([a-zA-Z0-9\-_]+)",
    r"volume.*?([a-zA-Z0-9\-_/]+)",
    r"environment.*?([A-Z_]+)",
];

static CATALOG: Lazy<Vec<CategoryPatterns>> = Lazy::new(|| {
    let blocks = [
        ("performance", PERFORMANCE),
        ("security", SECURITY),
        ("implementation", IMPLEMENTATION),
        ("architecture", ARCHITECTURE),
    ];

    let mut next_index = 0;
    blocks
        .into_iter()
        .map(|(key, sources)| CategoryPatterns {
            key,
            patterns: sources
                .iter()
                .map(|source| {
                    let pattern = Pattern {
                        index: next_index,
                        regex: compile(source),
                    };
                    next_index += 1;
                    pattern
                })
                .collect(),
        })
        .collect()
});

/// The process-wide catalog.
pub fn catalog() -> &'static [CategoryPatterns] {
    &CATALOG
}

fn compile(source: &str) -> Regex {
    RegexBuilder::new(source)
        .case_insensitive(true)
        .build()
        .expect("catalog pattern must compile")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 4);
        for block in catalog {
            assert_eq!(block.patterns.len(), 5);
        }
    }

    #[test]
    fn test_pattern_indices_are_globally_unique() {
        let mut indices: Vec<usize> = catalog()
            .iter()
            .flat_map(|block| block.patterns.iter().map(|p| p.index))
            .collect();
        indices.sort_unstable();
        assert_eq!(indices, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_timeout_pattern_captures_value() {
        let performance = &catalog()[0];
        let caps = performance.patterns[0]
            .regex
            .captures("API Timeout All requests must complete within 30 seconds")
            .unwrap();
        assert_eq!(&caps[1], "30");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let security = &catalog()[1];
        assert!(security.patterns[0]
            .regex
            .is_match("JWT EXPIRATION: tokens expire after 24 hours"));
    }

    #[test]
    fn test_port_pattern_requires_four_digits() {
        let architecture = &catalog()[3];
        let port = &architecture.patterns[0];
        assert!(port.regex.is_match("The service listens on port 8080"));
        assert!(!port.regex.is_match("port 80"));
    }
}
