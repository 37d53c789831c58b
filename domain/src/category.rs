//! Category matching between discovered section labels and catalog keys

/// Decide whether a discovered document category selects a catalog key.
///
/// Matching is deliberately permissive: exact equality or substring
/// containment in either direction, so a section titled
/// "Custom Performance Rules" (discovered category "custom performance")
/// still selects the catalog's "performance" patterns. Both inputs are
/// expected to be lower-cased already.
pub fn category_matches(discovered: &str, catalog_key: &str) -> bool {
    discovered == catalog_key
        || discovered.contains(catalog_key)
        || catalog_key.contains(discovered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert!(category_matches("performance", "performance"));
    }

    #[test]
    fn test_discovered_contains_key() {
        assert!(category_matches("custom performance", "performance"));
        assert!(category_matches("api security", "security"));
    }

    #[test]
    fn test_key_contains_discovered() {
        assert!(category_matches("perf", "performance"));
    }

    #[test]
    fn test_unrelated_categories() {
        assert!(!category_matches("deployment", "performance"));
        assert!(!category_matches("security", "performance"));
    }
}
