//! Application discovery

use crate::config::ProjectConfig;
use concord_domain::Application;
use std::path::Path;

/// Fixed rule-document name checked inside every application root.
pub const RULES_FILE: &str = "RULES.md";

/// Documentation subtree name scanned for documentation conflicts.
pub const DOCS_DIR: &str = "docs";

/// Resolve the applications participating in a run.
///
/// The project root itself participates as the implicit "root" application
/// when it carries a rule document. Configured applications participate when
/// their directory and rule document both exist; anything else is skipped
/// silently (an absent application is an expected empty result, not an
/// error).
pub fn discover_applications(project_root: &Path, config: &ProjectConfig) -> Vec<Application> {
    let mut applications = Vec::new();

    if project_root.join(RULES_FILE).is_file() {
        applications.push(Application::new(Application::ROOT_NAME, project_root));
    }

    for declared in &config.applications {
        let root = project_root.join(&declared.name);
        if root.is_dir() && root.join(RULES_FILE).is_file() {
            applications.push(Application {
                name: declared.name.clone(),
                root,
                kind: declared.kind.clone(),
                framework: declared.framework.clone(),
            });
        }
    }

    applications
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApplicationConfig;
    use std::fs;

    fn config(names: &[&str]) -> ProjectConfig {
        ProjectConfig {
            project: Default::default(),
            applications: names
                .iter()
                .map(|name| ApplicationConfig {
                    name: name.to_string(),
                    kind: None,
                    framework: None,
                })
                .collect(),
        }
    }

    #[test]
    fn test_discovers_root_and_declared_applications() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(RULES_FILE), "# Rules").unwrap();
        fs::create_dir(dir.path().join("backend")).unwrap();
        fs::write(dir.path().join("backend").join(RULES_FILE), "# Rules").unwrap();

        let apps = discover_applications(dir.path(), &config(&["backend"]));
        let names: Vec<_> = apps.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["root", "backend"]);
        assert!(apps[0].is_root());
    }

    #[test]
    fn test_skips_applications_without_rule_document() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("backend")).unwrap();
        fs::create_dir(dir.path().join("frontend")).unwrap();
        fs::write(dir.path().join("frontend").join(RULES_FILE), "# Rules").unwrap();

        let apps = discover_applications(dir.path(), &config(&["backend", "frontend", "ghost"]));
        let names: Vec<_> = apps.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["frontend"]);
    }

    #[test]
    fn test_empty_project_yields_no_applications() {
        let dir = tempfile::tempdir().unwrap();
        let apps = discover_applications(dir.path(), &config(&[]));
        assert!(apps.is_empty());
    }
}
