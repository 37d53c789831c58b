//! End-to-end detection tests over temporary project trees.

use concord_domain::{ConflictKind, Severity};
use concord_engine::{CONFIG_FILE, DetectOptions, Detector, EngineError, ProjectConfig, RULES_FILE};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_config(root: &Path, apps: &[&str]) -> anyhow::Result<()> {
    let applications: Vec<String> = apps
        .iter()
        .map(|name| format!("{{ \"name\": \"{}\" }}", name))
        .collect();
    fs::write(
        root.join(CONFIG_FILE),
        format!(
            "{{ \"project\": {{ \"name\": \"shop\" }}, \"applications\": [{}] }}",
            applications.join(", ")
        ),
    )?;
    Ok(())
}

fn write_rules(root: &Path, app: &str, contents: &str) -> anyhow::Result<()> {
    let dir = root.join(app);
    fs::create_dir_all(&dir)?;
    fs::write(dir.join(RULES_FILE), contents)?;
    Ok(())
}

fn write_doc(root: &Path, app: &str, name: &str, contents: &str) -> anyhow::Result<()> {
    let dir = root.join(app).join("docs");
    fs::create_dir_all(&dir)?;
    fs::write(dir.join(name), contents)?;
    Ok(())
}

fn detector(root: &Path) -> anyhow::Result<Detector> {
    let config = ProjectConfig::load(&root.join(CONFIG_FILE))?;
    Ok(Detector::new(root, config))
}

#[test]
fn scenario_a_jwt_expiration_mismatch_is_critical() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    write_config(dir.path(), &["backend", "frontend"])?;
    write_rules(
        dir.path(),
        "backend",
        "## Security Rules\n- **JWT Expiration**: Tokens expire after 24 hours\n",
    )?;
    write_rules(
        dir.path(),
        "frontend",
        "## Security Rules\n- **JWT Expiration**: Tokens expire after 1 hour\n",
    )?;

    let report = detector(dir.path())?.detect(&DetectOptions::default());

    assert_eq!(report.total_conflicts, 1);
    let conflict = &report.conflicts[0];
    assert_eq!(conflict.kind(), ConflictKind::RuleConflict);
    assert_eq!(conflict.severity, Severity::Critical);
    assert_eq!(conflict.category, "security");

    let payload = serde_json::to_string(conflict)?;
    assert!(payload.contains("24"));
    assert!(payload.contains("\"1\""));
    Ok(())
}

#[test]
fn scenario_b_port_mismatch_across_docs_is_medium() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    write_config(dir.path(), &["backend"])?;
    write_rules(dir.path(), "backend", "## Performance Rules\n")?;
    write_doc(
        dir.path(),
        "backend",
        "deployment.md",
        "The service listens on port 8000.\n",
    )?;
    write_doc(
        dir.path(),
        "backend",
        "api.md",
        "Clients connect to port 8001.\n",
    )?;

    let report = detector(dir.path())?.detect(&DetectOptions::default());

    assert!(!report.conflicts.is_empty());
    for conflict in &report.conflicts {
        assert_eq!(conflict.kind(), ConflictKind::DocConflict);
        assert_eq!(conflict.severity, Severity::Medium);
    }
    // The port pattern is a member of two catalog categories, so the same
    // disagreement is surfaced once per category.
    let mut categories: Vec<_> = report
        .conflicts
        .iter()
        .map(|c| c.category.as_str())
        .collect();
    categories.sort_unstable();
    assert_eq!(categories, vec!["architecture", "implementation"]);
    Ok(())
}

#[test]
fn scenario_c_identical_declarations_are_silent() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    write_config(dir.path(), &["backend", "frontend"])?;
    let rules = "## Performance Rules\n- **Memory Limit**: Containers use a memory limit of 512MB\n";
    write_rules(dir.path(), "backend", rules)?;
    write_rules(dir.path(), "frontend", rules)?;

    let report = detector(dir.path())?.detect(&DetectOptions::default());
    assert_eq!(report.total_conflicts, 0);
    assert!(report.summary.starts_with("No conflicts detected"));
    Ok(())
}

#[test]
fn scenario_d_missing_config_is_fatal() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let result = ProjectConfig::load(&dir.path().join(CONFIG_FILE));
    assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
    Ok(())
}

#[test]
fn rule_conflicts_precede_doc_conflicts() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    write_config(dir.path(), &["backend", "frontend"])?;
    write_rules(
        dir.path(),
        "backend",
        "## Performance Rules\n- **API Timeout**: finish within 30 seconds\n",
    )?;
    write_rules(
        dir.path(),
        "frontend",
        "## Performance Rules\n- **API Timeout**: finish within 60 seconds\n",
    )?;
    write_doc(dir.path(), "backend", "a.md", "listens on port 8000\n")?;
    write_doc(dir.path(), "backend", "b.md", "listens on port 8001\n")?;

    let report = detector(dir.path())?.detect(&DetectOptions::default());

    let kinds: Vec<_> = report.conflicts.iter().map(|c| c.kind()).collect();
    let first_doc = kinds
        .iter()
        .position(|k| *k == ConflictKind::DocConflict)
        .unwrap();
    assert!(kinds[..first_doc]
        .iter()
        .all(|k| *k == ConflictKind::RuleConflict));
    assert!(kinds[first_doc..]
        .iter()
        .all(|k| *k == ConflictKind::DocConflict));
    Ok(())
}

#[test]
fn detection_is_idempotent() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    write_config(dir.path(), &["backend", "frontend"])?;
    write_rules(
        dir.path(),
        "backend",
        "## Security Rules\n- **Session**: session timeout of 15 minutes\n",
    )?;
    write_rules(
        dir.path(),
        "frontend",
        "## Security Rules\n- **Session**: session timeout of 30 minutes\n",
    )?;

    let detector = detector(dir.path())?;
    let first = detector.detect(&DetectOptions::default());
    let second = detector.detect(&DetectOptions::default());

    assert_eq!(first.total_conflicts, second.total_conflicts);
    assert_eq!(first.conflicts_by_severity, second.conflicts_by_severity);
    assert_eq!(first.conflicts_by_category, second.conflicts_by_category);
    assert_eq!(
        first.conflicts.iter().map(|c| &c.id).collect::<Vec<_>>(),
        second.conflicts.iter().map(|c| &c.id).collect::<Vec<_>>()
    );
    Ok(())
}

#[test]
fn rules_only_skips_documentation() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    write_config(dir.path(), &["backend"])?;
    write_rules(dir.path(), "backend", "## Performance Rules\n")?;
    write_doc(dir.path(), "backend", "a.md", "port 8000\n")?;
    write_doc(dir.path(), "backend", "b.md", "port 8001\n")?;

    let options = DetectOptions {
        rules_only: true,
        ..Default::default()
    };
    let report = detector(dir.path())?.detect(&options);
    assert_eq!(report.total_conflicts, 0);
    Ok(())
}

#[test]
fn app_filter_restricts_comparisons() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    write_config(dir.path(), &["backend", "frontend", "worker"])?;
    write_rules(
        dir.path(),
        "backend",
        "## Performance Rules\n- **API Timeout**: finish within 30 seconds\n",
    )?;
    write_rules(
        dir.path(),
        "frontend",
        "## Performance Rules\n- **API Timeout**: finish within 60 seconds\n",
    )?;
    write_rules(
        dir.path(),
        "worker",
        "## Performance Rules\n- **API Timeout**: finish within 90 seconds\n",
    )?;

    let options = DetectOptions {
        app: Some("worker".to_string()),
        ..Default::default()
    };
    let report = detector(dir.path())?.detect(&options);

    // backend vs frontend is excluded; both pairs involving worker remain.
    assert_eq!(report.total_conflicts, 2);
    for conflict in &report.conflicts {
        assert!(conflict.applications().contains(&"worker"));
    }
    Ok(())
}

#[test]
fn zero_section_document_contributes_nothing() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    write_config(dir.path(), &["backend", "frontend"])?;
    write_rules(
        dir.path(),
        "backend",
        "## Performance Rules\n- **API Timeout**: finish within 30 seconds\n",
    )?;
    write_rules(dir.path(), "frontend", "plain prose, no sections")?;

    let report = detector(dir.path())?.detect(&DetectOptions::default());
    assert_eq!(report.total_conflicts, 0);
    Ok(())
}
