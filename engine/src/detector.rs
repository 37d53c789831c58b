//! Detection orchestration

use crate::aggregator;
use crate::analyzer;
use crate::config::ProjectConfig;
use crate::parser::{self, RuleSet};
use crate::registry::{self, DOCS_DIR, RULES_FILE};
use concord_domain::{Application, ConflictItem, ConflictReport};
use glob::glob;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

/// Which detection protocols to run, and over which applications.
#[derive(Debug, Clone, Default)]
pub struct DetectOptions {
    /// Skip documentation comparison
    pub rules_only: bool,

    /// Skip rule comparison
    pub docs_only: bool,

    /// Restrict detection to conflicts involving this application
    pub app: Option<String>,
}

/// A configured detection run over one project tree.
///
/// Applications are discovered once at construction and the set stays fixed
/// for the lifetime of the detector. Running [`detect`](Self::detect) twice
/// over an unchanged document set yields the same conflicts.
pub struct Detector {
    project_root: PathBuf,
    config: ProjectConfig,
    applications: Vec<Application>,
}

impl Detector {
    /// Create a detector for `project_root` using `config`.
    pub fn new(project_root: impl Into<PathBuf>, config: ProjectConfig) -> Self {
        let project_root = project_root.into();
        let applications = registry::discover_applications(&project_root, &config);
        Self {
            project_root,
            config,
            applications,
        }
    }

    /// The discovered applications.
    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    /// Run detection and aggregate the report.
    ///
    /// Rule conflicts come first in the report, documentation conflicts
    /// after, both in deterministic order.
    pub fn detect(&self, options: &DetectOptions) -> ConflictReport {
        info!(
            "Starting conflict detection for {} ({} applications)",
            self.config.project.name,
            self.applications.len()
        );

        let mut conflicts = Vec::new();

        if !options.docs_only {
            conflicts.extend(self.rule_conflicts(options));
        }
        if !options.rules_only {
            conflicts.extend(self.doc_conflicts(options));
        }

        aggregator::build_report(
            &self.config.project.name,
            &self.project_root.display().to_string(),
            conflicts,
        )
    }

    fn rule_conflicts(&self, options: &DetectOptions) -> Vec<ConflictItem> {
        let mut parsed: Vec<(&Application, RuleSet)> = Vec::new();
        for app in &self.applications {
            let path = app.root.join(RULES_FILE);
            let text = match fs::read_to_string(&path) {
                Ok(text) => text,
                Err(e) => {
                    warn!("Could not read rule document {}: {}", path.display(), e);
                    continue;
                }
            };
            let rules = parser::parse_rule_document(&text);
            if rules.is_empty() {
                warn!("Rule document {} has no rule sections", path.display());
            }
            parsed.push((app, rules));
        }

        let mut conflicts = Vec::new();
        for (i, (app_a, rules_a)) in parsed.iter().enumerate() {
            for (app_b, rules_b) in &parsed[i + 1..] {
                if let Some(only) = &options.app {
                    if app_a.name != *only && app_b.name != *only {
                        continue;
                    }
                }
                conflicts.extend(analyzer::compare_rule_sets(app_a, rules_a, app_b, rules_b));
            }
        }
        conflicts
    }

    fn doc_conflicts(&self, options: &DetectOptions) -> Vec<ConflictItem> {
        let mut conflicts = Vec::new();
        for app in &self.applications {
            // The root application has no docs subtree to compare.
            if app.is_root() {
                continue;
            }
            if let Some(only) = &options.app {
                if app.name != *only {
                    continue;
                }
            }
            conflicts.extend(self.app_doc_conflicts(app));
        }
        conflicts
    }

    fn app_doc_conflicts(&self, app: &Application) -> Vec<ConflictItem> {
        let docs_dir = app.root.join(DOCS_DIR);
        if !docs_dir.is_dir() {
            return Vec::new();
        }

        let pattern = format!("{}/**/*.md", docs_dir.display());
        let entries = match glob(&pattern) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Invalid documentation glob {}: {}", pattern, e);
                return Vec::new();
            }
        };

        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| match entry {
                Ok(path) => Some(path),
                Err(e) => {
                    warn!("Skipping unreadable documentation entry: {}", e);
                    None
                }
            })
            .filter(|path| path.is_file())
            .collect();
        files.sort();

        let mut documents: Vec<(String, String)> = Vec::new();
        for path in &files {
            match fs::read_to_string(path) {
                Ok(text) => {
                    let relative = path.strip_prefix(&self.project_root).unwrap_or(path);
                    documents.push((relative.display().to_string(), text));
                }
                Err(e) => {
                    warn!("Could not read documentation file {}: {}", path.display(), e);
                }
            }
        }

        let mut conflicts = Vec::new();
        for (i, (file_a, text_a)) in documents.iter().enumerate() {
            for (file_b, text_b) in &documents[i + 1..] {
                conflicts.extend(analyzer::compare_documentation_files(
                    app, file_a, text_a, file_b, text_b,
                ));
            }
        }
        conflicts
    }
}
