//! Application identity within a project

use std::path::PathBuf;

/// An application participating in a project.
///
/// Discovered once per run from configuration plus filesystem existence
/// checks; immutable thereafter. `kind` and `framework` are opaque metadata
/// carried through from configuration and never interpreted by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    /// Unique name within the project (`"root"` for the project root itself)
    pub name: String,

    /// Filesystem root of the application
    pub root: PathBuf,

    /// Declared application type, if configured
    pub kind: Option<String>,

    /// Declared framework, if configured
    pub framework: Option<String>,
}

impl Application {
    /// Name of the implicit application representing the project root.
    pub const ROOT_NAME: &'static str = "root";

    /// Create an application with no declared metadata.
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
            kind: None,
            framework: None,
        }
    }

    /// Whether this is the implicit root application.
    ///
    /// The root application has no `docs` subtree and is excluded from
    /// documentation comparison.
    pub fn is_root(&self) -> bool {
        self.name == Self::ROOT_NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_detection() {
        let root = Application::new(Application::ROOT_NAME, "/project");
        let app = Application::new("backend", "/project/backend");
        assert!(root.is_root());
        assert!(!app.is_root());
    }
}
