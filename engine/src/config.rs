//! Project configuration loading

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Default configuration file name at the project root.
pub const CONFIG_FILE: &str = "concord.json";

/// Project configuration (`concord.json`).
///
/// The one input whose absence or malformation aborts a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project identity
    #[serde(default)]
    pub project: ProjectInfo,

    /// Declared applications, in declaration order
    #[serde(default)]
    pub applications: Vec<ApplicationConfig>,
}

/// Project identity block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectInfo {
    /// Display name used in report headers
    #[serde(default = "default_project_name")]
    pub name: String,
}

impl Default for ProjectInfo {
    fn default() -> Self {
        Self {
            name: default_project_name(),
        }
    }
}

/// One declared application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application directory name under the project root
    pub name: String,

    /// Opaque application type metadata
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Opaque framework metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framework: Option<String>,
}

impl ProjectConfig {
    /// Load configuration from `path`.
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(EngineError::ConfigNotFound {
                    path: path.to_path_buf(),
                })
            }
            Err(e) => {
                return Err(EngineError::ConfigRead {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        };

        serde_json::from_str(&contents).map_err(|e| EngineError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

fn default_project_name() -> String {
    "Unknown Project".to_string()
}
