//! User settings loaded from TOML settings files

use crate::error::Result;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-level settings file names checked in the working directory.
const PROJECT_SETTINGS_FILES: [&str; 2] = ["concord.toml", ".concord.toml"];

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Console report
    Console,
    /// JSON file export
    Json,
    /// HTML file export
    Html,
}

/// Output preferences from the settings file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Default output format when --output is not given
    pub format: OutputFormat,

    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            color: true,
        }
    }
}

/// Persistent CLI settings.
///
/// Merged from (lowest to highest priority): built-in defaults, the global
/// settings file, and a project-level settings file in the working
/// directory. CLI flags override everything here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Output preferences
    pub output: OutputSettings,
}

impl Settings {
    /// Load settings from all sources with proper priority.
    pub fn load() -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Settings::default()));

        if let Some(global_path) = Self::global_settings_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        for filename in &PROJECT_SETTINGS_FILES {
            let path = PathBuf::from(filename);
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
                break;
            }
        }

        Ok(figment.extract().map_err(Box::new)?)
    }

    /// Get the global settings file path.
    ///
    /// Returns `$XDG_CONFIG_HOME/concord/config.toml` if set, otherwise
    /// falls back to `~/.config/concord/config.toml`.
    pub fn global_settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("concord").join("config.toml"))
    }
}
