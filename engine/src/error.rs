//! Engine error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can abort a detection run.
///
/// Only configuration loading is fatal. Unreadable individual documents
/// degrade to a warning and an empty contribution at the call site and never
/// surface here.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error(
        "Configuration file not found at {path}. Run the project setup step to generate it."
    )]
    ConfigNotFound { path: PathBuf },

    #[error("Failed to read configuration at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_message_carries_remediation_hint() {
        let error = EngineError::ConfigNotFound {
            path: PathBuf::from("/project/concord.json"),
        };
        let message = error.to_string();
        assert!(message.contains("/project/concord.json"));
        assert!(message.contains("setup"));
    }
}
