//! Detection engine for concord
//!
//! Cross-document configuration conflict detection for multi-application
//! projects.
//!
//! # Overview
//!
//! The engine reads each application's rule document and documentation
//! subtree, extracts configurable values with a fixed catalog of
//! category-tagged patterns, and compares the extracted values pairwise.
//! Two sources asserting different, non-empty values for the same fact is a
//! conflict; equal values signal agreement and stay silent.
//!
//! # Architecture
//!
//! ```text
//! Registry -> Parser -> Matcher -> Analyzer -> Aggregator -> ConflictReport
//! ```
//!
//! # Example
//!
//! ```no_run
//! use concord_engine::{DetectOptions, Detector, ProjectConfig};
//! use std::path::Path;
//!
//! # fn example() -> Result<(), concord_engine::EngineError> {
//! let root = Path::new(".");
//! let config = ProjectConfig::load(&root.join(concord_engine::CONFIG_FILE))?;
//! let detector = Detector::new(root, config);
//!
//! let report = detector.detect(&DetectOptions::default());
//! println!("{}", report.summary);
//! # Ok(())
//! # }
//! ```
//!
//! An unreadable document contributes nothing and is logged as a warning;
//! only a missing or malformed project configuration aborts a run.

mod aggregator;
mod analyzer;
mod catalog;
mod config;
mod detector;
mod error;
mod matcher;
mod parser;
mod registry;

// Re-export commonly used types
pub use analyzer::MANAGE_RULES_FILE;
pub use config::{ApplicationConfig, CONFIG_FILE, ProjectConfig, ProjectInfo};
pub use detector::{DetectOptions, Detector};
pub use error::EngineError;
pub use registry::{DOCS_DIR, RULES_FILE};
