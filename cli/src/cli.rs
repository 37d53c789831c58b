//! CLI command definitions

use clap::{Parser, ValueEnum};
use concord_domain::Severity;
use std::path::PathBuf;

/// Output format for conflict reports
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliFormat {
    /// Console report with all sections
    Console,
    /// JSON file export
    Json,
    /// HTML file export
    Html,
}

/// Minimum severity to report
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SeverityArg {
    /// Report everything
    Low,
    /// Medium and above (default)
    Medium,
    /// High and critical only
    High,
    /// Critical only
    Critical,
}

/// CLI arguments for concord
#[derive(Parser, Debug)]
#[command(name = "concord")]
#[command(
    author,
    version,
    about = "Detect configuration conflicts across rule documents and documentation"
)]
#[command(long_about = r#"
Concord analyzes the rule documents and documentation of a multi-application
project and reports where two documents assert mutually inconsistent
configuration facts (one document says a timeout is 30s, another says 60s).

Detection runs two protocols:
1. Rule conflicts: every pair of applications sharing a rule category
2. Documentation conflicts: every pair of documentation files per application

Settings files are loaded from (in priority order):
1. ./concord.toml or ./.concord.toml     Project-level settings
2. ~/.config/concord/config.toml         Global settings

Example:
  concord --project-root ./my-project
  concord --rules-only --severity high --output json
  concord --app backend --output html --output-file report.html
"#)]
pub struct Cli {
    /// Check only rule-document conflicts
    #[arg(long, conflicts_with = "docs_only")]
    pub rules_only: bool,

    /// Check only documentation conflicts
    #[arg(long)]
    pub docs_only: bool,

    /// Restrict detection to one application
    #[arg(short, long, value_name = "NAME")]
    pub app: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<CliFormat>,

    /// Output file path (json/html formats)
    #[arg(long, value_name = "PATH")]
    pub output_file: Option<PathBuf>,

    /// Project configuration path (default: <project-root>/concord.json)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Minimum severity to report
    #[arg(short, long, value_enum, default_value = "medium")]
    pub severity: SeverityArg,

    /// Project root to analyze
    #[arg(long, default_value = ".", value_name = "PATH")]
    pub project_root: PathBuf,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Console => crate::config::OutputFormat::Console,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Html => crate::config::OutputFormat::Html,
        }
    }
}

impl From<SeverityArg> for Severity {
    fn from(severity: SeverityArg) -> Self {
        match severity {
            SeverityArg::Low => Severity::Low,
            SeverityArg::Medium => Severity::Medium,
            SeverityArg::High => Severity::High,
            SeverityArg::Critical => Severity::Critical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_arguments() {
        let cli = Cli::parse_from(["concord"]);
        assert!(!cli.rules_only);
        assert!(!cli.docs_only);
        assert!(cli.output.is_none());
        assert!(matches!(cli.severity, SeverityArg::Medium));
        assert_eq!(cli.project_root, PathBuf::from("."));
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_full_invocation() {
        let cli = Cli::parse_from([
            "concord",
            "--rules-only",
            "--app",
            "backend",
            "--output",
            "json",
            "--severity",
            "high",
            "--config",
            "custom.json",
            "-vv",
        ]);
        assert!(cli.rules_only);
        assert_eq!(cli.app.as_deref(), Some("backend"));
        assert!(matches!(cli.output, Some(CliFormat::Json)));
        assert!(matches!(cli.severity, SeverityArg::High));
        assert_eq!(cli.config, Some(PathBuf::from("custom.json")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_rules_only_conflicts_with_docs_only() {
        let result = Cli::try_parse_from(["concord", "--rules-only", "--docs-only"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_severity_conversion() {
        let severity: Severity = SeverityArg::Critical.into();
        assert_eq!(severity, Severity::Critical);
    }
}
