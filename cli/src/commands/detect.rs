//! Detect command implementation

use crate::cli::Cli;
use crate::config::{OutputFormat, Settings};
use crate::error::Result;
use crate::export;
use crate::output::ConsoleFormatter;
use concord_domain::Severity;
use concord_engine::{CONFIG_FILE, DetectOptions, Detector, ProjectConfig};

/// What a finished detect run tells the process-level caller.
#[derive(Debug, Clone, Copy)]
pub struct DetectOutcome {
    /// True when a conflict at or above high severity survived filtering;
    /// pipelines gate on this via the exit code.
    pub gate_failed: bool,
}

/// Execute the detect command.
pub fn execute_detect(cli: &Cli, settings: &Settings) -> Result<DetectOutcome> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| cli.project_root.join(CONFIG_FILE));
    let config = ProjectConfig::load(&config_path)?;

    let detector = Detector::new(&cli.project_root, config);
    let options = DetectOptions {
        rules_only: cli.rules_only,
        docs_only: cli.docs_only,
        app: cli.app.clone(),
    };

    let mut report = detector.detect(&options);
    report.filter_by_min_severity(cli.severity.into());

    let mut formatter = ConsoleFormatter::new();
    if cli.no_color || !settings.output.color {
        formatter = formatter.without_colors();
    }
    let format = cli.output.map(Into::into).unwrap_or(settings.output.format);

    match format {
        OutputFormat::Console => {
            println!("{}", formatter.format(&report));
        }
        OutputFormat::Json => {
            let path = cli
                .output_file
                .clone()
                .unwrap_or_else(|| export::default_export_path("json"));
            export::write_json(&report, &path)?;
            println!("{}", formatter.exported("JSON", &path.display().to_string()));
        }
        OutputFormat::Html => {
            let path = cli
                .output_file
                .clone()
                .unwrap_or_else(|| export::default_export_path("html"));
            export::write_html(&report, &path)?;
            println!("{}", formatter.exported("HTML", &path.display().to_string()));
        }
    }

    Ok(DetectOutcome {
        gate_failed: report.has_conflicts_at_least(Severity::High),
    })
}
