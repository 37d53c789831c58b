//! File export of conflict reports (JSON and HTML).

use crate::error::Result;
use chrono::Local;
use concord_domain::{ConflictReport, Severity};
use std::fs;
use std::path::{Path, PathBuf};

/// Default export file name stamped with the current local time.
pub fn default_export_path(extension: &str) -> PathBuf {
    PathBuf::from(format!(
        "conflict-report-{}.{}",
        Local::now().format("%Y%m%d-%H%M%S"),
        extension
    ))
}

/// Serialize the report field-for-field and write it to `path`.
pub fn write_json(report: &ConflictReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    Ok(())
}

/// Render the report as a self-contained HTML document and write it to
/// `path`.
pub fn write_html(report: &ConflictReport, path: &Path) -> Result<()> {
    fs::write(path, render_html(report))?;
    Ok(())
}

/// Render the report as a self-contained styled HTML document.
///
/// The document embeds the same fields as the JSON and console renderings:
/// summary cards, the detailed conflict list, recommendations and the fixed
/// next-steps text.
pub fn render_html(report: &ConflictReport) -> String {
    let mut conflicts_html = String::new();
    for (i, conflict) in report.conflicts.iter().enumerate() {
        let color = severity_color(conflict.severity);
        conflicts_html.push_str(&format!(
            r#"
        <div class="conflict-item" style="border-left: 4px solid {color};">
            <h3 style="color: {color};">{}. {}</h3>
            <p><strong>Category:</strong> {}</p>
            <p><strong>Severity:</strong> {}</p>
            <p><strong>Applications:</strong> {}</p>
            <p><strong>Description:</strong> {}</p>
            <p><strong>Resolution:</strong> {}</p>
            <div class="remediation-command">
                <strong>Remediation Command:</strong>
                <code>{}</code>
            </div>
        </div>
"#,
            i + 1,
            escape(&conflict.title),
            escape(&conflict.category),
            conflict.severity,
            escape(&conflict.applications().join(", ")),
            escape(&conflict.description),
            escape(&conflict.resolution_suggestion).replace('\n', "<br>"),
            escape(&conflict.remediation_command),
        ));
    }
    if conflicts_html.is_empty() {
        conflicts_html = "<p>No conflicts detected!</p>".to_string();
    }

    let recommendations_html: String = report
        .recommendations
        .iter()
        .map(|r| format!("<li>{}</li>", escape(r)))
        .collect();

    let counts = &report.conflicts_by_severity;
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Conflict Report - {title}</title>
    <style>
        body {{ font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; margin: 0; padding: 20px; background-color: #f8fafc; }}
        .container {{ max-width: 1200px; margin: 0 auto; background: white; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); overflow: hidden; }}
        .header {{ background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 30px; text-align: center; }}
        .content {{ padding: 30px; }}
        .summary-grid {{ display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 20px; margin: 20px 0; }}
        .summary-card {{ background: #f8fafc; padding: 20px; border-radius: 8px; text-align: center; }}
        .conflict-item {{ background: #f9fafb; padding: 20px; margin: 15px 0; border-radius: 8px; }}
        .remediation-command {{ background: #1f2937; color: #e5e7eb; padding: 15px; border-radius: 4px; margin-top: 10px; }}
        code {{ background: #374151; color: #f3f4f6; padding: 2px 6px; border-radius: 3px; }}
        .recommendations {{ background: #ecfdf5; padding: 20px; border-radius: 8px; border-left: 4px solid #10b981; }}
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>Configuration Conflict Report</h1>
            <p>{title}</p>
            <p>Generated: {timestamp}</p>
        </div>
        <div class="content">
            <h2>Summary</h2>
            <p><strong>{summary}</strong></p>

            <div class="summary-grid">
                <div class="summary-card">
                    <h3>Total Conflicts</h3>
                    <h2 style="color: #dc2626;">{total}</h2>
                </div>
                <div class="summary-card">
                    <h3>Critical</h3>
                    <h2 style="color: #dc2626;">{critical}</h2>
                </div>
                <div class="summary-card">
                    <h3>High</h3>
                    <h2 style="color: #ea580c;">{high}</h2>
                </div>
                <div class="summary-card">
                    <h3>Medium</h3>
                    <h2 style="color: #d97706;">{medium}</h2>
                </div>
                <div class="summary-card">
                    <h3>Low</h3>
                    <h2 style="color: #65a30d;">{low}</h2>
                </div>
            </div>

            <h2>Detailed Conflicts</h2>
            {conflicts}

            <div class="recommendations">
                <h2>Recommendations</h2>
                <ul>{recommendations}</ul>
            </div>

            <h2>Next Steps</h2>
            <ol>
                <li>Use MANAGE_RULES.md to resolve conflicts</li>
                <li>Re-run conflict detection to verify fixes</li>
                <li>Update documentation standards to prevent future conflicts</li>
            </ol>
        </div>
    </div>
</body>
</html>
"#,
        title = escape(&report.project_name),
        timestamp = escape(&report.timestamp),
        summary = escape(&report.summary),
        total = report.total_conflicts,
        critical = counts.critical,
        high = counts.high,
        medium = counts.medium,
        low = counts.low,
        conflicts = conflicts_html,
        recommendations = recommendations_html,
    )
}

fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "#dc2626",
        Severity::High => "#ea580c",
        Severity::Medium => "#d97706",
        Severity::Low => "#65a30d",
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
