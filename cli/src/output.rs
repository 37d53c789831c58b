//! Console output formatting for conflict reports

use colored::Colorize;
use concord_domain::{ConflictReport, Severity};

/// Formats conflict reports for console display.
///
/// Section order is fixed: header, severity breakdown, category breakdown,
/// summary, detailed conflicts, recommendations, next steps. Formatting
/// never mutates the report.
pub struct ConsoleFormatter {
    /// Use colors
    colored: bool,
}

impl ConsoleFormatter {
    /// Create a new formatter with colors enabled
    pub fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.colored = false;
        self
    }

    /// Format the complete conflict report
    pub fn format(&self, report: &ConflictReport) -> String {
        let mut output = String::new();

        output.push_str(&self.header("CONFIGURATION CONFLICT DETECTION REPORT"));
        output.push_str(&format!("Project: {}\n", report.project_name));
        output.push_str(&format!("Date: {}\n", report.timestamp));
        output.push_str(&format!("Path: {}\n", report.project_path));
        output.push_str(&format!("Total Conflicts: {}\n", report.total_conflicts));

        output.push_str(&self.section_header("SEVERITY BREAKDOWN"));
        let mut any = false;
        for (severity, count) in report.conflicts_by_severity.iter() {
            if count > 0 {
                output.push_str(&format!("   {}: {}\n", self.severity_label(severity), count));
                any = true;
            }
        }
        if !any {
            output.push_str("   (none)\n");
        }

        output.push_str(&self.section_header("CATEGORY BREAKDOWN"));
        if report.conflicts_by_category.is_empty() {
            output.push_str("   (none)\n");
        }
        for (category, count) in &report.conflicts_by_category {
            output.push_str(&format!("   {}: {}\n", category, count));
        }

        output.push_str(&self.section_header("SUMMARY"));
        output.push_str(&format!("   {}\n", report.summary));

        if !report.conflicts.is_empty() {
            output.push_str(&self.section_header("DETAILED CONFLICTS"));
            for (i, conflict) in report.conflicts.iter().enumerate() {
                output.push_str(&format!(
                    "\n   {}. [{}] {}\n",
                    i + 1,
                    self.severity_label(conflict.severity),
                    conflict.title
                ));
                output.push_str(&format!("      Category: {}\n", conflict.category));
                output.push_str(&format!(
                    "      Applications: {}\n",
                    conflict.applications().join(", ")
                ));
                output.push_str(&format!("      Description: {}\n", conflict.description));
                output.push_str(&format!(
                    "      Resolution: {}\n",
                    conflict.resolution_suggestion.replace('\n', "\n        ")
                ));
                output.push_str("      Remediation Command:\n");
                output.push_str(&format!("         {}\n", conflict.remediation_command));
            }
        }

        output.push_str(&self.section_header("RECOMMENDATIONS"));
        for (i, recommendation) in report.recommendations.iter().enumerate() {
            output.push_str(&format!("   {}. {}\n", i + 1, recommendation));
        }

        output.push_str(&self.section_header("NEXT STEPS"));
        output.push_str("   1. Use MANAGE_RULES.md to resolve conflicts\n");
        output.push_str("   2. Re-run conflict detection to verify fixes\n");
        output.push_str("   3. Update documentation standards to prevent future conflicts\n");

        output.push_str(&self.footer());
        output
    }

    /// Format a confirmation line for a file export
    pub fn exported(&self, kind: &str, path: &str) -> String {
        let message = format!("{} report exported to: {}", kind, path);
        if self.colored {
            message.green().to_string()
        } else {
            message
        }
    }

    fn header(&self, title: &str) -> String {
        let line = "=".repeat(80);
        if self.colored {
            format!("\n{}\n{}\n{}\n", line.cyan(), title.bold(), line.cyan())
        } else {
            format!("\n{}\n{}\n{}\n", line, title, line)
        }
    }

    fn section_header(&self, title: &str) -> String {
        if self.colored {
            format!("\n{}\n", format!("{}:", title).cyan().bold())
        } else {
            format!("\n{}:\n", title)
        }
    }

    fn footer(&self) -> String {
        let line = "=".repeat(80);
        if self.colored {
            format!("\n{}\n", line.cyan())
        } else {
            format!("\n{}\n", line)
        }
    }

    fn severity_label(&self, severity: Severity) -> String {
        let label = severity.as_str().to_uppercase();
        if !self.colored {
            return label;
        }

        match severity {
            Severity::Critical => label.red().bold().to_string(),
            Severity::High => label.yellow().to_string(),
            Severity::Medium => label.cyan().to_string(),
            Severity::Low => label.green().to_string(),
        }
    }
}

impl Default for ConsoleFormatter {
    fn default() -> Self {
        Self::new()
    }
}
