//! Report generation with multiple output formats
//!
//! Architecture: Anti-Corruption Layer - Formatters translate domain objects to external formats
//! - ScanReport (domain) is converted to various external representations
//! - Each formatter encapsulates the rules for its specific output format
//! - Rendering never reorders or deduplicates findings

use crate::domain::{ScanReport, SentinelError, SentinelResult};
use serde_json::Value as JsonValue;
use std::io::Write;

/// Supported output formats for scan reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format with colors
    Human,
    /// JSON format for programmatic consumption
    Json,
    /// GitHub Actions format for workflow integration
    GitHub,
}

impl OutputFormat {
    /// Parse format from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "human" => Some(Self::Human),
            "json" => Some(Self::Json),
            "github" => Some(Self::GitHub),
            _ => None,
        }
    }

    /// Get all available format names
    pub fn all_formats() -> &'static [&'static str] {
        &["human", "json", "github"]
    }
}

/// Options for customizing report output
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Whether to use colored output (for human format)
    pub use_colors: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { use_colors: true }
    }
}

/// Main report formatter that dispatches to specific formatters
pub struct ReportFormatter {
    options: ReportOptions,
}

impl ReportFormatter {
    /// Create a new report formatter with options
    pub fn new(options: ReportOptions) -> Self {
        Self { options }
    }

    /// Format a scan report in the specified format
    pub fn format_report(&self, report: &ScanReport, format: OutputFormat) -> SentinelResult<String> {
        match format {
            OutputFormat::Human => Ok(self.format_human(report)),
            OutputFormat::Json => self.format_json(report),
            OutputFormat::GitHub => Ok(self.format_github(report)),
        }
    }

    /// Write a formatted report to a writer
    pub fn write_report<W: Write>(
        &self,
        report: &ScanReport,
        format: OutputFormat,
        mut writer: W,
    ) -> SentinelResult<()> {
        let formatted = self.format_report(report, format)?;
        writer.write_all(formatted.as_bytes()).map_err(|e| SentinelError::Io { source: e })?;
        Ok(())
    }

    /// Format report in human-readable format
    fn format_human(&self, report: &ScanReport) -> String {
        let mut output = String::new();

        if !report.has_findings() {
            if self.options.use_colors {
                output.push_str("\x1b[32mNo naming convention inconsistencies found.\x1b[0m\n");
            } else {
                output.push_str("No naming convention inconsistencies found.\n");
            }
        } else {
            output.push_str("Naming convention inconsistencies found:\n");

            for file in &report.files {
                if !file.has_findings() {
                    continue;
                }

                if self.options.use_colors {
                    output.push_str(&format!("\x1b[1m{}\x1b[0m\n", file.path.display()));
                } else {
                    output.push_str(&format!("{}\n", file.path.display()));
                }

                for finding in &file.findings {
                    if self.options.use_colors {
                        output.push_str(&format!(
                            "  Line {}: {} '\x1b[33m{}\x1b[0m'\n",
                            finding.line_number,
                            finding.kind.as_str(),
                            finding.name
                        ));
                    } else {
                        output.push_str(&format!("  {}\n", finding.format_display()));
                    }
                }
            }
        }

        output.push_str(&self.format_summary(report));
        output
    }

    /// Format report in JSON format
    fn format_json(&self, report: &ScanReport) -> SentinelResult<String> {
        let json_files: Vec<JsonValue> = report
            .files
            .iter()
            .map(|file| {
                let findings: Vec<JsonValue> = file
                    .findings
                    .iter()
                    .map(|f| {
                        serde_json::json!({
                            "line_number": f.line_number,
                            "kind": f.kind.as_str(),
                            "name": f.name,
                        })
                    })
                    .collect();

                serde_json::json!({
                    "path": file.path.display().to_string(),
                    "findings": findings,
                })
            })
            .collect();

        let json_report = serde_json::json!({
            "files": json_files,
            "summary": {
                "total_files": report.summary.total_files,
                "findings_by_kind": {
                    "variables": report.summary.findings_by_kind.variables,
                    "functions": report.summary.findings_by_kind.functions,
                },
                "total_findings": report.total_findings(),
                "execution_time_ms": report.summary.execution_time_ms,
                "scanned_at": report.summary.scanned_at.to_rfc3339(),
            },
        });

        serde_json::to_string_pretty(&json_report)
            .map_err(|e| SentinelError::config(format!("JSON serialization failed: {e}")))
    }

    /// Format report for GitHub Actions
    fn format_github(&self, report: &ScanReport) -> String {
        let mut output = String::new();

        for (path, finding) in report.all_findings() {
            output.push_str(&format!(
                "::warning file={},line={},title=naming-convention::{} '{}' does not match the configured naming pattern\n",
                path.display(),
                finding.line_number,
                finding.kind.as_str(),
                finding.name
            ));
        }

        output
    }

    /// Format the summary section
    fn format_summary(&self, report: &ScanReport) -> String {
        let total = report.total_findings();
        let execution_time = (report.summary.execution_time_ms as f64) / 1000.0;

        let body = format!(
            "{} inconsistenc{} in {} file{} ({:.1}s)\n",
            total,
            if total == 1 { "y" } else { "ies" },
            report.summary.total_files,
            if report.summary.total_files == 1 { "" } else { "s" },
            execution_time
        );

        if self.options.use_colors {
            let color = if total == 0 { "32" } else { "33" };
            format!("\x1b[1mSummary:\x1b[0m \x1b[{color}m{body}\x1b[0m")
        } else {
            format!("Summary: {body}")
        }
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new(ReportOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FileFindings, Finding, FindingKind};
    use std::path::PathBuf;

    fn create_test_report() -> ScanReport {
        let mut report = ScanReport::new();

        report.add_file(FileFindings::new(
            PathBuf::from("sample.py"),
            vec![
                Finding::new(1, FindingKind::Variable, "myVar"),
                Finding::new(2, FindingKind::Function, "myFunc"),
            ],
        ));
        report.set_execution_time(1200);

        report
    }

    #[test]
    fn test_human_format() {
        let formatter = ReportFormatter::new(ReportOptions { use_colors: false });
        let output = formatter.format_report(&create_test_report(), OutputFormat::Human).unwrap();

        assert!(output.contains("Naming convention inconsistencies found:"));
        assert!(output.contains("sample.py"));
        assert!(output.contains("Line 1: Variable 'myVar'"));
        assert!(output.contains("Line 2: Function 'myFunc'"));
        assert!(output.contains("Summary: 2 inconsistencies in 1 file (1.2s)"));
    }

    #[test]
    fn test_empty_report_message_is_distinct() {
        let formatter = ReportFormatter::new(ReportOptions { use_colors: false });
        let output = formatter.format_report(&ScanReport::new(), OutputFormat::Human).unwrap();

        assert!(output.contains("No naming convention inconsistencies found."));
        assert!(!output.contains("inconsistencies found:"));
    }

    #[test]
    fn test_json_format() {
        let formatter = ReportFormatter::default();
        let output = formatter.format_report(&create_test_report(), OutputFormat::Json).unwrap();

        let json: JsonValue = serde_json::from_str(&output).unwrap();
        assert_eq!(json["files"].as_array().unwrap().len(), 1);
        assert_eq!(json["files"][0]["path"], "sample.py");
        assert_eq!(json["files"][0]["findings"][0]["line_number"], 1);
        assert_eq!(json["files"][0]["findings"][0]["kind"], "Variable");
        assert_eq!(json["files"][0]["findings"][1]["name"], "myFunc");
        assert_eq!(json["summary"]["total_findings"], 2);
    }

    #[test]
    fn test_github_format() {
        let formatter = ReportFormatter::default();
        let output = formatter.format_report(&create_test_report(), OutputFormat::GitHub).unwrap();

        assert!(output.contains("::warning file=sample.py,line=1,"));
        assert!(output.contains("Variable 'myVar'"));
        assert!(output.contains("Function 'myFunc'"));
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("human"), Some(OutputFormat::Human));
        assert_eq!(OutputFormat::from_str("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str("github"), Some(OutputFormat::GitHub));
        assert_eq!(OutputFormat::from_str("sarif"), None);
    }

    #[test]
    fn test_write_report() {
        let formatter = ReportFormatter::new(ReportOptions { use_colors: false });
        let mut buffer = Vec::new();

        formatter.write_report(&create_test_report(), OutputFormat::Human, &mut buffer).unwrap();
        assert!(String::from_utf8(buffer).unwrap().contains("sample.py"));
    }
}
