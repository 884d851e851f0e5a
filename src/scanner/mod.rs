//! Scan orchestration for Naming Sentinel
//!
//! Architecture: Domain Services - The scanner coordinates detection over files
//! - Immutable rule configuration is separated from per-call output, so one
//!   scanner can be reused across files with no reset logic
//! - Single-threaded and synchronous; each call owns its own file content
//! - The per-line core never prints or logs; diagnostics belong to callers

use crate::config::SentinelConfig;
use crate::domain::{FileFindings, Finding, FindingKind, ScanReport, SentinelError, SentinelResult};
use crate::patterns::{LineDetectors, NamingRule};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Options for customizing multi-file scans
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Whether a file that cannot be read fails the whole run
    pub fail_fast: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self { fail_fast: true }
    }
}

/// Line-by-line naming-convention scanner
///
/// Applies two independent recognizers to every line of a file and tests each
/// recognized identifier against its naming rule. Surface-level text matching
/// only: identifiers inside strings, comments, or multi-line statements are
/// not excluded.
#[derive(Debug, Clone)]
pub struct ConventionScanner {
    variable_rule: NamingRule,
    function_rule: NamingRule,
    detectors: LineDetectors,
}

impl ConventionScanner {
    /// Create a scanner from a configuration, compiling both rules up front.
    ///
    /// Fails with `SentinelError::Pattern` before any line is scanned when a
    /// rule string is not valid for the regex engine.
    pub fn new(config: &SentinelConfig) -> SentinelResult<Self> {
        Ok(Self {
            variable_rule: NamingRule::new(&config.variable_pattern)?,
            function_rule: NamingRule::new(&config.function_pattern)?,
            detectors: LineDetectors::new(&config.declaration_keyword)?,
        })
    }

    /// Create a scanner with the default snake_case rules and `def` keyword
    pub fn with_defaults() -> Self {
        Self::new(&SentinelConfig::default()).expect("default configuration is valid")
    }

    /// Scan one file and return its findings in line order.
    ///
    /// The whole file is read into memory first; an unreadable path is a
    /// terminal failure for this invocation and yields no partial findings.
    pub fn scan_file<P: AsRef<Path>>(&self, path: P) -> SentinelResult<Vec<Finding>> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).map_err(|e| SentinelError::file_access(path, e))?;

        Ok(self.scan_source(&content))
    }

    /// The per-line pass over already-loaded text, 1-indexed.
    ///
    /// Both detectors run on every line regardless of whether the other
    /// fired, so a single line can contribute zero, one, or two findings.
    /// There is no lookahead across lines and no lexical state.
    pub fn scan_source(&self, content: &str) -> Vec<Finding> {
        let mut findings = Vec::new();

        for (index, line) in content.lines().enumerate() {
            let line_number = (index + 1) as u32;

            if let Some(name) = self.detectors.assigned_name(line) {
                if !self.variable_rule.accepts(name) {
                    findings.push(Finding::new(line_number, FindingKind::Variable, name));
                }
            }

            if let Some(name) = self.detectors.declared_function(line) {
                if !self.function_rule.accepts(name) {
                    findings.push(Finding::new(line_number, FindingKind::Function, name));
                }
            }
        }

        findings
    }

    /// Scan several files sequentially and aggregate a report.
    ///
    /// Files are processed in argument order. With `fail_fast` (the default)
    /// the first unreadable file fails the run; otherwise the failure is
    /// logged and the remaining files are still scanned.
    pub fn scan_paths(&self, paths: &[PathBuf], options: &ScanOptions) -> SentinelResult<ScanReport> {
        let start_time = Instant::now();
        let mut report = ScanReport::new();

        for path in paths {
            match self.scan_file(path) {
                Ok(findings) => {
                    tracing::debug!("scanned {}: {} findings", path.display(), findings.len());
                    report.add_file(FileFindings::new(path.clone(), findings));
                }
                Err(e) => {
                    if options.fail_fast {
                        return Err(e);
                    }
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }

        report.set_execution_time(start_time.elapsed().as_millis() as u64);
        Ok(report)
    }

    /// The rule applied to assignment-style identifiers
    pub fn variable_rule(&self) -> &NamingRule {
        &self.variable_rule
    }

    /// The rule applied to declared function names
    pub fn function_rule(&self) -> &NamingRule {
        &self.function_rule
    }
}

impl Default for ConventionScanner {
    fn default() -> Self {
        Self::with_defaults()
    }
}
