//! Core domain models for naming-convention findings and scan reports
//!
//! Architecture: Rich Domain Models - Findings are immutable records, the report
//! acts as an aggregate root over per-file results
//! - A Finding never changes after it is emitted; ordering reflects scan order
//! - ScanReport owns per-file finding sets plus summary statistics
//! - The error taxonomy lives here so every layer can speak SentinelResult

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// The kind of identifier a finding refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum FindingKind {
    /// An assignment-style identifier (`name = ...`)
    Variable,
    /// A declared function or procedure name
    Function,
}

impl FindingKind {
    /// Convert to string for display
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Variable => "Variable",
            Self::Function => "Function",
        }
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded naming-convention inconsistency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Line number (1-indexed) where the identifier was recognized
    pub line_number: u32,
    /// Whether the identifier came from the assignment or the declaration detector
    pub kind: FindingKind,
    /// The identifier text that failed its naming rule
    pub name: String,
}

impl Finding {
    /// Create a new finding
    pub fn new(line_number: u32, kind: FindingKind, name: impl Into<String>) -> Self {
        Self { line_number, kind, name: name.into() }
    }

    /// Format finding for display
    pub fn format_display(&self) -> String {
        format!("Line {}: {} '{}'", self.line_number, self.kind.as_str(), self.name)
    }
}

/// Findings produced by scanning a single file, in scan order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileFindings {
    /// Path of the scanned file
    pub path: PathBuf,
    /// All findings for this file, top to bottom, never deduplicated
    pub findings: Vec<Finding>,
}

impl FileFindings {
    /// Create a per-file result
    pub fn new(path: PathBuf, findings: Vec<Finding>) -> Self {
        Self { path, findings }
    }

    /// Whether this file produced any findings
    pub fn has_findings(&self) -> bool {
        !self.findings.is_empty()
    }
}

/// Count of findings by identifier kind
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FindingCounts {
    pub variables: usize,
    pub functions: usize,
}

impl FindingCounts {
    /// Total number of findings across both kinds
    pub fn total(&self) -> usize {
        self.variables + self.functions
    }

    /// Add a finding to the counts
    pub fn add(&mut self, kind: FindingKind) {
        match kind {
            FindingKind::Variable => self.variables += 1,
            FindingKind::Function => self.functions += 1,
        }
    }
}

/// Summary statistics for a scan report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSummary {
    /// Total number of files scanned
    pub total_files: usize,
    /// Number of findings by identifier kind
    pub findings_by_kind: FindingCounts,
    /// Total execution time in milliseconds
    pub execution_time_ms: u64,
    /// Timestamp when the scan was performed
    pub scanned_at: DateTime<Utc>,
}

impl Default for ScanSummary {
    fn default() -> Self {
        Self {
            total_files: 0,
            findings_by_kind: FindingCounts::default(),
            execution_time_ms: 0,
            scanned_at: Utc::now(),
        }
    }
}

/// Complete scan report containing every scanned file's findings plus metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// Per-file results in the order the files were scanned
    pub files: Vec<FileFindings>,
    /// Summary statistics
    pub summary: ScanSummary,
}

impl ScanReport {
    /// Create a new empty scan report
    pub fn new() -> Self {
        Self { files: Vec::new(), summary: ScanSummary::default() }
    }

    /// Append one file's results, updating the summary counts
    pub fn add_file(&mut self, file: FileFindings) {
        for finding in &file.findings {
            self.summary.findings_by_kind.add(finding.kind);
        }
        self.summary.total_files += 1;
        self.files.push(file);
    }

    /// Whether the report contains any findings
    pub fn has_findings(&self) -> bool {
        self.files.iter().any(FileFindings::has_findings)
    }

    /// Total number of findings across all files
    pub fn total_findings(&self) -> usize {
        self.summary.findings_by_kind.total()
    }

    /// Iterate over every finding with the file it was found in
    pub fn all_findings(&self) -> impl Iterator<Item = (&PathBuf, &Finding)> {
        self.files.iter().flat_map(|f| f.findings.iter().map(move |finding| (&f.path, finding)))
    }

    /// Set the execution time
    pub fn set_execution_time(&mut self, duration_ms: u64) {
        self.summary.execution_time_ms = duration_ms;
    }
}

impl Default for ScanReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Error types that can occur during a scan
#[derive(Debug, thiserror::Error)]
pub enum SentinelError {
    /// The target path does not exist, is not readable, or is not text
    #[error("cannot read '{path}': {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A naming-rule string is not a valid pattern for the regex engine
    #[error("invalid naming pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },

    /// An output sink failed while writing a report
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Configuration file could not be loaded or parsed
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl SentinelError {
    /// Create a file-access error
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess { path: path.into(), source }
    }

    /// Create a pattern error
    pub fn pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Pattern { pattern: pattern.into(), message: message.into() }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config { message: message.into() }
    }
}

/// Result type for Naming Sentinel operations
pub type SentinelResult<T> = Result<T, SentinelError>;
