//! Naming Sentinel - naming-convention inconsistency detection for source files
//!
//! Architecture: Library interface serves as the application layer
//! - The scanner core stays pure: it reads a file, applies two per-line
//!   recognizers, and returns findings without printing or logging
//! - Configuration, reporting, and CLI concerns live at the edges
//!
//! This is a lightweight static-analysis utility, not a parser. Detection is
//! surface-level text matching, so identifiers inside strings, comments, or
//! multi-line statements can be misidentified; that trade-off is intentional.

pub mod config;
pub mod domain;
pub mod patterns;
pub mod report;
pub mod scanner;

// Re-export main types for convenient access
pub use domain::findings::{
    FileFindings, Finding, FindingCounts, FindingKind, ScanReport, ScanSummary, SentinelError,
    SentinelResult,
};

pub use config::{ConfigBuilder, SentinelConfig, DEFAULT_DECLARATION_KEYWORD};

pub use patterns::{LineDetectors, NamingRule, DEFAULT_NAME_PATTERN};

pub use report::{OutputFormat, ReportFormatter, ReportOptions};

pub use scanner::{ConventionScanner, ScanOptions};

use std::path::Path;

/// Convenience function to scan one file with the default snake_case rules
pub fn scan_file<P: AsRef<Path>>(path: P) -> SentinelResult<Vec<Finding>> {
    ConventionScanner::with_defaults().scan_file(path)
}

/// Convenience function to scan one file with custom naming rules
pub fn scan_file_with_rules<P: AsRef<Path>>(
    path: P,
    variable_pattern: &str,
    function_pattern: &str,
) -> SentinelResult<Vec<Finding>> {
    let config = ConfigBuilder::new()
        .variable_pattern(variable_pattern)
        .function_pattern(function_pattern)
        .build()?;

    ConventionScanner::new(&config)?.scan_file(path)
}
