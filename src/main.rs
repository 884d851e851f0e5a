//! Naming Sentinel CLI - Command-line interface for naming-convention checks
//!
//! Architecture: Application Layer - CLI coordinates user interactions with domain services
//! - Translates arguments and config files into a scanner configuration
//! - Handles external concerns like process exit codes and terminal output
//! - Exit codes: 0 = clean, 1 = inconsistencies found, 2 = operational error

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use naming_sentinel::{
    ConventionScanner, OutputFormat, ReportFormatter, ReportOptions, ScanOptions, SentinelConfig,
};
use std::path::{Path, PathBuf};
use std::process;

/// Config files probed when --config is not given, in order
const DEFAULT_CONFIG_FILES: &[&str] =
    &["naming_sentinel.yaml", "naming_sentinel.yml", ".naming_sentinel.yaml"];

/// Detects naming convention inconsistencies in source files
#[derive(Parser)]
#[command(name = "naming-sentinel")]
#[command(version)]
#[command(about = "Detects naming convention inconsistencies in source files")]
#[command(
    long_about = "Naming Sentinel scans files line by line and flags variable assignments and \
function declarations whose identifiers do not match a configurable naming pattern. Detection is \
surface-level text matching, fast but deliberately imprecise."
)]
struct Cli {
    /// Files to analyze
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Regex for variable naming convention (default is snake_case)
    #[arg(long)]
    variable_pattern: Option<String>,

    /// Regex for function naming convention (default is snake_case)
    #[arg(long)]
    function_pattern: Option<String>,

    /// Function declaration keyword to look for (default "def")
    #[arg(long)]
    keyword: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "human")]
    format: OutputFormatArg,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Keep scanning remaining files when one cannot be read
    #[arg(long)]
    keep_going: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, ValueEnum, PartialEq)]
enum OutputFormatArg {
    Human,
    Json,
    Github,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Github => OutputFormat::GitHub,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(2);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let mut config = load_config(cli.config.as_deref())?;

    // CLI flags override config file values
    if let Some(pattern) = cli.variable_pattern {
        config.variable_pattern = pattern;
    }
    if let Some(pattern) = cli.function_pattern {
        config.function_pattern = pattern;
    }
    if let Some(keyword) = cli.keyword {
        config.declaration_keyword = keyword;
    }

    let scanner = ConventionScanner::new(&config).context("invalid naming rules")?;

    let options = ScanOptions { fail_fast: !cli.keep_going };
    let report = scanner.scan_paths(&cli.paths, &options)?;

    let formatter = ReportFormatter::new(ReportOptions { use_colors: !cli.no_color });
    let formatted = formatter.format_report(&report, cli.format.into())?;
    print!("{formatted}");

    Ok(if report.has_findings() { 1 } else { 0 })
}

fn load_config(explicit: Option<&Path>) -> Result<SentinelConfig> {
    if let Some(path) = explicit {
        return SentinelConfig::load_from_file(path)
            .with_context(|| format!("failed to load config '{}'", path.display()));
    }

    for candidate in DEFAULT_CONFIG_FILES {
        if Path::new(candidate).exists() {
            tracing::debug!("using config file {candidate}");
            return SentinelConfig::load_from_file(candidate)
                .with_context(|| format!("failed to load config '{candidate}'"));
        }
    }

    Ok(SentinelConfig::default())
}

fn init_logging(verbose: bool) {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };

    tracing_subscriber::fmt().with_max_level(level).with_target(false).init();
}
