//! Configuration loading and management for Naming Sentinel
//!
//! Architecture: Anti-Corruption Layer - Configuration translates external YAML formats
//! - Raw YAML structures are converted to clean domain objects
//! - Default rules are embedded here, not scattered through the scanner
//! - Every pattern is compiled during validation, before any file is scanned

use crate::domain::{SentinelError, SentinelResult};
use crate::patterns::{LineDetectors, NamingRule, DEFAULT_NAME_PATTERN};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default function-declaration keyword (Python surface syntax)
pub const DEFAULT_DECLARATION_KEYWORD: &str = "def";

/// Main configuration structure for Naming Sentinel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentinelConfig {
    /// Regex for variable naming convention
    #[serde(default = "default_name_pattern")]
    pub variable_pattern: String,
    /// Regex for function naming convention
    #[serde(default = "default_name_pattern")]
    pub function_pattern: String,
    /// Surface-syntax keyword introducing a function declaration
    #[serde(default = "default_declaration_keyword")]
    pub declaration_keyword: String,
}

impl SentinelConfig {
    /// Load configuration from a YAML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SentinelResult<Self> {
        let contents = fs::read_to_string(&path).map_err(|e| {
            SentinelError::config(format!(
                "Failed to read config file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            SentinelError::config(format!(
                "Failed to parse config file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from string content
    pub fn load_from_str(content: &str) -> SentinelResult<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| SentinelError::config(format!("Failed to parse config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration: both rules must compile and the keyword
    /// must form a usable declaration detector. Runs before any scan.
    pub fn validate(&self) -> SentinelResult<()> {
        NamingRule::new(&self.variable_pattern)?;
        NamingRule::new(&self.function_pattern)?;
        LineDetectors::new(&self.declaration_keyword)?;
        Ok(())
    }
}

impl Default for SentinelConfig {
    fn default() -> Self {
        Self {
            variable_pattern: default_name_pattern(),
            function_pattern: default_name_pattern(),
            declaration_keyword: default_declaration_keyword(),
        }
    }
}

fn default_name_pattern() -> String {
    DEFAULT_NAME_PATTERN.to_string()
}

fn default_declaration_keyword() -> String {
    DEFAULT_DECLARATION_KEYWORD.to_string()
}

/// Configuration builder for programmatic construction
pub struct ConfigBuilder {
    config: SentinelConfig,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self { config: SentinelConfig::default() }
    }

    /// Set the variable naming pattern
    pub fn variable_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.config.variable_pattern = pattern.into();
        self
    }

    /// Set the function naming pattern
    pub fn function_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.config.function_pattern = pattern.into();
        self
    }

    /// Set the declaration keyword
    pub fn declaration_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.config.declaration_keyword = keyword.into();
        self
    }

    /// Build the final configuration
    pub fn build(self) -> SentinelResult<SentinelConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
