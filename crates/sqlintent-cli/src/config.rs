//! Configuration file handling

use miette::{IntoDiagnostic, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::args::OutputFormat;

const CONFIG_FILE: &str = "sqlintent.toml";

/// Configuration for sqlintent
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Statement file paths or patterns
    #[serde(default)]
    pub files: Vec<String>,

    /// Classifier implementation (regex, null)
    #[serde(default)]
    pub classifier: Option<String>,

    /// Output format (human, json)
    #[serde(default)]
    pub format: Option<OutputFormat>,

    /// Fail when a statement would be routed to the primary
    #[serde(default)]
    pub deny_writes: bool,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).into_diagnostic()?;
        let config: Config = toml::from_str(&contents).into_diagnostic()?;
        Ok(config)
    }

    /// Try to find and load sqlintent.toml in current directory or parent directories
    pub fn find_and_load() -> Result<Option<Self>> {
        let mut current_dir = std::env::current_dir().into_diagnostic()?;

        loop {
            let config_path = current_dir.join(CONFIG_FILE);
            if config_path.exists() {
                tracing::debug!(path = %config_path.display(), "using config file");
                return Ok(Some(Self::from_file(&config_path)?));
            }

            // Try parent directory
            if !current_dir.pop() {
                break;
            }
        }

        Ok(None)
    }

    /// Load the explicit config file, or search for one
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::find_and_load()?.unwrap_or_default()),
        }
    }

    /// Merge CLI arguments into configuration
    /// CLI arguments take precedence over config file values
    pub fn merge_with_args(
        mut self,
        files: &[PathBuf],
        classifier: &Option<String>,
        format: &Option<OutputFormat>,
        deny_writes: bool,
    ) -> Self {
        if !files.is_empty() {
            self.files = files.iter().map(|p| p.display().to_string()).collect();
        }

        if classifier.is_some() {
            self.classifier = classifier.clone();
        }

        if format.is_some() {
            self.format = *format;
        }

        if deny_writes {
            self.deny_writes = true;
        }

        self
    }

    pub fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}
