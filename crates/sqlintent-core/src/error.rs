//! Error types
//!
//! Classification itself never fails: every statement, however malformed,
//! gets a defined answer. The only errors are construction-time pattern
//! failures and configuration lookups.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Failure to construct a classifier
#[derive(Debug, Error, Diagnostic)]
pub enum ClassifierError {
    /// One of the classifier's patterns did not compile
    #[error("failed to compile the {name} pattern")]
    #[diagnostic(
        code(sqlintent::classifier::pattern),
        help("the proxy cannot start without a working classifier")
    )]
    Pattern {
        name: &'static str,
        #[source]
        source: regex::Error,
    },
}

/// Failure to read a configuration value
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// The key has no entry
    #[error("key not found: '{0}'")]
    #[diagnostic(code(sqlintent::config::not_found))]
    NotFound(String),

    /// The entry exists but does not have the requested format
    #[error("invalid value '{value}' for key '{key}'")]
    #[diagnostic(code(sqlintent::config::invalid_value))]
    InvalidValue { key: String, value: String },

    /// The last load of a reloadable config failed
    #[error("config '{}' is not loaded", .path.display())]
    #[diagnostic(
        code(sqlintent::config::not_loaded),
        help("fix the file and wait for the next reload")
    )]
    NotLoaded { path: PathBuf },

    /// The config file could not be read
    #[error("failed to read config '{}'", .path.display())]
    #[diagnostic(code(sqlintent::config::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// True for a missing key, as opposed to a present but unusable one
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::NotFound(_))
    }
}
