//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "sqlintent")]
#[command(author, version, about = "Classify SQL statements the way a routing proxy does")]
#[command(propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Classify statements as reads or writes and show their routing
    Classify {
        /// Files with one statement per line (supports glob patterns)
        files: Vec<PathBuf>,

        /// Statement given inline
        #[arg(short = 'e', long = "sql", value_name = "SQL")]
        sql: Vec<String>,

        /// Classifier implementation (regex, null)
        #[arg(long, value_name = "KIND")]
        classifier: Option<String>,

        /// Configuration file (defaults to sqlintent.toml)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Exit with status 1 if any statement must go to the primary
        #[arg(long)]
        deny_writes: bool,
    },

    /// List the tables each statement references
    Tables {
        /// Files with one statement per line (supports glob patterns)
        files: Vec<PathBuf>,

        /// Statement given inline
        #[arg(short = 'e', long = "sql", value_name = "SQL")]
        sql: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Inspect an operations config file
    Ops {
        /// Operations config file (key=value lines)
        file: PathBuf,

        /// Keys to look up instead of dumping everything
        #[arg(short, long = "key", value_name = "KEY")]
        keys: Vec<String>,

        /// Poll for changes every SECS seconds and reload
        #[arg(long, value_name = "SECS")]
        watch: Option<u64>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON output
    Json,
}
