//! CLI parse: clap types for coursescore. No behavior; definitions only.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Coursescore CLI - completion and scoring sets over course content
#[derive(Parser)]
#[command(name = "coursescore")]
#[command(about = "Completion and scoring sets over hierarchical course content")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Course content JSON file (overrides content.path)
    #[arg(long)]
    pub content: Option<PathBuf>,

    /// Disable logging
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Debug level logging
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (when output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Course-wide completion and score with one row per registered set
    Report {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List registered sets
    Sets {
        /// Only sets of this type
        #[arg(long = "type")]
        set_type: Option<String>,
        /// Only sets whose items intersect this item's hierarchy
        #[arg(long)]
        item: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Resolve a dotted set path (e.g. engagement.a-05) and show the resulting set
    Show {
        path: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Mark items complete and report the set transitions this causes
    Complete {
        #[arg(required = true)]
        items: Vec<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the effective configuration as TOML
    Config,
}
