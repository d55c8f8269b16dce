//! CLI command definitions.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::config::OutputFormat;

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Only list failures of this chapter
    #[arg(long, value_name = "CHAPTER")]
    pub chapter: Option<u32>,

    /// Include named failures that are not selectable
    #[arg(short, long)]
    pub all: bool,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,
}

/// Lookup command arguments.
#[derive(Debug, Args)]
pub struct LookupCommand {
    /// Symbolic failure name, e.g. `FmcA`
    pub name: String,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,
}

/// Chapters command arguments.
#[derive(Debug, Args)]
pub struct ChaptersCommand {
    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate a configuration file
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Output format argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// One record per line
    Plain,
    /// Aligned columns
    Table,
    /// JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Plain => Self::Plain,
            FormatArg::Table => Self::Table,
            FormatArg::Json => Self::Json,
        }
    }
}
