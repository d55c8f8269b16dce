//! Command-line interface for a380-failures.
//!
//! This module provides the CLI structure for the `a380fail` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{ChaptersCommand, ConfigCommand, FormatArg, ListCommand, LookupCommand};

use crate::logging::Verbosity;

/// a380fail - Inspect the A380 failure registry
///
/// Lists the selectable failure catalog, resolves failure names to their
/// identifiers, and checks that the failure tables are consistent.
#[derive(Debug, Parser)]
#[command(name = "a380fail")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List selectable failures in display order
    List(ListCommand),

    /// Resolve a failure name to its identifier
    Lookup(LookupCommand),

    /// List chapters with their failure counts
    Chapters(ChaptersCommand),

    /// Build the registry and report its consistency
    Check,

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::Trace,
            }
        }
    }
}
