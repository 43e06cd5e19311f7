// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// check-commit - commit subject tag validation for CI
///
/// Checks every commit between the target and source branch of a merge
/// request against the configured tag taxonomy.
#[derive(Parser, Debug)]
#[command(name = "check-commit")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Validate commit subject tags and scopes", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to check if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "CHECK_COMMIT_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Check the commits of the current merge request (default command)
    Check(CheckArgs),

    /// Check subjects given on the command line
    Subject(SubjectArgs),

    /// Write the built-in configuration to .check-commit.yml
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Arguments for the check command.
#[derive(Parser, Debug, Default, Clone)]
pub struct CheckArgs {
    /// Target branch; overrides CI detection (requires --source)
    #[arg(long, requires = "source")]
    pub base: Option<String>,

    /// Source branch; overrides CI detection (requires --base)
    #[arg(long, requires = "base")]
    pub source: Option<String>,

    /// Repository to inspect (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub repo: Option<PathBuf>,
}

/// Arguments for the subject command.
#[derive(Parser, Debug, Clone)]
pub struct SubjectArgs {
    /// Subject lines to validate
    #[arg(required = true, value_name = "SUBJECT")]
    pub subjects: Vec<String>,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// Get the effective command, defaulting to Check if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Check(CheckArgs::default()))
    }
}
