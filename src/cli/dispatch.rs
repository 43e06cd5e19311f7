// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use crate::ci::{self, CommitRange};
use crate::config::CheckConfig;
use crate::error::{CheckError, ConfigError, Result, ResultExt};
use crate::rules::{CheckSummary, SubjectValidator};

use super::args::{CheckArgs, Cli, Commands, InitArgs, SubjectArgs};

/// File written by `init`.
const INIT_CONFIG_FILE: &str = ".check-commit.yml";

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    match cli.effective_command() {
        Commands::Check(args) => run_check(&cli, args),
        Commands::Subject(args) => run_subject(&cli, args),
        Commands::Init(args) => run_init(args),
        Commands::Version => run_version(),
    }
}

/// Load the configuration named on the command line, or discover one.
fn load_config(cli: &Cli) -> Result<CheckConfig> {
    if let Some(config_path) = &cli.config {
        CheckConfig::load_from(config_path)
    } else {
        CheckConfig::load()
    }
}

/// Run the check command.
fn run_check(cli: &Cli, args: CheckArgs) -> Result<()> {
    tracing::debug!("Running check command with args: {:?}", args);

    let config = load_config(cli)?;

    let range = match (args.base, args.source) {
        (Some(base), Some(source)) => CommitRange::manual(base, source),
        _ => ci::detect_range()?,
    };

    let subjects = crate::git::subjects_in_range(&range, args.repo.as_deref())?;
    validate_all(cli, config, subjects)
}

/// Run the subject command.
fn run_subject(cli: &Cli, args: SubjectArgs) -> Result<()> {
    tracing::debug!("Running subject command with {} subjects", args.subjects.len());

    let config = load_config(cli)?;
    validate_all(cli, config, args.subjects)
}

/// Validate every subject in order, then report the aggregate outcome.
fn validate_all(cli: &Cli, config: CheckConfig, subjects: Vec<String>) -> Result<()> {
    let validator = SubjectValidator::new(config);
    let mut summary = CheckSummary::new();

    for subject in subjects {
        let report = validator.validate(&subject);
        if let Some(err) = &report.error {
            tracing::warn!("{}, original subject message '{}'", err, report.subject);
        }
        summary.record(report, cli.format);
    }

    summary.print(cli.format, &validator.config().help_text);

    if summary.is_success() {
        Ok(())
    } else {
        Err(CheckError::SubjectsFailed {
            failed: summary.failed(),
            total: summary.total(),
        })
    }
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    use crate::config::example_config;

    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = std::path::Path::new(INIT_CONFIG_FILE);

    if config_path.exists() && !args.force {
        return Err(CheckError::Config(ConfigError::AlreadyExists {
            path: config_path.to_path_buf(),
        }));
    }

    std::fs::write(config_path, example_config()).context("init")?;

    println!("✓ Created {}", INIT_CONFIG_FILE);

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("check-commit {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}
