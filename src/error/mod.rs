// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for check-commit.
//!
//! Fatal errors (configuration, environment detection, history retrieval)
//! abort the run. Per-subject findings are [`SubjectError`]s, collected by
//! the caller and only turned into a fatal [`CheckError::SubjectsFailed`]
//! once every subject has been examined.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for check-commit operations.
#[derive(Error, Debug)]
pub enum CheckError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // CI environment detection errors
    #[error("Environment error: {0}")]
    Environment(#[from] EnvironmentError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Aggregated subject failures
    #[error("{failed} of {total} commit subjects failed validation")]
    SubjectsFailed { failed: usize, total: usize },

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Patch type '{patch_type}' refers to undefined scope '{scope}'")]
    UnknownScope { patch_type: String, scope: String },

    #[error("Tag order entry {position} refers to undefined patch type '{patch_type}'")]
    UnknownPatchType { position: usize, patch_type: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },
}

/// CI environment detection errors.
#[derive(Error, Debug)]
pub enum EnvironmentError {
    #[error("no suitable git environment variables found, please set {hint} manually")]
    NotDetected { hint: String },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to run {command}: {message}")]
    SpawnFailed { command: String, message: String },

    #[error("Git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    #[error("Git output is not valid UTF-8: {message}")]
    InvalidOutput { message: String },
}

/// Why a single commit subject was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubjectError {
    #[error("invalid tag or no tag found: '{tag}'")]
    InvalidTag { tag: String },

    /// No alternative of the failing tag position extracted a `TAG:` prefix.
    /// Pairs tried at earlier positions are not carried over.
    #[error("invalid tag or no tag found")]
    MissingTag,

    #[error("too short commit subject [words {count} < {min}] '{subject}'")]
    TooFewWords {
        count: usize,
        min: usize,
        subject: String,
    },

    #[error("too short commit subject [len {length} < {min}] '{subject}'")]
    TooShort {
        length: usize,
        min: usize,
        subject: String,
    },

    #[error("too long commit subject [words {count} > {max} - use msg body] '{subject}'")]
    TooManyWords {
        count: usize,
        max: usize,
        subject: String,
    },

    #[error("too long commit subject [len {length} > {max}] '{subject}'")]
    TooLong {
        length: usize,
        max: usize,
        subject: String,
    },
}

impl SubjectError {
    /// Stable code for machine-readable output.
    pub fn code(&self) -> &'static str {
        match self {
            SubjectError::InvalidTag { .. } | SubjectError::MissingTag => "invalid-tag",
            SubjectError::TooFewWords { .. } => "subject-min-words",
            SubjectError::TooShort { .. } => "subject-min-length",
            SubjectError::TooManyWords { .. } => "subject-max-words",
            SubjectError::TooLong { .. } => "subject-max-length",
        }
    }
}

/// Result type alias for check-commit operations.
pub type Result<T> = std::result::Result<T, CheckError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CheckError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
