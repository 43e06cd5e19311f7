// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! check-commit - commit subject tag validation for CI pipelines
//!
//! Enforces a `TAG/SCOPE: subject text` convention on every commit of a
//! merge request.
//!
//! # Features
//!
//! - **Tag Taxonomy**: Named scopes and patch types, arranged in an ordered
//!   sequence of tag positions, some of them optional
//! - **Free-Text Heuristics**: Word count and length bounds on the subject text
//! - **CI Detection**: Source and target branches read from GitHub or GitLab
//! - **Configuration**: `.check-commit.yml` or `.check-commit.toml`, with a
//!   built-in fallback
//!
//! # Example
//!
//! ```
//! use check_commit::config::builtin_config;
//! use check_commit::rules::SubjectValidator;
//!
//! let validator = SubjectValidator::new(builtin_config());
//!
//! assert!(validator.check("BUG/MINOR: fix the thing properly").is_ok());
//! assert!(validator.check("BUG: fix it").is_err());
//! ```

// Module declarations
pub mod ci;
pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod rules;

// Re-exports for convenience
pub use config::CheckConfig;
pub use error::{CheckError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of check-commit.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
