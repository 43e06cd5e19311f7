// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Provider descriptors and range resolution.

use crate::error::{EnvironmentError, Result};

/// Where a CI system publishes the branches of a merge request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CiProvider {
    pub name: &'static str,
    /// Variable holding the branch being merged.
    pub ref_var: &'static str,
    /// Variable holding the branch merged into.
    pub base_var: &'static str,
}

/// Supported providers, in detection order.
pub const KNOWN_PROVIDERS: &[CiProvider] = &[
    CiProvider {
        name: "Github",
        ref_var: "GITHUB_REF",
        base_var: "GITHUB_BASE_REF",
    },
    CiProvider {
        name: "Gitlab",
        ref_var: "CI_MERGE_REQUEST_SOURCE_BRANCH_NAME",
        base_var: "CI_MERGE_REQUEST_TARGET_BRANCH_NAME",
    },
];

/// The commits to check: reachable from `source` but not from `base`, and
/// the other way round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRange {
    /// Provider name, or `manual` for command line overrides.
    pub provider: String,
    pub source: String,
    pub base: String,
}

impl CommitRange {
    /// A range given explicitly on the command line.
    pub fn manual(base: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            provider: "manual".to_string(),
            source: source.into(),
            base: base.into(),
        }
    }

    /// Symmetric-difference revision range for `git log`.
    pub fn revision_range(&self) -> String {
        format!("{}...{}", self.base, self.source)
    }
}

/// Detect the range from the process environment.
pub fn detect_range() -> Result<CommitRange> {
    detect_range_with(KNOWN_PROVIDERS, |name| std::env::var(name).ok())
}

/// Detect the range using `lookup` to read variables.
pub fn detect_range_with<F>(providers: &[CiProvider], lookup: F) -> Result<CommitRange>
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |name: &str| lookup(name).filter(|value| !value.is_empty());

    for provider in providers {
        if let (Some(source), Some(base)) = (non_empty(provider.ref_var), non_empty(provider.base_var)) {
            tracing::info!("detected {} environment", provider.name);
            return Ok(CommitRange {
                provider: provider.name.to_string(),
                source,
                base,
            });
        }
        tracing::debug!(
            "{} not detected ({} / {} unset)",
            provider.name,
            provider.ref_var,
            provider.base_var
        );
    }

    let hint = providers
        .first()
        .map(|p| format!("{} and {}", p.ref_var, p.base_var))
        .unwrap_or_else(|| "--base and --source".to_string());

    Err(EnvironmentError::NotDetected { hint }.into())
}
