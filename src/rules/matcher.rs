// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Leading `TAG: ` / `TAG/SCOPE: ` recognition.

use crate::config::{CheckConfig, PatchType};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    /// Uppercase tag, optional uppercase scope, then colon and space.
    static ref TAG_PREFIX_REGEX: Regex =
        Regex::new(r"^(?P<tag>[A-Z]+)(?:/(?P<scope>[A-Z]+))?: ").unwrap();
}

/// A tag/scope pair extracted from the front of a subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCandidate {
    pub tag: String,
    pub scope: Option<String>,
    /// Byte length of the whole prefix, separator included.
    pub prefix_len: usize,
}

impl TagCandidate {
    /// Extract the leading annotation, if any.
    pub fn parse(remaining: &str) -> Option<Self> {
        let captures = TAG_PREFIX_REGEX.captures(remaining)?;
        let whole = captures.get(0)?;

        Some(Self {
            tag: captures.name("tag")?.as_str().to_string(),
            scope: captures.name("scope").map(|m| m.as_str().to_string()),
            prefix_len: whole.end(),
        })
    }
}

impl fmt::Display for TagCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.scope {
            Some(scope) => write!(f, "{}/{}", self.tag, scope),
            None => write!(f, "{}", self.tag),
        }
    }
}

/// Result of trying one patch type at the current position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// No annotation at the front of the subject.
    NoTag,
    /// The pair is valid for this patch type; its prefix may be consumed.
    Accepted(TagCandidate),
    /// Unknown tag, or scope outside the bound scope set.
    Rejected(TagCandidate),
    /// Valid tag carrying a scope, but the patch type has no scope set.
    ScopeUndefined(TagCandidate),
}

impl MatchOutcome {
    /// The extracted pair, whatever the verdict.
    pub fn candidate(&self) -> Option<&TagCandidate> {
        match self {
            MatchOutcome::NoTag => None,
            MatchOutcome::Accepted(c)
            | MatchOutcome::Rejected(c)
            | MatchOutcome::ScopeUndefined(c) => Some(c),
        }
    }
}

/// Try `patch_type` against the front of `remaining`.
///
/// Never consumes anything; the caller advances past
/// [`TagCandidate::prefix_len`] on [`MatchOutcome::Accepted`].
pub fn attempt_match(remaining: &str, patch_type: &PatchType, config: &CheckConfig) -> MatchOutcome {
    let Some(candidate) = TagCandidate::parse(remaining) else {
        return MatchOutcome::NoTag;
    };

    if !patch_type.allows_tag(&candidate.tag) {
        return MatchOutcome::Rejected(candidate);
    }

    let Some(scope) = candidate.scope.as_deref() else {
        return MatchOutcome::Accepted(candidate);
    };

    let Some(scope_name) = patch_type.bound_scope() else {
        return MatchOutcome::ScopeUndefined(candidate);
    };

    let allowed = config
        .scope_values(scope_name)
        .is_some_and(|values| values.iter().any(|v| v == scope));

    if allowed {
        MatchOutcome::Accepted(candidate)
    } else {
        MatchOutcome::Rejected(candidate)
    }
}
