// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Field names follow the `.check-commit.yml` format (`PatchScopes`,
//! `PatchTypes`, `TagOrder`, `HelpText`) so existing files load unchanged.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The main configuration structure for check-commit.
///
/// `Default` is the empty configuration, which disables verification.
/// The built-in taxonomy lives in [`super::builtin_config`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "PascalCase")]
pub struct CheckConfig {
    /// Scope name to allowed scope values.
    pub patch_scopes: HashMap<String, Vec<String>>,

    /// Patch type name to its definition.
    pub patch_types: HashMap<String, PatchType>,

    /// Required sequence of tag annotations, left to right.
    pub tag_order: Vec<TagAlternatives>,

    /// Guidance printed when at least one subject fails.
    pub help_text: String,

    /// Bounds applied to the free-text part of the subject.
    pub subject_limits: SubjectLimits,
}

impl CheckConfig {
    /// Load configuration from the default locations.
    pub fn load() -> Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        super::loader::load_config_from(path)
    }

    /// True when no scopes, patch types or tag groups are defined.
    ///
    /// Such a configuration accepts every subject.
    pub fn is_empty(&self) -> bool {
        self.patch_scopes.is_empty() && self.patch_types.is_empty() && self.tag_order.is_empty()
    }

    /// Allowed values of the named scope.
    pub fn scope_values(&self, name: &str) -> Option<&[String]> {
        self.patch_scopes.get(name).map(Vec::as_slice)
    }

    /// Look up a patch type by name.
    pub fn patch_type(&self, name: &str) -> Option<&PatchType> {
        self.patch_types.get(name)
    }

    /// Check cross references between the sections.
    pub fn validate(&self) -> Result<()> {
        for (name, patch_type) in &self.patch_types {
            if let Some(scope) = patch_type.bound_scope() {
                if !self.patch_scopes.contains_key(scope) {
                    return Err(ConfigError::UnknownScope {
                        patch_type: name.clone(),
                        scope: scope.to_string(),
                    }
                    .into());
                }
            }
        }

        for (position, group) in self.tag_order.iter().enumerate() {
            if let Some(missing) = group
                .patch_types
                .iter()
                .find(|name| !self.patch_types.contains_key(name.as_str()))
            {
                return Err(ConfigError::UnknownPatchType {
                    position,
                    patch_type: missing.clone(),
                }
                .into());
            }
        }

        self.subject_limits.validate()
    }
}

/// A named set of allowed tags, optionally bound to a scope.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "PascalCase")]
pub struct PatchType {
    /// Allowed tag values.
    pub values: Vec<String>,

    /// Name of the scope set that validates `TAG/SCOPE` annotations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

impl PatchType {
    /// Whether `tag` is one of the allowed values.
    pub fn allows_tag(&self, tag: &str) -> bool {
        self.values.iter().any(|v| v == tag)
    }

    /// The bound scope name, treating an empty string as unset.
    pub fn bound_scope(&self) -> Option<&str> {
        self.scope.as_deref().filter(|s| !s.is_empty())
    }
}

/// One position in the tag sequence.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "PascalCase")]
pub struct TagAlternatives {
    /// Interchangeable patch types, tried in order.
    pub patch_types: Vec<String>,

    /// Whether the position may be absent entirely.
    pub optional: bool,
}

/// Word and character bounds for the free-text part of a subject.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "PascalCase")]
pub struct SubjectLimits {
    pub min_words: usize,
    pub min_length: usize,
    pub max_words: usize,
    pub max_length: usize,
}

impl Default for SubjectLimits {
    fn default() -> Self {
        Self {
            min_words: 3,
            min_length: 15,
            max_words: 15,
            max_length: 100,
        }
    }
}

impl SubjectLimits {
    fn validate(&self) -> Result<()> {
        if self.min_words > self.max_words {
            return Err(ConfigError::InvalidValue {
                key: "SubjectLimits.MinWords".to_string(),
                message: format!("{} exceeds MaxWords {}", self.min_words, self.max_words),
            }
            .into());
        }
        if self.min_length > self.max_length {
            return Err(ConfigError::InvalidValue {
                key: "SubjectLimits.MinLength".to_string(),
                message: format!("{} exceeds MaxLength {}", self.min_length, self.max_length),
            }
            .into());
        }
        Ok(())
    }
}
