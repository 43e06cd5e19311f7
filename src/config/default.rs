// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in fallback taxonomy (HAProxy conventions).

use std::collections::HashMap;

use super::schema::{CheckConfig, PatchType, SubjectLimits, TagAlternatives};

pub const STANDARD_SCOPE: &str = "HAProxy Standard Scope";
pub const STANDARD_PATCH: &str = "HAProxy Standard Patch";
pub const STANDARD_FEATURE: &str = "HAProxy Standard Feature Commit";

const GUIDELINES: &str =
    "Please refer to https://github.com/haproxy/haproxy/blob/master/CONTRIBUTING#L632";

const SEVERITIES: &[&str] = &["MINOR", "MEDIUM", "MAJOR", "CRITICAL"];

const PATCH_TAGS: &[&str] = &[
    "BUG", "BUILD", "CLEANUP", "DOC", "LICENSE", "OPTIM", "RELEASE", "REORG", "TEST", "REVERT",
];

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// The configuration used when no configuration file is found.
///
/// A single mandatory tag position accepting either a standard patch tag
/// (optionally scoped by severity) or a bare severity for feature commits.
pub fn builtin_config() -> CheckConfig {
    let mut patch_types = HashMap::new();
    patch_types.insert(
        STANDARD_PATCH.to_string(),
        PatchType {
            values: owned(PATCH_TAGS),
            scope: Some(STANDARD_SCOPE.to_string()),
        },
    );
    patch_types.insert(
        STANDARD_FEATURE.to_string(),
        PatchType {
            values: owned(SEVERITIES),
            scope: None,
        },
    );

    CheckConfig {
        patch_scopes: HashMap::from([(STANDARD_SCOPE.to_string(), owned(SEVERITIES))]),
        patch_types,
        tag_order: vec![TagAlternatives {
            patch_types: vec![STANDARD_PATCH.to_string(), STANDARD_FEATURE.to_string()],
            optional: false,
        }],
        help_text: GUIDELINES.to_string(),
        subject_limits: SubjectLimits::default(),
    }
}

/// The built-in taxonomy as a `.check-commit.yml` document.
pub fn example_config() -> &'static str {
    r#"# check-commit configuration
# Author: Eshan Roy
# SPDX-License-Identifier: MIT
---
HelpText: "Please refer to https://github.com/haproxy/haproxy/blob/master/CONTRIBUTING#L632"

# Named sets of values allowed after the slash in TAG/SCOPE
PatchScopes:
  HAProxy Standard Scope:
    - MINOR
    - MEDIUM
    - MAJOR
    - CRITICAL

# Named sets of tags, optionally bound to one of the scopes above
PatchTypes:
  HAProxy Standard Patch:
    Values:
      - BUG
      - BUILD
      - CLEANUP
      - DOC
      - LICENSE
      - OPTIM
      - RELEASE
      - REORG
      - TEST
      - REVERT
    Scope: HAProxy Standard Scope
  HAProxy Standard Feature Commit:
    Values:
      - MINOR
      - MEDIUM
      - MAJOR
      - CRITICAL

# Tag positions a subject must carry, in order
TagOrder:
  - PatchTypes:
    - HAProxy Standard Patch
    - HAProxy Standard Feature Commit

# Bounds for the text after the tags
SubjectLimits:
  MinWords: 3
  MinLength: 15
  MaxWords: 15
  MaxLength: 100
"#
}
