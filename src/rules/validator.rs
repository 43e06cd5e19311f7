// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Subject validation against the configured tag order.

use crate::config::{CheckConfig, SubjectLimits};
use crate::error::SubjectError;

use super::matcher::{attempt_match, MatchOutcome, TagCandidate};
use super::report::{SubjectReport, SubjectWarning};

/// Validates commit subjects against one configuration.
#[derive(Debug, Clone)]
pub struct SubjectValidator {
    config: CheckConfig,
}

impl SubjectValidator {
    /// Create a validator owning the given configuration.
    pub fn new(config: CheckConfig) -> Self {
        Self { config }
    }

    /// The configuration subjects are checked against.
    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Validate a subject, collecting consumed tags and warnings.
    pub fn validate(&self, subject: &str) -> SubjectReport {
        let mut report = SubjectReport::new(subject);

        if self.config.is_empty() {
            report.residual = subject.to_string();
            return report;
        }

        let mut remaining = subject;

        for group in &self.config.tag_order {
            let mut last_attempt: Option<TagCandidate> = None;
            let mut satisfied = false;

            // Every alternative sees the remainder left by the ones before it.
            for name in &group.patch_types {
                let Some(patch_type) = self.config.patch_type(name) else {
                    tracing::debug!("Skipping undefined patch type '{}'", name);
                    continue;
                };

                match attempt_match(remaining, patch_type, &self.config) {
                    MatchOutcome::NoTag => {}
                    MatchOutcome::Accepted(candidate) => {
                        tracing::debug!("Accepted tag '{}' as '{}'", candidate, name);
                        remaining = &remaining[candidate.prefix_len..];
                        report.tags.push(candidate);
                        satisfied = true;
                    }
                    MatchOutcome::Rejected(candidate) => {
                        last_attempt = Some(candidate);
                    }
                    MatchOutcome::ScopeUndefined(candidate) => {
                        tracing::warn!(
                            "subject scope problem: '{}' has a scope but patch type '{}' defines none",
                            candidate,
                            name
                        );
                        report.warnings.push(SubjectWarning::ScopeUndefined {
                            patch_type: name.clone(),
                            tag: candidate.to_string(),
                        });
                        last_attempt = Some(candidate);
                    }
                }
            }

            if !satisfied && !group.optional {
                report.residual = remaining.to_string();
                report.error = Some(match last_attempt {
                    Some(candidate) => SubjectError::InvalidTag {
                        tag: candidate.to_string(),
                    },
                    None => SubjectError::MissingTag,
                });
                return report;
            }
        }

        report.residual = remaining.to_string();

        if let Some(warning) = check_spacing(remaining) {
            tracing::warn!("{}", warning);
            report.warnings.push(warning);
        }

        report.error = check_free_text(remaining, &self.config.subject_limits).err();
        report
    }

    /// Validate a subject, keeping only the verdict.
    pub fn check(&self, subject: &str) -> Result<(), SubjectError> {
        match self.validate(subject).error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Flag double, leading or trailing whitespace.
fn check_spacing(text: &str) -> Option<SubjectWarning> {
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized == text {
        None
    } else {
        Some(SubjectWarning::Malformatted {
            text: text.to_string(),
        })
    }
}

/// Apply word and length bounds to the free-text part.
pub fn check_free_text(text: &str, limits: &SubjectLimits) -> Result<(), SubjectError> {
    let words = text.split_whitespace().count();
    let length = text.chars().count();

    if words < limits.min_words {
        return Err(SubjectError::TooFewWords {
            count: words,
            min: limits.min_words,
            subject: text.to_string(),
        });
    }
    if length < limits.min_length {
        return Err(SubjectError::TooShort {
            length,
            min: limits.min_length,
            subject: text.to_string(),
        });
    }
    if words > limits.max_words {
        return Err(SubjectError::TooManyWords {
            count: words,
            max: limits.max_words,
            subject: text.to_string(),
        });
    }
    if length > limits.max_length {
        return Err(SubjectError::TooLong {
            length,
            max: limits.max_length,
            subject: text.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default::{STANDARD_FEATURE, STANDARD_SCOPE};
    use crate::config::{builtin_config, PatchType, TagAlternatives};

    fn haproxy() -> SubjectValidator {
        SubjectValidator::new(builtin_config())
    }

    /// Mandatory severity/area pair followed by an optional component tag.
    fn layered_config() -> CheckConfig {
        let mut config = builtin_config();
        config.patch_types.insert(
            "Component".to_string(),
            PatchType {
                values: vec!["CLI".to_string(), "CORE".to_string()],
                scope: None,
            },
        );
        config.tag_order.push(TagAlternatives {
            patch_types: vec!["Component".to_string()],
            optional: true,
        });
        config
    }

    #[test]
    fn test_accepts_plain_tag() {
        assert!(haproxy().check("BUG: fix the thing properly").is_ok());
    }

    #[test]
    fn test_rejects_lowercase_tag() {
        assert_eq!(
            haproxy().check("bug: fix the thing properly"),
            Err(SubjectError::MissingTag)
        );
    }

    #[test]
    fn test_accepts_scoped_tag() {
        let report = haproxy().validate("BUG/MINOR: fix the thing properly");
        assert!(report.is_valid());
        assert_eq!(report.residual, "fix the thing properly");
        assert_eq!(report.tags.len(), 1);
        assert_eq!(report.tags[0].to_string(), "BUG/MINOR");
    }

    #[test]
    fn test_rejects_unknown_scope() {
        assert_eq!(
            haproxy().check("BUG/UNKNOWN: fix the thing properly"),
            Err(SubjectError::InvalidTag {
                tag: "BUG/UNKNOWN".to_string()
            })
        );
    }

    #[test]
    fn test_accepts_feature_severity() {
        assert!(haproxy().check("MEDIUM: add support for new keyword").is_ok());
    }

    #[test]
    fn test_scope_on_feature_is_warned_and_rejected() {
        let report = haproxy().validate("MINOR/MAJOR: add support for new keyword");
        assert!(!report.is_valid());
        assert!(matches!(
            report.warnings.as_slice(),
            [SubjectWarning::ScopeUndefined { .. }]
        ));
        assert_eq!(
            report.error,
            Some(SubjectError::InvalidTag {
                tag: "MINOR/MAJOR".to_string()
            })
        );
    }

    #[test]
    fn test_too_few_words_after_tag() {
        assert!(matches!(
            haproxy().check("BUG: fix it"),
            Err(SubjectError::TooFewWords { count: 2, min: 3, .. })
        ));
    }

    #[test]
    fn test_too_short_text() {
        assert!(matches!(
            haproxy().check("BUG: a b c"),
            Err(SubjectError::TooShort { length: 5, min: 15, .. })
        ));
    }

    #[test]
    fn test_too_many_words() {
        let subject = format!("BUG: {}", vec!["word"; 16].join(" "));
        assert!(matches!(
            haproxy().check(&subject),
            Err(SubjectError::TooManyWords { count: 16, max: 15, .. })
        ));
    }

    #[test]
    fn test_too_long_text() {
        let subject = format!("BUG: fix {} properly", "x".repeat(100));
        assert!(matches!(
            haproxy().check(&subject),
            Err(SubjectError::TooLong { max: 100, .. })
        ));
    }

    #[test]
    fn test_length_excludes_consumed_prefix() {
        let text = format!("fix the {}", "y".repeat(92));
        assert_eq!(text.len(), 100);
        assert!(haproxy().check(&format!("BUG/CRITICAL: {}", text)).is_ok());
    }

    #[test]
    fn test_double_space_warns_only() {
        let report = haproxy().validate("BUG: fix  the thing properly ");
        assert!(report.is_valid());
        assert!(matches!(
            report.warnings.as_slice(),
            [SubjectWarning::Malformatted { .. }]
        ));
    }

    #[test]
    fn test_empty_config_accepts_everything() {
        let validator = SubjectValidator::new(CheckConfig::default());
        for subject in ["", "x", "bug: whatever", &"z".repeat(500)] {
            let report = validator.validate(subject);
            assert!(report.is_valid());
            assert_eq!(report.residual, subject);
        }
    }

    #[test]
    fn test_optional_group_absent() {
        let validator = SubjectValidator::new(layered_config());
        let report = validator.validate("BUG: fix the thing properly");
        assert!(report.is_valid());
        assert_eq!(report.residual, "fix the thing properly");
    }

    #[test]
    fn test_optional_group_present() {
        let validator = SubjectValidator::new(layered_config());
        let report = validator.validate("BUG/MAJOR: CLI: fix the thing properly");
        assert!(report.is_valid());
        assert_eq!(report.tags.len(), 2);
        assert_eq!(report.residual, "fix the thing properly");
    }

    #[test]
    fn test_only_optional_group() {
        let mut config = layered_config();
        config.tag_order.remove(0);
        let validator = SubjectValidator::new(config);

        let report = validator.validate("fix the thing properly");
        assert!(report.is_valid());
        assert_eq!(report.residual, "fix the thing properly");
    }

    #[test]
    fn test_group_consumes_every_accepted_alternative() {
        let validator = haproxy();

        let report = validator.validate("BUG: MINOR: fix it now");
        assert_eq!(report.tags.len(), 2);
        assert_eq!(report.tags[1].to_string(), "MINOR");
        assert_eq!(report.residual, "fix it now");
        assert_eq!(
            report.error,
            Some(SubjectError::TooShort {
                length: 10,
                min: 15,
                subject: "fix it now".to_string()
            })
        );

        let report = validator.validate("BUG: MINOR: fix the thing properly");
        assert!(report.is_valid());
        assert_eq!(report.residual, "fix the thing properly");
    }

    #[test]
    fn test_scope_warning_then_later_alternative_accepts() {
        let mut config = builtin_config();
        config.patch_types.insert(
            "Scoped Feature".to_string(),
            PatchType {
                values: vec!["MINOR".to_string(), "MAJOR".to_string()],
                scope: Some(STANDARD_SCOPE.to_string()),
            },
        );
        config.tag_order[0].patch_types =
            vec![STANDARD_FEATURE.to_string(), "Scoped Feature".to_string()];
        let validator = SubjectValidator::new(config);

        let report = validator.validate("MINOR/MAJOR: add support for new keyword");
        assert!(report.is_valid());
        assert_eq!(
            report.warnings,
            vec![SubjectWarning::ScopeUndefined {
                patch_type: STANDARD_FEATURE.to_string(),
                tag: "MINOR/MAJOR".to_string(),
            }]
        );
        assert_eq!(report.tags.len(), 1);
        assert_eq!(report.tags[0].to_string(), "MINOR/MAJOR");
        assert_eq!(report.residual, "add support for new keyword");
    }

    #[test]
    fn test_second_mandatory_group_missing() {
        let mut config = layered_config();
        config.tag_order[1].optional = false;
        let validator = SubjectValidator::new(config);

        assert_eq!(
            validator.check("BUG: fix the thing properly"),
            Err(SubjectError::MissingTag)
        );
        assert_eq!(
            validator.check("BUG: DOC: fix the thing properly"),
            Err(SubjectError::InvalidTag {
                tag: "DOC".to_string()
            })
        );
    }

    #[test]
    fn test_repeated_validation_is_stable() {
        let validator = haproxy();
        for subject in ["BUG: fix the thing properly", "BUG: fix it"] {
            let first = validator.check(subject);
            let second = validator.check(subject);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_custom_limits() {
        let mut config = builtin_config();
        config.subject_limits.max_length = 20;
        let validator = SubjectValidator::new(config);
        assert!(matches!(
            validator.check("DOC: describe the new option"),
            Err(SubjectError::TooLong { max: 20, .. })
        ));
    }
}
