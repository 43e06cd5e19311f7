// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Per-subject results and their terminal/JSON rendering.

use crate::cli::args::OutputFormat;
use crate::error::SubjectError;
use console::style;
use std::fmt;

use super::matcher::TagCandidate;

/// A non-fatal finding on a subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubjectWarning {
    /// A scope was given for a patch type that has no scope set.
    ScopeUndefined { patch_type: String, tag: String },
    /// Leading, trailing or repeated whitespace in the free text.
    Malformatted { text: String },
}

impl SubjectWarning {
    /// Stable code for machine-readable output.
    pub fn code(&self) -> &'static str {
        match self {
            SubjectWarning::ScopeUndefined { .. } => "scope-undefined",
            SubjectWarning::Malformatted { .. } => "subject-spacing",
        }
    }
}

impl fmt::Display for SubjectWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubjectWarning::ScopeUndefined { patch_type, tag } => write!(
                f,
                "subject scope problem: '{}' carries a scope but '{}' defines none",
                tag, patch_type
            ),
            SubjectWarning::Malformatted { text } => write!(
                f,
                "malformatted subject string (trailing or double spaces?): '{}'",
                text
            ),
        }
    }
}

/// Outcome of validating one subject.
#[derive(Debug, Clone)]
pub struct SubjectReport {
    /// The subject as given.
    pub subject: String,
    /// Annotations consumed, in order.
    pub tags: Vec<TagCandidate>,
    /// Text left after the consumed annotations.
    pub residual: String,
    pub warnings: Vec<SubjectWarning>,
    pub error: Option<SubjectError>,
}

impl SubjectReport {
    /// Create an empty, passing report.
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            tags: Vec::new(),
            residual: String::new(),
            warnings: Vec::new(),
            error: None,
        }
    }

    /// Check if the subject passed.
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Format the report for terminal output.
    pub fn format(&self) -> String {
        let mut output = match &self.error {
            None => format!("{} {}", style("✓").green().bold(), self.subject),
            Some(err) => format!(
                "{} {}, original subject message '{}'",
                style("✗").red().bold(),
                style(err).red(),
                self.subject
            ),
        };

        for warning in &self.warnings {
            output.push_str(&format!(
                "\n  {} {}",
                style("⚠").yellow().bold(),
                style(warning).yellow()
            ));
        }

        output
    }

    /// JSON representation.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "subject": self.subject,
            "valid": self.is_valid(),
            "tags": self.tags.iter().map(|t| t.to_string()).collect::<Vec<_>>(),
            "text": self.residual,
            "error": self.error.as_ref().map(|e| {
                serde_json::json!({
                    "code": e.code(),
                    "message": e.to_string(),
                })
            }),
            "warnings": self.warnings.iter().map(|w| {
                serde_json::json!({
                    "code": w.code(),
                    "message": w.to_string(),
                })
            }).collect::<Vec<_>>(),
        })
    }
}

/// Collects reports over a run and decides the final verdict.
#[derive(Debug, Default)]
pub struct CheckSummary {
    pub reports: Vec<SubjectReport>,
}

impl CheckSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a report, printing it straight away in text mode.
    pub fn record(&mut self, report: SubjectReport, format: Option<OutputFormat>) {
        if format != Some(OutputFormat::Json) {
            if report.is_valid() {
                tracing::debug!("valid subject '{}'", report.subject);
            } else {
                println!("{}", report.format());
            }
        }
        self.reports.push(report);
    }

    pub fn total(&self) -> usize {
        self.reports.len()
    }

    pub fn failed(&self) -> usize {
        self.reports.iter().filter(|r| !r.is_valid()).count()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// Print the closing lines.
    pub fn print(&self, format: Option<OutputFormat>, help_text: &str) {
        match format {
            Some(OutputFormat::Json) => self.print_json(help_text),
            _ => self.print_text(help_text),
        }
    }

    fn print_text(&self, help_text: &str) {
        if self.is_success() {
            println!(
                "{} check completed without errors ({} subjects)",
                style("✓").green().bold(),
                self.total()
            );
        } else {
            println!(
                "{} encountered one or more commit message errors ({} of {})",
                style("✗").red().bold(),
                self.failed(),
                self.total()
            );
            if !help_text.is_empty() {
                println!("  {} {}", style("→").dim(), style(help_text).dim());
            }
        }
    }

    fn print_json(&self, help_text: &str) {
        let help = (!self.is_success()).then_some(help_text);
        let json = serde_json::json!({
            "valid": self.is_success(),
            "total": self.total(),
            "failed": self.failed(),
            "help": help,
            "subjects": self.reports.iter().map(SubjectReport::to_json).collect::<Vec<_>>(),
        });

        println!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_default()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failing_report() -> SubjectReport {
        let mut report = SubjectReport::new("bug: fix");
        report.error = Some(SubjectError::MissingTag);
        report
    }

    #[test]
    fn test_report_valid() {
        let report = SubjectReport::new("BUG: fix the thing properly");
        assert!(report.is_valid());
        assert!(report.format().contains("BUG: fix the thing properly"));
    }

    #[test]
    fn test_report_format_error() {
        let formatted = failing_report().format();
        assert!(formatted.contains("invalid tag or no tag found"));
        assert!(formatted.contains("original subject message 'bug: fix'"));
    }

    #[test]
    fn test_report_json() {
        let mut report = failing_report();
        report.warnings.push(SubjectWarning::Malformatted {
            text: "fix ".to_string(),
        });
        let json = report.to_json();
        assert_eq!(json["valid"], false);
        assert_eq!(json["error"]["code"], "invalid-tag");
        assert_eq!(json["warnings"][0]["code"], "subject-spacing");
    }

    #[test]
    fn test_summary_counts() {
        let mut summary = CheckSummary::new();
        assert!(summary.is_success());

        summary.record(SubjectReport::new("BUG: fix the thing properly"), Some(OutputFormat::Json));
        summary.record(failing_report(), Some(OutputFormat::Json));

        assert_eq!(summary.total(), 2);
        assert_eq!(summary.failed(), 1);
        assert!(!summary.is_success());
    }

    #[test]
    fn test_warning_display() {
        let warning = SubjectWarning::ScopeUndefined {
            patch_type: "Feature".to_string(),
            tag: "MINOR/MAJOR".to_string(),
        };
        assert!(warning.to_string().starts_with("subject scope problem"));
        assert_eq!(warning.code(), "scope-undefined");
    }
}
