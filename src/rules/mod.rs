// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Subject tag matching and validation.
//!
//! [`attempt_match`] recognizes one leading annotation for one patch type.
//! [`SubjectValidator`] walks the configured tag order, advancing past
//! accepted annotations, and then checks the remaining free text.

mod matcher;
mod report;
mod validator;

pub use matcher::{attempt_match, MatchOutcome, TagCandidate};
pub use report::{CheckSummary, SubjectReport, SubjectWarning};
pub use validator::{check_free_text, SubjectValidator};
