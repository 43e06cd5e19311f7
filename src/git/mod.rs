// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Commit history is read by invoking the `git` binary.

pub mod log;

pub use log::{parse_subjects, subjects_in_range, SUBJECT_FORMAT, SUBJECT_QUOTE};
