// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CI environment detection.
//!
//! Each supported CI system exposes the source and target branch of a merge
//! request through its own pair of variables. Providers are checked in order
//! and the first one with both variables set wins.

mod provider;

pub use provider::{detect_range, detect_range_with, CiProvider, CommitRange, KNOWN_PROVIDERS};
