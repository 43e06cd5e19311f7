// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for check-commit.
//!
//! Loads the tag taxonomy from `.check-commit.yml` (or `.toml`), falling
//! back to the built-in HAProxy conventions when no file is present.

pub mod default;
mod loader;
mod schema;

pub use default::{builtin_config, example_config};
pub use loader::{
    find_config_file, find_config_file_from, load_config, load_config_from, parse_config,
    ConfigFormat, CONFIG_FILES,
};
pub use schema::*;
