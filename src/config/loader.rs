// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration discovery and parsing.

use crate::error::{CheckError, ConfigError, Result};
use std::path::{Path, PathBuf};

use super::default::builtin_config;
use super::schema::CheckConfig;

/// Configuration file names to search for, in order of priority.
pub const CONFIG_FILES: &[&str] = &[".check-commit.yml", ".check-commit.yaml", ".check-commit.toml"];

/// Document syntax, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    /// TOML for `.toml` files, YAML for everything else.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Yaml,
        }
    }
}

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from the default locations, falling back to the
/// built-in taxonomy.
pub fn load_config() -> Result<CheckConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::info!(
                "no config found, using built-in fallback configuration (HAProxy defaults)"
            );
            Ok(builtin_config())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<CheckConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(CheckError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        CheckError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content, ConfigFormat::from_path(path))
}

/// Parse and cross-check a configuration document.
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<CheckConfig> {
    let config: CheckConfig = match format {
        ConfigFormat::Toml => toml::from_str(content).map_err(|e| {
            CheckError::Config(ConfigError::ParseError {
                message: format!("Failed to parse TOML: {}", e),
            })
        })?,
        ConfigFormat::Yaml if content.trim().is_empty() => CheckConfig::default(),
        ConfigFormat::Yaml => parse_yaml(content)?,
    };

    config.validate()?;

    if config.is_empty() {
        tracing::warn!("WARNING: using empty configuration (i.e. no verification)");
    }

    Ok(config)
}

/// Parse YAML, treating a document without content (`---`) as empty.
fn parse_yaml(content: &str) -> Result<CheckConfig> {
    let parse_error = |e: serde_yaml::Error| {
        CheckError::Config(ConfigError::ParseError {
            message: format!("Failed to parse YAML: {}", e),
        })
    };

    let value: serde_yaml::Value = serde_yaml::from_str(content).map_err(parse_error)?;
    if value.is_null() {
        return Ok(CheckConfig::default());
    }
    serde_yaml::from_value(value).map_err(parse_error)
}
