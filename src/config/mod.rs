// grm-rs: Git Repository Manager - Rust Port
//
// SPDX-FileCopyrightText: 2026 grm-rs Authors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. grm.toml (cwd, optional)
//! 3. -c/--config files
//! 4. GRM_* env vars
//! 5. CLI arguments
//! ```
//!
//! # Environment Variable Mapping
//!
//! `__` separates section from key, so keys may themselves contain `_`:
//!
//! ```text
//! GRM_GLOBAL__DRY=true              → global.dry = true
//! GRM_GLOBAL__OUTPUT_LOG_LEVEL=5    → global.output_log_level = 5
//! GRM_REPO__BRANCH=develop          → repo.branch = "develop"
//! GRM_REMOTE__NAME=upstream         → remote.name = "upstream"
//! ```
//!
//! There is no process-wide mutable state: a [`Config`] is built once per
//! invocation and handed down by reference.

pub mod loader;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};
use crate::logging::LogLevel;
use crate::repo::{DEFAULT_BRANCH, DEFAULT_REMOTE};

use loader::ConfigLoader;

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Repository defaults.
    pub repo: RepoConfig,
    /// Remote defaults.
    pub remote: RemoteConfig,
}

/// Global options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Console log level (0-5).
    pub output_log_level: LogLevel,
    /// File log level, falls back to `output_log_level` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_log_level: Option<LogLevel>,
    /// Path to log file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    /// Log mutating operations instead of executing them.
    pub dry: bool,
}

/// Repository defaults, overridable per invocation from the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RepoConfig {
    /// Repository path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Files to track, in order. Duplicates are permitted.
    pub tracked_files: Vec<String>,
    /// Branch name for new repositories.
    pub branch: String,
}

impl Default for RepoConfig {
    fn default() -> Self {
        Self {
            path: None,
            tracked_files: Vec::new(),
            branch: DEFAULT_BRANCH.to_string(),
        }
    }
}

/// Remote defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RemoteConfig {
    /// Remote name used when none is given on the command line.
    pub name: String,
    /// Remote URL, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_REMOTE.to_string(),
            url: None,
        }
    }
}

impl Config {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match
    /// the `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validate the merged configuration.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for empty branch or remote names.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.repo.branch.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "repo".to_string(),
                key: "branch".to_string(),
                message: "branch name must not be empty".to_string(),
            }
            .into());
        }
        if self.remote.name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "remote".to_string(),
                key: "name".to_string(),
                message: "remote name must not be empty".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// File log level with fallback to the console level.
    #[must_use]
    pub fn file_log_level(&self) -> LogLevel {
        self.global
            .file_log_level
            .unwrap_or(self.global.output_log_level)
    }
}
