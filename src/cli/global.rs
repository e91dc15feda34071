// grm-rs: Git Repository Manager - Rust Port
//
// SPDX-FileCopyrightText: 2026 grm-rs Authors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! ```text
//! -c, --config FILE ← Additional config files (can repeat)
//!     --dry         ← Log mutating ops instead of executing
//! -v, --verbose     ← Debug-level console logging
//! -l, --log-level N ← Console verbosity (0-5), overrides --verbose
//!     --log-file    ← Also log to a file
//!
//! Precedence: CLI flags > GRM_* env > --config > grm.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Logs mutating git and filesystem operations instead of executing
    /// them. Read-only queries still run.
    #[arg(long)]
    pub dry: bool,

    /// Enables verbose (debug-level) logging.
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    /// Overrides --verbose.
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl GlobalOptions {
    /// Applies command-line overrides on top of a loaded configuration.
    /// CLI flags always win over file and environment values.
    pub fn apply_overrides(&self, config: &mut crate::config::Config) {
        if let Some(level) = self.console_level()
            && let Some(level) = crate::logging::LogLevel::from_u8(level)
        {
            config.global.output_log_level = level;
        }

        if let Some(ref path) = self.log_file {
            config.global.log_file = Some(path.clone());
        }

        if self.dry {
            config.global.dry = true;
        }
    }

    /// Effective console log level from --log-level / --verbose, if either
    /// was given.
    #[must_use]
    pub const fn console_level(&self) -> Option<u8> {
        match self.log_level {
            Some(level) => Some(level),
            None if self.verbose => Some(4),
            None => None,
        }
    }
}
