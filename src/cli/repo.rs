// grm-rs: Git Repository Manager - Rust Port
//
// SPDX-FileCopyrightText: 2026 grm-rs Authors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-subcommand argument structs.
//!
//! ```text
//! init REPO_PATH [TRACKED_FILES] [--branch NAME]
//!   → bootstrap sequence
//! add REPO_PATH [TRACKED_FILES]
//!   → stage each file
//! push REPO_PATH [--remote NAME] [--branch NAME]
//!   → defaults from [remote] / [repo] config
//! ```
//!
//! `TRACKED_FILES` is a comma-separated list relative to the repository
//! path; when left out it falls back to `repo.tracked_files` from the
//! configuration.

use clap::Args;
use std::path::PathBuf;

/// Arguments for subcommands that only need the repository path.
#[derive(Debug, Clone, Args)]
pub struct RepoArgs {
    /// Repository path.
    #[arg(value_name = "REPO_PATH")]
    pub repo_path: PathBuf,
}

/// Arguments for the init subcommand.
#[derive(Debug, Clone, Args)]
pub struct InitArgs {
    /// Repository path.
    #[arg(value_name = "REPO_PATH")]
    pub repo_path: PathBuf,

    /// Comma-separated list of files to track.
    /// Falls back to `repo.tracked_files` from the config.
    #[arg(value_name = "TRACKED_FILES")]
    pub tracked_files: Option<String>,

    /// Branch name for the new repository.
    #[arg(short = 'b', long, value_name = "NAME")]
    pub branch: Option<String>,
}

/// Arguments for the add subcommand.
#[derive(Debug, Clone, Args)]
pub struct AddArgs {
    /// Repository path.
    #[arg(value_name = "REPO_PATH")]
    pub repo_path: PathBuf,

    /// Comma-separated list of files to add.
    /// Falls back to `repo.tracked_files` from the config.
    #[arg(value_name = "TRACKED_FILES")]
    pub tracked_files: Option<String>,
}

/// Arguments for the commit subcommand.
#[derive(Debug, Clone, Args)]
pub struct CommitArgs {
    /// Repository path.
    #[arg(value_name = "REPO_PATH")]
    pub repo_path: PathBuf,

    /// Commit message. A timestamped default is synthesized when omitted.
    #[arg(short = 'm', long, value_name = "MSG")]
    pub message: Option<String>,
}

/// Arguments for the push subcommand.
#[derive(Debug, Clone, Args)]
pub struct PushArgs {
    /// Repository path.
    #[arg(value_name = "REPO_PATH")]
    pub repo_path: PathBuf,

    /// Remote name. Defaults to `remote.name` from the config ("origin").
    #[arg(short = 'r', long, value_name = "NAME")]
    pub remote: Option<String>,

    /// Branch to push. Defaults to `repo.branch` from the config.
    #[arg(short = 'b', long, value_name = "NAME")]
    pub branch: Option<String>,
}

/// Arguments for the switch-branch subcommand.
#[derive(Debug, Clone, Args)]
pub struct SwitchBranchArgs {
    /// Repository path.
    #[arg(value_name = "REPO_PATH")]
    pub repo_path: PathBuf,

    /// Branch name to switch to.
    #[arg(value_name = "BRANCH")]
    pub branch: String,
}

/// Arguments for the add-remote subcommand.
#[derive(Debug, Clone, Args)]
pub struct AddRemoteArgs {
    /// Repository path.
    #[arg(value_name = "REPO_PATH")]
    pub repo_path: PathBuf,

    /// Remote name.
    #[arg(value_name = "NAME")]
    pub remote_name: String,

    /// Remote URL.
    #[arg(value_name = "URL")]
    pub remote_url: String,
}
