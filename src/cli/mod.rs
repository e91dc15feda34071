// grm-rs: Git Repository Manager - Rust Port
//
// SPDX-FileCopyrightText: 2026 grm-rs Authors
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for grm-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! grm [global options] <command>
//! interactive
//! init REPO_PATH TRACKED_FILES [--branch NAME]
//! add REPO_PATH TRACKED_FILES
//! commit REPO_PATH [--message MSG]
//! status | log | diff | list-branches  REPO_PATH
//! push REPO_PATH [--remote NAME] [--branch NAME]
//! switch-branch REPO_PATH BRANCH
//! add-remote REPO_PATH NAME URL
//! ```
//!
//! No subcommand defaults to interactive mode.

pub mod global;
pub mod repo;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use crate::cli::repo::{
    AddArgs, AddRemoteArgs, CommitArgs, InitArgs, PushArgs, RepoArgs, SwitchBranchArgs,
};
use clap::{Parser, Subcommand};

/// Git Repository Manager - Rust Port
///
/// Manages a git repository for one or more user-specified files.
#[derive(Debug, Parser)]
#[command(
    name = "grm",
    author,
    version,
    about = "Git Repository Manager",
    long_about = "grm-rs Copyright (C) 2026 grm-rs Authors\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  A convenience wrapper around the git binary: idempotently\n\
                  bootstraps a repository for a set of tracked files, then\n\
                  offers pass-through stage/commit/push/inspect operations.\n\
                  Run without a subcommand for interactive mode.",
    after_help = "CONFIG FILES:\n\n\
                  By default, grm looks for an optional `grm.toml` in the current\n\
                  directory. Additional TOML files can be specified with --config;\n\
                  later files override earlier ones, GRM_* environment variables\n\
                  override files, and command-line arguments override everything."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Runs in interactive mode (the default without a subcommand).
    Interactive,

    /// Initializes a repository with tracked files.
    Init(InitArgs),

    /// Adds tracked files to the staging area.
    Add(AddArgs),

    /// Commits staged changes.
    Commit(CommitArgs),

    /// Shows the repository status.
    Status(RepoArgs),

    /// Pushes committed changes to a remote.
    Push(PushArgs),

    /// Shows the commit log history.
    Log(RepoArgs),

    /// Shows the diff of unstaged changes.
    Diff(RepoArgs),

    /// Lists all branches.
    #[command(name = "list-branches")]
    ListBranches(RepoArgs),

    /// Switches to a different branch.
    #[command(name = "switch-branch")]
    SwitchBranch(SwitchBranchArgs),

    /// Adds or updates a remote repository.
    #[command(name = "add-remote")]
    AddRemote(AddRemoteArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
