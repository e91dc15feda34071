// grm-rs: Git Repository Manager - Rust Port
//
// SPDX-FileCopyrightText: 2026 grm-rs Authors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Read-only git queries.
//!
//! ```text
//! query.rs --> git_command --> git binary
//!   status / log --oneline / diff / branch / remote
//! ```
//!
//! Captured output is surfaced verbatim; the wrapper never interprets it.

use crate::error::GrmResult;
use std::path::Path;

use super::{cmd::git_command, path_arg};

/// Check whether repository metadata is present at `path`.
///
/// Only the presence of the `.git` directory is checked; its contents are
/// never read.
#[must_use]
pub fn is_git_repo(path: &Path) -> bool {
    path.join(".git").is_dir()
}

/// Get the working tree status.
///
/// # Errors
///
/// Returns a `GitError` if the invocation fails.
pub fn status(repo_path: &Path) -> GrmResult<String> {
    git_command(&["-C", path_arg(repo_path)?, "status"], repo_path)
}

/// Get the commit log in one-line format.
///
/// # Errors
///
/// Returns a `GitError` if the invocation fails (e.g. no commits yet).
pub fn log_oneline(repo_path: &Path) -> GrmResult<String> {
    git_command(&["-C", path_arg(repo_path)?, "log", "--oneline"], repo_path)
}

/// Get the diff of unstaged changes.
///
/// # Errors
///
/// Returns a `GitError` if the invocation fails.
pub fn diff(repo_path: &Path) -> GrmResult<String> {
    git_command(&["-C", path_arg(repo_path)?, "diff"], repo_path)
}

/// List all local branches.
///
/// # Errors
///
/// Returns a `GitError` if the invocation fails.
pub fn list_branches(repo_path: &Path) -> GrmResult<String> {
    git_command(&["-C", path_arg(repo_path)?, "branch"], repo_path)
}

/// List configured remote names, one per entry.
///
/// # Errors
///
/// Returns a `GitError` if the invocation fails.
pub fn list_remotes(repo_path: &Path) -> GrmResult<Vec<String>> {
    let output = git_command(&["-C", path_arg(repo_path)?, "remote"], repo_path)?;
    Ok(output.split_whitespace().map(str::to_string).collect())
}

/// Get the current branch name (None if HEAD is detached).
///
/// # Errors
///
/// Returns a `GitError` if the invocation fails outside a repository.
pub fn current_branch(repo_path: &Path) -> GrmResult<Option<String>> {
    let output = git_command(
        &["-C", path_arg(repo_path)?, "branch", "--show-current"],
        repo_path,
    )?;
    if output.is_empty() {
        Ok(None)
    } else {
        Ok(Some(output))
    }
}
