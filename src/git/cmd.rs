// grm-rs: Git Repository Manager - Rust Port
//
// SPDX-FileCopyrightText: 2026 grm-rs Authors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git mutation commands.
//!
//! ```text
//! cmd.rs --> git_command --> git binary
//!   init / checkout / add / commit / push / remote
//! ```
//!
//! Each function issues a single blocking git invocation and propagates
//! git's own stderr on failure. No retry, no rollback; git's operations
//! are individually atomic.

use crate::error::{GitError, GrmResult, ToolError};
use std::path::Path;

use super::path_arg;

/// Execute a git command with standard environment variables.
/// ALWAYS sets `GCM_INTERACTIVE=never` and `GIT_TERMINAL_PROMPT=0` so a
/// one-shot CLI never hangs on a credential prompt.
///
/// Returns trimmed stdout on success. A nonzero exit status becomes
/// [`GitError::CommandFailed`] carrying git's stderr verbatim.
pub(crate) fn git_command(args: &[&str], cwd: &Path) -> GrmResult<String> {
    use std::process::Command;

    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .env("GCM_INTERACTIVE", "never")
        .env("GIT_TERMINAL_PROMPT", "0")
        .output()
        .map_err(|e| std::io::Error::new(e.kind(), format!("failed to execute git: {e}")))?;

    if !output.status.success() {
        return Err(GitError::CommandFailed {
            command: format!("git {}", args.join(" ")),
            message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
        .into());
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Verify that git is installed and functioning by querying its version.
///
/// Returns the version string reported by git (e.g. "git version 2.43.0").
///
/// # Errors
///
/// Returns a `ToolError` if git is not on PATH or the version query fails.
pub fn query_version() -> GrmResult<String> {
    which::which("git").map_err(|_| ToolError::NotInstalled {
        name: "git".to_string(),
    })?;

    git_command(&["--version"], Path::new(".")).map_err(|e| {
        ToolError::NotFunctioning {
            name: "git".to_string(),
            message: e.to_string(),
        }
        .into()
    })
}

/// Initialize a new repository at `path`.
///
/// # Errors
///
/// Returns a `GitError` if repository initialization fails.
pub fn init_repo(path: &Path) -> GrmResult<()> {
    git_command(&["init", "--quiet", path_arg(path)?], path)?;
    Ok(())
}

/// Create and check out a new branch.
///
/// # Errors
///
/// Returns a `GitError` if the branch cannot be created.
pub fn checkout_new_branch(repo_path: &Path, branch: &str) -> GrmResult<()> {
    git_command(&["-C", path_arg(repo_path)?, "checkout", "-b", branch], repo_path)?;
    Ok(())
}

/// Check out an existing branch, tag, or commit.
///
/// # Errors
///
/// Returns a `GitError` on conflict or a nonexistent branch, carrying
/// git's own error text.
pub fn checkout(repo_path: &Path, branch: &str) -> GrmResult<()> {
    git_command(&["-C", path_arg(repo_path)?, "checkout", branch], repo_path)?;
    Ok(())
}

/// Stage a single file.
///
/// # Errors
///
/// Returns a `GitError` if the file cannot be staged.
pub fn add_path(repo_path: &Path, file: &Path) -> GrmResult<()> {
    git_command(
        &["-C", path_arg(repo_path)?, "add", path_arg(file)?],
        repo_path,
    )?;
    Ok(())
}

/// Commit staged changes with the given message.
///
/// Whether anything is staged is not checked here; "nothing to commit" is
/// left to git's own error surface.
///
/// # Errors
///
/// Returns a `GitError` if git reports no changes to commit or any other
/// failure.
pub fn commit(repo_path: &Path, message: &str) -> GrmResult<()> {
    git_command(
        &["-C", path_arg(repo_path)?, "commit", "-m", message],
        repo_path,
    )?;
    Ok(())
}

/// Push a branch to a remote.
///
/// # Errors
///
/// Returns a `GitError` on network, authentication, or unknown-remote
/// failures, carrying git's own error text.
pub fn push(repo_path: &Path, remote: &str, branch: &str) -> GrmResult<()> {
    git_command(
        &["-C", path_arg(repo_path)?, "push", remote, branch],
        repo_path,
    )?;
    Ok(())
}

/// Add a new remote.
///
/// # Errors
///
/// Returns a `GitError` if the remote cannot be added.
pub fn add_remote(repo_path: &Path, name: &str, url: &str) -> GrmResult<()> {
    git_command(
        &["-C", path_arg(repo_path)?, "remote", "add", name, url],
        repo_path,
    )?;
    Ok(())
}

/// Update the URL of an existing remote.
///
/// # Errors
///
/// Returns a `GitError` if the URL cannot be set.
pub fn set_remote_url(repo_path: &Path, name: &str, url: &str) -> GrmResult<()> {
    git_command(
        &["-C", path_arg(repo_path)?, "remote", "set-url", name, url],
        repo_path,
    )?;
    Ok(())
}

/// Set a git config value (used by tests to give commits an identity).
///
/// # Errors
///
/// Returns a `GitError` if the config value cannot be set.
pub fn set_config(repo_path: &Path, key: &str, value: &str) -> GrmResult<()> {
    git_command(
        &["-C", path_arg(repo_path)?, "config", key, value],
        repo_path,
    )?;
    Ok(())
}
