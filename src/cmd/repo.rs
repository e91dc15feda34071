// grm-rs: Git Repository Manager - Rust Port
//
// SPDX-FileCopyrightText: 2026 grm-rs Authors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Handlers for the modular subcommands.
//!
//! Each handler builds a [`RepoContext`] from CLI arguments merged with
//! configuration defaults, wraps it in a [`Bootstrapper`], and runs one
//! operation. Query output is printed verbatim; errors propagate to main,
//! which exits nonzero.

use crate::cli::repo::{
    AddArgs, AddRemoteArgs, CommitArgs, InitArgs, PushArgs, RepoArgs, SwitchBranchArgs,
};
use crate::config::Config;
use crate::error::Result;
use crate::repo::{Bootstrapper, RepoContext};
use anyhow::Context as _;
use std::path::Path;

/// Resolve the tracked-file list: CLI comma-list wins, config supplies
/// the fallback.
fn resolve_files(cli_files: Option<&str>, config: &Config) -> Vec<String> {
    cli_files.map_or_else(
        || config.repo.tracked_files.clone(),
        RepoContext::split_files,
    )
}

/// Build a bootstrapper for `path` with the given files and branch.
fn bootstrapper(
    path: &Path,
    files: Vec<String>,
    branch: Option<&str>,
    config: &Config,
) -> Result<Bootstrapper> {
    let branch = branch.unwrap_or(&config.repo.branch);
    let context = RepoContext::new(path, files, branch)
        .with_context(|| format!("failed to build context for {}", path.display()))?;
    Ok(Bootstrapper::with_dry_run(context, config.global.dry))
}

/// Main handler for the init command: full bootstrap sequence.
///
/// # Errors
///
/// Returns an error if any bootstrap step fails.
pub fn run_init_command(args: &InitArgs, config: &Config) -> Result<()> {
    let files = resolve_files(args.tracked_files.as_deref(), config);
    let boot = bootstrapper(&args.repo_path, files, args.branch.as_deref(), config)?;
    boot.bootstrap()?;
    Ok(())
}

/// Handler for the add command: stage each tracked file.
///
/// # Errors
///
/// Returns an error for the first file that cannot be staged.
pub fn run_add_command(args: &AddArgs, config: &Config) -> Result<()> {
    let files = resolve_files(args.tracked_files.as_deref(), config);
    let boot = bootstrapper(&args.repo_path, files, None, config)?;
    boot.stage_tracked_files()?;
    Ok(())
}

/// Handler for the commit command.
///
/// # Errors
///
/// Returns an error if git reports no changes to commit or any other
/// failure.
pub fn run_commit_command(args: &CommitArgs, config: &Config) -> Result<()> {
    let boot = bootstrapper(&args.repo_path, Vec::new(), None, config)?;
    boot.commit(args.message.as_deref())?;
    Ok(())
}

/// Handler for the status command. Prints git's output verbatim.
///
/// # Errors
///
/// Returns an error if the status query fails.
pub fn run_status_command(args: &RepoArgs, config: &Config) -> Result<()> {
    let boot = bootstrapper(&args.repo_path, Vec::new(), None, config)?;
    println!("{}", boot.status()?);
    Ok(())
}

/// Handler for the push command.
///
/// # Errors
///
/// Returns an error on network, authentication, or unknown-remote failure.
pub fn run_push_command(args: &PushArgs, config: &Config) -> Result<()> {
    let boot = bootstrapper(&args.repo_path, Vec::new(), None, config)?;
    let remote = args.remote.as_deref().unwrap_or(&config.remote.name);
    boot.push(remote, args.branch.as_deref())?;
    Ok(())
}

/// Handler for the log command. Prints git's output verbatim.
///
/// # Errors
///
/// Returns an error if the log query fails (e.g. no commits yet).
pub fn run_log_command(args: &RepoArgs, config: &Config) -> Result<()> {
    let boot = bootstrapper(&args.repo_path, Vec::new(), None, config)?;
    println!("{}", boot.log()?);
    Ok(())
}

/// Handler for the diff command. Prints git's output verbatim.
///
/// # Errors
///
/// Returns an error if the diff query fails.
pub fn run_diff_command(args: &RepoArgs, config: &Config) -> Result<()> {
    let boot = bootstrapper(&args.repo_path, Vec::new(), None, config)?;
    println!("{}", boot.diff()?);
    Ok(())
}

/// Handler for the list-branches command. Prints git's output verbatim.
///
/// # Errors
///
/// Returns an error if the branch query fails.
pub fn run_list_branches_command(args: &RepoArgs, config: &Config) -> Result<()> {
    let boot = bootstrapper(&args.repo_path, Vec::new(), None, config)?;
    println!("{}", boot.list_branches()?);
    Ok(())
}

/// Handler for the switch-branch command.
///
/// # Errors
///
/// Returns an error on conflict or nonexistent branch, carrying git's
/// own error text.
pub fn run_switch_branch_command(args: &SwitchBranchArgs, config: &Config) -> Result<()> {
    let boot = bootstrapper(&args.repo_path, Vec::new(), None, config)?;
    boot.switch_branch(&args.branch)?;
    Ok(())
}

/// Handler for the add-remote command: adds the remote, or updates its
/// URL if one of that name already exists.
///
/// # Errors
///
/// Returns an error if the remote cannot be listed, added, or updated.
pub fn run_add_remote_command(args: &AddRemoteArgs, config: &Config) -> Result<()> {
    let boot = bootstrapper(&args.repo_path, Vec::new(), None, config)?;
    boot.upsert_remote(&args.remote_name, &args.remote_url)?;
    Ok(())
}
