// grm-rs: Git Repository Manager - Rust Port
//
// SPDX-FileCopyrightText: 2026 grm-rs Authors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository bootstrapping and pass-through operations.
//!
//! ```text
//! bootstrap()
//!   verify_tool_available   git --version
//!   ensure_directory        create_dir_all
//!   ensure_tracked_files    zero-byte placeholders
//!   initialize_repository   Absent -> Initialized (absorbing)
//!        |
//!        v
//! pass-through ops
//!   stage / commit / push / switch_branch / upsert_remote
//!   status / log / diff / list_branches
//! ```
//!
//! Every step is idempotent, so re-running the bootstrap against the same
//! path and file set is a no-op. State transitions are delegated entirely
//! to git; a failed step terminates the whole run.

use crate::error::{FsError, GrmResult};
use crate::git::{cmd, query};
use std::path::{Path, PathBuf};
use tracing::{debug, info};


/// Default branch name for newly initialized repositories.
pub const DEFAULT_BRANCH: &str = "main";

/// Default remote name for push operations.
pub const DEFAULT_REMOTE: &str = "origin";

/// Immutable per-invocation repository context.
///
/// Constructed once from caller-supplied parameters and never persisted;
/// every invocation re-derives it from input.
#[derive(Debug, Clone)]
pub struct RepoContext {
    path: PathBuf,
    tracked_files: Vec<String>,
    branch: String,
}

impl RepoContext {
    /// Create a context for `path`, tracking `files` on `branch`.
    ///
    /// The path is normalized to an absolute form immediately so all
    /// subsequent operations are location-independent. File order is
    /// preserved and duplicates are permitted.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined
    /// while absolutizing a relative path.
    pub fn new(
        path: impl Into<PathBuf>,
        files: impl IntoIterator<Item = String>,
        branch: impl Into<String>,
    ) -> GrmResult<Self> {
        let path = path.into();
        let path = if path.is_absolute() {
            path
        } else {
            std::env::current_dir()?.join(path)
        };

        Ok(Self {
            path,
            tracked_files: files.into_iter().collect(),
            branch: branch.into(),
        })
    }

    /// Split a comma-separated file list into tracked-file entries.
    ///
    /// Entries are trimmed and empty segments dropped, so `"a.txt, ,b.conf"`
    /// yields `["a.txt", "b.conf"]`.
    #[must_use]
    pub fn split_files(input: &str) -> Vec<String> {
        input
            .split(',')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Absolute repository path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Tracked files, in caller order.
    #[must_use]
    pub fn tracked_files(&self) -> &[String] {
        &self.tracked_files
    }

    /// Branch name.
    #[must_use]
    pub fn branch(&self) -> &str {
        &self.branch
    }
}

/// Idempotent repository bootstrapper with pass-through git operations.
///
/// Holds a [`RepoContext`] for the duration of one invocation. All
/// operations return `Result`; the CLI layer decides whether an error
/// terminates the process.
#[derive(Debug)]
pub struct Bootstrapper {
    context: RepoContext,
    dry_run: bool,
}

impl Bootstrapper {
    /// Create a bootstrapper over `context`.
    #[must_use]
    pub const fn new(context: RepoContext) -> Self {
        Self {
            context,
            dry_run: false,
        }
    }

    /// Create a bootstrapper that logs mutating operations instead of
    /// executing them.
    #[must_use]
    pub const fn with_dry_run(context: RepoContext, dry_run: bool) -> Self {
        Self { context, dry_run }
    }

    /// The underlying context.
    #[must_use]
    pub const fn context(&self) -> &RepoContext {
        &self.context
    }

    /// Run the full bootstrap sequence: tool check, directory, tracked
    /// files, repository initialization.
    ///
    /// # Errors
    ///
    /// Returns an error on the first failing step; earlier steps are left
    /// as-is (already-created files are inert and reused on retry).
    pub fn bootstrap(&self) -> GrmResult<()> {
        self.verify_tool_available()?;
        self.ensure_directory()?;
        self.ensure_tracked_files()?;
        self.initialize_repository()?;
        Ok(())
    }

    /// Verify that git is installed by querying its version.
    ///
    /// # Errors
    ///
    /// Returns a `ToolError` if git is absent or misbehaving.
    pub fn verify_tool_available(&self) -> GrmResult<()> {
        let version = cmd::query_version()?;
        info!("git found: {version}");
        Ok(())
    }

    /// Ensure the repository path exists, creating the directory tree if
    /// missing.
    ///
    /// # Errors
    ///
    /// Returns an `FsError` with the offending path on failure.
    pub fn ensure_directory(&self) -> GrmResult<()> {
        let path = self.context.path();
        if path.exists() {
            debug!(path = %path.display(), "repository path already exists");
            return Ok(());
        }

        info!(path = %path.display(), "creating repository path");
        if self.dry_run {
            return Ok(());
        }
        std::fs::create_dir_all(path).map_err(|e| FsError::CreateDirFailed {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok(())
    }

    /// Ensure every tracked file exists, creating zero-byte placeholders
    /// for missing ones. Existing files are never touched.
    ///
    /// # Errors
    ///
    /// Returns an `FsError` for the first file that cannot be created;
    /// files created before the failure are kept.
    pub fn ensure_tracked_files(&self) -> GrmResult<()> {
        for file_name in self.context.tracked_files() {
            let file_path = self.context.path().join(file_name);
            if file_path.exists() {
                debug!(file = %file_path.display(), "tracked file exists");
                continue;
            }

            info!(file = %file_path.display(), "creating empty tracked file");
            if self.dry_run {
                continue;
            }
            std::fs::write(&file_path, "").map_err(|e| FsError::CreateFileFailed {
                path: file_path.display().to_string(),
                source: e,
            })?;
        }
        Ok(())
    }

    /// Initialize a repository at the context path and create the context
    /// branch, unless repository metadata is already present.
    ///
    /// An already-initialized repository is left untouched: the branch is
    /// NOT switched even if the context names a different one.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if init or branch creation fails.
    pub fn initialize_repository(&self) -> GrmResult<()> {
        let path = self.context.path();
        if query::is_git_repo(path) {
            info!(path = %path.display(), "git repository already exists");
            return Ok(());
        }

        info!(
            path = %path.display(),
            branch = self.context.branch(),
            "initializing git repository"
        );
        if self.dry_run {
            return Ok(());
        }
        cmd::init_repo(path)?;
        cmd::checkout_new_branch(path, self.context.branch())?;
        Ok(())
    }

    /// Stage every tracked file, in order.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` for the first file that cannot be staged.
    pub fn stage_tracked_files(&self) -> GrmResult<()> {
        for file_name in self.context.tracked_files() {
            let file_path = self.context.path().join(file_name);
            info!(file = %file_path.display(), "staging");
            if self.dry_run {
                continue;
            }
            cmd::add_path(self.context.path(), &file_path)?;
        }
        Ok(())
    }

    /// Commit staged changes.
    ///
    /// When `message` is None a timestamped default is synthesized.
    /// Whether changes are actually staged is not verified; "nothing to
    /// commit" is delegated to git's own error surface.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the commit fails.
    pub fn commit(&self, message: Option<&str>) -> GrmResult<()> {
        let message = message.map_or_else(default_commit_message, str::to_string);
        info!(message = %message, "committing changes");
        if self.dry_run {
            return Ok(());
        }
        cmd::commit(self.context.path(), &message)
    }

    /// Push the context branch (or `branch`, when given) to a remote.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` on network, authentication, or unknown-remote
    /// failure, carrying git's own error text.
    pub fn push(&self, remote: &str, branch: Option<&str>) -> GrmResult<()> {
        let branch = branch.unwrap_or_else(|| self.context.branch());
        info!(remote, branch, "pushing");
        if self.dry_run {
            return Ok(());
        }
        cmd::push(self.context.path(), remote, branch)
    }

    /// Working tree status, verbatim from git.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the invocation fails.
    pub fn status(&self) -> GrmResult<String> {
        query::status(self.context.path())
    }

    /// One-line commit log, verbatim from git.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the invocation fails.
    pub fn log(&self) -> GrmResult<String> {
        query::log_oneline(self.context.path())
    }

    /// Diff of unstaged changes, verbatim from git.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the invocation fails.
    pub fn diff(&self) -> GrmResult<String> {
        query::diff(self.context.path())
    }

    /// Local branch listing, verbatim from git.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the invocation fails.
    pub fn list_branches(&self) -> GrmResult<String> {
        query::list_branches(self.context.path())
    }

    /// Switch to `branch` via checkout. Whether a missing branch is an
    /// error is left to git's checkout semantics.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` on conflict or nonexistent branch.
    pub fn switch_branch(&self, branch: &str) -> GrmResult<()> {
        info!(branch, "switching branch");
        if self.dry_run {
            return Ok(());
        }
        cmd::checkout(self.context.path(), branch)
    }

    /// Add a remote, or update its URL if a remote of that name already
    /// exists. Never duplicates a remote entry.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if listing, adding, or updating fails.
    pub fn upsert_remote(&self, name: &str, url: &str) -> GrmResult<()> {
        let remotes = query::list_remotes(self.context.path())?;
        let exists = remotes.iter().any(|r| r == name);

        if exists {
            info!(remote = name, url, "updating remote url");
        } else {
            info!(remote = name, url, "adding remote");
        }
        if self.dry_run {
            return Ok(());
        }

        if exists {
            cmd::set_remote_url(self.context.path(), name, url)
        } else {
            cmd::add_remote(self.context.path(), name, url)
        }
    }
}

/// Synthesize the default commit message with the current local time.
fn default_commit_message() -> String {
    format!(
        "Update tracked files on {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    )
}
