// grm-rs: Git Repository Manager - Rust Port
//
// SPDX-FileCopyrightText: 2026 grm-rs Authors
// SPDX-License-Identifier: GPL-3.0-or-later

//! End-to-end bootstrap scenarios.
//!
//! Drives [`Bootstrapper`] against real temporary directories, covering
//! the full bootstrap-stage-commit-push lifecycle.

use grm_rs::git::cmd::set_config;
use grm_rs::git::query::{current_branch, is_git_repo, list_remotes};
use grm_rs::repo::{Bootstrapper, RepoContext};
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn tracked(files: &[&str]) -> Vec<String> {
    files.iter().map(|f| (*f).to_string()).collect()
}

fn bootstrapper(path: &std::path::Path, files: &[&str], branch: &str) -> Bootstrapper {
    let context = RepoContext::new(path, tracked(files), branch).unwrap();
    Bootstrapper::new(context)
}

/// Give the repo a commit identity so commits work in bare CI environments.
fn set_identity(path: &std::path::Path) {
    set_config(path, "user.email", "test@test.com").unwrap();
    set_config(path, "user.name", "Test").unwrap();
}

fn run_git_stdout(args: &[&str], cwd: &std::path::Path) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .output()
        .unwrap();
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

// =============================================================================
// bootstrap: fresh path
// =============================================================================

#[test]
fn bootstrap_fresh_path_creates_everything() {
    let temp = temp_dir();
    let repo = temp.path().join("r1");

    let boot = bootstrapper(&repo, &["a.txt", "b.conf"], "main");
    boot.bootstrap().unwrap();

    // Directory, placeholder files, repository metadata, branch.
    assert!(repo.is_dir());
    assert_eq!(fs::read(repo.join("a.txt")).unwrap(), b"");
    assert_eq!(fs::read(repo.join("b.conf")).unwrap(), b"");
    assert!(is_git_repo(&repo));
    assert_eq!(current_branch(&repo).unwrap(), Some("main".to_string()));

    // No commits were made; rev-list over HEAD must fail.
    let commits = Command::new("git")
        .args(["rev-list", "--count", "HEAD"])
        .current_dir(&repo)
        .output()
        .unwrap();
    assert!(!commits.status.success());
}

#[test]
fn bootstrap_nested_path_is_created_recursively() {
    let temp = temp_dir();
    let repo = temp.path().join("a").join("b").join("r1");

    let boot = bootstrapper(&repo, &["x.txt"], "main");
    boot.bootstrap().unwrap();

    assert!(is_git_repo(&repo));
}

// =============================================================================
// bootstrap: idempotence
// =============================================================================

#[test]
fn bootstrap_is_idempotent() {
    let temp = temp_dir();
    let repo = temp.path().join("r1");

    let boot = bootstrapper(&repo, &["a.txt"], "main");
    boot.bootstrap().unwrap();

    fs::write(repo.join("a.txt"), "user content").unwrap();

    // Second run over the same path and files changes nothing.
    boot.bootstrap().unwrap();
    assert_eq!(fs::read(repo.join("a.txt")).unwrap(), b"user content");
    assert_eq!(current_branch(&repo).unwrap(), Some("main".to_string()));
}

#[test]
fn bootstrap_existing_repo_keeps_its_branch() {
    let temp = temp_dir();
    let repo = temp.path().join("r1");

    bootstrapper(&repo, &["a.txt"], "main").bootstrap().unwrap();

    // A different branch in the context does not switch an existing repo.
    bootstrapper(&repo, &["a.txt"], "develop")
        .bootstrap()
        .unwrap();
    assert_eq!(current_branch(&repo).unwrap(), Some("main".to_string()));
}

// =============================================================================
// stage + commit
// =============================================================================

#[test]
fn stage_and_commit_leaves_clean_tree() {
    let temp = temp_dir();
    let repo = temp.path().join("r1");

    let boot = bootstrapper(&repo, &["a.txt", "b.conf"], "main");
    boot.bootstrap().unwrap();
    set_identity(&repo);

    boot.stage_tracked_files().unwrap();
    boot.commit(Some("init")).unwrap();

    let status = boot.status().unwrap();
    assert!(status.contains("working tree clean"), "got: {status}");

    let log = boot.log().unwrap();
    assert_eq!(log.lines().count(), 1, "got: {log}");
    assert!(log.contains("init"));
}

#[test]
fn commit_default_message_is_timestamped() {
    let temp = temp_dir();
    let repo = temp.path().join("r1");

    let boot = bootstrapper(&repo, &["a.txt"], "main");
    boot.bootstrap().unwrap();
    set_identity(&repo);

    boot.stage_tracked_files().unwrap();
    boot.commit(None).unwrap();

    let log = boot.log().unwrap();
    assert!(log.contains("Update tracked files on"), "got: {log}");
}

#[test]
fn commit_without_staged_changes_fails() {
    let temp = temp_dir();
    let repo = temp.path().join("r1");

    let boot = bootstrapper(&repo, &[], "main");
    boot.bootstrap().unwrap();
    set_identity(&repo);

    let result = boot.commit(Some("nothing"));
    assert!(result.is_err());
}

// =============================================================================
// push
// =============================================================================

#[test]
fn push_without_remote_surfaces_git_error() {
    let temp = temp_dir();
    let repo = temp.path().join("r1");

    let boot = bootstrapper(&repo, &["a.txt"], "main");
    boot.bootstrap().unwrap();
    set_identity(&repo);
    boot.stage_tracked_files().unwrap();
    boot.commit(Some("init")).unwrap();

    let err = boot.push("origin", None).unwrap_err();
    let text = format!("{err:#}");
    assert!(text.contains("origin"), "got: {text}");
}

#[test]
fn push_to_local_bare_remote_succeeds() {
    let temp = temp_dir();
    let repo = temp.path().join("r1");
    let bare = temp.path().join("remote.git");
    fs::create_dir_all(&bare).unwrap();
    Command::new("git")
        .args(["init", "-q", "--bare"])
        .current_dir(&bare)
        .status()
        .unwrap();

    let boot = bootstrapper(&repo, &["a.txt"], "main");
    boot.bootstrap().unwrap();
    set_identity(&repo);
    boot.stage_tracked_files().unwrap();
    boot.commit(Some("init")).unwrap();

    boot.upsert_remote("origin", bare.to_str().unwrap()).unwrap();
    boot.push("origin", None).unwrap();

    let heads = run_git_stdout(&["branch", "--list", "main"], &bare);
    assert!(heads.contains("main"), "got: {heads}");
}

// =============================================================================
// upsert_remote
// =============================================================================

#[test]
fn upsert_remote_updates_instead_of_duplicating() {
    let temp = temp_dir();
    let repo = temp.path().join("r1");

    let boot = bootstrapper(&repo, &["a.txt"], "main");
    boot.bootstrap().unwrap();

    boot.upsert_remote("origin", "https://example.com/first.git")
        .unwrap();
    boot.upsert_remote("origin", "https://example.com/second.git")
        .unwrap();

    let remotes = list_remotes(&repo).unwrap();
    assert_eq!(remotes, vec!["origin".to_string()]);

    let url = run_git_stdout(&["remote", "get-url", "origin"], &repo);
    assert_eq!(url, "https://example.com/second.git");
}

// =============================================================================
// switch_branch
// =============================================================================

#[test]
fn switch_branch_roundtrip() {
    let temp = temp_dir();
    let repo = temp.path().join("r1");

    let boot = bootstrapper(&repo, &["a.txt"], "main");
    boot.bootstrap().unwrap();
    set_identity(&repo);
    boot.stage_tracked_files().unwrap();
    boot.commit(Some("init")).unwrap();

    Command::new("git")
        .args(["branch", "feature"])
        .current_dir(&repo)
        .status()
        .unwrap();

    boot.switch_branch("feature").unwrap();
    assert_eq!(current_branch(&repo).unwrap(), Some("feature".to_string()));

    boot.switch_branch("main").unwrap();
    assert_eq!(current_branch(&repo).unwrap(), Some("main".to_string()));
}

// =============================================================================
// dry run
// =============================================================================

#[test]
fn dry_run_bootstrap_touches_nothing() {
    let temp = temp_dir();
    let repo = temp.path().join("r1");

    let context = RepoContext::new(&repo, tracked(&["a.txt"]), "main").unwrap();
    let boot = Bootstrapper::with_dry_run(context, true);
    boot.bootstrap().unwrap();

    assert!(!repo.exists());
}
