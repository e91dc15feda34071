// grm-rs: Git Repository Manager - Rust Port
//
// SPDX-FileCopyrightText: 2026 grm-rs Authors
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, Command};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_no_subcommand_defaults_to_interactive() {
    let cli = Cli::try_parse_from(["grm"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn test_parse_init() {
    let cli = Cli::try_parse_from(["grm", "init", "/tmp/r1", "a.txt,b.conf", "-b", "develop"])
        .unwrap();
    let Some(Command::Init(args)) = cli.command else {
        panic!("expected init command");
    };
    assert_eq!(args.repo_path, PathBuf::from("/tmp/r1"));
    assert_eq!(args.tracked_files.as_deref(), Some("a.txt,b.conf"));
    assert_eq!(args.branch.as_deref(), Some("develop"));
}

#[test]
fn test_parse_init_without_files_or_branch() {
    let cli = Cli::try_parse_from(["grm", "init", "/tmp/r1"]).unwrap();
    let Some(Command::Init(args)) = cli.command else {
        panic!("expected init command");
    };
    assert!(args.tracked_files.is_none());
    assert!(args.branch.is_none());
}

#[test]
fn test_parse_commit_with_message() {
    let cli = Cli::try_parse_from(["grm", "commit", "/tmp/r1", "-m", "init"]).unwrap();
    let Some(Command::Commit(args)) = cli.command else {
        panic!("expected commit command");
    };
    assert_eq!(args.message.as_deref(), Some("init"));
}

#[test]
fn test_parse_push_defaults() {
    let cli = Cli::try_parse_from(["grm", "push", "/tmp/r1"]).unwrap();
    let Some(Command::Push(args)) = cli.command else {
        panic!("expected push command");
    };
    assert!(args.remote.is_none());
    assert!(args.branch.is_none());
}

#[test]
fn test_parse_add_remote() {
    let cli = Cli::try_parse_from([
        "grm",
        "add-remote",
        "/tmp/r1",
        "origin",
        "https://example/repo.git",
    ])
    .unwrap();
    let Some(Command::AddRemote(args)) = cli.command else {
        panic!("expected add-remote command");
    };
    assert_eq!(args.remote_name, "origin");
    assert_eq!(args.remote_url, "https://example/repo.git");
}

#[test]
fn test_parse_switch_branch_requires_branch() {
    let result = Cli::try_parse_from(["grm", "switch-branch", "/tmp/r1"]);
    assert!(result.is_err(), "switch-branch without BRANCH should fail");
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "grm",
        "-l",
        "5",
        "--dry",
        "-c",
        "extra.toml",
        "status",
        "/tmp/r1",
    ])
    .unwrap();
    assert_eq!(cli.global.log_level, Some(5));
    assert!(cli.global.dry);
    assert_eq!(cli.global.configs, vec![PathBuf::from("extra.toml")]);
}

#[test]
fn test_parse_log_level_out_of_range() {
    let result = Cli::try_parse_from(["grm", "-l", "9", "status", "/tmp/r1"]);
    assert!(result.is_err(), "log level above 5 should be rejected");
}

#[test]
fn test_console_level_verbose_maps_to_debug() {
    let cli = Cli::try_parse_from(["grm", "-v", "status", "/tmp/r1"]).unwrap();
    assert_eq!(cli.global.console_level(), Some(4));
}

#[test]
fn test_console_level_log_level_overrides_verbose() {
    let cli = Cli::try_parse_from(["grm", "-v", "-l", "1", "status", "/tmp/r1"]).unwrap();
    assert_eq!(cli.global.console_level(), Some(1));
}
