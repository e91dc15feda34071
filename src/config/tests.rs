// grm-rs: Git Repository Manager - Rust Port
//
// SPDX-FileCopyrightText: 2026 grm-rs Authors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::Config;
use crate::logging::LogLevel;
use std::path::PathBuf;

#[test]
fn test_defaults() {
    let config = Config::parse("").unwrap();
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert!(config.global.file_log_level.is_none());
    assert!(!config.global.dry);
    assert!(config.repo.path.is_none());
    assert!(config.repo.tracked_files.is_empty());
    assert_eq!(config.repo.branch, "main");
    assert_eq!(config.remote.name, "origin");
    assert!(config.remote.url.is_none());
}

#[test]
fn test_full_document() {
    let config = Config::parse(
        r#"
        [global]
        output_log_level = 4
        log_file = "grm.log"
        dry = true

        [repo]
        path = "/srv/notes"
        tracked_files = ["a.txt", "b.conf", "a.txt"]
        branch = "develop"

        [remote]
        name = "upstream"
        url = "https://example/repo.git"
        "#,
    )
    .unwrap();

    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.global.log_file, Some(PathBuf::from("grm.log")));
    assert!(config.global.dry);
    assert_eq!(config.repo.path, Some(PathBuf::from("/srv/notes")));
    // Duplicates and order are preserved
    assert_eq!(config.repo.tracked_files, ["a.txt", "b.conf", "a.txt"]);
    assert_eq!(config.repo.branch, "develop");
    assert_eq!(config.remote.name, "upstream");
    assert_eq!(config.remote.url.as_deref(), Some("https://example/repo.git"));
}

#[test]
fn test_file_log_level_falls_back_to_console_level() {
    let config = Config::parse("[global]\noutput_log_level = 2").unwrap();
    assert_eq!(config.file_log_level(), LogLevel::WARN);

    let config = Config::parse("[global]\nfile_log_level = 5").unwrap();
    assert_eq!(config.file_log_level(), LogLevel::TRACE);
}

#[test]
fn test_invalid_log_level_rejected() {
    let result = Config::parse("[global]\noutput_log_level = 9");
    assert!(result.is_err(), "log level above 5 should be rejected");
}

#[test]
fn test_empty_branch_rejected() {
    let result = Config::parse("[repo]\nbranch = \"  \"");
    let err = result.unwrap_err().to_string();
    assert!(
        err.contains("branch name must not be empty"),
        "unexpected error: {err}"
    );
}

#[test]
fn test_empty_remote_name_rejected() {
    let result = Config::parse("[remote]\nname = \"\"");
    assert!(result.is_err());
}

#[test]
fn test_unknown_fields_rejected() {
    let result = Config::parse("[repo]\nbranches = [\"main\"]");
    assert!(result.is_err(), "unknown keys should be rejected");
}

#[test]
fn test_later_sources_override_earlier() {
    let config = Config::builder()
        .add_toml_str("[repo]\nbranch = \"main\"\ntracked_files = [\"a.txt\"]")
        .add_toml_str("[repo]\nbranch = \"develop\"")
        .build()
        .unwrap();
    assert_eq!(config.repo.branch, "develop");
    // Untouched keys keep the earlier layer's value
    assert_eq!(config.repo.tracked_files, ["a.txt"]);
}

#[test]
fn test_missing_required_file_errors() {
    let result = Config::builder()
        .add_toml_file("/nonexistent/grm.toml")
        .build();
    assert!(result.is_err());
}

#[test]
fn test_optional_file_missing_is_fine() {
    let config = Config::builder()
        .add_toml_file_optional("/nonexistent/grm.toml")
        .build()
        .unwrap();
    assert_eq!(config.repo.branch, "main");
}
