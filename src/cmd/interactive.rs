// grm-rs: Git Repository Manager - Rust Port
//
// SPDX-FileCopyrightText: 2026 grm-rs Authors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Interactive text-menu mode.
//!
//! ```text
//! prompts: path, files, branch
//!    |
//!    v
//! bootstrap()
//!    |
//!    v
//! menu loop (one line per iteration)
//!   1..9 -> pass-through operation
//!   0    -> exit
//! ```
//!
//! Strictly single-threaded and blocking: one prompt, one line, one git
//! invocation at a time. The loop reads from an injected `BufRead` and
//! writes to an injected `Write` so it can be driven from tests.

use crate::config::Config;
use crate::error::{ConfigError, Result};
use crate::repo::{Bootstrapper, RepoContext};
use std::io::{BufRead, Write};

/// Menu entries, keyed by the selection the user types.
const MENU: &[(&str, &str)] = &[
    ("1", "Add files"),
    ("2", "Commit changes"),
    ("3", "Check status"),
    ("4", "Push to remote"),
    ("5", "Show commit log"),
    ("6", "Show diff"),
    ("7", "List branches"),
    ("8", "Switch branch"),
    ("9", "Add/Update remote"),
    ("0", "Exit"),
];

/// Run interactive mode against stdin/stdout.
///
/// # Errors
///
/// Returns an error if the bootstrap fails or any selected operation
/// fails; the loop does not continue past a failed operation.
pub fn run_interactive_command(config: &Config) -> Result<()> {
    let stdin = std::io::stdin();
    let mut reader = stdin.lock();
    let mut writer = std::io::stdout();
    run(&mut reader, &mut writer, config)
}

/// Drive the interactive session over arbitrary reader/writer pairs.
///
/// # Errors
///
/// Returns an error if prompting fails, the bootstrap fails, or a menu
/// operation fails.
pub fn run(reader: &mut impl BufRead, writer: &mut impl Write, config: &Config) -> Result<()> {
    let path = prompt(reader, writer, "Enter the repository path: ")?;
    let path = if path.is_empty() {
        config
            .repo
            .path
            .clone()
            .ok_or_else(|| ConfigError::MissingKey {
                section: "repo".to_string(),
                key: "path".to_string(),
            })?
    } else {
        path.into()
    };

    let files = prompt(reader, writer, "Enter the file(s) to track (comma-separated): ")?;
    let files = if files.is_empty() {
        config.repo.tracked_files.clone()
    } else {
        RepoContext::split_files(&files)
    };

    let branch = prompt(
        reader,
        writer,
        &format!("Enter the branch name (default '{}'): ", config.repo.branch),
    )?;
    let branch = if branch.is_empty() {
        config.repo.branch.clone()
    } else {
        branch
    };

    let context = RepoContext::new(path, files, branch)?;
    let boot = Bootstrapper::with_dry_run(context, config.global.dry);
    boot.bootstrap()?;

    menu_loop(reader, writer, &boot, config)
}

/// The single-threaded menu dispatch loop.
fn menu_loop(
    reader: &mut impl BufRead,
    writer: &mut impl Write,
    boot: &Bootstrapper,
    config: &Config,
) -> Result<()> {
    loop {
        writeln!(writer, "\nSelect an operation:")?;
        for (key, label) in MENU {
            writeln!(writer, "{key}. {label}")?;
        }

        let Some(choice) = prompt_or_eof(reader, writer, "Enter your choice: ")? else {
            // EOF is treated like an explicit exit
            return Ok(());
        };

        match choice.as_str() {
            "1" => boot.stage_tracked_files()?,
            "2" => {
                let msg = prompt(
                    reader,
                    writer,
                    "Enter commit message (or leave blank for default): ",
                )?;
                let msg = if msg.is_empty() { None } else { Some(msg) };
                boot.commit(msg.as_deref())?;
            }
            "3" => writeln!(writer, "{}", boot.status()?)?,
            "4" => {
                let remote = prompt(
                    reader,
                    writer,
                    &format!("Enter remote name (default '{}'): ", config.remote.name),
                )?;
                let remote = if remote.is_empty() {
                    config.remote.name.clone()
                } else {
                    remote
                };
                boot.push(&remote, None)?;
            }
            "5" => writeln!(writer, "{}", boot.log()?)?,
            "6" => writeln!(writer, "{}", boot.diff()?)?,
            "7" => writeln!(writer, "{}", boot.list_branches()?)?,
            "8" => {
                let branch = prompt(reader, writer, "Enter the branch name to switch to: ")?;
                if !branch.is_empty() {
                    boot.switch_branch(&branch)?;
                }
            }
            "9" => {
                let name = prompt(reader, writer, "Enter remote name: ")?;
                let url = prompt(reader, writer, "Enter remote URL: ")?;
                if !name.is_empty() && !url.is_empty() {
                    boot.upsert_remote(&name, &url)?;
                }
            }
            "0" => {
                writeln!(writer, "Exiting interactive mode.")?;
                return Ok(());
            }
            _ => writeln!(writer, "Invalid choice. Please try again.")?,
        }
    }
}

/// Print a prompt and read one trimmed line; EOF reads as empty.
fn prompt(reader: &mut impl BufRead, writer: &mut impl Write, text: &str) -> Result<String> {
    Ok(prompt_or_eof(reader, writer, text)?.unwrap_or_default())
}

/// Print a prompt and read one trimmed line; `None` on EOF.
fn prompt_or_eof(
    reader: &mut impl BufRead,
    writer: &mut impl Write,
    text: &str,
) -> Result<Option<String>> {
    write!(writer, "{text}")?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
