// grm-rs: Git Repository Manager - Rust Port
//
// SPDX-FileCopyrightText: 2026 grm-rs Authors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Interactive | Init | Add | Commit | Status | Push
//!   Log | Diff | ListBranches | SwitchBranch | AddRemote
//! ```

use std::process::ExitCode;

use grm_rs::cli::global::GlobalOptions;
use grm_rs::cli::{self, Command};
use grm_rs::cmd::interactive::run_interactive_command;
use grm_rs::cmd::repo::{
    run_add_command, run_add_remote_command, run_commit_command, run_diff_command,
    run_init_command, run_list_branches_command, run_log_command, run_push_command,
    run_status_command, run_switch_branch_command,
};
use grm_rs::config::Config;
use grm_rs::config::loader::ConfigLoader;
use grm_rs::error::Result;
use grm_rs::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&config);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config)
}

fn load_config(global: &GlobalOptions) -> Result<Config> {
    let mut loader = ConfigLoader::new().add_toml_file_optional("grm.toml");
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    let mut config = loader.with_env_prefix("GRM").build()?;
    global.apply_overrides(&mut config);
    Ok(config)
}

fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.file_log_level())
        .maybe_with_log_file(
            config
                .global
                .log_file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .build()
}

fn dispatch_command(cli: &cli::Cli, config: &Config) -> ExitCode {
    // No subcommand defaults to interactive mode.
    let result = match &cli.command {
        Some(Command::Interactive) | None => run_interactive_command(config),
        Some(Command::Init(args)) => run_init_command(args, config),
        Some(Command::Add(args)) => run_add_command(args, config),
        Some(Command::Commit(args)) => run_commit_command(args, config),
        Some(Command::Status(args)) => run_status_command(args, config),
        Some(Command::Push(args)) => run_push_command(args, config),
        Some(Command::Log(args)) => run_log_command(args, config),
        Some(Command::Diff(args)) => run_diff_command(args, config),
        Some(Command::ListBranches(args)) => run_list_branches_command(args, config),
        Some(Command::SwitchBranch(args)) => run_switch_branch_command(args, config),
        Some(Command::AddRemote(args)) => run_add_remote_command(args, config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
