// grm-rs: Git Repository Manager - Rust Port
//
// SPDX-FileCopyrightText: 2026 grm-rs Authors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   init, add, commit, status, push, log, diff,
//!   list-branches, switch-branch, add-remote, interactive
//! ```

pub mod interactive;
pub mod repo;
