// grm-rs: Git Repository Manager - Rust Port
//
// SPDX-FileCopyrightText: 2026 grm-rs Authors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git invocation module.
//!
//! ```text
//!        Public API
//!    cmd.rs      query.rs
//!   (write)      (read)
//!       \          /
//!        v        v
//!      git_command()
//!           |
//!           v
//!       git binary
//! ```
//!
//! Every operation maps to exactly one git invocation with a fixed
//! argument template. Arguments are passed as discrete tokens, never
//! through a shell. Repository state is owned entirely by git; the only
//! direct metadata access is the `.git` directory presence check in
//! [`query::is_git_repo`].

pub mod cmd;
pub mod query;


use crate::error::{GitError, GrmResult};
use std::path::Path;

/// Convert a path to a UTF-8 argument token for git.
pub(crate) fn path_arg(path: &Path) -> GrmResult<&str> {
    path.to_str().ok_or_else(|| {
        GitError::InvalidPath {
            path: path.display().to_string(),
        }
        .into()
    })
}
