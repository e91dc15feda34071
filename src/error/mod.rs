// grm-rs: Git Repository Manager - Rust Port
//
// SPDX-FileCopyrightText: 2026 grm-rs Authors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!              GrmError (~16 bytes)
//!                     |
//!       +------+------+------+------+
//!       |      |      |      |      |
//!       v      v      v      v      v
//!      Tool   Git    Fs    Config  Io
//!      Box    Box    Box    Box    Box
//!
//! Sub-errors (unboxed internally):
//!   Tool    NotInstalled, NotFunctioning
//!   Git     CommandFailed, InvalidPath
//!   Fs      CreateDirFailed, CreateFileFailed
//!   Config  InvalidValue, MissingKey
//!
//! All variants boxed => GrmError stays pointer-sized.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`GrmError`].
pub type GrmResult<T> = std::result::Result<T, GrmError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum small on the stack.
#[derive(Debug, Error)]
pub enum GrmError {
    /// Git binary is missing from PATH or refuses to report its version.
    #[error("tool unavailable: {0}")]
    Tool(#[from] Box<ToolError>),

    /// Git command execution failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for GrmError {
                fn from(err: $error) -> Self {
                    GrmError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ToolError => Tool,
    GitError => Git,
    FsError => Fs,
    ConfigError => Config,
    std::io::Error => Io,
}

// --- Tool Errors ---

/// Errors establishing that the external git binary is usable.
///
/// Raised before any mutating operation runs, so a missing tool never
/// leaves partial state behind.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Git was not found on PATH.
    #[error("'{name}' not found in PATH; install it and try again")]
    NotInstalled { name: String },

    /// Git was found but the version query failed.
    #[error("'{name} --version' failed: {message}")]
    NotFunctioning { name: String, message: String },
}

// --- Git Errors ---

/// Git invocation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Git command returned a nonzero status. The message carries git's own
    /// stderr verbatim; the cause is never classified further.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// A path handed to git was not valid UTF-8.
    #[error("invalid path for git invocation: {path}")]
    InvalidPath { path: String },
}

// --- Filesystem Errors ---

/// Filesystem operation errors, always carrying the offending path.
#[derive(Debug, Error)]
pub enum FsError {
    /// Failed to create the repository directory tree.
    #[error("failed to create directory '{path}': {source}")]
    CreateDirFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create an empty tracked file.
    #[error("failed to create file '{path}': {source}")]
    CreateFileFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },
}
