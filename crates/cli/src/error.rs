// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use crate::checker::BoxError;
use crate::event::Phase;
use crate::runner::RunOutcome;

/// Tabcheck error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Checker rejected at registration time.
    #[error("cannot register checker `{name}`: {reason}")]
    Registration { name: String, reason: String },

    /// A checker failed to load its data. Fatal for the whole run.
    #[error("failed to load {name}: {source}")]
    Load {
        name: String,
        #[source]
        source: BoxError,
    },

    /// One or more checkers failed their check.
    #[error("check failed count: {}", .0.failed_count())]
    CheckFailed(RunOutcome),

    /// Run stopped through its cancel token.
    #[error("run cancelled during {phase} phase")]
    Cancelled { phase: Phase },

    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Internal error (bug)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type using tabcheck Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// All checks passed
    Success = 0,
    /// A checker failed to load or check
    CheckFailed = 1,
    /// Configuration or argument error
    ConfigError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::CheckFailed(_) | Error::Load { .. } => ExitCode::CheckFailed,
            Error::Config { .. } | Error::Argument(_) | Error::Registration { .. } => {
                ExitCode::ConfigError
            }
            Error::Cancelled { .. } | Error::Io { .. } | Error::Internal(_) => {
                ExitCode::InternalError
            }
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
