//! Validation orchestrator for configuration tables.
//!
//! Register [`Checker`]s on a [`Hub`], then [`Hub::run`] loads every
//! selected checker's table from a directory and checks each one,
//! stopping after `break_failed_count` failures.

pub mod checker;
pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod event;
pub mod filter;
pub mod format;
pub mod loader;
pub mod options;
pub mod output;
pub mod registry;
pub mod rules;
pub mod runner;
pub mod table;

pub use checker::{BoxError, Checker, SharedChecker};
pub use cli::{CheckArgs, Cli, Command, OutputFormat};
pub use error::{Error, ExitCode, Result};
pub use event::{NullReporter, Phase, Reporter, RunEvent};
pub use filter::{Filter, MatchAll, NameFilter, Overrides};
pub use format::Format;
pub use options::{CancelToken, Options, OptionsBuilder, SubdirRewrites};
pub use registry::{Hub, register};
pub use rules::RuleChecker;
pub use runner::{CheckFailure, RunOutcome};
pub use table::TableChecker;

#[cfg(test)]
pub mod test_utils;
