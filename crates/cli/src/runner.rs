// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential load-then-check runner.
//!
//! A run has two phases over the same active subset:
//! - Load: fail-fast. The first load error aborts the run, nothing is checked.
//! - Check: fail-slow. Failures accumulate until `break_failed_count` is
//!   reached, then the remaining checkers are left unchecked.
//!
//! Both phases visit checkers in name order, one at a time.

use std::path::Path;

use crate::checker::BoxError;
use crate::error::{Error, Result};
use crate::event::{Phase, RunEvent};
use crate::filter::Filter;
use crate::format::Format;
use crate::options::Options;
use crate::registry::{CheckerMap, Hub};

/// A checker whose check returned an error.
#[derive(Debug)]
pub struct CheckFailure {
    pub name: String,
    pub error: BoxError,
}

/// What happened during the check phase of a run.
#[derive(Debug, Default)]
pub struct RunOutcome {
    /// Names in the active subset, in visit order.
    pub selected: Vec<String>,
    /// Checkers whose check was invoked.
    pub attempted: usize,
    pub passed: Vec<String>,
    /// Failures in the order they occurred.
    pub failures: Vec<CheckFailure>,
    /// Selected checkers skipped after the failure threshold was reached.
    pub unchecked: Vec<String>,
    /// True if the check phase stopped early.
    pub aborted: bool,
}

impl RunOutcome {
    pub fn failed_count(&self) -> usize {
        self.failures.len()
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

impl Hub {
    /// Load and check every registered checker accepted by `filter`.
    ///
    /// Returns the outcome when every attempted check passed. Otherwise:
    /// - [`Error::Load`] naming the first checker that failed to load
    /// - [`Error::CheckFailed`] carrying the outcome with its failures
    /// - [`Error::Cancelled`] if the cancel token was set
    pub fn run(
        &self,
        dir: impl AsRef<Path>,
        filter: &dyn Filter,
        format: Format,
        options: &Options,
    ) -> Result<RunOutcome> {
        let dir = dir.as_ref();
        let active = self.select(filter);
        let selected: Vec<String> = active.keys().cloned().collect();
        tracing::debug!(count = selected.len(), dir = %dir.display(), %format, "selected checkers");
        options
            .reporter()
            .report(&RunEvent::Selected { names: &selected });

        load_all(&active, dir, format, options)?;
        self.publish(active.clone());

        let outcome = check_all(&active, selected, options)?;
        if outcome.is_success() {
            Ok(outcome)
        } else {
            Err(Error::CheckFailed(outcome))
        }
    }
}

fn load_all(active: &CheckerMap, dir: &Path, format: Format, options: &Options) -> Result<()> {
    let reporter = options.reporter();
    for (name, checker) in active {
        let name = name.as_str();
        if options.cancel_token().is_cancelled() {
            return Err(Error::Cancelled { phase: Phase::Load });
        }

        tracing::info!(checker = %name, "=== LOAD");
        reporter.report(&RunEvent::LoadStarted { name });
        if let Err(source) = checker.load(dir, format, options.subdir_rewrites()) {
            tracing::warn!(checker = %name, error = %source, "--- FAIL");
            reporter.report(&RunEvent::LoadFailed {
                name,
                error: &*source,
            });
            return Err(Error::Load {
                name: name.to_string(),
                source,
            });
        }
        tracing::info!(checker = %name, "--- DONE");
        reporter.report(&RunEvent::Loaded { name });
    }
    Ok(())
}

fn check_all(active: &CheckerMap, selected: Vec<String>, options: &Options) -> Result<RunOutcome> {
    let reporter = options.reporter();
    let threshold = options.break_failed_count();
    let mut outcome = RunOutcome {
        selected,
        ..RunOutcome::default()
    };

    for (index, (name, checker)) in active.iter().enumerate() {
        let name = name.as_str();
        if options.cancel_token().is_cancelled() {
            return Err(Error::Cancelled {
                phase: Phase::Check,
            });
        }

        tracing::info!(checker = %name, "=== RUN");
        reporter.report(&RunEvent::CheckStarted { name });
        outcome.attempted += 1;
        match checker.check() {
            Ok(()) => {
                tracing::info!(checker = %name, "--- PASS");
                reporter.report(&RunEvent::Passed { name });
                outcome.passed.push(name.to_string());
            }
            Err(error) => {
                tracing::warn!(checker = %name, error = %error, "--- FAIL");
                reporter.report(&RunEvent::Failed {
                    name,
                    error: &*error,
                });
                outcome.failures.push(CheckFailure {
                    name: name.to_string(),
                    error,
                });
            }
        }

        if outcome.failed_count() >= threshold {
            outcome.unchecked = outcome.selected[index + 1..].to_vec();
            outcome.aborted = !outcome.unchecked.is_empty();
            if outcome.aborted {
                tracing::warn!(
                    failed = outcome.failed_count(),
                    threshold,
                    unchecked = outcome.unchecked.len(),
                    "check phase stopped"
                );
                reporter.report(&RunEvent::Aborted {
                    failed: outcome.failed_count(),
                    threshold,
                    unchecked: &outcome.unchecked,
                });
            }
            break;
        }
    }

    Ok(outcome)
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
