// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output.
//!
//! Progress lines follow go test conventions and are streamed to stderr:
//! ```text
//! === LOAD  <name>
//! --- DONE: <name>
//! === RUN   <name>
//! --- PASS: <name>
//! --- FAIL: <name>
//!     <error>
//! ```
//!
//! The summary line goes to stdout once the run is over.

use std::io;
use std::sync::{Mutex, PoisonError};

use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::color::scheme;
use crate::error::{Error, Result};
use crate::event::{Reporter, RunEvent};
use crate::output::error_chain;
use crate::runner::RunOutcome;

/// Streams run events as go-test style lines.
pub struct TextReporter<W> {
    out: Mutex<W>,
}

impl TextReporter<StandardStream> {
    pub fn stderr(color_choice: ColorChoice) -> Self {
        Self::new(StandardStream::stderr(color_choice))
    }
}

impl<W: WriteColor + Send> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_event(&self, event: &RunEvent<'_>) -> io::Result<()> {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        let out = &mut *out;
        match *event {
            RunEvent::Selected { .. } => Ok(()),
            RunEvent::LoadStarted { name } => marker(out, "=== LOAD  ", name),
            RunEvent::Loaded { name } => marker(out, "--- DONE: ", name),
            RunEvent::CheckStarted { name } => marker(out, "=== RUN   ", name),
            RunEvent::Passed { name } => status(out, "PASS", scheme::pass(), name),
            RunEvent::LoadFailed { name, error } | RunEvent::Failed { name, error } => {
                status(out, "FAIL", scheme::fail(), name)?;
                for line in error_chain(error).lines() {
                    writeln!(out, "    {}", line)?;
                }
                Ok(())
            }
            RunEvent::Aborted {
                failed,
                threshold,
                unchecked,
            } => {
                write!(out, "--- ")?;
                out.set_color(&scheme::stop())?;
                write!(out, "STOP")?;
                out.reset()?;
                writeln!(
                    out,
                    ": {} failed (break at {}), {} not checked",
                    failed,
                    threshold,
                    unchecked.len()
                )
            }
        }
    }
}

impl<W: WriteColor + Send> Reporter for TextReporter<W> {
    fn report(&self, event: &RunEvent<'_>) {
        if let Err(e) = self.write_event(event) {
            tracing::debug!(error = %e, "failed to write progress line");
        }
    }
}

fn marker(out: &mut dyn WriteColor, prefix: &str, name: &str) -> io::Result<()> {
    out.set_color(&scheme::phase())?;
    write!(out, "{}", prefix)?;
    out.reset()?;
    writeln!(out, "{}", name)
}

fn status(out: &mut dyn WriteColor, label: &str, color: ColorSpec, name: &str) -> io::Result<()> {
    write!(out, "--- ")?;
    out.set_color(&color)?;
    write!(out, "{}", label)?;
    out.reset()?;
    write!(out, ": ")?;
    out.set_color(&scheme::checker_name())?;
    write!(out, "{}", name)?;
    out.reset()?;
    writeln!(out)
}

/// Write the one-line summary of a run.
pub fn write_summary(out: &mut dyn WriteColor, result: &Result<RunOutcome>) -> io::Result<()> {
    match result {
        Ok(outcome) => {
            let passed = outcome.passed.len();
            writeln!(
                out,
                "{} checker{} passed",
                passed,
                if passed == 1 { "" } else { "s" }
            )
        }
        Err(Error::CheckFailed(outcome)) => {
            out.set_color(&scheme::fail())?;
            write!(
                out,
                "{} of {} checkers failed",
                outcome.failed_count(),
                outcome.attempted
            )?;
            out.reset()?;
            if !outcome.unchecked.is_empty() {
                write!(out, ", {} not checked", outcome.unchecked.len())?;
            }
            writeln!(out)
        }
        Err(Error::Load { name, .. }) => {
            out.set_color(&scheme::fail())?;
            write!(out, "load failed: {}", name)?;
            out.reset()?;
            writeln!(out, " (no checks run)")
        }
        Err(_) => Ok(()),
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
