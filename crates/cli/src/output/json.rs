// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output.
//!
//! JSON is buffered and written at the end (not streamed).

use std::io::Write;

use chrono::Utc;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::output::error_chain;
use crate::runner::RunOutcome;

/// One failed checker.
#[derive(Debug, Serialize, PartialEq)]
pub struct JsonFailure {
    pub name: String,
    pub error: String,
}

/// Machine-readable run summary.
#[derive(Debug, Serialize)]
pub struct JsonOutput {
    /// ISO 8601 timestamp.
    pub timestamp: String,
    pub passed: bool,
    pub selected: Vec<String>,
    pub attempted: usize,
    pub aborted: bool,
    pub failures: Vec<JsonFailure>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unchecked: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_error: Option<JsonFailure>,
}

impl JsonOutput {
    /// Summarize a run. Returns None for errors that are not run outcomes.
    pub fn from_result(result: &Result<RunOutcome>, selected: &[String]) -> Option<Self> {
        let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
        match result {
            Ok(outcome) | Err(Error::CheckFailed(outcome)) => Some(Self {
                timestamp,
                passed: outcome.is_success(),
                selected: outcome.selected.clone(),
                attempted: outcome.attempted,
                aborted: outcome.aborted,
                failures: outcome
                    .failures
                    .iter()
                    .map(|f| JsonFailure {
                        name: f.name.clone(),
                        error: error_chain(f.error.as_ref()),
                    })
                    .collect(),
                unchecked: outcome.unchecked.clone(),
                load_error: None,
            }),
            Err(Error::Load { name, source }) => Some(Self {
                timestamp,
                passed: false,
                selected: selected.to_vec(),
                attempted: 0,
                aborted: false,
                failures: Vec::new(),
                unchecked: Vec::new(),
                load_error: Some(JsonFailure {
                    name: name.clone(),
                    error: error_chain(source.as_ref()),
                }),
            }),
            Err(_) => None,
        }
    }
}

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the summary as pretty-printed JSON followed by a newline.
    pub fn write(&mut self, output: &JsonOutput) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, output)?;
        writeln!(self.writer)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
