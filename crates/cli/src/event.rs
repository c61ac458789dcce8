// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-checker run events.
//!
//! The hub emits one event per step so the caller can render progress
//! (go-test style lines, JSON, etc.) without the hub knowing about output.

use std::error::Error as StdError;
use std::fmt;

use serde::Serialize;

/// Phase of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Load,
    Check,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Load => f.write_str("load"),
            Phase::Check => f.write_str("check"),
        }
    }
}

/// Something that happened during a run.
#[derive(Debug, Clone, Copy)]
pub enum RunEvent<'a> {
    /// Active subset computed.
    Selected { names: &'a [String] },
    LoadStarted { name: &'a str },
    Loaded { name: &'a str },
    LoadFailed {
        name: &'a str,
        error: &'a (dyn StdError + Send + Sync + 'static),
    },
    CheckStarted { name: &'a str },
    Passed { name: &'a str },
    Failed {
        name: &'a str,
        error: &'a (dyn StdError + Send + Sync + 'static),
    },
    /// Check phase stopped at the failure threshold.
    Aborted {
        failed: usize,
        threshold: usize,
        unchecked: &'a [String],
    },
}

impl RunEvent<'_> {
    /// Checker the event is about, if any.
    pub fn name(&self) -> Option<&str> {
        match *self {
            RunEvent::LoadStarted { name }
            | RunEvent::Loaded { name }
            | RunEvent::LoadFailed { name, .. }
            | RunEvent::CheckStarted { name }
            | RunEvent::Passed { name }
            | RunEvent::Failed { name, .. } => Some(name),
            RunEvent::Selected { .. } | RunEvent::Aborted { .. } => None,
        }
    }
}

/// Receives run events as they happen.
pub trait Reporter: Send + Sync {
    fn report(&self, event: &RunEvent<'_>);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&self, _event: &RunEvent<'_>) {}
}
