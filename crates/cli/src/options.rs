// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run options.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::event::{NullReporter, Reporter};

/// Logical subdirectory prefix -> physical subdirectory prefix.
pub type SubdirRewrites = BTreeMap<String, String>;

/// Immutable options for one run. Build with [`Options::builder`].
#[derive(Clone)]
pub struct Options {
    break_failed_count: usize,
    subdir_rewrites: SubdirRewrites,
    cancel: CancelToken,
    reporter: Arc<dyn Reporter>,
}

impl Options {
    /// Default early-abort threshold.
    pub const DEFAULT_BREAK_FAILED_COUNT: usize = 1;

    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }

    /// Stop the check phase once this many checkers have failed (always >= 1).
    pub fn break_failed_count(&self) -> usize {
        self.break_failed_count
    }

    /// Rewrites passed to every checker's load.
    pub fn subdir_rewrites(&self) -> &SubdirRewrites {
        &self.subdir_rewrites
    }

    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    pub fn reporter(&self) -> &dyn Reporter {
        self.reporter.as_ref()
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("break_failed_count", &self.break_failed_count)
            .field("subdir_rewrites", &self.subdir_rewrites)
            .field("cancelled", &self.cancel.is_cancelled())
            .finish_non_exhaustive()
    }
}

/// Builder for [`Options`].
///
/// Setters may be called in any order and repeatedly; the last call wins.
/// `build()` normalizes the result.
#[derive(Default)]
pub struct OptionsBuilder {
    break_failed_count: Option<usize>,
    subdir_rewrites: SubdirRewrites,
    cancel: Option<CancelToken>,
    reporter: Option<Arc<dyn Reporter>>,
}

impl OptionsBuilder {
    /// Early-abort threshold. Values below 1 are raised to 1.
    pub fn break_failed_count(mut self, count: usize) -> Self {
        self.break_failed_count = Some(count);
        self
    }

    /// Replace the whole rewrite map.
    pub fn subdir_rewrites(mut self, rewrites: SubdirRewrites) -> Self {
        self.subdir_rewrites = rewrites;
        self
    }

    /// Add a single rewrite.
    pub fn subdir_rewrite(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.subdir_rewrites.insert(from.into(), to.into());
        self
    }

    pub fn cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    pub fn build(self) -> Options {
        Options {
            break_failed_count: self
                .break_failed_count
                .unwrap_or(Options::DEFAULT_BREAK_FAILED_COUNT)
                .max(1),
            subdir_rewrites: self.subdir_rewrites,
            cancel: self.cancel.unwrap_or_default(),
            reporter: self.reporter.unwrap_or_else(|| Arc::new(NullReporter)),
        }
    }
}

/// Cooperative cancellation flag shared between a run and its caller.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. The run stops at the next checker boundary.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
