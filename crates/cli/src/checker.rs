// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The checker contract.
//!
//! A checker is a named unit that loads one dataset from a directory and
//! then validates it. The hub drives both halves: every selected checker
//! is loaded before any of them is checked.

use std::path::Path;
use std::sync::Arc;

use crate::format::Format;
use crate::options::SubdirRewrites;

/// Error type returned by checker implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A checker shared between the hub and its downstream consumers.
pub type SharedChecker = Arc<dyn Checker>;

/// A named unit combining data loading and validation.
///
/// Object-safe to allow dynamic dispatch via `Arc<dyn Checker>`. Methods
/// take `&self`: implementations keep their loaded state behind interior
/// mutability so the hub can publish loaded checkers for lookup.
pub trait Checker: Send + Sync {
    /// Unique, stable name used as the registry key.
    fn name(&self) -> &str;

    /// Populate the checker's state from `dir` in the given format.
    ///
    /// Called at most once per run. A later call replaces earlier state.
    fn load(
        &self,
        dir: &Path,
        format: Format,
        rewrites: &SubdirRewrites,
    ) -> Result<(), BoxError>;

    /// Validate the loaded state. No I/O is expected here.
    fn check(&self) -> Result<(), BoxError>;
}

impl std::fmt::Debug for dyn Checker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Checker").field("name", &self.name()).finish()
    }
}
