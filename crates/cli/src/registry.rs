// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Checker registry.
//!
//! The [`Hub`] holds three name-keyed maps:
//! - registered: every checker ever registered (last write wins)
//! - active: the subset selected by the most recent run
//! - published: the subset whose load phase last completed, for lookups
//!
//! Callers normally build a `Hub` once and pass it around. [`Hub::global`]
//! provides a lazily constructed process-wide instance for code that
//! registers checkers from many places.

use std::collections::BTreeMap;
use std::sync::{OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::checker::SharedChecker;
use crate::error::{Error, Result};
use crate::filter::Filter;

/// Name-keyed checker map. Iterates in name order.
pub type CheckerMap = BTreeMap<String, SharedChecker>;

/// Registry and orchestrator of checkers.
#[derive(Debug, Default)]
pub struct Hub {
    registered: RwLock<CheckerMap>,
    active: RwLock<CheckerMap>,
    published: RwLock<CheckerMap>,
}

static GLOBAL: OnceLock<Hub> = OnceLock::new();

impl Hub {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide hub, constructed on first access.
    pub fn global() -> &'static Hub {
        GLOBAL.get_or_init(Hub::new)
    }

    /// Register a checker under its name.
    ///
    /// A checker registered under an existing name replaces the earlier one.
    pub fn register(&self, checker: SharedChecker) -> Result<()> {
        if let Some(previous) = self.replace(checker)? {
            tracing::warn!(checker = %previous.name(), "replaced existing registration");
        }
        Ok(())
    }

    /// Register `checker`, returning the checker it replaced.
    pub fn replace(&self, checker: SharedChecker) -> Result<Option<SharedChecker>> {
        let name = checker.name().to_string();
        if name.trim().is_empty() {
            return Err(Error::Registration {
                name,
                reason: "checker name must not be empty".to_string(),
            });
        }
        tracing::debug!(checker = %name, "registered");
        Ok(write(&self.registered).insert(name, checker))
    }

    /// Registered checker by name.
    pub fn get(&self, name: &str) -> Option<SharedChecker> {
        read(&self.registered).get(name).cloned()
    }

    /// Registered names in ascending order.
    pub fn names(&self) -> Vec<String> {
        read(&self.registered).keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        read(&self.registered).len()
    }

    pub fn is_empty(&self) -> bool {
        read(&self.registered).is_empty()
    }

    /// Names selected by the most recent run.
    pub fn active_names(&self) -> Vec<String> {
        read(&self.active).keys().cloned().collect()
    }

    /// Loaded checker by name, from the last run whose load phase succeeded.
    pub fn lookup(&self, name: &str) -> Option<SharedChecker> {
        read(&self.published).get(name).cloned()
    }

    pub fn published_names(&self) -> Vec<String> {
        read(&self.published).keys().cloned().collect()
    }

    /// Compute the active subset for `filter` and replace the previous one.
    pub(crate) fn select(&self, filter: &dyn Filter) -> CheckerMap {
        let selected: CheckerMap = read(&self.registered)
            .iter()
            .filter(|(name, _)| filter.filter(name))
            .map(|(name, checker)| {
                let checker = filter.substitute(name).unwrap_or_else(|| checker.clone());
                (name.clone(), checker)
            })
            .collect();
        *write(&self.active) = selected.clone();
        selected
    }

    /// Make a loaded subset available through [`Hub::lookup`].
    pub(crate) fn publish(&self, loaded: CheckerMap) {
        *write(&self.published) = loaded;
    }
}

/// Register a checker on the global hub.
pub fn register(checker: SharedChecker) -> Result<()> {
    Hub::global().register(checker)
}

fn read(lock: &RwLock<CheckerMap>) -> RwLockReadGuard<'_, CheckerMap> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write(lock: &RwLock<CheckerMap>) -> RwLockWriteGuard<'_, CheckerMap> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
