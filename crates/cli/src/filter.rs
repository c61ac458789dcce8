// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Checker selection for a run.
//!
//! Semantics of [`NameFilter`]:
//! - No names: every checker participates
//! - `only`: run ONLY the named checkers
//! - `skip`: never run the named checkers (wins over `only`)

use std::collections::{BTreeMap, BTreeSet};

use crate::checker::SharedChecker;

/// Decides whether a registered checker participates in a run.
pub trait Filter: Send + Sync {
    /// Whether the checker named `name` is selected.
    fn filter(&self, name: &str) -> bool;

    /// Checker to run in place of the registered one, if any.
    ///
    /// Only consulted for names this filter accepts.
    fn substitute(&self, _name: &str) -> Option<SharedChecker> {
        None
    }
}

/// Selects every registered checker.
#[derive(Debug, Default, Clone, Copy)]
pub struct MatchAll;

impl Filter for MatchAll {
    fn filter(&self, _name: &str) -> bool {
        true
    }
}

impl<F> Filter for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn filter(&self, name: &str) -> bool {
        self(name)
    }
}

/// Include/exclude lists of checker names.
#[derive(Debug, Default, Clone)]
pub struct NameFilter {
    only: BTreeSet<String>,
    skip: BTreeSet<String>,
}

impl NameFilter {
    pub fn new<I, J, S, T>(only: I, skip: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            only: only.into_iter().map(Into::into).collect(),
            skip: skip.into_iter().map(Into::into).collect(),
        }
    }

    /// Filter that accepts only the given names.
    pub fn only<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names, std::iter::empty::<String>())
    }

    /// Names in either list that are not in `known`.
    pub fn unknown_names<'a>(&'a self, known: &'a [String]) -> Vec<&'a str> {
        self.only
            .iter()
            .chain(self.skip.iter())
            .filter(|n| !known.contains(n))
            .map(String::as_str)
            .collect()
    }
}

impl Filter for NameFilter {
    fn filter(&self, name: &str) -> bool {
        if self.skip.contains(name) {
            return false;
        }
        self.only.is_empty() || self.only.contains(name)
    }
}

/// Wraps a filter and swaps in replacement checkers by name.
///
/// Used to run a mock or variant checker under a registered name
/// without touching the registry.
pub struct Overrides<F> {
    inner: F,
    replacements: BTreeMap<String, SharedChecker>,
}

impl<F: Filter> Overrides<F> {
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            replacements: BTreeMap::new(),
        }
    }

    /// Run `checker` in place of the registered checker with the same name.
    pub fn with(mut self, checker: SharedChecker) -> Self {
        self.replacements
            .insert(checker.name().to_string(), checker);
        self
    }
}

impl<F: Filter> Filter for Overrides<F> {
    fn filter(&self, name: &str) -> bool {
        self.inner.filter(name)
    }

    fn substitute(&self, name: &str) -> Option<SharedChecker> {
        self.replacements
            .get(name)
            .cloned()
            .or_else(|| self.inner.substitute(name))
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
