// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed table checker.

use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use serde::de::DeserializeOwned;

use crate::checker::{BoxError, Checker};
use crate::format::Format;
use crate::loader;
use crate::options::SubdirRewrites;

/// Validation callback of a [`TableChecker`].
pub type Validator<T> = Box<dyn Fn(&T) -> Result<(), BoxError> + Send + Sync>;

/// Returned by `check` when `load` has not succeeded.
#[derive(Debug, thiserror::Error)]
#[error("{0} is not loaded")]
pub struct NotLoaded(pub String);

/// Checker that decodes one table into `T` and validates it with a closure.
///
/// ```ignore
/// let items = TableChecker::new("Item", "conf/item", |conf: &ItemConf| {
///     if conf.items.is_empty() {
///         return Err("no items".into());
///     }
///     Ok(())
/// });
/// ```
pub struct TableChecker<T> {
    name: String,
    path: String,
    validate: Validator<T>,
    data: RwLock<Option<Arc<T>>>,
}

impl<T> TableChecker<T>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    pub fn new<F>(name: impl Into<String>, path: impl Into<String>, validate: F) -> Self
    where
        F: Fn(&T) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            path: path.into(),
            validate: Box::new(validate),
            data: RwLock::new(None),
        }
    }

    /// Logical path of the table, before rewrites.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Loaded table, if `load` succeeded.
    pub fn data(&self) -> Option<Arc<T>> {
        self.data
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl<T> Checker for TableChecker<T>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn load(
        &self,
        dir: &Path,
        format: Format,
        rewrites: &SubdirRewrites,
    ) -> Result<(), BoxError> {
        let table: T = loader::load_table(dir, &self.path, format, rewrites)?;
        *self.data.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(table));
        Ok(())
    }

    fn check(&self) -> Result<(), BoxError> {
        let table = self.data().ok_or_else(|| NotLoaded(self.name.clone()))?;
        (self.validate)(table.as_ref())
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
