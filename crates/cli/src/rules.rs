// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Checkers declared in tabcheck.toml.
//!
//! A declared checker decodes its table without a schema and applies the
//! row rules from its `[[checker]]` entry:
//! - `min_rows`: at least N rows
//! - `required`: every row is an object with each field present and non-null
//! - `unique`: no two rows share a value for each field

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::{PoisonError, RwLock};

use serde_json::Value as JsonValue;

use crate::checker::{BoxError, Checker};
use crate::config::CheckerConfig;
use crate::format::Format;
use crate::loader::{self, LoadError};
use crate::options::SubdirRewrites;
use crate::table::NotLoaded;

/// All rule violations found in one table.
#[derive(Debug)]
pub struct RuleViolations(pub Vec<String>);

impl fmt::Display for RuleViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("\n"))
    }
}

impl std::error::Error for RuleViolations {}

/// Checker driven by a `[[checker]]` config entry.
pub struct RuleChecker {
    spec: CheckerConfig,
    rows: RwLock<Option<Vec<JsonValue>>>,
}

impl RuleChecker {
    pub fn new(spec: CheckerConfig) -> Self {
        Self {
            spec,
            rows: RwLock::new(None),
        }
    }

    pub fn spec(&self) -> &CheckerConfig {
        &self.spec
    }

    /// Rule violations in `rows`, one message per violation.
    pub fn violations(&self, rows: &[JsonValue]) -> Vec<String> {
        let mut found = Vec::new();

        if rows.len() < self.spec.min_rows {
            found.push(format!(
                "expected at least {} rows, found {}",
                self.spec.min_rows,
                rows.len()
            ));
        }

        for (index, row) in rows.iter().enumerate() {
            let Some(object) = row.as_object() else {
                if !self.spec.required.is_empty() || !self.spec.unique.is_empty() {
                    found.push(format!("row {}: not an object", index));
                }
                continue;
            };
            for field in &self.spec.required {
                if object.get(field).is_none_or(JsonValue::is_null) {
                    found.push(format!("row {}: missing required field `{}`", index, field));
                }
            }
        }

        for field in &self.spec.unique {
            let mut first_seen: HashMap<String, usize> = HashMap::new();
            for (index, row) in rows.iter().enumerate() {
                let Some(value) = row.get(field).filter(|v| !v.is_null()) else {
                    continue;
                };
                let key = value.to_string();
                if let Some(first) = first_seen.get(&key) {
                    found.push(format!(
                        "row {}: duplicate {} = {} (first seen in row {})",
                        index, field, key, first
                    ));
                } else {
                    first_seen.insert(key, index);
                }
            }
        }

        found
    }
}

impl Checker for RuleChecker {
    fn name(&self) -> &str {
        &self.spec.name
    }

    fn load(
        &self,
        dir: &Path,
        format: Format,
        rewrites: &SubdirRewrites,
    ) -> Result<(), BoxError> {
        let document: JsonValue = loader::load_table(dir, &self.spec.path, format, rewrites)?;
        let rows = match document.pointer(&self.spec.rows) {
            Some(JsonValue::Array(rows)) => rows.clone(),
            _ => {
                return Err(LoadError::Rows {
                    path: loader::resolve_path(dir, &self.spec.path, format, rewrites),
                    pointer: self.spec.rows.clone(),
                }
                .into());
            }
        };
        *self.rows.write().unwrap_or_else(PoisonError::into_inner) = Some(rows);
        Ok(())
    }

    fn check(&self) -> Result<(), BoxError> {
        let guard = self.rows.read().unwrap_or_else(PoisonError::into_inner);
        let rows = guard
            .as_ref()
            .ok_or_else(|| NotLoaded(self.spec.name.clone()))?;
        let found = self.violations(rows);
        if found.is_empty() {
            Ok(())
        } else {
            Err(RuleViolations(found).into())
        }
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
