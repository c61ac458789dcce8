// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Table loading.
//!
//! A table is addressed by a logical path relative to the data directory,
//! without extension (e.g. `conf/item`). Subdir rewrites relocate the
//! logical path before the format's extension is appended:
//!
//! ```text
//! dir = data, logical = conf/item, rewrites = { "conf/" = "conf-v2/" }
//! => data/conf-v2/item.json
//! ```

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::format::Format;
use crate::options::SubdirRewrites;

/// Errors raised while loading a table.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot decode {} as {format}: {message}", .path.display())]
    Parse {
        path: PathBuf,
        format: Format,
        message: String,
    },

    #[error("{}: no row array at `{pointer}`", .path.display())]
    Rows { path: PathBuf, pointer: String },
}

/// Apply the longest matching rewrite prefix to `logical`.
pub fn rewrite_subdir(logical: &str, rewrites: &SubdirRewrites) -> String {
    let best = rewrites
        .iter()
        .filter(|(from, _)| logical.starts_with(from.as_str()))
        .max_by_key(|(from, _)| from.len());

    match best {
        Some((from, to)) => format!("{}{}", to, &logical[from.len()..]),
        None => logical.to_string(),
    }
}

/// Physical file path of a table.
pub fn resolve_path(
    dir: &Path,
    logical: &str,
    format: Format,
    rewrites: &SubdirRewrites,
) -> PathBuf {
    let relative = rewrite_subdir(logical, rewrites);
    dir.join(format!("{}.{}", relative, format.extension()))
}

/// Decode `content` in `format`.
pub fn decode<T: DeserializeOwned>(content: &str, format: Format) -> Result<T, String> {
    match format {
        Format::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        Format::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        Format::Toml => toml::from_str(content).map_err(|e| e.to_string()),
    }
}

/// Read and decode the table at `logical`.
pub fn load_table<T: DeserializeOwned>(
    dir: &Path,
    logical: &str,
    format: Format,
    rewrites: &SubdirRewrites,
) -> Result<T, LoadError> {
    let path = resolve_path(dir, logical, format, rewrites);
    tracing::debug!(path = %path.display(), %format, "reading table");

    let content = std::fs::read_to_string(&path).map_err(|source| LoadError::Io {
        path: path.clone(),
        source,
    })?;

    decode(&content, format).map_err(|message| LoadError::Parse {
        path,
        format,
        message,
    })
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
