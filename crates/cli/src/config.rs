//! Configuration parsing and validation.
//!
//! Handles tabcheck.toml parsing with version validation and unknown key warnings.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::format::Format;
use crate::options::SubdirRewrites;

/// Config file name looked up by discovery.
pub const CONFIG_FILE_NAME: &str = "tabcheck.toml";

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Full configuration.
#[derive(Debug, Default)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Run defaults.
    pub run: RunConfig,

    /// Declared checkers, in file order.
    pub checkers: Vec<CheckerConfig>,
}

/// `[run]` section. Every field can be overridden from the command line.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct RunConfig {
    /// Data directory, relative to the config file.
    pub dir: Option<PathBuf>,

    pub format: Option<Format>,

    pub break_failed_count: Option<usize>,

    #[serde(default)]
    pub subdir_rewrites: SubdirRewrites,
}

/// One `[[checker]]` entry.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct CheckerConfig {
    pub name: String,

    /// Logical table path without extension (e.g. "conf/item").
    pub path: String,

    /// JSON pointer to the row array (default: document root).
    #[serde(default)]
    pub rows: String,

    /// Minimum number of rows.
    #[serde(default)]
    pub min_rows: usize,

    /// Fields every row must carry (non-null).
    #[serde(default)]
    pub required: Vec<String>,

    /// Fields whose values must be unique across rows.
    #[serde(default)]
    pub unique: Vec<String>,
}

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: Option<i64>,

    #[serde(default)]
    run: Option<FlexibleSection<RunConfig>>,

    #[serde(default)]
    checker: Vec<FlexibleSection<CheckerConfig>>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

#[derive(Deserialize)]
struct FlexibleSection<T> {
    #[serde(flatten)]
    known: T,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

const RUN_KEYS: &[&str] = &["dir", "format", "break_failed_count", "subdir_rewrites"];
const CHECKER_KEYS: &[&str] = &["name", "path", "rows", "min_rows", "required", "unique"];

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    let content = read(path)?;
    parse(&content, path)
}

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = read(path)?;
    parse_with_warnings(&content, path)
}

/// Parse config from string content, ignoring unknown keys.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    parse_collecting(content, path).map(|(config, _)| config)
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let (config, unknown_keys) = parse_collecting(content, path)?;
    for key in &unknown_keys {
        warn_unknown_key(path, key);
    }
    Ok(config)
}

/// Parse config and return the unknown keys found, in document order per section.
pub fn parse_collecting(content: &str, path: &Path) -> Result<(Config, Vec<String>)> {
    let flexible: FlexibleConfig =
        toml::from_str(content).map_err(|e| config_error(e.to_string(), path))?;

    let version = flexible
        .version
        .ok_or_else(|| config_error("missing required field: version".to_string(), path))?;

    if version != SUPPORTED_VERSION {
        return Err(config_error(
            format!(
                "unsupported config version {} (supported: {})\n  Upgrade tabcheck to use this config.",
                version, SUPPORTED_VERSION
            ),
            path,
        ));
    }

    let mut unknown_keys: Vec<String> = flexible.unknown.keys().cloned().collect();

    let run = match flexible.run {
        Some(section) => {
            unknown_keys.extend(
                section
                    .unknown
                    .keys()
                    .filter(|k| !RUN_KEYS.contains(&k.as_str()))
                    .map(|k| format!("run.{}", k)),
            );
            section.known
        }
        None => RunConfig::default(),
    };

    let mut checkers = Vec::with_capacity(flexible.checker.len());
    let mut seen = BTreeSet::new();
    for (index, section) in flexible.checker.into_iter().enumerate() {
        unknown_keys.extend(
            section
                .unknown
                .keys()
                .filter(|k| !CHECKER_KEYS.contains(&k.as_str()))
                .map(|k| format!("checker[{}].{}", index, k)),
        );

        let checker = section.known;
        if checker.name.trim().is_empty() {
            return Err(config_error(
                format!("checker[{}]: name must not be empty", index),
                path,
            ));
        }
        if checker.path.trim().is_empty() {
            return Err(config_error(
                format!("checker `{}`: path must not be empty", checker.name),
                path,
            ));
        }
        if !seen.insert(checker.name.clone()) {
            return Err(config_error(
                format!("checker `{}` is declared more than once", checker.name),
                path,
            ));
        }
        checkers.push(checker);
    }

    Ok((
        Config {
            version,
            run,
            checkers,
        },
        unknown_keys,
    ))
}

impl Config {
    /// Names of declared checkers, in file order.
    pub fn checker_names(&self) -> Vec<String> {
        self.checkers.iter().map(|c| c.name.clone()).collect()
    }
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

fn config_error(message: String, path: &Path) -> Error {
    Error::Config {
        message,
        path: Some(path.to_path_buf()),
    }
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "tabcheck: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
