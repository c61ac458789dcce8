// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Serialization formats a table can be loaded from.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// On-disk format of checker data.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Json,
    #[serde(alias = "yml")]
    #[value(alias = "yml")]
    Yaml,
    Toml,
}

impl Format {
    /// All supported formats.
    pub const ALL: [Format; 3] = [Format::Json, Format::Yaml, Format::Toml];

    /// File extension used for this format (without the dot).
    pub fn extension(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
            Format::Toml => "toml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            "toml" => Ok(Format::Toml),
            other => Err(format!("unknown format `{other}` (expected json, yaml or toml)")),
        }
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
