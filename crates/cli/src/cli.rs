// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::format::Format;

/// Load configuration tables and run their checkers
#[derive(Parser)]
#[command(name = "tabcheck")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "TABCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load tables and run checkers
    Check(CheckArgs),
    /// List declared checkers
    List,
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// Data directory (default: [run].dir from config, else current directory)
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Table format
    #[arg(short, long)]
    pub format: Option<Format>,

    /// Run only these checkers
    #[arg(long, value_name = "NAME", value_delimiter = ',')]
    pub only: Vec<String>,

    /// Skip these checkers
    #[arg(long, value_name = "NAME", value_delimiter = ',')]
    pub skip: Vec<String>,

    /// Stop checking after this many failures (minimum 1)
    #[arg(long, value_name = "N")]
    pub break_failed_count: Option<usize>,

    /// Read OLD/ subdirectories from NEW/ instead
    #[arg(long = "subdir-rewrite", value_name = "OLD=NEW", value_parser = parse_rewrite)]
    pub subdir_rewrites: Vec<(String, String)>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Parse an `OLD=NEW` rewrite.
pub fn parse_rewrite(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((from, to)) if !from.is_empty() => Ok((from.to_string(), to.to_string())),
        Some(_) => Err("rewrite source must not be empty".to_string()),
        None => Err(format!("expected OLD=NEW, got `{}`", s)),
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
