// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! List command implementation.

use tabcheck::cli::Cli;
use tabcheck::discovery;

/// Print declared checkers, one per line, as `name<TAB>path`.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let (_, config) = discovery::load_config(cli.config.as_deref(), &cwd)?;

    for checker in &config.checkers {
        println!("{}\t{}", checker.name, checker.path);
    }
    Ok(())
}
