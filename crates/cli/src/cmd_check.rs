// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check command implementation.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use termcolor::StandardStream;

use tabcheck::cli::{CheckArgs, Cli, OutputFormat};
use tabcheck::color::resolve_color;
use tabcheck::config::Config;
use tabcheck::discovery;
use tabcheck::error::{Error, ExitCode};
use tabcheck::output::json::{JsonFormatter, JsonOutput};
use tabcheck::output::text::{TextReporter, write_summary};
use tabcheck::{Hub, NameFilter, Options, RuleChecker};

/// Run the check command.
pub fn run(cli: &Cli, args: &CheckArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let (config_path, config) = discovery::load_config(cli.config.as_deref(), &cwd)?;

    let dir = data_dir(args.dir.as_deref(), &config, config_path.as_deref(), &cwd);
    let format = args.format.or(config.run.format).unwrap_or_default();
    tracing::debug!("data dir {} ({})", dir.display(), format);

    let hub = build_hub(&config)?;

    let filter = NameFilter::new(&args.only, &args.skip);
    let known = hub.names();
    let unknown = filter.unknown_names(&known);
    if !unknown.is_empty() {
        return Err(Error::Argument(format!("unknown checker: {}", unknown.join(", "))).into());
    }

    let color = resolve_color(args.color, args.no_color);

    let mut builder = Options::builder().subdir_rewrites(config.run.subdir_rewrites.clone());
    for (from, to) in &args.subdir_rewrites {
        builder = builder.subdir_rewrite(from, to);
    }
    if let Some(count) = args.break_failed_count.or(config.run.break_failed_count) {
        builder = builder.break_failed_count(count);
    }
    if args.output == OutputFormat::Text {
        builder = builder.reporter(Arc::new(TextReporter::stderr(color)));
    }
    let options = builder.build();

    let result = hub.run(&dir, &filter, format, &options);

    match args.output {
        OutputFormat::Text => {
            let mut stdout = StandardStream::stdout(color);
            write_summary(&mut stdout, &result)?;
        }
        OutputFormat::Json => {
            if let Some(output) = JsonOutput::from_result(&result, &hub.active_names()) {
                JsonFormatter::new(std::io::stdout().lock()).write(&output)?;
            }
        }
    }

    match result {
        Ok(_) => Ok(ExitCode::Success),
        Err(err @ (Error::CheckFailed(_) | Error::Load { .. })) => Ok(ExitCode::from(&err)),
        Err(err) => Err(err.into()),
    }
}

/// Data directory: CLI argument, else `[run].dir` relative to the config file, else cwd.
fn data_dir(arg: Option<&Path>, config: &Config, config_path: Option<&Path>, cwd: &Path) -> PathBuf {
    if let Some(dir) = arg {
        return cwd.join(dir);
    }
    match &config.run.dir {
        Some(dir) => {
            let base = config_path.and_then(Path::parent).unwrap_or(cwd);
            base.join(dir)
        }
        None => cwd.to_path_buf(),
    }
}

/// Register one rule checker per `[[checker]]` entry.
fn build_hub(config: &Config) -> tabcheck::Result<Hub> {
    let hub = Hub::new();
    for spec in &config.checkers {
        hub.register(Arc::new(RuleChecker::new(spec.clone())))?;
    }
    Ok(hub)
}
