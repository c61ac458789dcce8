//! Shared unit test utilities.
//!
//! Provides mock checkers and a recording reporter for unit tests.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::checker::{BoxError, Checker};
use crate::event::{Reporter, RunEvent};
use crate::format::Format;
use crate::options::SubdirRewrites;

/// Shared log of `load:<name>` / `check:<name>` calls across mocks.
pub type Journal = Arc<Mutex<Vec<String>>>;

/// Outcome a mock returns from load or check.
#[derive(Clone)]
pub enum Behavior {
    Ok,
    Fail(String),
}

/// Checker with scripted load/check results that counts its calls.
pub struct MockChecker {
    name: String,
    load: Behavior,
    check: Behavior,
    loads: AtomicUsize,
    checks: AtomicUsize,
    journal: Option<Journal>,
    last_load: Mutex<Option<(PathBuf, Format, SubdirRewrites)>>,
}

impl MockChecker {
    pub fn new(name: &str, load: Behavior, check: Behavior) -> Self {
        Self {
            name: name.to_string(),
            load,
            check,
            loads: AtomicUsize::new(0),
            checks: AtomicUsize::new(0),
            journal: None,
            last_load: Mutex::new(None),
        }
    }

    pub fn passing(name: &str) -> Self {
        Self::new(name, Behavior::Ok, Behavior::Ok)
    }

    pub fn failing_check(name: &str, msg: &str) -> Self {
        Self::new(name, Behavior::Ok, Behavior::Fail(msg.to_string()))
    }

    pub fn failing_load(name: &str, msg: &str) -> Self {
        Self::new(name, Behavior::Fail(msg.to_string()), Behavior::Ok)
    }

    pub fn with_journal(mut self, journal: &Journal) -> Self {
        self.journal = Some(journal.clone());
        self
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    pub fn check_count(&self) -> usize {
        self.checks.load(Ordering::SeqCst)
    }

    /// Arguments of the most recent load call.
    pub fn last_load(&self) -> Option<(PathBuf, Format, SubdirRewrites)> {
        self.last_load.lock().unwrap().clone()
    }

    fn record(&self, entry: String) {
        if let Some(journal) = &self.journal {
            journal.lock().unwrap().push(entry);
        }
    }
}

impl Checker for MockChecker {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(
        &self,
        dir: &Path,
        format: Format,
        rewrites: &SubdirRewrites,
    ) -> Result<(), BoxError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.record(format!("load:{}", self.name));
        *self.last_load.lock().unwrap() = Some((dir.to_path_buf(), format, rewrites.clone()));
        match &self.load {
            Behavior::Ok => Ok(()),
            Behavior::Fail(msg) => Err(msg.clone().into()),
        }
    }

    fn check(&self) -> Result<(), BoxError> {
        self.checks.fetch_add(1, Ordering::SeqCst);
        self.record(format!("check:{}", self.name));
        match &self.check {
            Behavior::Ok => Ok(()),
            Behavior::Fail(msg) => Err(msg.clone().into()),
        }
    }
}

/// Reporter that renders every event to a compact line.
#[derive(Default)]
pub struct RecordingReporter {
    lines: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, event: &RunEvent<'_>) {
        let line = match event {
            RunEvent::Selected { names } => format!("SELECT {}", names.join(",")),
            RunEvent::LoadStarted { name } => format!("LOAD {name}"),
            RunEvent::Loaded { name } => format!("DONE {name}"),
            RunEvent::LoadFailed { name, error } => format!("LOADFAIL {name}: {error}"),
            RunEvent::CheckStarted { name } => format!("RUN {name}"),
            RunEvent::Passed { name } => format!("PASS {name}"),
            RunEvent::Failed { name, error } => format!("FAIL {name}: {error}"),
            RunEvent::Aborted {
                failed, threshold, ..
            } => format!("ABORT {failed}/{threshold}"),
        };
        self.lines.lock().unwrap().push(line);
    }
}

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically.
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}
