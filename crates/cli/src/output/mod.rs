//! Output formatting for run results.

pub mod json;
pub mod text;

use std::error::Error as StdError;

/// Render an error with its source chain on one line (`outer: inner: root`).
pub fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        // Wrappers often repeat their source's message; skip duplicates.
        if !rendered.ends_with(&cause_text) {
            rendered.push_str(": ");
            rendered.push_str(&cause_text);
        }
        source = cause.source();
    }
    rendered
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
