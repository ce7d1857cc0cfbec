//! Diagnostic warnings with colored terminal output.
//!
//! Warnings are deduplicated process-wide so that a condition hit in a loop
//! is reported once rather than on every occurrence. Feature crates use this
//! channel for conditions that are worth surfacing but must not fail the
//! operation that detected them.

use std::collections::HashSet;
use std::sync::{Mutex, OnceLock};

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Messages already emitted this process, keyed by component + message.
static EMITTED: OnceLock<Mutex<HashSet<String>>> = OnceLock::new();

fn emitted() -> &'static Mutex<HashSet<String>> {
    EMITTED.get_or_init(|| Mutex::new(HashSet::new()))
}

/// Report a diagnostic condition (prints once per unique message).
///
/// # Example
/// ```
/// possum_common::warning::warn_once("selector", "unrecognized combinator token '>>'");
/// ```
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let should_print = emitted().lock().unwrap().insert(key);

    if should_print {
        eprintln!("{YELLOW}[Possum {component}] ⚠ {message}{RESET}");
    }
}

/// Forget all previously emitted warnings so they may print again.
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn clear_warnings() {
    emitted().lock().unwrap().clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    // The dedup set is process-wide; parallel tests would race on clear.
    #[test]
    fn test_warn_once_deduplicates_until_cleared() {
        clear_warnings();
        warn_once("test", "repeated condition");
        // Second emission of the same key is swallowed.
        let newly_inserted = emitted()
            .lock()
            .unwrap()
            .insert("[test] repeated condition".to_string());
        assert!(!newly_inserted);

        clear_warnings();
        assert!(!emitted().lock().unwrap().contains("[test] repeated condition"));
    }
}
