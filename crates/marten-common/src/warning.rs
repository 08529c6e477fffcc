//! Engine warnings with colored terminal output.
//!
//! Stylesheets routinely contain properties and values the engine does not
//! understand. Those are never fatal; they are reported here once per unique
//! message so a large stylesheet does not flood stderr.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about skipped input (prints once per unique message).
///
/// # Example
/// ```ignore
/// warn_once("CSS", "unknown property 'colr'");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let should_print = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_print {
        eprintln!("{}", format!("[marten {component}] warning: {message}").yellow());
    }
}

/// Whether `message` has already been reported for `component`.
#[must_use]
pub fn was_warned(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .is_some_and(|set| set.contains(&key))
}

/// Clear all recorded warnings (call before styling a new document).
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warn_once_records_message() {
        assert!(!was_warned("test", "recorded message for warning tests"));
        warn_once("test", "recorded message for warning tests");
        warn_once("test", "recorded message for warning tests");
        assert!(was_warned("test", "recorded message for warning tests"));
    }

    #[test]
    fn test_component_is_part_of_the_key() {
        warn_once("a", "shared text between components");
        assert!(!was_warned("b", "shared text between components"));
    }
}
