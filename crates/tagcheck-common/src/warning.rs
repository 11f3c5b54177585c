//! Validator warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Warnings are things the operator should know about but that never change
//! a validation result: a dictionary key that was not lowercase, an attribute
//! listed twice for the same tag, and so on.

use std::collections::BTreeSet;
use std::io::{self, IsTerminal};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<BTreeSet<String>> = Mutex::new(BTreeSet::new());

static COLOR_DISABLED: AtomicBool = AtomicBool::new(false);

/// Enable or disable colored warnings (the CLI's `--no-color`).
///
/// Even when enabled, color is only used while stderr is a terminal.
pub fn set_color_enabled(enabled: bool) {
    COLOR_DISABLED.store(!enabled, Ordering::Relaxed);
}

fn color_enabled() -> bool {
    !COLOR_DISABLED.load(Ordering::Relaxed) && io::stderr().is_terminal()
}

/// The line printed for a warning, with or without ANSI color.
#[must_use]
pub fn format_warning(component: &str, message: &str, colored: bool) -> String {
    let text = format!("[tagcheck {component}] ⚠ {message}");
    if colored {
        text.yellow().to_string()
    } else {
        text
    }
}

/// Warn about a non-fatal condition (prints once per unique message)
///
/// # Example
/// ```
/// use tagcheck_common::warning::warn_once;
///
/// warn_once("Dictionary", "tag 'DIV' normalized to 'div'");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let should_print = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(key);

    if should_print {
        eprintln!("{}", format_warning(component, message, color_enabled()));
    }
}

/// Snapshot of every warning recorded so far, formatted as `[component] message`.
#[must_use]
pub fn recorded_warnings() -> Vec<String> {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .iter()
        .cloned()
        .collect()
}

/// Clear all recorded warnings (call before loading a new dictionary)
pub fn clear_warnings() {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clear();
}
