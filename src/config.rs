//! Configuration constants and utilities for keyline
//!
//! Timing windows and text constants used by the editing command state
//! machine. The debounce delay can be overridden per-process via an
//! environment variable; everything else is fixed.

use std::time::Duration;

/// Default quiet period for the debounced highlight pass, in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u64 = 200;

/// Window during which a chord initiator stays armed, in milliseconds
pub const CHORD_WINDOW_MS: u64 = 2000;

/// Text inserted by Tab indent and removed by Shift+Tab outdent
pub const INDENT_UNIT: &str = "  ";

/// Prefix prepended when commenting a line
pub const COMMENT_PREFIX: &str = "// ";

/// Environment variable name for overriding the debounce delay (milliseconds)
pub const DEBOUNCE_MS_ENV_VAR: &str = "KEYLINE_DEBOUNCE_MS";

/// Get the debounce delay, checking the environment variable first and
/// falling back to the default when unset or unparseable
pub fn get_debounce_delay() -> Duration {
    let ms = std::env::var(DEBOUNCE_MS_ENV_VAR)
        .ok()
        .and_then(|val| val.parse::<u64>().ok())
        .unwrap_or(DEFAULT_DEBOUNCE_MS);
    Duration::from_millis(ms)
}

/// The chord arming window as a [`Duration`]
pub fn chord_window() -> Duration {
    Duration::from_millis(CHORD_WINDOW_MS)
}
