//! Configuration constants and utilities for curlform
//!
//! Everything here is read from environment variables. Command line flags
//! take precedence and are applied by the caller.

use std::str::FromStr;
use std::time::Duration;

/// Environment variable holding tracing filter directives
pub const LOG_LEVEL_ENV_VAR: &str = "CURLFORM_LOG_LEVEL";

/// Environment variable selecting the clipboard backend
pub const CLIPBOARD_ENV_VAR: &str = "CURLFORM_CLIPBOARD";

/// Environment variable holding how many seconds a copy is kept on the
/// X11/Wayland clipboard after curlform exits (0 disables)
pub const CLIPBOARD_HOLD_ENV_VAR: &str = "CURLFORM_CLIPBOARD_HOLD_SECS";

pub const DEFAULT_CLIPBOARD_HOLD: Duration = Duration::from_secs(10);

/// Default filter when `CURLFORM_LOG_LEVEL` is unset
pub const DEFAULT_LOG_FILTER: &str = "error";

/// Where copied commands go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClipboardMode {
    /// The operating system clipboard via arboard
    #[default]
    System,
    /// An in-process buffer only
    Memory,
}

impl FromStr for ClipboardMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "system" => Ok(ClipboardMode::System),
            "memory" => Ok(ClipboardMode::Memory),
            other => Err(format!("unknown clipboard mode '{other}'")),
        }
    }
}

/// Get the clipboard mode, checking the environment variable first, then
/// falling back to the system clipboard
pub fn get_clipboard_mode() -> ClipboardMode {
    match std::env::var(CLIPBOARD_ENV_VAR) {
        Ok(value) => value.parse().unwrap_or_else(|e| {
            tracing::warn!("{}: {}, using system clipboard", CLIPBOARD_ENV_VAR, e);
            ClipboardMode::System
        }),
        Err(_) => ClipboardMode::System,
    }
}

/// Get how long to keep serving the clipboard on exit, falling back to
/// [`DEFAULT_CLIPBOARD_HOLD`] when unset or not a whole number of seconds
pub fn get_clipboard_hold() -> Duration {
    match std::env::var(CLIPBOARD_HOLD_ENV_VAR) {
        Ok(value) => match value.trim().parse::<u64>() {
            Ok(secs) => Duration::from_secs(secs),
            Err(e) => {
                tracing::warn!("{}='{}': {}, using default", CLIPBOARD_HOLD_ENV_VAR, value, e);
                DEFAULT_CLIPBOARD_HOLD
            }
        },
        Err(_) => DEFAULT_CLIPBOARD_HOLD,
    }
}

/// Get the log filter directives, falling back to [`DEFAULT_LOG_FILTER`]
pub fn get_log_filter() -> String {
    std::env::var_os(LOG_LEVEL_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .filter(|val| !val.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}
