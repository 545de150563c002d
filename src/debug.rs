//! Category-tagged debug logging.
//!
//! Thin layer over the `log` facade: every message carries a category
//! (`"HIGHLIGHT"`, `"RESOLVE"`, `"GUESS"`, ...) which becomes the log target,
//! so embedders can filter this extension's output with their usual logger
//! configuration (e.g. `RUST_LOG=RESOLVE=debug` under `env_logger`).

use std::fmt;

/// Debug level, ordered from least to most verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DebugLevel {
    Error = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl DebugLevel {
    fn as_log_level(self) -> log::Level {
        match self {
            DebugLevel::Error => log::Level::Error,
            DebugLevel::Info => log::Level::Info,
            DebugLevel::Debug => log::Level::Debug,
            DebugLevel::Trace => log::Level::Trace,
        }
    }
}

/// Check if logging is enabled for the given level and category.
pub fn is_enabled(level: DebugLevel, category: &str) -> bool {
    log::log_enabled!(target: category, level.as_log_level())
}

/// Log formatted message
pub fn logf(level: DebugLevel, category: &str, args: fmt::Arguments) {
    log::log!(target: category, level.as_log_level(), "{}", args);
}

// Convenience macros for logging
macro_rules! debug_error {
    ($category:expr, $($arg:tt)*) => {
        $crate::debug::logf($crate::debug::DebugLevel::Error, $category, format_args!($($arg)*))
    };
}

macro_rules! debug_info {
    ($category:expr, $($arg:tt)*) => {
        $crate::debug::logf($crate::debug::DebugLevel::Info, $category, format_args!($($arg)*))
    };
}

macro_rules! debug_log {
    ($category:expr, $($arg:tt)*) => {
        $crate::debug::logf($crate::debug::DebugLevel::Debug, $category, format_args!($($arg)*))
    };
}

macro_rules! debug_trace {
    ($category:expr, $($arg:tt)*) => {
        $crate::debug::logf($crate::debug::DebugLevel::Trace, $category, format_args!($($arg)*))
    };
}
