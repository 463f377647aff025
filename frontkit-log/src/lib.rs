//! Frontkit Diagnostics
//!
//! Small structured logger shared by the frontkit crates. The engine is
//! pure and synchronous, so the only thing it ever reports is diagnostic
//! output: configuration merge traces and the warning emitted when a
//! translation falls back to its `other` plural form.
//!
//! # Usage
//!
//! ```rust
//! use frontkit_log::{debug, warn};
//!
//! debug!("merging {} configuration sources", 3);
//! warn!(target: "frontkit::i18n", "missing plural form \".{}\"", "few");
//! ```
//!
//! # Environment Variables
//!
//! - `FRONTKIT_DEBUG=1` - Enable debug logging
//! - `FRONTKIT_LOG_LEVEL=trace|debug|info|warn|error|off` - Minimum level
//! - `FRONTKIT_LOG_FORMAT=pretty|compact|json` - Output format
//! - `FRONTKIT_LOG_COLOR=1|0` - Coloured level names (`color` feature)
//! - `FRONTKIT_LOG_TIMESTAMPS=1|0` - Prefix lines with a timestamp
//! - `FRONTKIT_LOG_MODULE=1|0` - Include the log target

mod capture;
mod output;

pub use capture::{Record, capture};

use once_cell::sync::Lazy;
use std::env;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

/// Log level, ordered from most to least verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Level {
    /// Trace level
    Trace = 0,
    /// Debug level
    Debug = 1,
    /// Info level
    Info = 2,
    /// Warning level
    Warn = 3,
    /// Error level
    Error = 4,
    /// Nothing is logged
    Off = 5,
}

impl Level {
    /// Parse a level name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(Level::Trace),
            "debug" => Some(Level::Debug),
            "info" => Some(Level::Info),
            "warn" | "warning" => Some(Level::Warn),
            "error" => Some(Level::Error),
            "off" | "none" => Some(Level::Off),
            _ => None,
        }
    }

    /// Upper-case level name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Off => "OFF",
        }
    }

    fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Level::Trace,
            1 => Level::Debug,
            2 => Level::Info,
            3 => Level::Warn,
            4 => Level::Error,
            _ => Level::Off,
        }
    }

    #[cfg(feature = "color")]
    pub(crate) fn colored(&self) -> colored::ColoredString {
        use colored::Colorize;
        match self {
            Level::Trace => "TRACE".magenta(),
            Level::Debug => "DEBUG".blue(),
            Level::Info => "INFO".green(),
            Level::Warn => "WARN".yellow(),
            Level::Error => "ERROR".red().bold(),
            Level::Off => "OFF".white(),
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Human-readable, one field per column
    Pretty,
    /// Short single-line form
    Compact,
    /// One JSON object per line
    Json,
}

impl Format {
    /// Parse a format name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Some(Format::Pretty),
            "compact" => Some(Format::Compact),
            "json" => Some(Format::Json),
            _ => None,
        }
    }
}

static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

static LOG_LEVEL: AtomicU8 = AtomicU8::new(Level::Warn as u8);

static CONFIG: Lazy<LogConfig> = Lazy::new(LogConfig::from_env);

/// Logger settings, read once from the environment.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Debug mode
    pub debug: bool,
    /// Minimum level written
    pub level: Level,
    /// Output format
    pub format: Format,
    /// Coloured level names
    pub color: bool,
    /// Timestamp prefix
    pub timestamps: bool,
    /// Include the log target
    pub module_path: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            debug: false,
            level: Level::Warn,
            format: Format::Pretty,
            color: false,
            timestamps: true,
            module_path: true,
        }
    }
}

fn env_flag(name: &str) -> Option<bool> {
    env::var(name)
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

impl LogConfig {
    /// Read settings from `FRONTKIT_*` environment variables.
    ///
    /// The library stays quiet by default: only warnings and errors are
    /// written unless a lower level is requested.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let debug = env_flag("FRONTKIT_DEBUG").unwrap_or(false);

        let level = env::var("FRONTKIT_LOG_LEVEL")
            .ok()
            .and_then(|s| Level::parse(&s))
            .unwrap_or(if debug { Level::Debug } else { defaults.level });

        let format = env::var("FRONTKIT_LOG_FORMAT")
            .ok()
            .and_then(|s| Format::parse(&s))
            .unwrap_or(defaults.format);

        let color = env_flag("FRONTKIT_LOG_COLOR")
            .unwrap_or_else(|| env::var("NO_COLOR").is_err() && env::var("TERM").is_ok());

        let config = Self {
            debug,
            level,
            format,
            color,
            timestamps: env_flag("FRONTKIT_LOG_TIMESTAMPS").unwrap_or(defaults.timestamps),
            module_path: env_flag("FRONTKIT_LOG_MODULE").unwrap_or(defaults.module_path),
        };

        DEBUG_ENABLED.store(config.debug, Ordering::SeqCst);
        LOG_LEVEL.store(config.level as u8, Ordering::SeqCst);

        config
    }
}

/// Read the environment now rather than on first use.
pub fn init() {
    Lazy::force(&CONFIG);
}

/// Get the global configuration.
pub fn config() -> &'static LogConfig {
    &CONFIG
}

/// Whether debug mode is on.
#[inline]
pub fn is_debug_enabled() -> bool {
    init();
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

/// Whether `level` would be written (or captured).
#[inline]
pub fn is_level_enabled(level: Level) -> bool {
    if level == Level::Off {
        return false;
    }
    init();
    capture::is_active() || level as u8 >= LOG_LEVEL.load(Ordering::Relaxed)
}

/// Current minimum level.
pub fn current_level() -> Level {
    Level::from_u8(LOG_LEVEL.load(Ordering::Relaxed))
}

/// Change the minimum level at runtime.
pub fn set_level(level: Level) {
    init();
    LOG_LEVEL.store(level as u8, Ordering::SeqCst);
}

/// Toggle debug mode at runtime.
pub fn set_debug(enabled: bool) {
    init();
    DEBUG_ENABLED.store(enabled, Ordering::SeqCst);
    if enabled && current_level() > Level::Debug {
        set_level(Level::Debug);
    }
}

/// Write one log line. Used by the macros.
#[doc(hidden)]
pub fn log(level: Level, target: &str, message: &str) {
    if capture::record(level, target, message) {
        return;
    }
    if !is_level_enabled(level) {
        return;
    }
    output::write(level, target, message, config());
}

/// Log at trace level.
#[macro_export]
macro_rules! trace {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Trace) {
            $crate::log($crate::Level::Trace, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Trace) {
            $crate::log($crate::Level::Trace, module_path!(), &format!($($arg)+));
        }
    };
}

/// Log at debug level.
///
/// Written when `FRONTKIT_DEBUG=1` or `FRONTKIT_LOG_LEVEL=debug`.
#[macro_export]
macro_rules! debug {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_debug_enabled() || $crate::is_level_enabled($crate::Level::Debug) {
            $crate::log($crate::Level::Debug, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        if $crate::is_debug_enabled() || $crate::is_level_enabled($crate::Level::Debug) {
            $crate::log($crate::Level::Debug, module_path!(), &format!($($arg)+));
        }
    };
}

/// Log at info level.
#[macro_export]
macro_rules! info {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Info) {
            $crate::log($crate::Level::Info, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Info) {
            $crate::log($crate::Level::Info, module_path!(), &format!($($arg)+));
        }
    };
}

/// Log at warn level.
#[macro_export]
macro_rules! warn {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Warn) {
            $crate::log($crate::Level::Warn, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Warn) {
            $crate::log($crate::Level::Warn, module_path!(), &format!($($arg)+));
        }
    };
}

/// Log at error level.
#[macro_export]
macro_rules! error {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Error) {
            $crate::log($crate::Level::Error, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Error) {
            $crate::log($crate::Level::Error, module_path!(), &format!($($arg)+));
        }
    };
}

#[cfg(feature = "tracing")]
pub mod tracing_compat {
    //! Tracing bridge.
    //!
    //! Builds a subscriber whose default filter follows `FRONTKIT_LOG_LEVEL`.

    use super::*;

    /// Create a tracing subscriber matching the frontkit settings.
    pub fn subscriber() -> impl tracing::Subscriber {
        use tracing_subscriber::prelude::*;
        use tracing_subscriber::{EnvFilter, fmt};

        let config = config();
        let level = config.level.as_str().to_ascii_lowercase();

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_ansi(config.color))
    }
}
