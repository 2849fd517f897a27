// Structured logger for the page helpers.
//
// Level-filtered output with optional ANSI coloring and a pluggable
// handler so an embedding can route lines somewhere other than the
// standard streams (a browser console, a test buffer).

use std::fmt;
use std::sync::Arc;

/// ANSI escape codes used for colored output.
mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const BRIGHT: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const MAGENTA: &str = "\x1b[35m";
}

/// Log levels, lowest to highest severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
}

impl LogLevel {
    fn color(&self) -> &'static str {
        match self {
            LogLevel::Debug => ansi::MAGENTA,
            LogLevel::Info => ansi::BLUE,
            LogLevel::Warn => ansi::YELLOW,
            LogLevel::Error => ansi::RED,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for LogLevel {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "debug" => Self::Debug,
            "info" => Self::Info,
            "warn" | "warning" => Self::Warn,
            "error" => Self::Error,
            _ => Self::Warn,
        }
    }
}

/// Logger configuration options.
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Whether logging is disabled entirely.
    pub disabled: bool,
    /// Whether to disable ANSI color output.
    pub disable_colors: bool,
    /// The minimum log level to emit.
    pub level: LogLevel,
    /// Optional custom log handler (overrides default stderr/stdout output).
    pub custom_handler: Option<Arc<dyn LogHandler>>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            disabled: false,
            disable_colors: false,
            level: LogLevel::Warn,
            custom_handler: None,
        }
    }
}

/// Custom log handler trait for user-provided logging backends.
///
/// Browser embeddings typically install a handler that forwards to the
/// console instead of the standard streams.
pub trait LogHandler: fmt::Debug {
    fn handle(&self, level: LogLevel, message: &str);
}

/// The logger used throughout the page helpers.
#[derive(Clone)]
pub struct PageLogger {
    config: LoggerConfig,
}

impl fmt::Debug for PageLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageLogger")
            .field("level", &self.config.level)
            .field("disabled", &self.config.disabled)
            .finish()
    }
}

impl PageLogger {
    /// Create a new logger with the given configuration.
    pub fn new(config: LoggerConfig) -> Self {
        Self { config }
    }

    /// Get the current log level.
    pub fn level(&self) -> LogLevel {
        self.config.level
    }

    /// Whether a given level should be published.
    pub fn should_publish(&self, level: LogLevel) -> bool {
        if self.config.disabled {
            return false;
        }
        level >= self.config.level
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    /// Log a message at the given level.
    pub fn log(&self, level: LogLevel, message: &str) {
        if !self.should_publish(level) {
            return;
        }

        if let Some(ref handler) = self.config.custom_handler {
            handler.handle(level, message);
            return;
        }

        let formatted = self.format_message(level, message);
        match level {
            LogLevel::Warn | LogLevel::Error => eprintln!("{formatted}"),
            _ => println!("{formatted}"),
        }
    }

    /// Format a log message with timestamp, level, and prefix.
    fn format_message(&self, level: LogLevel, message: &str) -> String {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        if self.config.disable_colors {
            format!("{} {} [page-actions]: {}", timestamp, level.as_str(), message)
        } else {
            format!(
                "{dim}{timestamp}{reset} {color}{level}{reset} {bright}[page-actions]:{reset} {message}",
                dim = ansi::DIM,
                reset = ansi::RESET,
                color = level.color(),
                level = level.as_str(),
                bright = ansi::BRIGHT,
            )
        }
    }
}

impl Default for PageLogger {
    fn default() -> Self {
        Self::new(LoggerConfig::default())
    }
}
