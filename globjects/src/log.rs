//! Diagnostics sink for globjects
//!
//! Registry choices, wrapper failures and driver debug messages all end up
//! here. The sink is process-wide and can be swapped with [`set_logger`];
//! KHR_debug callbacks may fire from a driver thread, so loggers must be
//! `Send + Sync`.

use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;

use chrono::{DateTime, Local};
use colored::*;

static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Receives every entry emitted through the `glo_*!` macros
///
/// # Example
///
/// ```no_run
/// use globjects::glo::log::{set_logger, LogEntry, LogSeverity, Logger};
///
/// struct ErrorsOnly;
///
/// impl Logger for ErrorsOnly {
///     fn log(&self, entry: &LogEntry) {
///         if entry.severity == LogSeverity::Error {
///             eprintln!("{}: {}", entry.source, entry.message);
///         }
///     }
/// }
///
/// set_logger(ErrorsOnly);
/// ```
pub trait Logger: Send + Sync {
    fn log(&self, entry: &LogEntry);
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub severity: LogSeverity,
    pub timestamp: SystemTime,
    /// Emitting component, e.g. `glo::Registry` or `glo::DebugMessage`
    pub source: String,
    pub message: String,
    /// Call site, recorded for errors only
    pub file: Option<&'static str>,
    pub line: Option<u32>,
}

impl LogEntry {
    fn new(severity: LogSeverity, source: &str, message: String) -> Self {
        Self {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: None,
            line: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogSeverity {
    fn tag(self) -> ColoredString {
        match self {
            LogSeverity::Trace => "TRACE".bright_black(),
            LogSeverity::Debug => "DEBUG".cyan(),
            LogSeverity::Info => "INFO ".green(),
            LogSeverity::Warn => "WARN ".yellow(),
            LogSeverity::Error => "ERROR".red().bold(),
        }
    }
}

/// Colored console sink; warnings and errors go to stderr
///
/// `[timestamp] [SEVERITY] [source] message (file:line)`
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let mut line = format!(
            "[{}] [{}] [{}] {}",
            datetime.format("%Y-%m-%d %H:%M:%S%.3f"),
            entry.severity.tag(),
            entry.source.bright_blue(),
            entry.message
        );
        if let (Some(file), Some(number)) = (entry.file, entry.line) {
            line.push_str(&format!(" ({}:{})", file, number));
        }

        if entry.severity >= LogSeverity::Warn {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}

fn logger() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)))
}

fn dispatch(entry: LogEntry) {
    if let Ok(lock) = logger().read() {
        lock.log(&entry);
    }
}

pub fn set_logger<L: Logger + 'static>(sink: L) {
    if let Ok(mut lock) = logger().write() {
        *lock = Box::new(sink);
    }
}

/// Back to [`DefaultLogger`]
pub fn reset_logger() {
    set_logger(DefaultLogger);
}

pub fn log(severity: LogSeverity, source: &str, message: String) {
    dispatch(LogEntry::new(severity, source, message));
}

/// Same as [`log`] with the call site attached
pub fn log_detailed(
    severity: LogSeverity,
    source: &str,
    message: String,
    file: &'static str,
    line: u32,
) {
    let mut entry = LogEntry::new(severity, source, message);
    entry.file = Some(file);
    entry.line = Some(line);
    dispatch(entry);
}

// ===== LOGGING MACROS =====

#[macro_export]
macro_rules! glo_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::log($crate::log::LogSeverity::Trace, $source, format!($($arg)*))
    };
}

#[macro_export]
macro_rules! glo_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::log($crate::log::LogSeverity::Debug, $source, format!($($arg)*))
    };
}

/// # Example
///
/// ```no_run
/// # use globjects::glo_info;
/// glo_info!("glo::Registry", "Buffer implementation: {}", "DirectStateAccessArb");
/// ```
#[macro_export]
macro_rules! glo_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::log($crate::log::LogSeverity::Info, $source, format!($($arg)*))
    };
}

#[macro_export]
macro_rules! glo_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::log($crate::log::LogSeverity::Warn, $source, format!($($arg)*))
    };
}

/// Errors carry the call site
#[macro_export]
macro_rules! glo_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::log_detailed(
            $crate::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
