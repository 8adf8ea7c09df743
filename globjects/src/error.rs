//! Error types for globjects
//!
//! This module defines the error types used throughout the wrapper,
//! including implementation selection, resource validation and shader builds.

use std::fmt;

use crate::implementations::ImplementationKind;

/// Result type for globjects operations
pub type Result<T> = std::result::Result<T, Error>;

/// globjects errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (driver, loader, bindings)
    BackendError(String),

    /// Invalid resource usage (out-of-range update, bad attachment, etc.)
    InvalidResource(String),

    /// Initialization failed (context, registry)
    InitializationFailed(String),

    /// No implementation variant of this kind is supported by the context
    NoSupportedImplementation(ImplementationKind),

    /// Shader compilation failed (carries the info log)
    CompilationFailed(String),

    /// Program link failed (carries the info log)
    LinkFailed(String),

    /// A shader `#include` did not resolve to a named string
    IncludeNotFound(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::NoSupportedImplementation(kind) => {
                write!(f, "No supported {} implementation for this context", kind)
            }
            Error::CompilationFailed(log) => write!(f, "Shader compilation failed: {}", log),
            Error::LinkFailed(log) => write!(f, "Program link failed: {}", log),
            Error::IncludeNotFound(path) => write!(f, "Include not found: {}", path),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an ERROR and build an `Error::InvalidResource` with the same message
///
/// # Example
///
/// ```no_run
/// # use globjects::glo_err;
/// let err = glo_err!("glo::Buffer", "Offset {} out of range", 42);
/// ```
#[macro_export]
macro_rules! glo_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::log::log_detailed(
            $crate::log::LogSeverity::Error,
            $source,
            message.clone(),
            file!(),
            line!(),
        );
        $crate::glo::Error::InvalidResource(message)
    }};
}

/// Log an ERROR and return `Err(Error::InvalidResource(..))` from the current function
#[macro_export]
macro_rules! glo_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::glo_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
