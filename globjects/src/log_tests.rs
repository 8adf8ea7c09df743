//! Unit tests for log.rs
//!
//! Tests Logger trait, LogEntry, LogSeverity, DefaultLogger and the global logger swap.

use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
use crate::testing::CaptureLogger;
use serial_test::serial;
use std::time::SystemTime;

fn entry(severity: LogSeverity, file: Option<&'static str>, line: Option<u32>) -> LogEntry {
    LogEntry {
        severity,
        timestamp: SystemTime::now(),
        source: "glo::tests".to_string(),
        message: format!("{:?} message", severity),
        file,
        line,
    }
}

// ============================================================================
// LOG SEVERITY TESTS
// ============================================================================

#[test]
fn test_log_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

#[test]
fn test_log_severity_debug() {
    assert_eq!(format!("{:?}", LogSeverity::Trace), "Trace");
    assert_eq!(format!("{:?}", LogSeverity::Warn), "Warn");
    assert_eq!(format!("{:?}", LogSeverity::Error), "Error");
}

// ============================================================================
// LOG ENTRY TESTS
// ============================================================================

#[test]
fn test_log_entry_creation_with_file_line() {
    let entry = entry(LogSeverity::Error, Some("buffer.rs"), Some(42));

    assert_eq!(entry.severity, LogSeverity::Error);
    assert_eq!(entry.source, "glo::tests");
    assert_eq!(entry.file, Some("buffer.rs"));
    assert_eq!(entry.line, Some(42));
}

#[test]
fn test_log_entry_clone() {
    let entry1 = entry(LogSeverity::Warn, None, None);
    let entry2 = entry1.clone();

    assert_eq!(entry1.severity, entry2.severity);
    assert_eq!(entry1.message, entry2.message);
    assert!(entry2.file.is_none());
}

// ============================================================================
// DEFAULT LOGGER TESTS
// ============================================================================

#[test]
fn test_default_logger_all_severities() {
    let logger = DefaultLogger;

    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ] {
        // Just verify neither branch panics
        logger.log(&entry(severity, None, None));
        logger.log(&entry(severity, Some("log.rs"), Some(7)));
    }
}

#[test]
fn test_logger_trait_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DefaultLogger>();
    assert_send_sync::<CaptureLogger>();
}

// ============================================================================
// GLOBAL LOGGER TESTS
// ============================================================================

#[test]
#[serial]
fn test_set_logger_routes_macros() {
    let capture = CaptureLogger::install();

    crate::glo_info!("glo::tests", "routed {}", 1);
    crate::glo_error!("glo::tests", "failure {}", 2);

    let entries = capture.entries_from("glo::tests");
    crate::log::reset_logger();

    let info = entries.iter().find(|e| e.message == "routed 1").unwrap();
    assert_eq!(info.severity, LogSeverity::Info);
    assert!(info.file.is_none());

    let error = entries.iter().find(|e| e.message == "failure 2").unwrap();
    assert_eq!(error.severity, LogSeverity::Error);
    assert!(error.file.is_some());
    assert!(error.line.is_some());
}

#[test]
#[serial]
fn test_reset_logger_stops_capture() {
    let capture = CaptureLogger::install();
    crate::log::reset_logger();

    crate::glo_warn!("glo::tests", "after reset");

    assert!(capture
        .entries_from("glo::tests")
        .iter()
        .all(|e| e.message != "after reset"));
}

#[test]
#[serial]
fn test_err_macro_records_call_site() {
    let capture = CaptureLogger::install();

    let error = crate::glo_err!("glo::tests", "bad offset {}", 3);

    let entries = capture.entries_from("glo::tests");
    crate::log::reset_logger();

    assert!(matches!(error, crate::error::Error::InvalidResource(ref m) if m == "bad offset 3"));
    let logged = entries.iter().find(|e| e.message == "bad offset 3").unwrap();
    assert_eq!(logged.severity, LogSeverity::Error);
    assert!(logged.file.unwrap().ends_with("log_tests.rs"));
}
