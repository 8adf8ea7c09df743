/// Test helpers shared by the unit tests (log capture, mock contexts)

use std::rc::Rc;
use std::sync::{Arc, Mutex};

use crate::backend::mock_backend::MockBackend;
use crate::backend::GlBackend;
use crate::capabilities::Version;
use crate::context::{Context, ContextConfig};
use crate::log::{LogEntry, LogSeverity, Logger};

// ============================================================================
// CaptureLogger
// ============================================================================

/// Logger that stores entries for later inspection
///
/// The logger is global, so tests installing it must be `#[serial]`.
#[derive(Clone, Default)]
pub struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl CaptureLogger {
    /// Install a fresh capture logger as the global logger
    pub fn install() -> Self {
        let capture = Self::default();
        crate::log::set_logger(capture.clone());
        capture
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn entries_from(&self, source: &str) -> Vec<LogEntry> {
        self.entries()
            .into_iter()
            .filter(|entry| entry.source == source)
            .collect()
    }

    /// Whether an entry of `severity` contains `needle`
    pub fn contains(&self, severity: LogSeverity, needle: &str) -> bool {
        self.entries()
            .iter()
            .any(|entry| entry.severity == severity && entry.message.contains(needle))
    }
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(entry.clone());
        }
    }
}

// ============================================================================
// Mock contexts
// ============================================================================

/// Eager initialization, no debug output
pub fn quiet_config() -> ContextConfig {
    ContextConfig {
        enable_debug_output: false,
        ..ContextConfig::default()
    }
}

pub fn context_for(mock: &Rc<MockBackend>, config: ContextConfig) -> Rc<Context> {
    let backend: Rc<dyn GlBackend> = mock.clone();
    Context::with_config(backend, config).unwrap()
}

/// OpenGL 4.6 context: every preferred variant except ARB include
pub fn mock_context() -> (Rc<MockBackend>, Rc<Context>) {
    let mock = Rc::new(MockBackend::new());
    let context = context_for(&mock, quiet_config());
    mock.clear_calls();
    (mock, context)
}

/// OpenGL 3.0 context without extensions: every legacy variant
pub fn legacy_context() -> (Rc<MockBackend>, Rc<Context>) {
    let mock = Rc::new(MockBackend::with_capabilities(Version::new(3, 0), &[]));
    let context = context_for(&mock, quiet_config());
    mock.clear_calls();
    (mock, context)
}
