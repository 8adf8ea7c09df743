/// DebugOutput - debug message routing for a context
///
/// Thin front-end over the selected debug implementation. The default handler
/// forwards messages to the wrapper logger with a severity mapped from the
/// message: High to ERROR, Medium to WARN, Low to INFO, Notification to DEBUG.

use std::rc::Rc;
use std::sync::Arc;

use crate::backend::{DebugMessage, DebugSeverity};
use crate::context::Context;
use crate::error::Result;
use crate::implementations::{DebugHandler, DebugImplementation, MessageFilter};
use crate::log::LogSeverity;

const SOURCE: &str = "glo::DebugOutput";

pub struct DebugOutput {
    context: Rc<Context>,
}

impl DebugOutput {
    pub fn new(context: &Rc<Context>) -> Self {
        Self {
            context: context.clone(),
        }
    }

    fn implementation(&self) -> Result<Rc<dyn DebugImplementation>> {
        self.context.implementations().debug_implementation()
    }

    /// Route messages to the wrapper logger
    pub fn enable(&self) -> Result<()> {
        self.enable_with_handler(Arc::new(log_message))
    }

    pub fn enable_with_callback<F>(&self, callback: F) -> Result<()>
    where
        F: Fn(&DebugMessage) + Send + Sync + 'static,
    {
        self.enable_with_handler(Arc::new(callback))
    }

    fn enable_with_handler(&self, handler: DebugHandler) -> Result<()> {
        self.implementation()?.enable(self.context.gl(), handler);
        crate::glo_debug!(SOURCE, "Debug output enabled");
        Ok(())
    }

    pub fn disable(&self) -> Result<()> {
        self.implementation()?.disable(self.context.gl());
        Ok(())
    }

    pub fn is_enabled(&self) -> Result<bool> {
        Ok(self.implementation()?.is_enabled())
    }

    /// Deliver messages on the thread issuing the GL call
    pub fn set_synchronous(&self, synchronous: bool) -> Result<()> {
        self.implementation()?
            .set_synchronous(self.context.gl(), synchronous);
        Ok(())
    }

    /// Insert an application message into the debug stream
    pub fn insert(&self, message: &DebugMessage) -> Result<()> {
        self.implementation()?
            .insert_message(self.context.gl(), message);
        Ok(())
    }

    /// Enable or disable a class of messages
    pub fn set_enabled(&self, filter: MessageFilter) -> Result<()> {
        self.implementation()?
            .control_messages(self.context.gl(), filter);
        Ok(())
    }

    /// Enable or disable all messages of one severity
    pub fn set_severity_enabled(&self, severity: DebugSeverity, enabled: bool) -> Result<()> {
        self.set_enabled(MessageFilter {
            severity: Some(severity),
            ..MessageFilter::all(enabled)
        })
    }

    /// Report pending native errors; returns how many were found
    pub fn check_errors(&self) -> Result<usize> {
        Ok(self.implementation()?.check_errors(self.context.gl()))
    }
}

/// Log severity for a debug message severity
pub fn log_severity(severity: DebugSeverity) -> LogSeverity {
    match severity {
        DebugSeverity::High => LogSeverity::Error,
        DebugSeverity::Medium => LogSeverity::Warn,
        DebugSeverity::Low => LogSeverity::Info,
        DebugSeverity::Notification => LogSeverity::Debug,
    }
}

/// Default handler: forward to the logger
pub fn log_message(message: &DebugMessage) {
    crate::log::log(
        log_severity(message.severity),
        SOURCE,
        format!(
            "[{:?}/{:?}] #{}: {}",
            message.source, message.message_type, message.id, message.message
        ),
    );
}

#[cfg(test)]
#[path = "debug_output_tests.rs"]
mod tests;
