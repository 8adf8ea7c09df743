/// Debug output strategies
///
/// `DebugKhr` installs a driver callback (KHR_debug). `Legacy` has no driver
/// support: it polls `glGetError` on request and forwards inserted messages to
/// the handler itself, honoring the same message filters.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

use crate::backend::{Capability, DebugMessage, DebugSeverity, DebugSource, DebugType, GlBackend, GlError};
use crate::capabilities::{Capabilities, Extension};
use crate::implementations::{ImplementationChoice, ImplementationKind};
use crate::registry::{ImplementationRegistry, ImplementationSlot};

/// Receives debug messages
///
/// `Send + Sync` because asynchronous driver output arrives on a driver thread.
pub type DebugHandler = Arc<dyn Fn(&DebugMessage) + Send + Sync>;

/// Upper bound on `glGetError` reads per poll; a lost context reports errors forever
const MAX_ERRORS_PER_POLL: usize = 64;

pub trait DebugImplementation {
    fn enable(&self, gl: &dyn GlBackend, handler: DebugHandler);
    fn disable(&self, gl: &dyn GlBackend);
    fn is_enabled(&self) -> bool;
    fn set_synchronous(&self, gl: &dyn GlBackend, synchronous: bool);
    fn insert_message(&self, gl: &dyn GlBackend, message: &DebugMessage);
    fn control_messages(&self, gl: &dyn GlBackend, filter: MessageFilter);

    /// Report pending native errors, returns how many were found
    fn check_errors(&self, gl: &dyn GlBackend) -> usize;
}

// ============================================================================
// MessageFilter
// ============================================================================

/// Enables or disables a class of messages (`None` matches anything)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageFilter {
    pub source: Option<DebugSource>,
    pub message_type: Option<DebugType>,
    pub severity: Option<DebugSeverity>,
    /// Restrict to these ids (empty matches any id)
    pub ids: Vec<u32>,
    pub enabled: bool,
}

impl MessageFilter {
    pub fn all(enabled: bool) -> Self {
        Self {
            source: None,
            message_type: None,
            severity: None,
            ids: Vec::new(),
            enabled,
        }
    }

    pub fn matches(&self, message: &DebugMessage) -> bool {
        self.source.map_or(true, |source| source == message.source)
            && self.message_type.map_or(true, |ty| ty == message.message_type)
            && self.severity.map_or(true, |severity| severity == message.severity)
            && (self.ids.is_empty() || self.ids.contains(&message.id))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DebugChoice {
    DebugKhr,
    Legacy,
}

impl ImplementationChoice for DebugChoice {
    type Implementation = dyn DebugImplementation;

    const KIND: ImplementationKind = ImplementationKind::Debug;
    const PREFERENCE: &'static [Self] = &[DebugChoice::DebugKhr, DebugChoice::Legacy];

    fn name(&self) -> &'static str {
        match self {
            DebugChoice::DebugKhr => "DebugKhr",
            DebugChoice::Legacy => "Legacy",
        }
    }

    fn is_supported(&self, capabilities: &Capabilities) -> bool {
        match self {
            DebugChoice::DebugKhr => capabilities.is_supported(Extension::KhrDebug),
            DebugChoice::Legacy => true,
        }
    }

    fn instantiate(&self) -> Rc<dyn DebugImplementation> {
        match self {
            DebugChoice::DebugKhr => Rc::new(DebugKhr::new()),
            DebugChoice::Legacy => Rc::new(DebugLegacy::new()),
        }
    }

    fn slot(registry: &ImplementationRegistry) -> &ImplementationSlot<Self> {
        &registry.debug
    }
}

// ============================================================================
// KHR_debug
// ============================================================================

pub struct DebugKhr {
    enabled: Cell<bool>,
}

impl DebugKhr {
    pub fn new() -> Self {
        Self {
            enabled: Cell::new(false),
        }
    }
}

impl Default for DebugKhr {
    fn default() -> Self {
        Self::new()
    }
}

impl DebugImplementation for DebugKhr {
    fn enable(&self, gl: &dyn GlBackend, handler: DebugHandler) {
        gl.debug_message_callback(Some(Box::new(move |message: DebugMessage| handler(&message))));
        gl.enable(Capability::DebugOutput);
        self.enabled.set(true);
    }

    fn disable(&self, gl: &dyn GlBackend) {
        gl.disable(Capability::DebugOutput);
        gl.debug_message_callback(None);
        self.enabled.set(false);
    }

    fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    fn set_synchronous(&self, gl: &dyn GlBackend, synchronous: bool) {
        if synchronous {
            gl.enable(Capability::DebugOutputSynchronous);
        } else {
            gl.disable(Capability::DebugOutputSynchronous);
        }
    }

    fn insert_message(&self, gl: &dyn GlBackend, message: &DebugMessage) {
        gl.debug_message_insert(message);
    }

    fn control_messages(&self, gl: &dyn GlBackend, filter: MessageFilter) {
        gl.debug_message_control(
            filter.source,
            filter.message_type,
            filter.severity,
            &filter.ids,
            filter.enabled,
        );
    }

    /// Errors reach the driver callback on their own
    fn check_errors(&self, _gl: &dyn GlBackend) -> usize {
        0
    }
}

// ============================================================================
// Legacy (glGetError polling)
// ============================================================================

pub struct DebugLegacy {
    handler: RefCell<Option<DebugHandler>>,
    filters: RefCell<Vec<MessageFilter>>,
}

impl DebugLegacy {
    pub fn new() -> Self {
        Self {
            handler: RefCell::new(None),
            filters: RefCell::new(Vec::new()),
        }
    }

    /// Last matching filter wins; messages are enabled by default
    fn passes(&self, message: &DebugMessage) -> bool {
        self.filters
            .borrow()
            .iter()
            .rev()
            .find(|filter| filter.matches(message))
            .map(|filter| filter.enabled)
            .unwrap_or(true)
    }

    fn dispatch(&self, message: &DebugMessage) {
        let handler = self.handler.borrow().clone();
        if let Some(handler) = handler {
            if self.passes(message) {
                handler(message);
            }
        }
    }
}

impl Default for DebugLegacy {
    fn default() -> Self {
        Self::new()
    }
}

impl DebugImplementation for DebugLegacy {
    fn enable(&self, _gl: &dyn GlBackend, handler: DebugHandler) {
        *self.handler.borrow_mut() = Some(handler);
    }

    fn disable(&self, _gl: &dyn GlBackend) {
        *self.handler.borrow_mut() = None;
    }

    fn is_enabled(&self) -> bool {
        self.handler.borrow().is_some()
    }

    fn set_synchronous(&self, _gl: &dyn GlBackend, _synchronous: bool) {
        // always synchronous
    }

    fn insert_message(&self, _gl: &dyn GlBackend, message: &DebugMessage) {
        self.dispatch(message);
    }

    fn control_messages(&self, _gl: &dyn GlBackend, filter: MessageFilter) {
        self.filters.borrow_mut().push(filter);
    }

    fn check_errors(&self, gl: &dyn GlBackend) -> usize {
        let mut count = 0;
        while count < MAX_ERRORS_PER_POLL {
            let error = gl.get_error();
            if error == GlError::NoError {
                break;
            }
            count += 1;
            self.dispatch(&DebugMessage::from_error(error));
        }
        count
    }
}

#[cfg(test)]
#[path = "debug_implementation_tests.rs"]
mod tests;
