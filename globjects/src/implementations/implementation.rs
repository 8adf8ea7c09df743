/// Implementation kinds and the selection contract shared by every kind

use std::fmt;
use std::rc::Rc;

use crate::capabilities::Capabilities;
use crate::error::{Error, Result};
use crate::registry::{ImplementationRegistry, ImplementationSlot};

// ============================================================================
// ImplementationKind
// ============================================================================

/// Resource kinds that have alternative low-level call strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ImplementationKind {
    Uniform,
    Buffer,
    Framebuffer,
    Debug,
    ProgramBinary,
    ShadingLanguageInclude,
    ObjectName,
}

impl ImplementationKind {
    /// All kinds, in registry initialization order
    pub const ALL: [ImplementationKind; 7] = [
        ImplementationKind::Uniform,
        ImplementationKind::Buffer,
        ImplementationKind::Framebuffer,
        ImplementationKind::Debug,
        ImplementationKind::ProgramBinary,
        ImplementationKind::ShadingLanguageInclude,
        ImplementationKind::ObjectName,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ImplementationKind::Uniform => "uniform",
            ImplementationKind::Buffer => "buffer",
            ImplementationKind::Framebuffer => "framebuffer",
            ImplementationKind::Debug => "debug",
            ImplementationKind::ProgramBinary => "program binary",
            ImplementationKind::ShadingLanguageInclude => "shading language include",
            ImplementationKind::ObjectName => "object name",
        }
    }
}

impl fmt::Display for ImplementationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// ImplementationChoice
// ============================================================================

/// One selectable variant of a kind
///
/// Each kind has a choice enum (e.g. `BufferChoice`) implementing this trait.
/// The registry is generic over it, so selection, forcing and lazy access are
/// written once for all kinds.
pub trait ImplementationChoice: Copy + Eq + fmt::Debug + 'static {
    /// Trait object handed out by the registry for this kind
    type Implementation: ?Sized;

    const KIND: ImplementationKind;

    /// Variants, most capable first
    const PREFERENCE: &'static [Self];

    fn name(&self) -> &'static str;

    /// Whether the context can run this variant
    fn is_supported(&self, capabilities: &Capabilities) -> bool;

    /// Construct a fresh instance of this variant
    fn instantiate(&self) -> Rc<Self::Implementation>;

    /// The registry slot holding this kind's selection
    fn slot(registry: &ImplementationRegistry) -> &ImplementationSlot<Self>;
}

/// First variant in preference order the context supports
pub fn select<C: ImplementationChoice>(capabilities: &Capabilities) -> Result<C> {
    C::PREFERENCE
        .iter()
        .copied()
        .find(|choice| choice.is_supported(capabilities))
        .ok_or(Error::NoSupportedImplementation(C::KIND))
}

#[cfg(test)]
#[path = "implementation_tests.rs"]
mod tests;
