/// ImplementationRegistry - per-context cache of the selected strategy per kind
///
/// Each kind owns one slot. A slot is empty until `initialize()` fills every
/// slot, `initialize_with()` forces one, or a getter fills it lazily. Once
/// filled, a slot hands out clones of the same `Rc` until it is re-initialized
/// or released.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::capabilities::Capabilities;
use crate::error::Result;
use crate::implementations::{
    select, BufferChoice, BufferImplementation, DebugChoice, DebugImplementation,
    FramebufferChoice, FramebufferImplementation, ImplementationChoice, ImplementationKind,
    ObjectNameChoice, ObjectNameImplementation, ProgramBinaryChoice, ProgramBinaryImplementation,
    ShadingLanguageIncludeChoice, ShadingLanguageIncludeImplementation, UniformChoice,
    UniformImplementation,
};

// ============================================================================
// ImplementationSlot
// ============================================================================

/// Selected choice for one kind, together with its instance
pub struct ImplementationSlot<C: ImplementationChoice> {
    entry: RefCell<Option<(C, Rc<C::Implementation>)>>,
}

impl<C: ImplementationChoice> ImplementationSlot<C> {
    fn new() -> Self {
        Self {
            entry: RefCell::new(None),
        }
    }

    fn choice(&self) -> Option<C> {
        self.entry.borrow().as_ref().map(|(choice, _)| *choice)
    }

    fn instance(&self) -> Option<Rc<C::Implementation>> {
        self.entry.borrow().as_ref().map(|(_, instance)| instance.clone())
    }

    fn is_filled(&self) -> bool {
        self.entry.borrow().is_some()
    }

    fn fill(&self, choice: C) -> Rc<C::Implementation> {
        let instance = choice.instantiate();
        // The previous instance (if any) drops here, outside the borrow
        let previous = self.entry.borrow_mut().replace((choice, instance.clone()));
        drop(previous);
        instance
    }

    fn release(&self) -> bool {
        let previous = self.entry.borrow_mut().take();
        previous.is_some()
    }
}

// ============================================================================
// ImplementationRegistry
// ============================================================================

pub struct ImplementationRegistry {
    capabilities: Capabilities,
    pub(crate) uniform: ImplementationSlot<UniformChoice>,
    pub(crate) buffer: ImplementationSlot<BufferChoice>,
    pub(crate) framebuffer: ImplementationSlot<FramebufferChoice>,
    pub(crate) debug: ImplementationSlot<DebugChoice>,
    pub(crate) program_binary: ImplementationSlot<ProgramBinaryChoice>,
    pub(crate) shading_language_include: ImplementationSlot<ShadingLanguageIncludeChoice>,
    pub(crate) object_name: ImplementationSlot<ObjectNameChoice>,
}

impl ImplementationRegistry {
    /// Empty registry; nothing is selected until first use or `initialize()`
    pub fn new(capabilities: Capabilities) -> Self {
        Self {
            capabilities,
            uniform: ImplementationSlot::new(),
            buffer: ImplementationSlot::new(),
            framebuffer: ImplementationSlot::new(),
            debug: ImplementationSlot::new(),
            program_binary: ImplementationSlot::new(),
            shading_language_include: ImplementationSlot::new(),
            object_name: ImplementationSlot::new(),
        }
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    // ===== INITIALIZATION =====

    /// Select and construct the preferred supported variant of every kind
    ///
    /// Replaces earlier selections, forced ones included. Stops at the first
    /// kind without a supported variant.
    pub fn initialize(&self) -> Result<()> {
        self.initialize_kind::<UniformChoice>()?;
        self.initialize_kind::<BufferChoice>()?;
        self.initialize_kind::<FramebufferChoice>()?;
        self.initialize_kind::<DebugChoice>()?;
        self.initialize_kind::<ProgramBinaryChoice>()?;
        self.initialize_kind::<ShadingLanguageIncludeChoice>()?;
        self.initialize_kind::<ObjectNameChoice>()?;
        Ok(())
    }

    /// Force `choice` for its kind, bypassing selection
    pub fn initialize_with<C: ImplementationChoice>(&self, choice: C) {
        if !choice.is_supported(&self.capabilities) {
            crate::glo_warn!(
                "glo::Registry",
                "Forcing {} implementation {} although the context does not support it",
                C::KIND,
                choice.name()
            );
        } else {
            crate::glo_info!(
                "glo::Registry",
                "Forcing {} implementation: {}",
                C::KIND,
                choice.name()
            );
        }
        C::slot(self).fill(choice);
    }

    fn initialize_kind<C: ImplementationChoice>(&self) -> Result<Rc<C::Implementation>> {
        let choice = match select::<C>(&self.capabilities) {
            Ok(choice) => choice,
            Err(err) => {
                crate::glo_error!(
                    "glo::Registry",
                    "No supported {} implementation (OpenGL {})",
                    C::KIND,
                    self.capabilities.version()
                );
                return Err(err);
            }
        };
        crate::glo_debug!("glo::Registry", "{} implementation: {}", C::KIND, choice.name());
        Ok(C::slot(self).fill(choice))
    }

    // ===== ACCESS =====

    /// Selected instance for the kind of `C`, selecting lazily if needed
    pub fn get<C: ImplementationChoice>(&self) -> Result<Rc<C::Implementation>> {
        match C::slot(self).instance() {
            Some(instance) => Ok(instance),
            None => self.initialize_kind::<C>(),
        }
    }

    /// Active choice for the kind of `C`, if one was made
    pub fn selected<C: ImplementationChoice>(&self) -> Option<C> {
        C::slot(self).choice()
    }

    pub fn uniform_implementation(&self) -> Result<Rc<dyn UniformImplementation>> {
        self.get::<UniformChoice>()
    }

    pub fn buffer_implementation(&self) -> Result<Rc<dyn BufferImplementation>> {
        self.get::<BufferChoice>()
    }

    pub fn framebuffer_implementation(&self) -> Result<Rc<dyn FramebufferImplementation>> {
        self.get::<FramebufferChoice>()
    }

    pub fn debug_implementation(&self) -> Result<Rc<dyn DebugImplementation>> {
        self.get::<DebugChoice>()
    }

    pub fn program_binary_implementation(&self) -> Result<Rc<dyn ProgramBinaryImplementation>> {
        self.get::<ProgramBinaryChoice>()
    }

    pub fn shading_language_include_implementation(
        &self,
    ) -> Result<Rc<dyn ShadingLanguageIncludeImplementation>> {
        self.get::<ShadingLanguageIncludeChoice>()
    }

    pub fn object_name_implementation(&self) -> Result<Rc<dyn ObjectNameImplementation>> {
        self.get::<ObjectNameChoice>()
    }

    /// Kinds currently holding an instance
    pub fn initialized_kinds(&self) -> Vec<ImplementationKind> {
        let filled = [
            self.uniform.is_filled(),
            self.buffer.is_filled(),
            self.framebuffer.is_filled(),
            self.debug.is_filled(),
            self.program_binary.is_filled(),
            self.shading_language_include.is_filled(),
            self.object_name.is_filled(),
        ];
        ImplementationKind::ALL
            .iter()
            .zip(filled)
            .filter(|(_, filled)| *filled)
            .map(|(kind, _)| *kind)
            .collect()
    }

    // ===== TEARDOWN =====

    /// Drop every held instance; returns the kinds that held one
    ///
    /// A second call returns an empty list. Wrappers still holding an `Rc`
    /// keep their instance alive until they drop it.
    pub fn release_all(&self) -> Vec<ImplementationKind> {
        let released = [
            self.uniform.release(),
            self.buffer.release(),
            self.framebuffer.release(),
            self.debug.release(),
            self.program_binary.release(),
            self.shading_language_include.release(),
            self.object_name.release(),
        ];
        let kinds: Vec<ImplementationKind> = ImplementationKind::ALL
            .iter()
            .zip(released)
            .filter(|(_, released)| *released)
            .map(|(kind, _)| *kind)
            .collect();
        if !kinds.is_empty() {
            crate::glo_debug!("glo::Registry", "Released {} implementations", kinds.len());
        }
        kinds
    }
}

impl Drop for ImplementationRegistry {
    fn drop(&mut self) {
        self.release_all();
    }
}

impl fmt::Debug for ImplementationRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImplementationRegistry")
            .field("version", &self.capabilities.version())
            .field("uniform", &self.uniform.choice())
            .field("buffer", &self.buffer.choice())
            .field("framebuffer", &self.framebuffer.choice())
            .field("debug", &self.debug.choice())
            .field("program_binary", &self.program_binary.choice())
            .field("shading_language_include", &self.shading_language_include.choice())
            .field("object_name", &self.object_name.choice())
            .finish()
    }
}

#[cfg(test)]
#[path = "implementation_registry_tests.rs"]
mod tests;
