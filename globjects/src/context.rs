/// Context - a loaded OpenGL context as seen by the wrappers
///
/// Owns the backend, the capability snapshot (inside the registry), the
/// implementation registry and the named-string store. Every wrapper keeps an
/// `Rc<Context>`, so the context outlives all objects created from it.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::backend::GlBackend;
use crate::capabilities::Capabilities;
use crate::error::Result;
use crate::implementations::{
    BufferChoice, DebugChoice, FramebufferChoice, ObjectNameChoice, ProgramBinaryChoice,
    ShadingLanguageIncludeChoice, UniformChoice,
};
use crate::objects::DebugOutput;
use crate::registry::ImplementationRegistry;

// ============================================================================
// Configuration
// ============================================================================

/// Forced implementation per kind, applied after capability detection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImplementationOverrides {
    pub uniform: Option<UniformChoice>,
    pub buffer: Option<BufferChoice>,
    pub framebuffer: Option<FramebufferChoice>,
    pub debug: Option<DebugChoice>,
    pub program_binary: Option<ProgramBinaryChoice>,
    pub shading_language_include: Option<ShadingLanguageIncludeChoice>,
    pub object_name: Option<ObjectNameChoice>,
}

impl ImplementationOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(&self, registry: &ImplementationRegistry) {
        if let Some(choice) = self.uniform {
            registry.initialize_with(choice);
        }
        if let Some(choice) = self.buffer {
            registry.initialize_with(choice);
        }
        if let Some(choice) = self.framebuffer {
            registry.initialize_with(choice);
        }
        if let Some(choice) = self.debug {
            registry.initialize_with(choice);
        }
        if let Some(choice) = self.program_binary {
            registry.initialize_with(choice);
        }
        if let Some(choice) = self.shading_language_include {
            registry.initialize_with(choice);
        }
        if let Some(choice) = self.object_name {
            registry.initialize_with(choice);
        }
    }
}

/// Context creation options
#[derive(Debug, Clone)]
pub struct ContextConfig {
    /// Route driver debug messages to the logger
    pub enable_debug_output: bool,
    /// Deliver debug messages on the calling thread
    pub synchronous_debug_output: bool,
    /// Select every implementation at creation instead of on first use
    pub eager_initialization: bool,
    pub overrides: ImplementationOverrides,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            enable_debug_output: cfg!(debug_assertions),
            synchronous_debug_output: true,
            eager_initialization: true,
            overrides: ImplementationOverrides::default(),
        }
    }
}

// ============================================================================
// Context
// ============================================================================

pub struct Context {
    backend: Rc<dyn GlBackend>,
    implementations: ImplementationRegistry,
    named_strings: RefCell<FxHashMap<String, String>>,
}

impl Context {
    /// Wrap a loaded context with the default configuration
    pub fn new(backend: Rc<dyn GlBackend>) -> Result<Rc<Context>> {
        Self::with_config(backend, ContextConfig::default())
    }

    pub fn with_config(backend: Rc<dyn GlBackend>, config: ContextConfig) -> Result<Rc<Context>> {
        let capabilities = Capabilities::detect(backend.as_ref());
        let implementations = ImplementationRegistry::new(capabilities);

        if config.eager_initialization {
            implementations.initialize()?;
        }
        config.overrides.apply(&implementations);

        let context = Rc::new(Context {
            backend,
            implementations,
            named_strings: RefCell::new(FxHashMap::default()),
        });

        if config.enable_debug_output {
            let debug = DebugOutput::new(&context);
            debug.enable()?;
            debug.set_synchronous(config.synchronous_debug_output)?;
        }

        crate::glo_info!(
            "glo::Context",
            "Context ready (OpenGL {})",
            context.capabilities().version()
        );
        Ok(context)
    }

    /// Native entry points
    pub fn gl(&self) -> &dyn GlBackend {
        self.backend.as_ref()
    }

    pub fn backend(&self) -> &Rc<dyn GlBackend> {
        &self.backend
    }

    pub fn capabilities(&self) -> &Capabilities {
        self.implementations.capabilities()
    }

    pub fn implementations(&self) -> &ImplementationRegistry {
        &self.implementations
    }

    // ===== NAMED STRINGS =====

    /// Register `string` under `name` for shader includes
    ///
    /// Names must be absolute (`/lib/common.glsl`). Replaces an existing entry.
    pub fn create_named_string(&self, name: &str, string: &str) -> Result<()> {
        if !name.starts_with('/') {
            crate::glo_bail!("glo::Context", "Named string '{}' must start with '/'", name);
        }
        let implementation = self.implementations.shading_language_include_implementation()?;
        implementation.create_named_string(self.gl(), name, string);
        self.named_strings
            .borrow_mut()
            .insert(name.to_string(), string.to_string());
        Ok(())
    }

    /// Returns whether a named string was removed
    pub fn delete_named_string(&self, name: &str) -> Result<bool> {
        let removed = self.named_strings.borrow_mut().remove(name).is_some();
        if removed {
            let implementation = self.implementations.shading_language_include_implementation()?;
            implementation.delete_named_string(self.gl(), name);
        }
        Ok(removed)
    }

    pub fn named_string(&self, name: &str) -> Option<String> {
        self.named_strings.borrow().get(name).cloned()
    }

    pub fn is_named_string(&self, name: &str) -> bool {
        self.named_strings.borrow().contains_key(name)
    }

    pub(crate) fn named_strings(&self) -> Ref<'_, FxHashMap<String, String>> {
        self.named_strings.borrow()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("version", &self.capabilities().version())
            .field("implementations", &self.implementations)
            .field("named_strings", &self.named_strings.borrow().len())
            .finish()
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
