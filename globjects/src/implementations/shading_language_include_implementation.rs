/// Shader include strategies
///
/// `ShadingLanguageIncludeArb` hands named strings and include paths to the
/// driver. `Fallback` keeps named strings on the CPU and expands includes
/// before the source reaches the driver.

use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::backend::GlBackend;
use crate::capabilities::{Capabilities, Extension};
use crate::error::Result;
use crate::implementations::{ImplementationChoice, ImplementationKind, IncludeProcessor};
use crate::registry::{ImplementationRegistry, ImplementationSlot};

pub trait ShadingLanguageIncludeImplementation {
    /// Upload `source` for `shader`, expanding includes when the driver cannot
    fn update_sources(
        &self,
        gl: &dyn GlBackend,
        shader: u32,
        source: &str,
        include_paths: &[String],
        named_strings: &FxHashMap<String, String>,
    ) -> Result<()>;

    fn compile(&self, gl: &dyn GlBackend, shader: u32, include_paths: &[String]);

    fn create_named_string(&self, gl: &dyn GlBackend, name: &str, string: &str);
    fn delete_named_string(&self, gl: &dyn GlBackend, name: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShadingLanguageIncludeChoice {
    ShadingLanguageIncludeArb,
    Fallback,
}

impl ImplementationChoice for ShadingLanguageIncludeChoice {
    type Implementation = dyn ShadingLanguageIncludeImplementation;

    const KIND: ImplementationKind = ImplementationKind::ShadingLanguageInclude;
    const PREFERENCE: &'static [Self] = &[
        ShadingLanguageIncludeChoice::ShadingLanguageIncludeArb,
        ShadingLanguageIncludeChoice::Fallback,
    ];

    fn name(&self) -> &'static str {
        match self {
            ShadingLanguageIncludeChoice::ShadingLanguageIncludeArb => "ShadingLanguageIncludeArb",
            ShadingLanguageIncludeChoice::Fallback => "Fallback",
        }
    }

    fn is_supported(&self, capabilities: &Capabilities) -> bool {
        match self {
            ShadingLanguageIncludeChoice::ShadingLanguageIncludeArb => {
                capabilities.is_supported(Extension::ArbShadingLanguageInclude)
            }
            ShadingLanguageIncludeChoice::Fallback => true,
        }
    }

    fn instantiate(&self) -> Rc<dyn ShadingLanguageIncludeImplementation> {
        match self {
            ShadingLanguageIncludeChoice::ShadingLanguageIncludeArb => {
                Rc::new(ShadingLanguageIncludeArb)
            }
            ShadingLanguageIncludeChoice::Fallback => Rc::new(ShadingLanguageIncludeFallback),
        }
    }

    fn slot(registry: &ImplementationRegistry) -> &ImplementationSlot<Self> {
        &registry.shading_language_include
    }
}

// ============================================================================
// ARB_shading_language_include
// ============================================================================

pub struct ShadingLanguageIncludeArb;

impl ShadingLanguageIncludeImplementation for ShadingLanguageIncludeArb {
    fn update_sources(
        &self,
        gl: &dyn GlBackend,
        shader: u32,
        source: &str,
        _include_paths: &[String],
        _named_strings: &FxHashMap<String, String>,
    ) -> Result<()> {
        gl.shader_source(shader, source);
        Ok(())
    }

    fn compile(&self, gl: &dyn GlBackend, shader: u32, include_paths: &[String]) {
        if include_paths.is_empty() {
            gl.compile_shader(shader);
        } else {
            gl.compile_shader_include(shader, include_paths);
        }
    }

    fn create_named_string(&self, gl: &dyn GlBackend, name: &str, string: &str) {
        gl.named_string(name, string);
    }

    fn delete_named_string(&self, gl: &dyn GlBackend, name: &str) {
        gl.delete_named_string(name);
    }
}

// ============================================================================
// Fallback (CPU expansion)
// ============================================================================

pub struct ShadingLanguageIncludeFallback;

impl ShadingLanguageIncludeImplementation for ShadingLanguageIncludeFallback {
    fn update_sources(
        &self,
        gl: &dyn GlBackend,
        shader: u32,
        source: &str,
        include_paths: &[String],
        named_strings: &FxHashMap<String, String>,
    ) -> Result<()> {
        let expanded = IncludeProcessor::new(named_strings, include_paths).resolve(source)?;
        gl.shader_source(shader, &expanded);
        Ok(())
    }

    fn compile(&self, gl: &dyn GlBackend, shader: u32, _include_paths: &[String]) {
        gl.compile_shader(shader);
    }

    fn create_named_string(&self, _gl: &dyn GlBackend, _name: &str, _string: &str) {}

    fn delete_named_string(&self, _gl: &dyn GlBackend, _name: &str) {}
}
