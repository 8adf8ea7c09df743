/// Shader - a single shader stage
///
/// Sources reach the driver through the shading-language-include
/// implementation, which either forwards them untouched or expands
/// `#include` directives against the context's named strings first.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::backend::{ObjectType, ShaderType};
use crate::context::Context;
use crate::error::{Error, Result};
use crate::implementations::ShadingLanguageIncludeImplementation;
use crate::objects::{Object, ObjectCore};

pub struct Shader {
    core: ObjectCore,
    shader_type: ShaderType,
    source: RefCell<Option<String>>,
    include_paths: RefCell<Vec<String>>,
    compiled: Cell<bool>,
}

impl Shader {
    pub fn new(context: &Rc<Context>, shader_type: ShaderType) -> Self {
        let id = context.gl().create_shader(shader_type);
        crate::glo_trace!("glo::Shader", "Created {:?} shader {}", shader_type, id);
        Self {
            core: ObjectCore::new(context, id, ObjectType::Shader),
            shader_type,
            source: RefCell::new(None),
            include_paths: RefCell::new(Vec::new()),
            compiled: Cell::new(false),
        }
    }

    pub fn from_source(context: &Rc<Context>, shader_type: ShaderType, source: &str) -> Result<Self> {
        let shader = Self::new(context, shader_type);
        shader.set_source(source)?;
        Ok(shader)
    }

    fn implementation(&self) -> Result<Rc<dyn ShadingLanguageIncludeImplementation>> {
        self.core
            .context()
            .implementations()
            .shading_language_include_implementation()
    }

    pub fn shader_type(&self) -> ShaderType {
        self.shader_type
    }

    /// Source as given, before include expansion
    pub fn source(&self) -> Option<String> {
        self.source.borrow().clone()
    }

    pub fn include_paths(&self) -> Vec<String> {
        self.include_paths.borrow().clone()
    }

    /// Replace the source; the shader must be compiled again
    pub fn set_source(&self, source: &str) -> Result<()> {
        *self.source.borrow_mut() = Some(source.to_string());
        self.compiled.set(false);
        self.upload()
    }

    /// Directories relative `#include` names are resolved against
    pub fn set_include_paths<S: AsRef<str>>(&self, paths: &[S]) -> Result<()> {
        *self.include_paths.borrow_mut() = paths.iter().map(|p| p.as_ref().to_string()).collect();
        if self.source.borrow().is_some() {
            self.compiled.set(false);
            self.upload()?;
        }
        Ok(())
    }

    fn upload(&self) -> Result<()> {
        let source = self.source.borrow();
        let Some(source) = source.as_deref() else {
            return Ok(());
        };
        let context = self.core.context();
        let named_strings = context.named_strings();
        self.implementation()?.update_sources(
            self.core.gl(),
            self.id(),
            source,
            &self.include_paths.borrow(),
            &named_strings,
        )
    }

    /// Compile the current source, failing with the driver's info log
    ///
    /// The source is uploaded again first, so includes registered since
    /// `set_source` resolve and a failed upload never compiles stale text.
    pub fn compile(&self) -> Result<()> {
        if self.source.borrow().is_none() {
            crate::glo_bail!("glo::Shader", "Shader {} has no source to compile", self.id());
        }
        self.compiled.set(false);
        self.upload()?;
        self.implementation()?
            .compile(self.core.gl(), self.id(), &self.include_paths.borrow());

        let compiled = self.core.gl().get_shader_compile_status(self.id());
        self.compiled.set(compiled);
        if !compiled {
            let info_log = self.info_log();
            crate::glo_error!(
                "glo::Shader",
                "Compiling {:?} shader {} failed: {}",
                self.shader_type,
                self.id(),
                info_log
            );
            return Err(Error::CompilationFailed(info_log));
        }
        crate::glo_debug!("glo::Shader", "Compiled {:?} shader {}", self.shader_type, self.id());
        Ok(())
    }

    /// Set include paths, then compile
    pub fn compile_with_include_paths<S: AsRef<str>>(&self, paths: &[S]) -> Result<()> {
        self.set_include_paths(paths)?;
        self.compile()
    }

    pub fn is_compiled(&self) -> bool {
        self.compiled.get()
    }

    pub fn info_log(&self) -> String {
        self.core.gl().get_shader_info_log(self.id())
    }
}

impl Object for Shader {
    fn core(&self) -> &ObjectCore {
        &self.core
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        self.core.gl().delete_shader(self.id());
    }
}

#[cfg(test)]
#[path = "shader_tests.rs"]
mod tests;
