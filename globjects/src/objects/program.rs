/// Program - linked shader program with cached uniforms
///
/// Uniform values are remembered by name. Values set before the first link,
/// or before a relink, are uploaded again once linking succeeds.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::backend::{ObjectType, ProgramBinary, UniformValue};
use crate::context::Context;
use crate::error::{Error, Result};
use crate::implementations::{ProgramBinaryImplementation, UniformImplementation};
use crate::objects::{Object, ObjectCore, Shader};

pub struct Program {
    core: ObjectCore,
    shaders: RefCell<Vec<Rc<Shader>>>,
    linked: Cell<bool>,
    dirty: Cell<bool>,
    uniform_locations: RefCell<FxHashMap<String, Option<i32>>>,
    uniforms: RefCell<FxHashMap<String, UniformValue>>,
}

impl Program {
    pub fn new(context: &Rc<Context>) -> Self {
        let id = context.gl().create_program();
        crate::glo_trace!("glo::Program", "Created program {}", id);
        Self {
            core: ObjectCore::new(context, id, ObjectType::Program),
            shaders: RefCell::new(Vec::new()),
            linked: Cell::new(false),
            dirty: Cell::new(true),
            uniform_locations: RefCell::new(FxHashMap::default()),
            uniforms: RefCell::new(FxHashMap::default()),
        }
    }

    /// Program with the given shaders attached (not yet linked)
    pub fn with_shaders(context: &Rc<Context>, shaders: &[Rc<Shader>]) -> Self {
        let program = Self::new(context);
        for shader in shaders {
            program.attach(shader);
        }
        program
    }

    fn uniform_implementation(&self) -> Result<Rc<dyn UniformImplementation>> {
        self.core.context().implementations().uniform_implementation()
    }

    fn binary_implementation(&self) -> Result<Rc<dyn ProgramBinaryImplementation>> {
        self.core.context().implementations().program_binary_implementation()
    }

    // ===== SHADERS =====

    pub fn attach(&self, shader: &Rc<Shader>) {
        self.core.gl().attach_shader(self.id(), shader.id());
        self.shaders.borrow_mut().push(shader.clone());
        self.dirty.set(true);
    }

    /// Returns whether the shader was attached
    pub fn detach(&self, shader: &Shader) -> bool {
        let mut shaders = self.shaders.borrow_mut();
        let before = shaders.len();
        shaders.retain(|attached| attached.id() != shader.id());
        if shaders.len() == before {
            return false;
        }
        self.core.gl().detach_shader(self.id(), shader.id());
        self.dirty.set(true);
        true
    }

    pub fn shaders(&self) -> Vec<Rc<Shader>> {
        self.shaders.borrow().clone()
    }

    // ===== LINKING =====

    /// Compile pending shaders, link, then re-apply cached uniforms
    pub fn link(&self) -> Result<()> {
        for shader in self.shaders.borrow().iter() {
            if !shader.is_compiled() {
                shader.compile()?;
            }
        }

        let gl = self.core.gl();
        gl.link_program(self.id());
        self.uniform_locations.borrow_mut().clear();

        let linked = gl.get_program_link_status(self.id());
        self.linked.set(linked);
        self.dirty.set(false);
        if !linked {
            let info_log = self.info_log();
            crate::glo_error!("glo::Program", "Linking program {} failed: {}", self.id(), info_log);
            return Err(Error::LinkFailed(info_log));
        }

        crate::glo_debug!("glo::Program", "Linked program {}", self.id());
        self.apply_cached_uniforms()
    }

    fn apply_cached_uniforms(&self) -> Result<()> {
        let uniforms: Vec<(String, UniformValue)> = self
            .uniforms
            .borrow()
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        if uniforms.is_empty() {
            return Ok(());
        }
        let implementation = self.uniform_implementation()?;
        for (name, value) in uniforms {
            if let Some(location) = self.uniform_location(&name) {
                implementation.set(self.core.gl(), self.id(), location, &value);
            }
        }
        Ok(())
    }

    pub fn is_linked(&self) -> bool {
        self.linked.get()
    }

    pub fn info_log(&self) -> String {
        self.core.gl().get_program_info_log(self.id())
    }

    /// Make this the current program, linking first if shaders changed
    pub fn use_program(&self) -> Result<()> {
        if self.dirty.get() || !self.linked.get() {
            self.link()?;
        }
        self.core.gl().use_program(self.id());
        Ok(())
    }

    pub fn release(&self) {
        self.core.gl().use_program(0);
    }

    // ===== UNIFORMS =====

    /// Location of an active uniform (cached until the next link)
    pub fn uniform_location(&self, name: &str) -> Option<i32> {
        if let Some(location) = self.uniform_locations.borrow().get(name) {
            return *location;
        }
        let location = self.core.gl().get_uniform_location(self.id(), name);
        self.uniform_locations
            .borrow_mut()
            .insert(name.to_string(), location);
        location
    }

    pub fn attribute_location(&self, name: &str) -> Option<u32> {
        self.core.gl().get_attrib_location(self.id(), name)
    }

    /// Set a uniform by name
    ///
    /// The value is cached and uploaded right away if the program is linked;
    /// otherwise it is uploaded by the next successful link. Inactive uniforms
    /// are skipped with a warning.
    pub fn set_uniform(&self, name: &str, value: impl Into<UniformValue>) -> Result<()> {
        let value = value.into();
        self.uniforms
            .borrow_mut()
            .insert(name.to_string(), value.clone());

        if !self.linked.get() {
            return Ok(());
        }
        match self.uniform_location(name) {
            Some(location) => {
                self.uniform_implementation()?
                    .set(self.core.gl(), self.id(), location, &value);
            }
            None => {
                crate::glo_warn!(
                    "glo::Program",
                    "Uniform '{}' ({}) is not active in program {}",
                    name,
                    value.type_name(),
                    self.id()
                );
            }
        }
        Ok(())
    }

    /// Upload to an explicit location, bypassing the cache
    pub fn set_uniform_at(&self, location: i32, value: impl Into<UniformValue>) -> Result<()> {
        self.uniform_implementation()?
            .set(self.core.gl(), self.id(), location, &value.into());
        Ok(())
    }

    /// Cached value of a uniform
    pub fn uniform(&self, name: &str) -> Option<UniformValue> {
        self.uniforms.borrow().get(name).cloned()
    }

    // ===== BINARIES =====

    pub fn set_binary_retrievable(&self, retrievable: bool) -> Result<()> {
        self.binary_implementation()?
            .set_retrievable(self.core.gl(), self.id(), retrievable);
        Ok(())
    }

    pub fn binaries_available(&self) -> Result<bool> {
        Ok(self.binary_implementation()?.is_available())
    }

    /// Driver binary of the linked program, if the context supports binaries
    pub fn binary(&self) -> Result<Option<ProgramBinary>> {
        let implementation = self.binary_implementation()?;
        if !implementation.is_available() {
            crate::glo_warn!("glo::Program", "Program binaries are not supported by this context");
            return Ok(None);
        }
        Ok(implementation.get(self.core.gl(), self.id()))
    }

    /// Load a previously retrieved binary in place of compiling and linking
    pub fn set_binary(&self, binary: &ProgramBinary) -> Result<()> {
        let implementation = self.binary_implementation()?;
        let accepted =
            implementation.is_available() && implementation.set(self.core.gl(), self.id(), binary);
        if !accepted {
            crate::glo_bail!("glo::Program", "Program binaries are not supported by this context");
        }
        self.uniform_locations.borrow_mut().clear();

        let linked = self.core.gl().get_program_link_status(self.id());
        self.linked.set(linked);
        self.dirty.set(false);
        if !linked {
            let info_log = self.info_log();
            crate::glo_error!(
                "glo::Program",
                "Program {} rejected binary (format {:#X}): {}",
                self.id(),
                binary.format,
                info_log
            );
            return Err(Error::LinkFailed(info_log));
        }
        self.apply_cached_uniforms()
    }
}

impl Object for Program {
    fn core(&self) -> &ObjectCore {
        &self.core
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        self.core.gl().delete_program(self.id());
    }
}

#[cfg(test)]
#[path = "program_tests.rs"]
mod tests;
