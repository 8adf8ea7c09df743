/// Uniform upload strategies

use std::rc::Rc;

use crate::backend::{GlBackend, UniformValue};
use crate::capabilities::{Capabilities, Extension};
use crate::implementations::{ImplementationChoice, ImplementationKind};
use crate::registry::{ImplementationRegistry, ImplementationSlot};

/// Uploads a uniform value to a program
pub trait UniformImplementation {
    fn set(&self, gl: &dyn GlBackend, program: u32, location: i32, value: &UniformValue);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UniformChoice {
    /// `glProgramUniform*`, no program binding required
    SeparateShaderObjects,
    /// `glUseProgram` followed by `glUniform*`
    Legacy,
}

impl ImplementationChoice for UniformChoice {
    type Implementation = dyn UniformImplementation;

    const KIND: ImplementationKind = ImplementationKind::Uniform;
    const PREFERENCE: &'static [Self] = &[UniformChoice::SeparateShaderObjects, UniformChoice::Legacy];

    fn name(&self) -> &'static str {
        match self {
            UniformChoice::SeparateShaderObjects => "SeparateShaderObjects",
            UniformChoice::Legacy => "Legacy",
        }
    }

    fn is_supported(&self, capabilities: &Capabilities) -> bool {
        match self {
            UniformChoice::SeparateShaderObjects => {
                capabilities.is_supported(Extension::ArbSeparateShaderObjects)
            }
            UniformChoice::Legacy => capabilities.is_at_least(2, 0),
        }
    }

    fn instantiate(&self) -> Rc<dyn UniformImplementation> {
        match self {
            UniformChoice::SeparateShaderObjects => Rc::new(UniformSeparateShaderObjects),
            UniformChoice::Legacy => Rc::new(UniformLegacy),
        }
    }

    fn slot(registry: &ImplementationRegistry) -> &ImplementationSlot<Self> {
        &registry.uniform
    }
}

pub struct UniformSeparateShaderObjects;

impl UniformImplementation for UniformSeparateShaderObjects {
    fn set(&self, gl: &dyn GlBackend, program: u32, location: i32, value: &UniformValue) {
        gl.program_uniform(program, location, value);
    }
}

/// Leaves `program` in use afterwards
pub struct UniformLegacy;

impl UniformImplementation for UniformLegacy {
    fn set(&self, gl: &dyn GlBackend, program: u32, location: i32, value: &UniformValue) {
        gl.use_program(program);
        gl.uniform(location, value);
    }
}
