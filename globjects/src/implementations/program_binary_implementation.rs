/// Program binary strategies

use std::rc::Rc;

use crate::backend::{GlBackend, ProgramBinary};
use crate::capabilities::{Capabilities, Extension};
use crate::implementations::{ImplementationChoice, ImplementationKind};
use crate::registry::{ImplementationRegistry, ImplementationSlot};

pub trait ProgramBinaryImplementation {
    /// Whether binaries can be retrieved and loaded at all
    fn is_available(&self) -> bool;
    fn set_retrievable(&self, gl: &dyn GlBackend, program: u32, retrievable: bool);
    fn get(&self, gl: &dyn GlBackend, program: u32) -> Option<ProgramBinary>;
    /// Returns whether the binary was handed to the driver
    fn set(&self, gl: &dyn GlBackend, program: u32, binary: &ProgramBinary) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgramBinaryChoice {
    GetProgramBinaryArb,
    None,
}

impl ImplementationChoice for ProgramBinaryChoice {
    type Implementation = dyn ProgramBinaryImplementation;

    const KIND: ImplementationKind = ImplementationKind::ProgramBinary;
    const PREFERENCE: &'static [Self] = &[ProgramBinaryChoice::GetProgramBinaryArb, ProgramBinaryChoice::None];

    fn name(&self) -> &'static str {
        match self {
            ProgramBinaryChoice::GetProgramBinaryArb => "GetProgramBinaryArb",
            ProgramBinaryChoice::None => "None",
        }
    }

    fn is_supported(&self, capabilities: &Capabilities) -> bool {
        match self {
            ProgramBinaryChoice::GetProgramBinaryArb => {
                capabilities.is_supported(Extension::ArbGetProgramBinary)
            }
            ProgramBinaryChoice::None => true,
        }
    }

    fn instantiate(&self) -> Rc<dyn ProgramBinaryImplementation> {
        match self {
            ProgramBinaryChoice::GetProgramBinaryArb => Rc::new(ProgramBinaryGetProgramBinaryArb),
            ProgramBinaryChoice::None => Rc::new(ProgramBinaryNone),
        }
    }

    fn slot(registry: &ImplementationRegistry) -> &ImplementationSlot<Self> {
        &registry.program_binary
    }
}

pub struct ProgramBinaryGetProgramBinaryArb;

impl ProgramBinaryImplementation for ProgramBinaryGetProgramBinaryArb {
    fn is_available(&self) -> bool {
        true
    }

    fn set_retrievable(&self, gl: &dyn GlBackend, program: u32, retrievable: bool) {
        gl.program_binary_retrievable_hint(program, retrievable);
    }

    fn get(&self, gl: &dyn GlBackend, program: u32) -> Option<ProgramBinary> {
        gl.get_program_binary(program)
    }

    fn set(&self, gl: &dyn GlBackend, program: u32, binary: &ProgramBinary) -> bool {
        gl.program_binary(program, binary);
        true
    }
}

pub struct ProgramBinaryNone;

impl ProgramBinaryImplementation for ProgramBinaryNone {
    fn is_available(&self) -> bool {
        false
    }

    fn set_retrievable(&self, _gl: &dyn GlBackend, _program: u32, _retrievable: bool) {}

    fn get(&self, _gl: &dyn GlBackend, _program: u32) -> Option<ProgramBinary> {
        None
    }

    fn set(&self, _gl: &dyn GlBackend, _program: u32, _binary: &ProgramBinary) -> bool {
        false
    }
}
