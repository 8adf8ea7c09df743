/// Buffer object strategies
///
/// `DirectStateAccessArb` talks to buffers by name. `Legacy` binds the buffer
/// to the working target `COPY_WRITE_BUFFER` before every modification and
/// leaves it bound; copies additionally borrow `COPY_READ_BUFFER`.

use std::rc::Rc;

use crate::backend::{BufferParameter, BufferStorageFlags, BufferTarget, BufferUsage, GlBackend};
use crate::capabilities::{Capabilities, Extension};
use crate::implementations::{ImplementationChoice, ImplementationKind};
use crate::registry::{ImplementationRegistry, ImplementationSlot};

/// Bind point borrowed by the legacy strategy
pub const WORKING_TARGET: BufferTarget = BufferTarget::CopyWrite;

/// Buffer creation, upload, download and copy
pub trait BufferImplementation {
    fn create(&self, gl: &dyn GlBackend) -> u32;
    fn destroy(&self, gl: &dyn GlBackend, buffer: u32);

    fn set_data(&self, gl: &dyn GlBackend, buffer: u32, size: usize, data: Option<&[u8]>, usage: BufferUsage);
    fn set_sub_data(&self, gl: &dyn GlBackend, buffer: u32, offset: usize, data: &[u8]);
    fn set_storage(
        &self,
        gl: &dyn GlBackend,
        buffer: u32,
        size: usize,
        data: Option<&[u8]>,
        flags: BufferStorageFlags,
    );

    fn get_sub_data(&self, gl: &dyn GlBackend, buffer: u32, offset: usize, out: &mut [u8]);
    fn get_parameter(&self, gl: &dyn GlBackend, buffer: u32, parameter: BufferParameter) -> i32;

    fn copy_sub_data(
        &self,
        gl: &dyn GlBackend,
        read_buffer: u32,
        write_buffer: u32,
        read_offset: usize,
        write_offset: usize,
        size: usize,
    );
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferChoice {
    DirectStateAccessArb,
    Legacy,
}

impl ImplementationChoice for BufferChoice {
    type Implementation = dyn BufferImplementation;

    const KIND: ImplementationKind = ImplementationKind::Buffer;
    const PREFERENCE: &'static [Self] = &[BufferChoice::DirectStateAccessArb, BufferChoice::Legacy];

    fn name(&self) -> &'static str {
        match self {
            BufferChoice::DirectStateAccessArb => "DirectStateAccessArb",
            BufferChoice::Legacy => "Legacy",
        }
    }

    fn is_supported(&self, capabilities: &Capabilities) -> bool {
        match self {
            BufferChoice::DirectStateAccessArb => {
                capabilities.is_supported(Extension::ArbDirectStateAccess)
            }
            BufferChoice::Legacy => capabilities.is_supported(Extension::ArbVertexBufferObject),
        }
    }

    fn instantiate(&self) -> Rc<dyn BufferImplementation> {
        match self {
            BufferChoice::DirectStateAccessArb => Rc::new(BufferDirectStateAccessArb),
            BufferChoice::Legacy => Rc::new(BufferLegacy),
        }
    }

    fn slot(registry: &ImplementationRegistry) -> &ImplementationSlot<Self> {
        &registry.buffer
    }
}

// ============================================================================
// Direct state access
// ============================================================================

pub struct BufferDirectStateAccessArb;

impl BufferImplementation for BufferDirectStateAccessArb {
    fn create(&self, gl: &dyn GlBackend) -> u32 {
        gl.create_buffer()
    }

    fn destroy(&self, gl: &dyn GlBackend, buffer: u32) {
        gl.delete_buffer(buffer);
    }

    fn set_data(&self, gl: &dyn GlBackend, buffer: u32, size: usize, data: Option<&[u8]>, usage: BufferUsage) {
        gl.named_buffer_data(buffer, size, data, usage);
    }

    fn set_sub_data(&self, gl: &dyn GlBackend, buffer: u32, offset: usize, data: &[u8]) {
        gl.named_buffer_sub_data(buffer, offset, data);
    }

    fn set_storage(
        &self,
        gl: &dyn GlBackend,
        buffer: u32,
        size: usize,
        data: Option<&[u8]>,
        flags: BufferStorageFlags,
    ) {
        gl.named_buffer_storage(buffer, size, data, flags);
    }

    fn get_sub_data(&self, gl: &dyn GlBackend, buffer: u32, offset: usize, out: &mut [u8]) {
        gl.get_named_buffer_sub_data(buffer, offset, out);
    }

    fn get_parameter(&self, gl: &dyn GlBackend, buffer: u32, parameter: BufferParameter) -> i32 {
        gl.get_named_buffer_parameter(buffer, parameter)
    }

    fn copy_sub_data(
        &self,
        gl: &dyn GlBackend,
        read_buffer: u32,
        write_buffer: u32,
        read_offset: usize,
        write_offset: usize,
        size: usize,
    ) {
        gl.copy_named_buffer_sub_data(read_buffer, write_buffer, read_offset, write_offset, size);
    }
}

// ============================================================================
// Legacy (bind to working target)
// ============================================================================

pub struct BufferLegacy;

impl BufferImplementation for BufferLegacy {
    fn create(&self, gl: &dyn GlBackend) -> u32 {
        let buffer = gl.gen_buffer();
        // glGenBuffers only reserves the name; the first bind creates the object
        gl.bind_buffer(WORKING_TARGET, buffer);
        buffer
    }

    fn destroy(&self, gl: &dyn GlBackend, buffer: u32) {
        gl.delete_buffer(buffer);
    }

    fn set_data(&self, gl: &dyn GlBackend, buffer: u32, size: usize, data: Option<&[u8]>, usage: BufferUsage) {
        gl.bind_buffer(WORKING_TARGET, buffer);
        gl.buffer_data(WORKING_TARGET, size, data, usage);
    }

    fn set_sub_data(&self, gl: &dyn GlBackend, buffer: u32, offset: usize, data: &[u8]) {
        gl.bind_buffer(WORKING_TARGET, buffer);
        gl.buffer_sub_data(WORKING_TARGET, offset, data);
    }

    fn set_storage(
        &self,
        gl: &dyn GlBackend,
        buffer: u32,
        size: usize,
        data: Option<&[u8]>,
        flags: BufferStorageFlags,
    ) {
        gl.bind_buffer(WORKING_TARGET, buffer);
        gl.buffer_storage(WORKING_TARGET, size, data, flags);
    }

    fn get_sub_data(&self, gl: &dyn GlBackend, buffer: u32, offset: usize, out: &mut [u8]) {
        gl.bind_buffer(WORKING_TARGET, buffer);
        gl.get_buffer_sub_data(WORKING_TARGET, offset, out);
    }

    fn get_parameter(&self, gl: &dyn GlBackend, buffer: u32, parameter: BufferParameter) -> i32 {
        gl.bind_buffer(WORKING_TARGET, buffer);
        gl.get_buffer_parameter(WORKING_TARGET, parameter)
    }

    fn copy_sub_data(
        &self,
        gl: &dyn GlBackend,
        read_buffer: u32,
        write_buffer: u32,
        read_offset: usize,
        write_offset: usize,
        size: usize,
    ) {
        gl.bind_buffer(BufferTarget::CopyRead, read_buffer);
        gl.bind_buffer(BufferTarget::CopyWrite, write_buffer);
        gl.copy_buffer_sub_data(
            BufferTarget::CopyRead,
            BufferTarget::CopyWrite,
            read_offset,
            write_offset,
            size,
        );
    }
}

#[cfg(test)]
#[path = "buffer_implementation_tests.rs"]
mod tests;
