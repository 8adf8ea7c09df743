/// Framebuffer object strategies
///
/// `Legacy` binds the framebuffer to `FRAMEBUFFER` before each modification.

use std::rc::Rc;

use crate::backend::{
    Attachment, AttachmentParameter, ColorBuffer, FramebufferStatus, FramebufferTarget, GlBackend,
};
use crate::capabilities::{Capabilities, Extension};
use crate::implementations::{ImplementationChoice, ImplementationKind};
use crate::registry::{ImplementationRegistry, ImplementationSlot};

/// Bind point borrowed by the legacy strategy
pub const WORKING_TARGET: FramebufferTarget = FramebufferTarget::Framebuffer;

pub trait FramebufferImplementation {
    fn create(&self, gl: &dyn GlBackend) -> u32;
    fn destroy(&self, gl: &dyn GlBackend, framebuffer: u32);

    fn check_status(&self, gl: &dyn GlBackend, framebuffer: u32, target: FramebufferTarget) -> FramebufferStatus;
    fn attachment_parameter(
        &self,
        gl: &dyn GlBackend,
        framebuffer: u32,
        attachment: Attachment,
        parameter: AttachmentParameter,
    ) -> i32;

    fn attach_texture(&self, gl: &dyn GlBackend, framebuffer: u32, attachment: Attachment, texture: u32, level: i32);
    fn attach_texture_layer(
        &self,
        gl: &dyn GlBackend,
        framebuffer: u32,
        attachment: Attachment,
        texture: u32,
        level: i32,
        layer: i32,
    );
    fn attach_renderbuffer(&self, gl: &dyn GlBackend, framebuffer: u32, attachment: Attachment, renderbuffer: u32);

    fn set_read_buffer(&self, gl: &dyn GlBackend, framebuffer: u32, mode: ColorBuffer);
    fn set_draw_buffer(&self, gl: &dyn GlBackend, framebuffer: u32, mode: ColorBuffer);
    fn set_draw_buffers(&self, gl: &dyn GlBackend, framebuffer: u32, modes: &[ColorBuffer]);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FramebufferChoice {
    DirectStateAccessArb,
    Legacy,
}

impl ImplementationChoice for FramebufferChoice {
    type Implementation = dyn FramebufferImplementation;

    const KIND: ImplementationKind = ImplementationKind::Framebuffer;
    const PREFERENCE: &'static [Self] = &[FramebufferChoice::DirectStateAccessArb, FramebufferChoice::Legacy];

    fn name(&self) -> &'static str {
        match self {
            FramebufferChoice::DirectStateAccessArb => "DirectStateAccessArb",
            FramebufferChoice::Legacy => "Legacy",
        }
    }

    fn is_supported(&self, capabilities: &Capabilities) -> bool {
        match self {
            FramebufferChoice::DirectStateAccessArb => {
                capabilities.is_supported(Extension::ArbDirectStateAccess)
            }
            FramebufferChoice::Legacy => capabilities.is_supported(Extension::ArbFramebufferObject),
        }
    }

    fn instantiate(&self) -> Rc<dyn FramebufferImplementation> {
        match self {
            FramebufferChoice::DirectStateAccessArb => Rc::new(FramebufferDirectStateAccessArb),
            FramebufferChoice::Legacy => Rc::new(FramebufferLegacy),
        }
    }

    fn slot(registry: &ImplementationRegistry) -> &ImplementationSlot<Self> {
        &registry.framebuffer
    }
}

// ============================================================================
// Direct state access
// ============================================================================

pub struct FramebufferDirectStateAccessArb;

impl FramebufferImplementation for FramebufferDirectStateAccessArb {
    fn create(&self, gl: &dyn GlBackend) -> u32 {
        gl.create_framebuffer()
    }

    fn destroy(&self, gl: &dyn GlBackend, framebuffer: u32) {
        gl.delete_framebuffer(framebuffer);
    }

    fn check_status(&self, gl: &dyn GlBackend, framebuffer: u32, target: FramebufferTarget) -> FramebufferStatus {
        gl.check_named_framebuffer_status(framebuffer, target)
    }

    fn attachment_parameter(
        &self,
        gl: &dyn GlBackend,
        framebuffer: u32,
        attachment: Attachment,
        parameter: AttachmentParameter,
    ) -> i32 {
        gl.get_named_framebuffer_attachment_parameter(framebuffer, attachment, parameter)
    }

    fn attach_texture(&self, gl: &dyn GlBackend, framebuffer: u32, attachment: Attachment, texture: u32, level: i32) {
        gl.named_framebuffer_texture(framebuffer, attachment, texture, level);
    }

    fn attach_texture_layer(
        &self,
        gl: &dyn GlBackend,
        framebuffer: u32,
        attachment: Attachment,
        texture: u32,
        level: i32,
        layer: i32,
    ) {
        gl.named_framebuffer_texture_layer(framebuffer, attachment, texture, level, layer);
    }

    fn attach_renderbuffer(&self, gl: &dyn GlBackend, framebuffer: u32, attachment: Attachment, renderbuffer: u32) {
        gl.named_framebuffer_renderbuffer(framebuffer, attachment, renderbuffer);
    }

    fn set_read_buffer(&self, gl: &dyn GlBackend, framebuffer: u32, mode: ColorBuffer) {
        gl.named_framebuffer_read_buffer(framebuffer, mode);
    }

    fn set_draw_buffer(&self, gl: &dyn GlBackend, framebuffer: u32, mode: ColorBuffer) {
        gl.named_framebuffer_draw_buffer(framebuffer, mode);
    }

    fn set_draw_buffers(&self, gl: &dyn GlBackend, framebuffer: u32, modes: &[ColorBuffer]) {
        gl.named_framebuffer_draw_buffers(framebuffer, modes);
    }
}

// ============================================================================
// Legacy (bind to FRAMEBUFFER)
// ============================================================================

pub struct FramebufferLegacy;

impl FramebufferImplementation for FramebufferLegacy {
    fn create(&self, gl: &dyn GlBackend) -> u32 {
        let framebuffer = gl.gen_framebuffer();
        gl.bind_framebuffer(WORKING_TARGET, framebuffer);
        framebuffer
    }

    fn destroy(&self, gl: &dyn GlBackend, framebuffer: u32) {
        gl.delete_framebuffer(framebuffer);
    }

    fn check_status(&self, gl: &dyn GlBackend, framebuffer: u32, target: FramebufferTarget) -> FramebufferStatus {
        gl.bind_framebuffer(target, framebuffer);
        gl.check_framebuffer_status(target)
    }

    fn attachment_parameter(
        &self,
        gl: &dyn GlBackend,
        framebuffer: u32,
        attachment: Attachment,
        parameter: AttachmentParameter,
    ) -> i32 {
        gl.bind_framebuffer(WORKING_TARGET, framebuffer);
        gl.get_framebuffer_attachment_parameter(WORKING_TARGET, attachment, parameter)
    }

    fn attach_texture(&self, gl: &dyn GlBackend, framebuffer: u32, attachment: Attachment, texture: u32, level: i32) {
        gl.bind_framebuffer(WORKING_TARGET, framebuffer);
        gl.framebuffer_texture(WORKING_TARGET, attachment, texture, level);
    }

    fn attach_texture_layer(
        &self,
        gl: &dyn GlBackend,
        framebuffer: u32,
        attachment: Attachment,
        texture: u32,
        level: i32,
        layer: i32,
    ) {
        gl.bind_framebuffer(WORKING_TARGET, framebuffer);
        gl.framebuffer_texture_layer(WORKING_TARGET, attachment, texture, level, layer);
    }

    fn attach_renderbuffer(&self, gl: &dyn GlBackend, framebuffer: u32, attachment: Attachment, renderbuffer: u32) {
        gl.bind_framebuffer(WORKING_TARGET, framebuffer);
        gl.framebuffer_renderbuffer(WORKING_TARGET, attachment, renderbuffer);
    }

    fn set_read_buffer(&self, gl: &dyn GlBackend, framebuffer: u32, mode: ColorBuffer) {
        gl.bind_framebuffer(FramebufferTarget::Read, framebuffer);
        gl.read_buffer(mode);
    }

    fn set_draw_buffer(&self, gl: &dyn GlBackend, framebuffer: u32, mode: ColorBuffer) {
        gl.bind_framebuffer(FramebufferTarget::Draw, framebuffer);
        gl.draw_buffer(mode);
    }

    fn set_draw_buffers(&self, gl: &dyn GlBackend, framebuffer: u32, modes: &[ColorBuffer]) {
        gl.bind_framebuffer(FramebufferTarget::Draw, framebuffer);
        gl.draw_buffers(modes);
    }
}

#[cfg(test)]
#[path = "framebuffer_implementation_tests.rs"]
mod tests;
