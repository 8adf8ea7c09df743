/// Framebuffer - framebuffer object and its attachments
///
/// Attached textures and renderbuffers are kept alive by the framebuffer until
/// they are replaced or detached. The default framebuffer (name 0) is
/// represented by a non-owning wrapper that accepts read/draw buffer changes
/// but no attachments.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::backend::{
    Attachment, AttachmentParameter, ColorBuffer, FramebufferStatus, FramebufferTarget, ObjectType,
};
use crate::context::Context;
use crate::error::Result;
use crate::implementations::FramebufferImplementation;
use crate::objects::{Object, ObjectCore, Renderbuffer, Texture};

/// What an attachment point currently refers to
#[derive(Clone)]
pub enum FramebufferAttachment {
    Texture {
        texture: Rc<Texture>,
        level: i32,
        layer: Option<i32>,
    },
    Renderbuffer(Rc<Renderbuffer>),
}

impl FramebufferAttachment {
    /// Native name of the attached object
    pub fn object_id(&self) -> u32 {
        match self {
            FramebufferAttachment::Texture { texture, .. } => texture.id(),
            FramebufferAttachment::Renderbuffer(renderbuffer) => renderbuffer.id(),
        }
    }

    pub fn is_texture(&self) -> bool {
        matches!(self, FramebufferAttachment::Texture { .. })
    }
}

pub struct Framebuffer {
    core: ObjectCore,
    owned: bool,
    attachments: RefCell<FxHashMap<Attachment, FramebufferAttachment>>,
}

impl Framebuffer {
    pub fn new(context: &Rc<Context>) -> Result<Self> {
        let implementation = context.implementations().framebuffer_implementation()?;
        let id = implementation.create(context.gl());
        crate::glo_trace!("glo::Framebuffer", "Created framebuffer {}", id);
        Ok(Self {
            core: ObjectCore::new(context, id, ObjectType::Framebuffer),
            owned: true,
            attachments: RefCell::new(FxHashMap::default()),
        })
    }

    /// Wrapper for the window-system framebuffer (name 0)
    pub fn default_framebuffer(context: &Rc<Context>) -> Self {
        Self {
            core: ObjectCore::new(context, 0, ObjectType::Framebuffer),
            owned: false,
            attachments: RefCell::new(FxHashMap::default()),
        }
    }

    pub fn is_default(&self) -> bool {
        self.id() == 0
    }

    fn implementation(&self) -> Result<Rc<dyn FramebufferImplementation>> {
        self.core.context().implementations().framebuffer_implementation()
    }

    pub fn bind(&self, target: FramebufferTarget) {
        self.core.gl().bind_framebuffer(target, self.id());
    }

    pub fn unbind(&self, target: FramebufferTarget) {
        self.core.gl().bind_framebuffer(target, 0);
    }

    // ===== ATTACHMENTS =====

    fn check_attachable(&self) -> Result<()> {
        if self.is_default() {
            crate::glo_bail!("glo::Framebuffer", "The default framebuffer has no attachable images");
        }
        Ok(())
    }

    pub fn attach_texture(&self, attachment: Attachment, texture: &Rc<Texture>, level: i32) -> Result<()> {
        self.check_attachable()?;
        self.implementation()?
            .attach_texture(self.core.gl(), self.id(), attachment, texture.id(), level);
        self.attachments.borrow_mut().insert(
            attachment,
            FramebufferAttachment::Texture {
                texture: texture.clone(),
                level,
                layer: None,
            },
        );
        Ok(())
    }

    pub fn attach_texture_layer(
        &self,
        attachment: Attachment,
        texture: &Rc<Texture>,
        level: i32,
        layer: i32,
    ) -> Result<()> {
        self.check_attachable()?;
        self.implementation()?.attach_texture_layer(
            self.core.gl(),
            self.id(),
            attachment,
            texture.id(),
            level,
            layer,
        );
        self.attachments.borrow_mut().insert(
            attachment,
            FramebufferAttachment::Texture {
                texture: texture.clone(),
                level,
                layer: Some(layer),
            },
        );
        Ok(())
    }

    pub fn attach_renderbuffer(&self, attachment: Attachment, renderbuffer: &Rc<Renderbuffer>) -> Result<()> {
        self.check_attachable()?;
        self.implementation()?
            .attach_renderbuffer(self.core.gl(), self.id(), attachment, renderbuffer.id());
        self.attachments
            .borrow_mut()
            .insert(attachment, FramebufferAttachment::Renderbuffer(renderbuffer.clone()));
        Ok(())
    }

    /// Clear an attachment point; returns whether something was attached
    pub fn detach(&self, attachment: Attachment) -> Result<bool> {
        self.check_attachable()?;
        let previous = self.attachments.borrow_mut().remove(&attachment);
        match previous {
            Some(FramebufferAttachment::Renderbuffer(_)) => {
                self.implementation()?
                    .attach_renderbuffer(self.core.gl(), self.id(), attachment, 0);
                Ok(true)
            }
            Some(FramebufferAttachment::Texture { .. }) => {
                self.implementation()?
                    .attach_texture(self.core.gl(), self.id(), attachment, 0, 0);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn attachment(&self, attachment: Attachment) -> Option<FramebufferAttachment> {
        self.attachments.borrow().get(&attachment).cloned()
    }

    pub fn attachments(&self) -> Vec<(Attachment, FramebufferAttachment)> {
        self.attachments
            .borrow()
            .iter()
            .map(|(point, attachment)| (*point, attachment.clone()))
            .collect()
    }

    pub fn attachment_parameter(&self, attachment: Attachment, parameter: AttachmentParameter) -> Result<i32> {
        Ok(self.implementation()?.attachment_parameter(
            self.core.gl(),
            self.id(),
            attachment,
            parameter,
        ))
    }

    // ===== STATUS =====

    pub fn check_status(&self, target: FramebufferTarget) -> Result<FramebufferStatus> {
        Ok(self
            .implementation()?
            .check_status(self.core.gl(), self.id(), target))
    }

    pub fn is_complete(&self) -> Result<bool> {
        Ok(self.check_status(FramebufferTarget::Framebuffer)?.is_complete())
    }

    /// Completeness as text, e.g. `GL_FRAMEBUFFER_INCOMPLETE_ATTACHMENT`
    pub fn status_description(&self) -> Result<String> {
        Ok(self.check_status(FramebufferTarget::Framebuffer)?.description())
    }

    // ===== READ / DRAW BUFFERS =====

    pub fn set_read_buffer(&self, mode: ColorBuffer) -> Result<()> {
        self.implementation()?
            .set_read_buffer(self.core.gl(), self.id(), mode);
        Ok(())
    }

    pub fn set_draw_buffer(&self, mode: ColorBuffer) -> Result<()> {
        self.implementation()?
            .set_draw_buffer(self.core.gl(), self.id(), mode);
        Ok(())
    }

    pub fn set_draw_buffers(&self, modes: &[ColorBuffer]) -> Result<()> {
        self.implementation()?
            .set_draw_buffers(self.core.gl(), self.id(), modes);
        Ok(())
    }
}

impl Object for Framebuffer {
    fn core(&self) -> &ObjectCore {
        &self.core
    }
}

impl Drop for Framebuffer {
    fn drop(&mut self) {
        if !self.owned {
            return;
        }
        match self.implementation() {
            Ok(implementation) => implementation.destroy(self.core.gl(), self.id()),
            Err(_) => self.core.gl().delete_framebuffer(self.id()),
        }
        crate::glo_trace!("glo::Framebuffer", "Deleted framebuffer {}", self.id());
    }
}

#[cfg(test)]
#[path = "framebuffer_tests.rs"]
mod tests;
