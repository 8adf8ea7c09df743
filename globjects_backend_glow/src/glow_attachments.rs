/// Client-side record of framebuffer attachments
///
/// glow exposes no attachment parameter query, so the backend remembers
/// what it attached and which format each texture or renderbuffer image
/// was allocated with. Only images allocated through this backend report
/// a component type.

use std::cell::RefCell;

use globjects::glo::gl::{Attachment, AttachmentParameter, TextureFormat};
use rustc_hash::FxHashMap;

use crate::glow_conversions::component_type_to_gl;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AttachedImage {
    Texture { name: u32, level: i32, layer: i32 },
    Renderbuffer { name: u32 },
}

#[derive(Default)]
pub(crate) struct AttachmentTracker {
    attachments: RefCell<FxHashMap<(u32, Attachment), AttachedImage>>,
    texture_formats: RefCell<FxHashMap<u32, TextureFormat>>,
    renderbuffer_formats: RefCell<FxHashMap<u32, TextureFormat>>,
}

impl AttachmentTracker {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== IMAGE FORMATS =====

    pub fn record_texture_format(&self, texture: u32, format: TextureFormat) {
        if texture != 0 {
            self.texture_formats.borrow_mut().insert(texture, format);
        }
    }

    pub fn record_renderbuffer_format(&self, renderbuffer: u32, format: TextureFormat) {
        if renderbuffer != 0 {
            self.renderbuffer_formats.borrow_mut().insert(renderbuffer, format);
        }
    }

    pub fn forget_texture(&self, texture: u32) {
        self.texture_formats.borrow_mut().remove(&texture);
    }

    pub fn forget_renderbuffer(&self, renderbuffer: u32) {
        self.renderbuffer_formats.borrow_mut().remove(&renderbuffer);
    }

    // ===== ATTACHMENTS =====

    /// Attaching name `0` detaches
    pub fn attach_texture(&self, framebuffer: u32, attachment: Attachment, texture: u32, level: i32, layer: i32) {
        let image = AttachedImage::Texture {
            name: texture,
            level,
            layer,
        };
        self.attach(framebuffer, attachment, texture, image);
    }

    pub fn attach_renderbuffer(&self, framebuffer: u32, attachment: Attachment, renderbuffer: u32) {
        let image = AttachedImage::Renderbuffer { name: renderbuffer };
        self.attach(framebuffer, attachment, renderbuffer, image);
    }

    fn attach(&self, framebuffer: u32, attachment: Attachment, name: u32, image: AttachedImage) {
        let mut attachments = self.attachments.borrow_mut();
        let targets: &[Attachment] = match attachment {
            Attachment::DepthStencil => &[Attachment::Depth, Attachment::Stencil],
            _ => std::slice::from_ref(&attachment),
        };
        for &target in targets {
            if name == 0 {
                attachments.remove(&(framebuffer, target));
            } else {
                attachments.insert((framebuffer, target), image);
            }
        }
    }

    pub fn forget_framebuffer(&self, framebuffer: u32) {
        self.attachments
            .borrow_mut()
            .retain(|(owner, _), _| *owner != framebuffer);
    }

    /// Value of `GL_FRAMEBUFFER_ATTACHMENT_*` for a recorded attachment
    ///
    /// Unattached points report `GL_NONE` as object type and `0` otherwise.
    pub fn parameter(&self, framebuffer: u32, attachment: Attachment, parameter: AttachmentParameter) -> i32 {
        let lookup = match attachment {
            Attachment::DepthStencil => Attachment::Depth,
            other => other,
        };
        let image = match self.attachments.borrow().get(&(framebuffer, lookup)).copied() {
            Some(image) => image,
            None => {
                return match parameter {
                    AttachmentParameter::ObjectType => glow::NONE as i32,
                    _ => 0,
                };
            }
        };

        match (parameter, image) {
            (AttachmentParameter::ObjectType, AttachedImage::Texture { .. }) => glow::TEXTURE as i32,
            (AttachmentParameter::ObjectType, AttachedImage::Renderbuffer { .. }) => {
                glow::RENDERBUFFER as i32
            }
            (AttachmentParameter::ObjectName, AttachedImage::Texture { name, .. })
            | (AttachmentParameter::ObjectName, AttachedImage::Renderbuffer { name }) => name as i32,
            (AttachmentParameter::TextureLevel, AttachedImage::Texture { level, .. }) => level,
            (AttachmentParameter::TextureLayer, AttachedImage::Texture { layer, .. }) => layer,
            (AttachmentParameter::ComponentType, image) => self
                .format_of(image)
                .map(|format| component_type_to_gl(format) as i32)
                .unwrap_or(0),
            (AttachmentParameter::ColorEncoding, _) => glow::LINEAR as i32,
            _ => 0,
        }
    }

    fn format_of(&self, image: AttachedImage) -> Option<TextureFormat> {
        match image {
            AttachedImage::Texture { name, .. } => self.texture_formats.borrow().get(&name).copied(),
            AttachedImage::Renderbuffer { name } => {
                self.renderbuffer_formats.borrow().get(&name).copied()
            }
        }
    }
}

#[cfg(test)]
#[path = "glow_attachments_tests.rs"]
mod tests;
