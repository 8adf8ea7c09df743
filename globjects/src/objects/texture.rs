/// Texture - texture object with cached level-0 size and format

use std::cell::Cell;
use std::rc::Rc;

use crate::backend::{
    ObjectType, PixelStoreParameter, TextureFilter, TextureFormat, TextureParameter,
    TextureTarget, TextureWrap, DEFAULT_PIXEL_ALIGNMENT,
};
use crate::context::Context;
use crate::error::Result;
use crate::objects::{Object, ObjectCore};

pub struct Texture {
    core: ObjectCore,
    target: TextureTarget,
    size: Cell<(u32, u32)>,
    format: Cell<Option<TextureFormat>>,
}

impl Texture {
    pub fn new(context: &Rc<Context>, target: TextureTarget) -> Self {
        let id = context.gl().gen_texture();
        Self {
            core: ObjectCore::new(context, id, ObjectType::Texture),
            target,
            size: Cell::new((0, 0)),
            format: Cell::new(None),
        }
    }

    /// Texture with linear filtering and clamp-to-edge wrapping on every axis
    pub fn create_default(context: &Rc<Context>, target: TextureTarget) -> Self {
        let texture = Self::new(context, target);
        texture.set_parameter(TextureParameter::MinFilter(TextureFilter::Linear));
        texture.set_parameter(TextureParameter::MagFilter(TextureFilter::Linear));
        texture.set_parameter(TextureParameter::WrapS(TextureWrap::ClampToEdge));
        texture.set_parameter(TextureParameter::WrapT(TextureWrap::ClampToEdge));
        texture.set_parameter(TextureParameter::WrapR(TextureWrap::ClampToEdge));
        texture
    }

    pub fn target(&self) -> TextureTarget {
        self.target
    }

    pub fn width(&self) -> u32 {
        self.size.get().0
    }

    pub fn height(&self) -> u32 {
        self.size.get().1
    }

    pub fn format(&self) -> Option<TextureFormat> {
        self.format.get()
    }

    pub fn bind(&self) {
        self.core.gl().bind_texture(self.target, self.id());
    }

    pub fn unbind(&self) {
        self.core.gl().bind_texture(self.target, 0);
    }

    /// Bind to texture unit `unit` (`GL_TEXTURE0 + unit`)
    pub fn bind_active(&self, unit: u32) {
        self.core.gl().active_texture(unit);
        self.bind();
    }

    pub fn set_parameter(&self, parameter: TextureParameter) {
        self.bind();
        self.core.gl().tex_parameter(self.target, parameter);
    }

    /// Specify one mip level of a 2D-like texture
    ///
    /// `data`, when given, must hold `width * height` texels of `format`.
    pub fn image_2d(
        &self,
        level: i32,
        format: TextureFormat,
        width: u32,
        height: u32,
        data: Option<&[u8]>,
    ) -> Result<()> {
        if !self.target.accepts_image_2d() {
            crate::glo_bail!(
                "glo::Texture",
                "{:?} textures cannot be specified with image_2d",
                self.target
            );
        }
        if let Some(data) = data {
            let expected = width as usize * height as usize * format.bytes_per_texel();
            if data.len() != expected {
                crate::glo_bail!(
                    "glo::Texture",
                    "Expected {} bytes for {}x{} {:?}, got {}",
                    expected,
                    width,
                    height,
                    format,
                    data.len()
                );
            }
        }

        // Data is tightly packed; rows not a multiple of the default alignment need 1
        let row_bytes = width as usize * format.bytes_per_texel();
        let unaligned_rows = data.is_some() && row_bytes % DEFAULT_PIXEL_ALIGNMENT as usize != 0;

        self.bind();
        let gl = self.core.gl();
        if unaligned_rows {
            gl.pixel_store(PixelStoreParameter::UnpackAlignment, 1);
        }
        gl.tex_image_2d(self.target, level, format, width, height, data);
        if unaligned_rows {
            gl.pixel_store(PixelStoreParameter::UnpackAlignment, DEFAULT_PIXEL_ALIGNMENT);
        }
        if level == 0 {
            self.size.set((width, height));
            self.format.set(Some(format));
        }
        Ok(())
    }

    pub fn generate_mipmap(&self) {
        self.bind();
        self.core.gl().generate_mipmap(self.target);
    }
}

impl Object for Texture {
    fn core(&self) -> &ObjectCore {
        &self.core
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        self.core.gl().delete_texture(self.id());
    }
}

#[cfg(test)]
#[path = "texture_tests.rs"]
mod tests;
