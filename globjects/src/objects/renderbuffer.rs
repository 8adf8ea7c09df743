/// Renderbuffer - render target storage without sampling support

use std::cell::Cell;
use std::rc::Rc;

use crate::backend::{ObjectType, TextureFormat};
use crate::context::Context;
use crate::objects::{Object, ObjectCore};

pub struct Renderbuffer {
    core: ObjectCore,
    size: Cell<(u32, u32)>,
    format: Cell<Option<TextureFormat>>,
}

impl Renderbuffer {
    pub fn new(context: &Rc<Context>) -> Self {
        let id = context.gl().gen_renderbuffer();
        Self {
            core: ObjectCore::new(context, id, ObjectType::Renderbuffer),
            size: Cell::new((0, 0)),
            format: Cell::new(None),
        }
    }

    pub fn storage(&self, format: TextureFormat, width: u32, height: u32) {
        self.bind();
        self.core.gl().renderbuffer_storage(format, width, height);
        self.size.set((width, height));
        self.format.set(Some(format));
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
        self.core.gl().bind_renderbuffer(self.id());
    }

    pub fn unbind(&self) {
        self.core.gl().bind_renderbuffer(0);
    }
}

impl Object for Renderbuffer {
    fn core(&self) -> &ObjectCore {
        &self.core
    }
}

impl Drop for Renderbuffer {
    fn drop(&mut self) {
        self.core.gl().delete_renderbuffer(self.id());
    }
}
