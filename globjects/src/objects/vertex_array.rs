/// VertexArray - vertex array object with per-binding attribute setup
///
/// A binding collects three pieces of state: the attribute location it feeds,
/// the source buffer (offset + stride) and the element format. The attribute
/// pointer is specified as soon as all three are known, and again whenever one
/// of them changes.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::backend::{BufferTarget, DrawMode, IndexType, ObjectType, VertexAttribType};
use crate::context::Context;
use crate::objects::{Buffer, Object, ObjectCore};

#[derive(Clone)]
struct BufferSource {
    buffer: Rc<Buffer>,
    base_offset: usize,
    stride: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeFormat {
    pub size: i32,
    pub attrib_type: VertexAttribType,
    pub normalized: bool,
    pub relative_offset: usize,
}

#[derive(Clone, Default)]
struct BindingState {
    attribute: Option<u32>,
    source: Option<BufferSource>,
    format: Option<AttributeFormat>,
}

pub struct VertexArray {
    core: ObjectCore,
    bindings: RefCell<FxHashMap<u32, BindingState>>,
}

impl VertexArray {
    pub fn new(context: &Rc<Context>) -> Self {
        let id = context.gl().gen_vertex_array();
        Self {
            core: ObjectCore::new(context, id, ObjectType::VertexArray),
            bindings: RefCell::new(FxHashMap::default()),
        }
    }

    pub fn bind(&self) {
        self.core.gl().bind_vertex_array(self.id());
    }

    pub fn unbind(&self) {
        self.core.gl().bind_vertex_array(0);
    }

    /// Access binding `index`, creating it on first use
    pub fn binding(&self, index: u32) -> VertexAttributeBinding<'_> {
        self.bindings.borrow_mut().entry(index).or_default();
        VertexAttributeBinding { vao: self, index }
    }

    pub fn binding_count(&self) -> usize {
        self.bindings.borrow().len()
    }

    pub fn enable(&self, attribute: u32) {
        self.bind();
        self.core.gl().enable_vertex_attrib_array(attribute);
    }

    pub fn disable(&self, attribute: u32) {
        self.bind();
        self.core.gl().disable_vertex_attrib_array(attribute);
    }

    pub fn draw_arrays(&self, mode: DrawMode, first: i32, count: i32) {
        self.bind();
        self.core.gl().draw_arrays(mode, first, count);
    }

    /// Indexed draw; `offset` is in bytes into the bound element buffer
    pub fn draw_elements(&self, mode: DrawMode, count: i32, index_type: IndexType, offset: usize) {
        self.bind();
        self.core.gl().draw_elements(mode, count, index_type, offset);
    }

    fn update(&self, index: u32, change: impl FnOnce(&mut BindingState)) {
        let state = {
            let mut bindings = self.bindings.borrow_mut();
            let state = bindings.entry(index).or_default();
            change(state);
            state.clone()
        };

        if let (Some(attribute), Some(source), Some(format)) = (state.attribute, state.source, state.format) {
            let gl = self.core.gl();
            self.bind();
            source.buffer.bind(BufferTarget::Array);
            gl.vertex_attrib_pointer(
                attribute,
                format.size,
                format.attrib_type,
                format.normalized,
                source.stride,
                source.base_offset + format.relative_offset,
            );
        }
    }
}

impl Object for VertexArray {
    fn core(&self) -> &ObjectCore {
        &self.core
    }
}

impl Drop for VertexArray {
    fn drop(&mut self) {
        self.core.gl().delete_vertex_array(self.id());
    }
}

// ============================================================================
// VertexAttributeBinding
// ============================================================================

/// Handle to one binding of a vertex array
pub struct VertexAttributeBinding<'a> {
    vao: &'a VertexArray,
    index: u32,
}

impl VertexAttributeBinding<'_> {
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Attribute location fed by this binding
    pub fn set_attribute(&self, attribute: u32) {
        self.vao.update(self.index, |state| state.attribute = Some(attribute));
    }

    /// Source buffer, byte offset of the first element and byte stride
    pub fn set_buffer(&self, buffer: &Rc<Buffer>, base_offset: usize, stride: i32) {
        let source = BufferSource {
            buffer: buffer.clone(),
            base_offset,
            stride,
        };
        self.vao.update(self.index, |state| state.source = Some(source));
    }

    /// Element layout; `relative_offset` is added to the buffer's base offset
    pub fn set_format(&self, size: i32, attrib_type: VertexAttribType, normalized: bool, relative_offset: usize) {
        let format = AttributeFormat {
            size,
            attrib_type,
            normalized,
            relative_offset,
        };
        self.vao.update(self.index, |state| state.format = Some(format));
    }

    pub fn attribute(&self) -> Option<u32> {
        self.vao
            .bindings
            .borrow()
            .get(&self.index)
            .and_then(|state| state.attribute)
    }

    pub fn format(&self) -> Option<AttributeFormat> {
        self.vao
            .bindings
            .borrow()
            .get(&self.index)
            .and_then(|state| state.format)
    }

    /// Native name of the source buffer
    pub fn buffer_id(&self) -> Option<u32> {
        self.vao
            .bindings
            .borrow()
            .get(&self.index)
            .and_then(|state| state.source.as_ref().map(|source| source.buffer.id()))
    }
}

#[cfg(test)]
#[path = "vertex_array_tests.rs"]
mod tests;
