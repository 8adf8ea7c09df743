/// Buffer - GPU buffer object
///
/// Storage updates go through the selected buffer implementation. The wrapper
/// caches the allocated size and rejects out-of-range updates and reads before
/// they reach the driver.

use std::cell::Cell;
use std::rc::Rc;

use bytemuck::Pod;

use crate::backend::{BufferParameter, BufferStorageFlags, BufferTarget, BufferUsage, ObjectType};
use crate::capabilities::Extension;
use crate::context::Context;
use crate::error::Result;
use crate::implementations::BufferImplementation;
use crate::objects::{Object, ObjectCore};

pub struct Buffer {
    core: ObjectCore,
    size: Cell<usize>,
    immutable: Cell<bool>,
}

impl Buffer {
    pub fn new(context: &Rc<Context>) -> Result<Self> {
        let implementation = context.implementations().buffer_implementation()?;
        let id = implementation.create(context.gl());
        crate::glo_trace!("glo::Buffer", "Created buffer {}", id);
        Ok(Self {
            core: ObjectCore::new(context, id, ObjectType::Buffer),
            size: Cell::new(0),
            immutable: Cell::new(false),
        })
    }

    fn implementation(&self) -> Result<Rc<dyn BufferImplementation>> {
        self.core.context().implementations().buffer_implementation()
    }

    /// Allocated size in bytes
    pub fn size(&self) -> usize {
        self.size.get()
    }

    /// Whether storage was allocated with `set_storage`
    pub fn is_immutable(&self) -> bool {
        self.immutable.get()
    }

    // ===== MUTABLE STORAGE =====

    /// (Re)allocate and fill the buffer
    pub fn set_data(&self, data: &[u8], usage: BufferUsage) -> Result<()> {
        self.respecify(data.len(), Some(data), usage)
    }

    pub fn set_data_of<T: Pod>(&self, data: &[T], usage: BufferUsage) -> Result<()> {
        self.set_data(bytemuck::cast_slice(data), usage)
    }

    /// (Re)allocate `size` bytes of uninitialized storage
    pub fn allocate(&self, size: usize, usage: BufferUsage) -> Result<()> {
        self.respecify(size, None, usage)
    }

    fn respecify(&self, size: usize, data: Option<&[u8]>, usage: BufferUsage) -> Result<()> {
        if self.immutable.get() {
            crate::glo_bail!(
                "glo::Buffer",
                "Buffer {} has immutable storage and cannot be reallocated",
                self.id()
            );
        }
        self.implementation()?
            .set_data(self.core.gl(), self.id(), size, data, usage);
        self.size.set(size);
        Ok(())
    }

    /// Overwrite `data.len()` bytes starting at `offset`
    pub fn set_sub_data(&self, offset: usize, data: &[u8]) -> Result<()> {
        self.check_range(offset, data.len())?;
        self.implementation()?
            .set_sub_data(self.core.gl(), self.id(), offset, data);
        Ok(())
    }

    pub fn set_sub_data_of<T: Pod>(&self, offset: usize, data: &[T]) -> Result<()> {
        self.set_sub_data(offset, bytemuck::cast_slice(data))
    }

    // ===== IMMUTABLE STORAGE =====

    /// Allocate immutable storage (ARB_buffer_storage)
    ///
    /// `data`, when given, must be exactly `size` bytes.
    pub fn set_storage(&self, size: usize, data: Option<&[u8]>, flags: BufferStorageFlags) -> Result<()> {
        if !self.core.context().capabilities().is_supported(Extension::ArbBufferStorage) {
            crate::glo_bail!("glo::Buffer", "Immutable buffer storage requires GL_ARB_buffer_storage");
        }
        if self.immutable.get() {
            crate::glo_bail!("glo::Buffer", "Buffer {} already has immutable storage", self.id());
        }
        if let Some(data) = data {
            if data.len() != size {
                crate::glo_bail!(
                    "glo::Buffer",
                    "Storage size {} does not match data length {}",
                    size,
                    data.len()
                );
            }
        }
        self.implementation()?
            .set_storage(self.core.gl(), self.id(), size, data, flags);
        self.size.set(size);
        self.immutable.set(true);
        Ok(())
    }

    // ===== READBACK / QUERIES =====

    /// Read `size` bytes starting at `offset`
    pub fn sub_data(&self, offset: usize, size: usize) -> Result<Vec<u8>> {
        self.check_range(offset, size)?;
        let mut out = vec![0u8; size];
        self.implementation()?
            .get_sub_data(self.core.gl(), self.id(), offset, &mut out);
        Ok(out)
    }

    /// Read `count` elements of `T` starting at byte `offset`
    pub fn sub_data_of<T: Pod>(&self, offset: usize, count: usize) -> Result<Vec<T>> {
        let Some(size) = count.checked_mul(std::mem::size_of::<T>()) else {
            crate::glo_bail!(
                "glo::Buffer",
                "Reading {} elements of {} bytes overflows",
                count,
                std::mem::size_of::<T>()
            );
        };
        self.check_range(offset, size)?;
        let mut out = vec![T::zeroed(); count];
        self.implementation()?.get_sub_data(
            self.core.gl(),
            self.id(),
            offset,
            bytemuck::cast_slice_mut(&mut out),
        );
        Ok(out)
    }

    pub fn parameter(&self, parameter: BufferParameter) -> Result<i32> {
        Ok(self
            .implementation()?
            .get_parameter(self.core.gl(), self.id(), parameter))
    }

    /// Copy `size` bytes from this buffer into `destination`
    pub fn copy_sub_data(
        &self,
        destination: &Buffer,
        read_offset: usize,
        write_offset: usize,
        size: usize,
    ) -> Result<()> {
        self.check_range(read_offset, size)?;
        destination.check_range(write_offset, size)?;
        self.implementation()?.copy_sub_data(
            self.core.gl(),
            self.id(),
            destination.id(),
            read_offset,
            write_offset,
            size,
        );
        Ok(())
    }

    fn check_range(&self, offset: usize, len: usize) -> Result<()> {
        let in_range = offset
            .checked_add(len)
            .map(|end| end <= self.size.get())
            .unwrap_or(false);
        if !in_range {
            crate::glo_bail!(
                "glo::Buffer",
                "Range {}..{}+{} exceeds buffer {} size {}",
                offset,
                offset,
                len,
                self.id(),
                self.size.get()
            );
        }
        Ok(())
    }

    // ===== BINDING =====

    pub fn bind(&self, target: BufferTarget) {
        self.core.gl().bind_buffer(target, self.id());
    }

    pub fn unbind(&self, target: BufferTarget) {
        self.core.gl().bind_buffer(target, 0);
    }

    /// Bind to an indexed target (uniform, shader storage, ...)
    pub fn bind_base(&self, target: BufferTarget, index: u32) -> Result<()> {
        if !target.is_indexed() {
            crate::glo_bail!("glo::Buffer", "{:?} is not an indexed buffer target", target);
        }
        self.core.gl().bind_buffer_base(target, index, self.id());
        Ok(())
    }

    pub fn unbind_base(&self, target: BufferTarget, index: u32) -> Result<()> {
        if !target.is_indexed() {
            crate::glo_bail!("glo::Buffer", "{:?} is not an indexed buffer target", target);
        }
        self.core.gl().bind_buffer_base(target, index, 0);
        Ok(())
    }
}

impl Object for Buffer {
    fn core(&self) -> &ObjectCore {
        &self.core
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        match self.implementation() {
            Ok(implementation) => implementation.destroy(self.core.gl(), self.id()),
            Err(_) => self.core.gl().delete_buffer(self.id()),
        }
        crate::glo_trace!("glo::Buffer", "Deleted buffer {}", self.id());
    }
}

#[cfg(test)]
#[path = "buffer_tests.rs"]
mod tests;
