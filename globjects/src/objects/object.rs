/// Object - state shared by every wrapper (context, native name, label)

use std::cell::RefCell;
use std::rc::Rc;

use crate::backend::{GlBackend, ObjectType};
use crate::context::Context;
use crate::error::Result;

/// Native name plus the context it lives in
pub struct ObjectCore {
    context: Rc<Context>,
    id: u32,
    object_type: ObjectType,
    label: RefCell<Option<String>>,
}

impl ObjectCore {
    pub(crate) fn new(context: &Rc<Context>, id: u32, object_type: ObjectType) -> Self {
        Self {
            context: context.clone(),
            id,
            object_type,
            label: RefCell::new(None),
        }
    }

    pub fn context(&self) -> &Rc<Context> {
        &self.context
    }

    pub fn gl(&self) -> &dyn GlBackend {
        self.context.gl()
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn object_type(&self) -> ObjectType {
        self.object_type
    }
}

/// Common wrapper interface
///
/// Labels are pushed to the driver through the object-name implementation and
/// always cached on the wrapper, so `label()` works on contexts without
/// KHR_debug.
pub trait Object {
    fn core(&self) -> &ObjectCore;

    fn id(&self) -> u32 {
        self.core().id
    }

    fn object_type(&self) -> ObjectType {
        self.core().object_type
    }

    fn context(&self) -> &Rc<Context> {
        self.core().context()
    }

    fn set_label(&self, label: &str) -> Result<()> {
        let core = self.core();
        let implementation = core.context.implementations().object_name_implementation()?;
        implementation.set_label(core.gl(), core.object_type, core.id, Some(label));
        *core.label.borrow_mut() = Some(label.to_string());
        Ok(())
    }

    fn clear_label(&self) -> Result<()> {
        let core = self.core();
        let implementation = core.context.implementations().object_name_implementation()?;
        implementation.set_label(core.gl(), core.object_type, core.id, None);
        *core.label.borrow_mut() = None;
        Ok(())
    }

    fn label(&self) -> Option<String> {
        self.core().label.borrow().clone()
    }

    fn has_label(&self) -> bool {
        self.core().label.borrow().is_some()
    }

    /// Label as the driver reports it
    ///
    /// `None` when unlabeled or when the context has no driver-side labels.
    fn driver_label(&self) -> Result<Option<String>> {
        let core = self.core();
        let implementation = core.context.implementations().object_name_implementation()?;
        Ok(implementation.label(core.gl(), core.object_type, core.id))
    }
}

#[cfg(test)]
#[path = "object_tests.rs"]
mod tests;
