/// Object label strategies

use std::rc::Rc;

use crate::backend::{GlBackend, ObjectType};
use crate::capabilities::{Capabilities, Extension};
use crate::implementations::{ImplementationChoice, ImplementationKind};
use crate::registry::{ImplementationRegistry, ImplementationSlot};

pub trait ObjectNameImplementation {
    /// Push the label to the driver (`None` clears it)
    fn set_label(&self, gl: &dyn GlBackend, object_type: ObjectType, name: u32, label: Option<&str>);

    /// Label as known to the driver, if the driver tracks labels
    fn label(&self, gl: &dyn GlBackend, object_type: ObjectType, name: u32) -> Option<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectNameChoice {
    DebugKhr,
    Legacy,
}

impl ImplementationChoice for ObjectNameChoice {
    type Implementation = dyn ObjectNameImplementation;

    const KIND: ImplementationKind = ImplementationKind::ObjectName;
    const PREFERENCE: &'static [Self] = &[ObjectNameChoice::DebugKhr, ObjectNameChoice::Legacy];

    fn name(&self) -> &'static str {
        match self {
            ObjectNameChoice::DebugKhr => "DebugKhr",
            ObjectNameChoice::Legacy => "Legacy",
        }
    }

    fn is_supported(&self, capabilities: &Capabilities) -> bool {
        match self {
            ObjectNameChoice::DebugKhr => capabilities.is_supported(Extension::KhrDebug),
            ObjectNameChoice::Legacy => true,
        }
    }

    fn instantiate(&self) -> Rc<dyn ObjectNameImplementation> {
        match self {
            ObjectNameChoice::DebugKhr => Rc::new(ObjectNameDebugKhr),
            ObjectNameChoice::Legacy => Rc::new(ObjectNameLegacy),
        }
    }

    fn slot(registry: &ImplementationRegistry) -> &ImplementationSlot<Self> {
        &registry.object_name
    }
}

pub struct ObjectNameDebugKhr;

impl ObjectNameImplementation for ObjectNameDebugKhr {
    fn set_label(&self, gl: &dyn GlBackend, object_type: ObjectType, name: u32, label: Option<&str>) {
        gl.object_label(object_type, name, label);
    }

    fn label(&self, gl: &dyn GlBackend, object_type: ObjectType, name: u32) -> Option<String> {
        let label = gl.get_object_label(object_type, name);
        if label.is_empty() {
            None
        } else {
            Some(label)
        }
    }
}

/// Labels live on the wrapper only
pub struct ObjectNameLegacy;

impl ObjectNameImplementation for ObjectNameLegacy {
    fn set_label(&self, _gl: &dyn GlBackend, _object_type: ObjectType, _name: u32, _label: Option<&str>) {}

    fn label(&self, _gl: &dyn GlBackend, _object_type: ObjectType, _name: u32) -> Option<String> {
        None
    }
}
