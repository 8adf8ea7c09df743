/*!
# globjects

Object-oriented wrapper around OpenGL.

Resources (buffers, framebuffers, renderbuffers, textures, shaders, programs,
vertex arrays) are owned wrappers around native names. Where OpenGL offers
more than one way to do the same thing, the work goes through an
*implementation* selected per context:

- **Capabilities**: version and extension query of the context
- **ImplementationRegistry**: per-context cache of the selected strategy per
  kind (uniform, buffer, framebuffer, debug, program binary, shading language
  include, object name), selected lazily or by `initialize()`
- **GlBackend**: the native entry points; implemented by backend crates such
  as `globjects_backend_glow`

The context is passed explicitly (`Rc<Context>`) to every wrapper; nothing is
thread-local.
*/

// Internal modules
mod context;
mod error;
pub mod backend;
pub mod capabilities;
pub mod implementations;
pub mod log;
pub mod objects;
pub mod registry;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;

// Main glo namespace module
pub mod glo {
    // Error types
    pub use crate::error::{Error, Result};

    // Context and configuration
    pub use crate::context::{Context, ContextConfig, ImplementationOverrides};

    // Capability detection
    pub use crate::capabilities::{Capabilities, Extension, Version};

    // Implementation registry
    pub use crate::registry::ImplementationRegistry;

    // Native entry points
    pub use crate::backend::{DebugCallback, GlBackend};

    // Logging sub-module (types only, macros live at the crate root)
    pub mod log {
        pub use crate::log::{reset_logger, set_logger, DefaultLogger, LogEntry, LogSeverity, Logger};
    }

    // Typed GL vocabulary
    pub mod gl {
        pub use crate::backend::*;
    }

    // Implementation kinds, choices and strategy traits
    pub mod implementations {
        pub use crate::implementations::*;
    }

    // Resource wrappers
    pub mod objects {
        pub use crate::objects::*;
    }

    // Geometry helpers
    pub mod utils {
        pub use crate::utils::*;
    }
}

// Re-export math library at crate root
pub use glam;
