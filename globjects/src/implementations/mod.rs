/// Implementations module - alternative low-level call strategies per resource kind

// Module declarations
pub mod implementation;
pub mod uniform_implementation;
pub mod buffer_implementation;
pub mod framebuffer_implementation;
pub mod debug_implementation;
pub mod program_binary_implementation;
pub mod shading_language_include_implementation;
pub mod object_name_implementation;
pub mod include_processor;

// Re-export everything from implementation.rs
pub use implementation::*;

// Re-export from other modules
pub use uniform_implementation::{UniformChoice, UniformImplementation};
pub use buffer_implementation::{BufferChoice, BufferImplementation};
pub use framebuffer_implementation::{FramebufferChoice, FramebufferImplementation};
pub use debug_implementation::{DebugChoice, DebugHandler, DebugImplementation, MessageFilter};
pub use program_binary_implementation::{ProgramBinaryChoice, ProgramBinaryImplementation};
pub use shading_language_include_implementation::{
    ShadingLanguageIncludeChoice, ShadingLanguageIncludeImplementation,
};
pub use object_name_implementation::{ObjectNameChoice, ObjectNameImplementation};
pub use include_processor::IncludeProcessor;
