/// Objects module - OpenGL resource wrappers

// Module declarations
pub mod object;
pub mod buffer;
pub mod framebuffer;
pub mod renderbuffer;
pub mod texture;
pub mod shader;
pub mod program;
pub mod vertex_array;
pub mod debug_output;

// Re-export everything from object.rs
pub use object::*;

// Re-export from other modules
pub use buffer::*;
pub use framebuffer::*;
pub use renderbuffer::*;
pub use texture::*;
pub use shader::*;
pub use program::*;
pub use vertex_array::*;
pub use debug_output::DebugOutput;
