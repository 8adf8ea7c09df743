/// Backend module - the native OpenGL seam and its typed vocabulary

// Module declarations
pub mod gl_backend;
pub mod types;
pub mod uniform_value;

// Re-export everything from gl_backend.rs
pub use gl_backend::*;

// Re-export from other modules
pub use types::*;
pub use uniform_value::*;

// Recording mock backend for tests (no GL context required)
#[cfg(test)]
pub mod mock_backend;
