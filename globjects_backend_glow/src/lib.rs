/*!
# globjects - glow backend

`GlBackend` implementation over the [glow](https://docs.rs/glow) bindings.

glow exposes no named buffer or named framebuffer entry points, so the
backend emulates them on scratch binding points and restores the previous
bindings. `GL_ARB_shading_language_include` is not reachable through glow
and is never reported to capability detection; the registry then selects the
source-expanding include fallback.
*/

mod glow_attachments;
mod glow_backend;
mod glow_conversions;

use std::rc::Rc;

use globjects::glo::{Context, ContextConfig, Result};

pub use glow_backend::{GlowBackend, SHADING_LANGUAGE_INCLUDE};

/// Wrap an already loaded glow context
///
/// # Example
///
/// ```no_run
/// use globjects::glo::ContextConfig;
///
/// # fn loader(_: &str) -> *const std::ffi::c_void { std::ptr::null() }
/// let gl = unsafe { glow::Context::from_loader_function(loader) };
/// let context = globjects_backend_glow::create_context(gl, ContextConfig::default())?;
/// # Ok::<(), globjects::glo::Error>(())
/// ```
pub fn create_context(gl: glow::Context, config: ContextConfig) -> Result<Rc<Context>> {
    Context::with_config(Rc::new(GlowBackend::new(gl)), config)
}
