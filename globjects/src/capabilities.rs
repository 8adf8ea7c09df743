//! Capability detection
//!
//! Reads the context version and extension strings once, then answers whether
//! a given extension is usable: either advertised by the driver or promoted to
//! core in the context's version.

use std::fmt;

use rustc_hash::FxHashSet;

use crate::backend::GlBackend;

// ===== VERSION =====

/// OpenGL context version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

// ===== EXTENSIONS =====

/// Extensions the implementation selection depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extension {
    ArbVertexBufferObject,
    ArbFramebufferObject,
    ArbCopyBuffer,
    ArbBufferStorage,
    ArbSeparateShaderObjects,
    ArbGetProgramBinary,
    ArbDirectStateAccess,
    ArbShadingLanguageInclude,
    KhrDebug,
}

impl Extension {
    pub const ALL: [Extension; 9] = [
        Extension::ArbVertexBufferObject,
        Extension::ArbFramebufferObject,
        Extension::ArbCopyBuffer,
        Extension::ArbBufferStorage,
        Extension::ArbSeparateShaderObjects,
        Extension::ArbGetProgramBinary,
        Extension::ArbDirectStateAccess,
        Extension::ArbShadingLanguageInclude,
        Extension::KhrDebug,
    ];

    /// Extension string as advertised by drivers
    pub fn name(&self) -> &'static str {
        match self {
            Extension::ArbVertexBufferObject => "GL_ARB_vertex_buffer_object",
            Extension::ArbFramebufferObject => "GL_ARB_framebuffer_object",
            Extension::ArbCopyBuffer => "GL_ARB_copy_buffer",
            Extension::ArbBufferStorage => "GL_ARB_buffer_storage",
            Extension::ArbSeparateShaderObjects => "GL_ARB_separate_shader_objects",
            Extension::ArbGetProgramBinary => "GL_ARB_get_program_binary",
            Extension::ArbDirectStateAccess => "GL_ARB_direct_state_access",
            Extension::ArbShadingLanguageInclude => "GL_ARB_shading_language_include",
            Extension::KhrDebug => "GL_KHR_debug",
        }
    }

    /// Version in which the extension became core, if ever
    pub fn core_since(&self) -> Option<Version> {
        match self {
            Extension::ArbVertexBufferObject => Some(Version::new(1, 5)),
            Extension::ArbFramebufferObject => Some(Version::new(3, 0)),
            Extension::ArbCopyBuffer => Some(Version::new(3, 1)),
            Extension::ArbBufferStorage => Some(Version::new(4, 4)),
            Extension::ArbSeparateShaderObjects => Some(Version::new(4, 1)),
            Extension::ArbGetProgramBinary => Some(Version::new(4, 1)),
            Extension::ArbDirectStateAccess => Some(Version::new(4, 5)),
            Extension::ArbShadingLanguageInclude => None,
            Extension::KhrDebug => Some(Version::new(4, 3)),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|ext| ext.name() == name)
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ===== CAPABILITIES =====

/// Snapshot of what a context supports
#[derive(Debug, Clone)]
pub struct Capabilities {
    version: Version,
    extensions: FxHashSet<String>,
}

impl Capabilities {
    /// Build from an explicit version and extension list
    pub fn new<I, S>(version: Version, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            version,
            extensions: extensions.into_iter().map(Into::into).collect(),
        }
    }

    /// Query version and extension strings from the backend
    pub fn detect(backend: &dyn GlBackend) -> Self {
        let capabilities = Self::new(backend.version(), backend.extensions());
        crate::glo_info!(
            "glo::Capabilities",
            "OpenGL {} with {} extensions",
            capabilities.version,
            capabilities.extensions.len()
        );
        capabilities
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn is_at_least(&self, major: u32, minor: u32) -> bool {
        self.version >= Version::new(major, minor)
    }

    /// Whether the driver advertises the extension string
    pub fn has_extension(&self, name: &str) -> bool {
        self.extensions.contains(name)
    }

    /// Whether the extension is advertised or core in this version
    pub fn is_supported(&self, extension: Extension) -> bool {
        if self.has_extension(extension.name()) {
            return true;
        }
        match extension.core_since() {
            Some(core) => self.version >= core,
            None => false,
        }
    }

    /// Number of advertised extension strings
    pub fn extension_count(&self) -> usize {
        self.extensions.len()
    }
}

#[cfg(test)]
#[path = "capabilities_tests.rs"]
mod tests;
