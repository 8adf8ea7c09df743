/// Typed OpenGL enumerations used by the GlBackend trait
///
/// Backends translate these to native `GLenum` values. Keeping them typed in
/// the core crate means wrappers and the mock backend never deal with raw
/// numbers.

use bitflags::bitflags;

// ===== OBJECT TYPES =====

/// Kind of GL object, used for labels (`glObjectLabel` identifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    Buffer,
    Framebuffer,
    Renderbuffer,
    Texture,
    Shader,
    Program,
    VertexArray,
}

// ===== BUFFERS =====

/// Buffer binding targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferTarget {
    Array,
    ElementArray,
    Uniform,
    ShaderStorage,
    CopyRead,
    CopyWrite,
    PixelPack,
    PixelUnpack,
    TransformFeedback,
    DrawIndirect,
    AtomicCounter,
    Texture,
}

impl BufferTarget {
    /// Whether the target is indexed (usable with `bind_buffer_base`)
    pub fn is_indexed(&self) -> bool {
        matches!(
            self,
            BufferTarget::Uniform
                | BufferTarget::ShaderStorage
                | BufferTarget::TransformFeedback
                | BufferTarget::AtomicCounter
        )
    }
}

/// Usage hint for mutable buffer storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferUsage {
    StreamDraw,
    StreamRead,
    StreamCopy,
    StaticDraw,
    StaticRead,
    StaticCopy,
    DynamicDraw,
    DynamicRead,
    DynamicCopy,
}

/// Queryable buffer parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferParameter {
    Size,
    Usage,
    Mapped,
    AccessFlags,
    ImmutableStorage,
    StorageFlags,
}

bitflags! {
    /// Flags for immutable buffer storage (`glBufferStorage`)
    ///
    /// Bit values match the native GL constants.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BufferStorageFlags: u32 {
        const MAP_READ = 0x0001;
        const MAP_WRITE = 0x0002;
        const MAP_PERSISTENT = 0x0040;
        const MAP_COHERENT = 0x0080;
        const DYNAMIC_STORAGE = 0x0100;
        const CLIENT_STORAGE = 0x0200;
    }
}

// ===== FRAMEBUFFERS =====

/// Framebuffer binding targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FramebufferTarget {
    Framebuffer,
    Draw,
    Read,
}

/// Framebuffer attachment points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attachment {
    /// `GL_COLOR_ATTACHMENTi`
    Color(u32),
    Depth,
    Stencil,
    DepthStencil,
}

impl Attachment {
    /// Whether this is a color attachment
    pub fn is_color(&self) -> bool {
        matches!(self, Attachment::Color(_))
    }
}

/// Read/draw buffer selectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorBuffer {
    None,
    Front,
    Back,
    FrontAndBack,
    /// `GL_COLOR_ATTACHMENTi`
    Attachment(u32),
}

/// Queryable attachment parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachmentParameter {
    ObjectType,
    ObjectName,
    TextureLevel,
    TextureLayer,
    ComponentType,
    ColorEncoding,
}

/// Result of a framebuffer completeness check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FramebufferStatus {
    Complete,
    Undefined,
    IncompleteAttachment,
    IncompleteMissingAttachment,
    IncompleteDrawBuffer,
    IncompleteReadBuffer,
    Unsupported,
    IncompleteMultisample,
    IncompleteLayerTargets,
    /// Status code the backend did not recognize
    Unknown(u32),
}

impl FramebufferStatus {
    pub fn is_complete(&self) -> bool {
        *self == FramebufferStatus::Complete
    }

    /// Human readable status, as printed in completeness diagnostics
    pub fn description(&self) -> String {
        match self {
            FramebufferStatus::Complete => "GL_FRAMEBUFFER_COMPLETE".to_string(),
            FramebufferStatus::Undefined => "GL_FRAMEBUFFER_UNDEFINED".to_string(),
            FramebufferStatus::IncompleteAttachment => {
                "GL_FRAMEBUFFER_INCOMPLETE_ATTACHMENT".to_string()
            }
            FramebufferStatus::IncompleteMissingAttachment => {
                "GL_FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT".to_string()
            }
            FramebufferStatus::IncompleteDrawBuffer => {
                "GL_FRAMEBUFFER_INCOMPLETE_DRAW_BUFFER".to_string()
            }
            FramebufferStatus::IncompleteReadBuffer => {
                "GL_FRAMEBUFFER_INCOMPLETE_READ_BUFFER".to_string()
            }
            FramebufferStatus::Unsupported => "GL_FRAMEBUFFER_UNSUPPORTED".to_string(),
            FramebufferStatus::IncompleteMultisample => {
                "GL_FRAMEBUFFER_INCOMPLETE_MULTISAMPLE".to_string()
            }
            FramebufferStatus::IncompleteLayerTargets => {
                "GL_FRAMEBUFFER_INCOMPLETE_LAYER_TARGETS".to_string()
            }
            FramebufferStatus::Unknown(code) => format!("unknown status 0x{:04X}", code),
        }
    }
}

// ===== TEXTURES / RENDERBUFFERS =====

/// Texture binding targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureTarget {
    Texture1D,
    Texture2D,
    Texture3D,
    Texture2DArray,
    CubeMap,
    Rectangle,
    Texture2DMultisample,
}

impl TextureTarget {
    /// Targets that accept a `glTexImage2D` upload
    pub fn accepts_image_2d(&self) -> bool {
        matches!(self, TextureTarget::Texture2D | TextureTarget::Rectangle)
    }
}

/// Sized internal formats for textures and renderbuffers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureFormat {
    R8,
    Rg8,
    Rgb8,
    Rgba8,
    R32F,
    Rg32F,
    Rgba16F,
    Rgba32F,
    R32UI,
    Depth16,
    Depth24,
    Depth32F,
    Depth24Stencil8,
}

impl TextureFormat {
    /// Size of one texel in bytes
    pub fn bytes_per_texel(&self) -> usize {
        match self {
            TextureFormat::R8 => 1,
            TextureFormat::Rg8 => 2,
            TextureFormat::Rgb8 => 3,
            TextureFormat::Rgba8 => 4,
            TextureFormat::R32F => 4,
            TextureFormat::Rg32F => 8,
            TextureFormat::Rgba16F => 8,
            TextureFormat::Rgba32F => 16,
            TextureFormat::R32UI => 4,
            TextureFormat::Depth16 => 2,
            TextureFormat::Depth24 => 4,
            TextureFormat::Depth32F => 4,
            TextureFormat::Depth24Stencil8 => 4,
        }
    }

    pub fn is_depth(&self) -> bool {
        matches!(
            self,
            TextureFormat::Depth16
                | TextureFormat::Depth24
                | TextureFormat::Depth32F
                | TextureFormat::Depth24Stencil8
        )
    }
}

/// Texture filtering modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureFilter {
    Nearest,
    Linear,
    NearestMipmapNearest,
    LinearMipmapNearest,
    NearestMipmapLinear,
    LinearMipmapLinear,
}

/// Texture coordinate wrapping modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureWrap {
    ClampToEdge,
    ClampToBorder,
    Repeat,
    MirroredRepeat,
}

/// Pixel storage modes (`glPixelStorei`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelStoreParameter {
    PackAlignment,
    UnpackAlignment,
}

/// Initial value of both pack and unpack alignment
pub const DEFAULT_PIXEL_ALIGNMENT: i32 = 4;

/// Texture parameter together with its value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureParameter {
    MinFilter(TextureFilter),
    MagFilter(TextureFilter),
    WrapS(TextureWrap),
    WrapT(TextureWrap),
    WrapR(TextureWrap),
    BaseLevel(i32),
    MaxLevel(i32),
}

// ===== SHADERS / PROGRAMS =====

/// Shader stages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderType {
    Vertex,
    TessControl,
    TessEvaluation,
    Geometry,
    Fragment,
    Compute,
}

/// Opaque program binary as returned by the driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramBinary {
    /// Driver-specific binary format token
    pub format: u32,
    /// Binary blob
    pub data: Vec<u8>,
}

// ===== VERTEX INPUT / DRAWING =====

/// Component type of a vertex attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttribType {
    Byte,
    UnsignedByte,
    Short,
    UnsignedShort,
    Int,
    UnsignedInt,
    HalfFloat,
    Float,
    Double,
}

impl VertexAttribType {
    pub fn size_bytes(&self) -> u32 {
        match self {
            VertexAttribType::Byte | VertexAttribType::UnsignedByte => 1,
            VertexAttribType::Short
            | VertexAttribType::UnsignedShort
            | VertexAttribType::HalfFloat => 2,
            VertexAttribType::Int | VertexAttribType::UnsignedInt | VertexAttribType::Float => 4,
            VertexAttribType::Double => 8,
        }
    }
}

/// Primitive topology for draw calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawMode {
    Points,
    Lines,
    LineStrip,
    LineLoop,
    Triangles,
    TriangleStrip,
    TriangleFan,
}

/// Index element type for indexed draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexType {
    UnsignedByte,
    UnsignedShort,
    UnsignedInt,
}

/// Server-side capabilities toggled with glEnable/glDisable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    DepthTest,
    Blend,
    CullFace,
    DebugOutput,
    DebugOutputSynchronous,
}

// ===== ERRORS / DEBUG OUTPUT =====

/// Values returned by `glGetError`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlError {
    NoError,
    InvalidEnum,
    InvalidValue,
    InvalidOperation,
    InvalidFramebufferOperation,
    OutOfMemory,
    StackUnderflow,
    StackOverflow,
    /// Error code the backend did not recognize
    Unknown(u32),
}

impl GlError {
    /// Native error code
    pub fn code(&self) -> u32 {
        match self {
            GlError::NoError => 0,
            GlError::InvalidEnum => 0x0500,
            GlError::InvalidValue => 0x0501,
            GlError::InvalidOperation => 0x0502,
            GlError::StackOverflow => 0x0503,
            GlError::StackUnderflow => 0x0504,
            GlError::OutOfMemory => 0x0505,
            GlError::InvalidFramebufferOperation => 0x0506,
            GlError::Unknown(code) => *code,
        }
    }

    /// Map a native error code back to its variant
    pub fn from_code(code: u32) -> Self {
        match code {
            0 => GlError::NoError,
            0x0500 => GlError::InvalidEnum,
            0x0501 => GlError::InvalidValue,
            0x0502 => GlError::InvalidOperation,
            0x0503 => GlError::StackOverflow,
            0x0504 => GlError::StackUnderflow,
            0x0505 => GlError::OutOfMemory,
            0x0506 => GlError::InvalidFramebufferOperation,
            other => GlError::Unknown(other),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GlError::NoError => "GL_NO_ERROR",
            GlError::InvalidEnum => "GL_INVALID_ENUM",
            GlError::InvalidValue => "GL_INVALID_VALUE",
            GlError::InvalidOperation => "GL_INVALID_OPERATION",
            GlError::InvalidFramebufferOperation => "GL_INVALID_FRAMEBUFFER_OPERATION",
            GlError::OutOfMemory => "GL_OUT_OF_MEMORY",
            GlError::StackUnderflow => "GL_STACK_UNDERFLOW",
            GlError::StackOverflow => "GL_STACK_OVERFLOW",
            GlError::Unknown(_) => "GL_UNKNOWN_ERROR",
        }
    }
}

/// Origin of a debug message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DebugSource {
    Api,
    WindowSystem,
    ShaderCompiler,
    ThirdParty,
    Application,
    Other,
}

/// Category of a debug message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DebugType {
    Error,
    DeprecatedBehavior,
    UndefinedBehavior,
    Portability,
    Performance,
    Marker,
    PushGroup,
    PopGroup,
    Other,
}

/// Severity of a debug message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DebugSeverity {
    Notification,
    Low,
    Medium,
    High,
}

/// A single debug message, either from the driver or inserted by the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugMessage {
    pub source: DebugSource,
    pub message_type: DebugType,
    pub id: u32,
    pub severity: DebugSeverity,
    pub message: String,
}

impl DebugMessage {
    /// Application-sourced marker message with the given severity
    pub fn application(id: u32, severity: DebugSeverity, message: impl Into<String>) -> Self {
        Self {
            source: DebugSource::Application,
            message_type: DebugType::Marker,
            id,
            severity,
            message: message.into(),
        }
    }

    /// Message describing a `glGetError` result
    pub fn from_error(error: GlError) -> Self {
        Self {
            source: DebugSource::Api,
            message_type: DebugType::Error,
            id: error.code(),
            severity: DebugSeverity::High,
            message: error.name().to_string(),
        }
    }
}
