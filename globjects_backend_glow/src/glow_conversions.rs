/// Conversions between the typed globjects vocabulary and native GL enums

use globjects::glo::gl::{
    Attachment, BufferParameter, BufferTarget, BufferUsage, Capability, ColorBuffer,
    DebugSeverity, DebugSource, DebugType, DrawMode, FramebufferStatus, FramebufferTarget,
    IndexType, ObjectType, PixelStoreParameter, ShaderType, TextureFilter, TextureFormat,
    TextureParameter, TextureTarget, TextureWrap, VertexAttribType,
};

// ===== BUFFERS =====

pub(crate) fn buffer_target_to_gl(target: BufferTarget) -> u32 {
    match target {
        BufferTarget::Array => glow::ARRAY_BUFFER,
        BufferTarget::ElementArray => glow::ELEMENT_ARRAY_BUFFER,
        BufferTarget::Uniform => glow::UNIFORM_BUFFER,
        BufferTarget::ShaderStorage => glow::SHADER_STORAGE_BUFFER,
        BufferTarget::CopyRead => glow::COPY_READ_BUFFER,
        BufferTarget::CopyWrite => glow::COPY_WRITE_BUFFER,
        BufferTarget::PixelPack => glow::PIXEL_PACK_BUFFER,
        BufferTarget::PixelUnpack => glow::PIXEL_UNPACK_BUFFER,
        BufferTarget::TransformFeedback => glow::TRANSFORM_FEEDBACK_BUFFER,
        BufferTarget::DrawIndirect => glow::DRAW_INDIRECT_BUFFER,
        BufferTarget::AtomicCounter => glow::ATOMIC_COUNTER_BUFFER,
        BufferTarget::Texture => glow::TEXTURE_BUFFER,
    }
}

pub(crate) fn buffer_usage_to_gl(usage: BufferUsage) -> u32 {
    match usage {
        BufferUsage::StreamDraw => glow::STREAM_DRAW,
        BufferUsage::StreamRead => glow::STREAM_READ,
        BufferUsage::StreamCopy => glow::STREAM_COPY,
        BufferUsage::StaticDraw => glow::STATIC_DRAW,
        BufferUsage::StaticRead => glow::STATIC_READ,
        BufferUsage::StaticCopy => glow::STATIC_COPY,
        BufferUsage::DynamicDraw => glow::DYNAMIC_DRAW,
        BufferUsage::DynamicRead => glow::DYNAMIC_READ,
        BufferUsage::DynamicCopy => glow::DYNAMIC_COPY,
    }
}

pub(crate) fn buffer_parameter_to_gl(parameter: BufferParameter) -> u32 {
    match parameter {
        BufferParameter::Size => glow::BUFFER_SIZE,
        BufferParameter::Usage => glow::BUFFER_USAGE,
        BufferParameter::Mapped => glow::BUFFER_MAPPED,
        BufferParameter::AccessFlags => glow::BUFFER_ACCESS_FLAGS,
        BufferParameter::ImmutableStorage => glow::BUFFER_IMMUTABLE_STORAGE,
        BufferParameter::StorageFlags => glow::BUFFER_STORAGE_FLAGS,
    }
}

// ===== FRAMEBUFFERS =====

pub(crate) fn framebuffer_target_to_gl(target: FramebufferTarget) -> u32 {
    match target {
        FramebufferTarget::Framebuffer => glow::FRAMEBUFFER,
        FramebufferTarget::Draw => glow::DRAW_FRAMEBUFFER,
        FramebufferTarget::Read => glow::READ_FRAMEBUFFER,
    }
}

/// Binding query for a framebuffer target
///
/// `GL_FRAMEBUFFER` shares its binding with the draw target.
pub(crate) fn framebuffer_binding_query(target: FramebufferTarget) -> u32 {
    match target {
        FramebufferTarget::Framebuffer | FramebufferTarget::Draw => glow::DRAW_FRAMEBUFFER_BINDING,
        FramebufferTarget::Read => glow::READ_FRAMEBUFFER_BINDING,
    }
}

pub(crate) fn attachment_to_gl(attachment: Attachment) -> u32 {
    match attachment {
        Attachment::Color(index) => glow::COLOR_ATTACHMENT0 + index,
        Attachment::Depth => glow::DEPTH_ATTACHMENT,
        Attachment::Stencil => glow::STENCIL_ATTACHMENT,
        Attachment::DepthStencil => glow::DEPTH_STENCIL_ATTACHMENT,
    }
}

pub(crate) fn color_buffer_to_gl(buffer: ColorBuffer) -> u32 {
    match buffer {
        ColorBuffer::None => glow::NONE,
        ColorBuffer::Front => glow::FRONT,
        ColorBuffer::Back => glow::BACK,
        ColorBuffer::FrontAndBack => glow::FRONT_AND_BACK,
        ColorBuffer::Attachment(index) => glow::COLOR_ATTACHMENT0 + index,
    }
}

pub(crate) fn framebuffer_status_from_gl(status: u32) -> FramebufferStatus {
    match status {
        glow::FRAMEBUFFER_COMPLETE => FramebufferStatus::Complete,
        glow::FRAMEBUFFER_UNDEFINED => FramebufferStatus::Undefined,
        glow::FRAMEBUFFER_INCOMPLETE_ATTACHMENT => FramebufferStatus::IncompleteAttachment,
        glow::FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT => {
            FramebufferStatus::IncompleteMissingAttachment
        }
        glow::FRAMEBUFFER_INCOMPLETE_DRAW_BUFFER => FramebufferStatus::IncompleteDrawBuffer,
        glow::FRAMEBUFFER_INCOMPLETE_READ_BUFFER => FramebufferStatus::IncompleteReadBuffer,
        glow::FRAMEBUFFER_UNSUPPORTED => FramebufferStatus::Unsupported,
        glow::FRAMEBUFFER_INCOMPLETE_MULTISAMPLE => FramebufferStatus::IncompleteMultisample,
        glow::FRAMEBUFFER_INCOMPLETE_LAYER_TARGETS => FramebufferStatus::IncompleteLayerTargets,
        other => FramebufferStatus::Unknown(other),
    }
}

// ===== TEXTURES =====

pub(crate) fn texture_target_to_gl(target: TextureTarget) -> u32 {
    match target {
        TextureTarget::Texture1D => glow::TEXTURE_1D,
        TextureTarget::Texture2D => glow::TEXTURE_2D,
        TextureTarget::Texture3D => glow::TEXTURE_3D,
        TextureTarget::Texture2DArray => glow::TEXTURE_2D_ARRAY,
        TextureTarget::CubeMap => glow::TEXTURE_CUBE_MAP,
        TextureTarget::Rectangle => glow::TEXTURE_RECTANGLE,
        TextureTarget::Texture2DMultisample => glow::TEXTURE_2D_MULTISAMPLE,
    }
}

/// Binding query for the texture targets accepting `glTexImage2D`
pub(crate) fn texture_binding_query(target: TextureTarget) -> Option<u32> {
    match target {
        TextureTarget::Texture2D => Some(glow::TEXTURE_BINDING_2D),
        TextureTarget::Rectangle => Some(glow::TEXTURE_BINDING_RECTANGLE),
        _ => None,
    }
}

pub(crate) fn internal_format_to_gl(format: TextureFormat) -> u32 {
    match format {
        TextureFormat::R8 => glow::R8,
        TextureFormat::Rg8 => glow::RG8,
        TextureFormat::Rgb8 => glow::RGB8,
        TextureFormat::Rgba8 => glow::RGBA8,
        TextureFormat::R32F => glow::R32F,
        TextureFormat::Rg32F => glow::RG32F,
        TextureFormat::Rgba16F => glow::RGBA16F,
        TextureFormat::Rgba32F => glow::RGBA32F,
        TextureFormat::R32UI => glow::R32UI,
        TextureFormat::Depth16 => glow::DEPTH_COMPONENT16,
        TextureFormat::Depth24 => glow::DEPTH_COMPONENT24,
        TextureFormat::Depth32F => glow::DEPTH_COMPONENT32F,
        TextureFormat::Depth24Stencil8 => glow::DEPTH24_STENCIL8,
    }
}

/// Client-side pixel format and component type used when uploading
pub(crate) fn pixel_format_to_gl(format: TextureFormat) -> (u32, u32) {
    match format {
        TextureFormat::R8 => (glow::RED, glow::UNSIGNED_BYTE),
        TextureFormat::Rg8 => (glow::RG, glow::UNSIGNED_BYTE),
        TextureFormat::Rgb8 => (glow::RGB, glow::UNSIGNED_BYTE),
        TextureFormat::Rgba8 => (glow::RGBA, glow::UNSIGNED_BYTE),
        TextureFormat::R32F => (glow::RED, glow::FLOAT),
        TextureFormat::Rg32F => (glow::RG, glow::FLOAT),
        TextureFormat::Rgba16F => (glow::RGBA, glow::HALF_FLOAT),
        TextureFormat::Rgba32F => (glow::RGBA, glow::FLOAT),
        TextureFormat::R32UI => (glow::RED_INTEGER, glow::UNSIGNED_INT),
        TextureFormat::Depth16 => (glow::DEPTH_COMPONENT, glow::UNSIGNED_SHORT),
        TextureFormat::Depth24 => (glow::DEPTH_COMPONENT, glow::UNSIGNED_INT),
        TextureFormat::Depth32F => (glow::DEPTH_COMPONENT, glow::FLOAT),
        TextureFormat::Depth24Stencil8 => (glow::DEPTH_STENCIL, glow::UNSIGNED_INT_24_8),
    }
}

/// `GL_FRAMEBUFFER_ATTACHMENT_COMPONENT_TYPE` of an image in this format
pub(crate) fn component_type_to_gl(format: TextureFormat) -> u32 {
    match format {
        TextureFormat::R32F
        | TextureFormat::Rg32F
        | TextureFormat::Rgba16F
        | TextureFormat::Rgba32F
        | TextureFormat::Depth32F => glow::FLOAT,
        TextureFormat::R32UI => glow::UNSIGNED_INT,
        _ => glow::UNSIGNED_NORMALIZED,
    }
}

pub(crate) fn texture_filter_to_gl(filter: TextureFilter) -> u32 {
    match filter {
        TextureFilter::Nearest => glow::NEAREST,
        TextureFilter::Linear => glow::LINEAR,
        TextureFilter::NearestMipmapNearest => glow::NEAREST_MIPMAP_NEAREST,
        TextureFilter::LinearMipmapNearest => glow::LINEAR_MIPMAP_NEAREST,
        TextureFilter::NearestMipmapLinear => glow::NEAREST_MIPMAP_LINEAR,
        TextureFilter::LinearMipmapLinear => glow::LINEAR_MIPMAP_LINEAR,
    }
}

pub(crate) fn texture_wrap_to_gl(wrap: TextureWrap) -> u32 {
    match wrap {
        TextureWrap::ClampToEdge => glow::CLAMP_TO_EDGE,
        TextureWrap::ClampToBorder => glow::CLAMP_TO_BORDER,
        TextureWrap::Repeat => glow::REPEAT,
        TextureWrap::MirroredRepeat => glow::MIRRORED_REPEAT,
    }
}

/// Parameter name and integer value for `glTexParameteri`
pub(crate) fn texture_parameter_to_gl(parameter: TextureParameter) -> (u32, i32) {
    match parameter {
        TextureParameter::MinFilter(filter) => {
            (glow::TEXTURE_MIN_FILTER, texture_filter_to_gl(filter) as i32)
        }
        TextureParameter::MagFilter(filter) => {
            (glow::TEXTURE_MAG_FILTER, texture_filter_to_gl(filter) as i32)
        }
        TextureParameter::WrapS(wrap) => (glow::TEXTURE_WRAP_S, texture_wrap_to_gl(wrap) as i32),
        TextureParameter::WrapT(wrap) => (glow::TEXTURE_WRAP_T, texture_wrap_to_gl(wrap) as i32),
        TextureParameter::WrapR(wrap) => (glow::TEXTURE_WRAP_R, texture_wrap_to_gl(wrap) as i32),
        TextureParameter::BaseLevel(level) => (glow::TEXTURE_BASE_LEVEL, level),
        TextureParameter::MaxLevel(level) => (glow::TEXTURE_MAX_LEVEL, level),
    }
}

// ===== SHADERS / DRAWING =====

pub(crate) fn pixel_store_parameter_to_gl(parameter: PixelStoreParameter) -> u32 {
    match parameter {
        PixelStoreParameter::PackAlignment => glow::PACK_ALIGNMENT,
        PixelStoreParameter::UnpackAlignment => glow::UNPACK_ALIGNMENT,
    }
}

pub(crate) fn shader_type_to_gl(shader_type: ShaderType) -> u32 {
    match shader_type {
        ShaderType::Vertex => glow::VERTEX_SHADER,
        ShaderType::TessControl => glow::TESS_CONTROL_SHADER,
        ShaderType::TessEvaluation => glow::TESS_EVALUATION_SHADER,
        ShaderType::Geometry => glow::GEOMETRY_SHADER,
        ShaderType::Fragment => glow::FRAGMENT_SHADER,
        ShaderType::Compute => glow::COMPUTE_SHADER,
    }
}

pub(crate) fn vertex_attrib_type_to_gl(attrib_type: VertexAttribType) -> u32 {
    match attrib_type {
        VertexAttribType::Byte => glow::BYTE,
        VertexAttribType::UnsignedByte => glow::UNSIGNED_BYTE,
        VertexAttribType::Short => glow::SHORT,
        VertexAttribType::UnsignedShort => glow::UNSIGNED_SHORT,
        VertexAttribType::Int => glow::INT,
        VertexAttribType::UnsignedInt => glow::UNSIGNED_INT,
        VertexAttribType::HalfFloat => glow::HALF_FLOAT,
        VertexAttribType::Float => glow::FLOAT,
        VertexAttribType::Double => glow::DOUBLE,
    }
}

pub(crate) fn draw_mode_to_gl(mode: DrawMode) -> u32 {
    match mode {
        DrawMode::Points => glow::POINTS,
        DrawMode::Lines => glow::LINES,
        DrawMode::LineStrip => glow::LINE_STRIP,
        DrawMode::LineLoop => glow::LINE_LOOP,
        DrawMode::Triangles => glow::TRIANGLES,
        DrawMode::TriangleStrip => glow::TRIANGLE_STRIP,
        DrawMode::TriangleFan => glow::TRIANGLE_FAN,
    }
}

pub(crate) fn index_type_to_gl(index_type: IndexType) -> u32 {
    match index_type {
        IndexType::UnsignedByte => glow::UNSIGNED_BYTE,
        IndexType::UnsignedShort => glow::UNSIGNED_SHORT,
        IndexType::UnsignedInt => glow::UNSIGNED_INT,
    }
}

pub(crate) fn capability_to_gl(capability: Capability) -> u32 {
    match capability {
        Capability::DepthTest => glow::DEPTH_TEST,
        Capability::Blend => glow::BLEND,
        Capability::CullFace => glow::CULL_FACE,
        Capability::DebugOutput => glow::DEBUG_OUTPUT,
        Capability::DebugOutputSynchronous => glow::DEBUG_OUTPUT_SYNCHRONOUS,
    }
}

pub(crate) fn object_type_to_gl(object_type: ObjectType) -> u32 {
    match object_type {
        ObjectType::Buffer => glow::BUFFER,
        ObjectType::Framebuffer => glow::FRAMEBUFFER,
        ObjectType::Renderbuffer => glow::RENDERBUFFER,
        ObjectType::Texture => glow::TEXTURE,
        ObjectType::Shader => glow::SHADER,
        ObjectType::Program => glow::PROGRAM,
        ObjectType::VertexArray => glow::VERTEX_ARRAY,
    }
}

// ===== DEBUG OUTPUT =====

pub(crate) fn debug_source_to_gl(source: Option<DebugSource>) -> u32 {
    match source {
        None => glow::DONT_CARE,
        Some(DebugSource::Api) => glow::DEBUG_SOURCE_API,
        Some(DebugSource::WindowSystem) => glow::DEBUG_SOURCE_WINDOW_SYSTEM,
        Some(DebugSource::ShaderCompiler) => glow::DEBUG_SOURCE_SHADER_COMPILER,
        Some(DebugSource::ThirdParty) => glow::DEBUG_SOURCE_THIRD_PARTY,
        Some(DebugSource::Application) => glow::DEBUG_SOURCE_APPLICATION,
        Some(DebugSource::Other) => glow::DEBUG_SOURCE_OTHER,
    }
}

pub(crate) fn debug_source_from_gl(source: u32) -> DebugSource {
    match source {
        glow::DEBUG_SOURCE_API => DebugSource::Api,
        glow::DEBUG_SOURCE_WINDOW_SYSTEM => DebugSource::WindowSystem,
        glow::DEBUG_SOURCE_SHADER_COMPILER => DebugSource::ShaderCompiler,
        glow::DEBUG_SOURCE_THIRD_PARTY => DebugSource::ThirdParty,
        glow::DEBUG_SOURCE_APPLICATION => DebugSource::Application,
        _ => DebugSource::Other,
    }
}

pub(crate) fn debug_type_to_gl(message_type: Option<DebugType>) -> u32 {
    match message_type {
        None => glow::DONT_CARE,
        Some(DebugType::Error) => glow::DEBUG_TYPE_ERROR,
        Some(DebugType::DeprecatedBehavior) => glow::DEBUG_TYPE_DEPRECATED_BEHAVIOR,
        Some(DebugType::UndefinedBehavior) => glow::DEBUG_TYPE_UNDEFINED_BEHAVIOR,
        Some(DebugType::Portability) => glow::DEBUG_TYPE_PORTABILITY,
        Some(DebugType::Performance) => glow::DEBUG_TYPE_PERFORMANCE,
        Some(DebugType::Marker) => glow::DEBUG_TYPE_MARKER,
        Some(DebugType::PushGroup) => glow::DEBUG_TYPE_PUSH_GROUP,
        Some(DebugType::PopGroup) => glow::DEBUG_TYPE_POP_GROUP,
        Some(DebugType::Other) => glow::DEBUG_TYPE_OTHER,
    }
}

pub(crate) fn debug_type_from_gl(message_type: u32) -> DebugType {
    match message_type {
        glow::DEBUG_TYPE_ERROR => DebugType::Error,
        glow::DEBUG_TYPE_DEPRECATED_BEHAVIOR => DebugType::DeprecatedBehavior,
        glow::DEBUG_TYPE_UNDEFINED_BEHAVIOR => DebugType::UndefinedBehavior,
        glow::DEBUG_TYPE_PORTABILITY => DebugType::Portability,
        glow::DEBUG_TYPE_PERFORMANCE => DebugType::Performance,
        glow::DEBUG_TYPE_MARKER => DebugType::Marker,
        glow::DEBUG_TYPE_PUSH_GROUP => DebugType::PushGroup,
        glow::DEBUG_TYPE_POP_GROUP => DebugType::PopGroup,
        _ => DebugType::Other,
    }
}

pub(crate) fn debug_severity_to_gl(severity: Option<DebugSeverity>) -> u32 {
    match severity {
        None => glow::DONT_CARE,
        Some(DebugSeverity::Notification) => glow::DEBUG_SEVERITY_NOTIFICATION,
        Some(DebugSeverity::Low) => glow::DEBUG_SEVERITY_LOW,
        Some(DebugSeverity::Medium) => glow::DEBUG_SEVERITY_MEDIUM,
        Some(DebugSeverity::High) => glow::DEBUG_SEVERITY_HIGH,
    }
}

/// Unrecognized severities are reported as notifications
pub(crate) fn debug_severity_from_gl(severity: u32) -> DebugSeverity {
    match severity {
        glow::DEBUG_SEVERITY_HIGH => DebugSeverity::High,
        glow::DEBUG_SEVERITY_MEDIUM => DebugSeverity::Medium,
        glow::DEBUG_SEVERITY_LOW => DebugSeverity::Low,
        _ => DebugSeverity::Notification,
    }
}

#[cfg(test)]
#[path = "glow_conversions_tests.rs"]
mod tests;
