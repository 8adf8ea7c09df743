/// GlBackend trait - the native OpenGL entry points issued by the wrapper

use crate::backend::{
    Attachment, AttachmentParameter, BufferParameter, BufferStorageFlags, BufferTarget,
    BufferUsage, Capability, ColorBuffer, DebugMessage, DebugSeverity, DebugSource, DebugType,
    DrawMode, FramebufferStatus, FramebufferTarget, GlError, IndexType, ObjectType,
    PixelStoreParameter, ProgramBinary, ShaderType, TextureFormat, TextureParameter,
    TextureTarget, UniformValue, VertexAttribType,
};
use crate::capabilities::Version;

/// Callback receiving driver debug messages
///
/// Drivers may invoke it from their own thread when debug output is
/// asynchronous, hence `Send + Sync`.
pub type DebugCallback = Box<dyn Fn(DebugMessage) + Send + Sync>;

/// Native OpenGL entry points
///
/// Implemented by backend crates (e.g. `GlowBackend`) and by the recording
/// mock used in tests. Object names are raw `GLuint` values; `0` means "no
/// object" wherever a name is accepted.
///
/// Methods mirror single GL calls: no validation, no error checking. Errors
/// stay in the native error state until the debug implementation reads them.
pub trait GlBackend {
    // ===== CONTEXT QUERIES =====

    /// Context version (`GL_MAJOR_VERSION` / `GL_MINOR_VERSION`)
    fn version(&self) -> Version;

    /// Extension strings advertised by the context (`GL_ARB_...`)
    fn extensions(&self) -> Vec<String>;

    /// Pop one error from the native error queue
    fn get_error(&self) -> GlError;

    fn enable(&self, capability: Capability);
    fn disable(&self, capability: Capability);

    // ===== BUFFERS (bind-based) =====

    /// `glGenBuffers`: name only, object created on first bind
    fn gen_buffer(&self) -> u32;
    fn delete_buffer(&self, buffer: u32);
    fn bind_buffer(&self, target: BufferTarget, buffer: u32);
    fn bind_buffer_base(&self, target: BufferTarget, index: u32, buffer: u32);
    fn buffer_data(&self, target: BufferTarget, size: usize, data: Option<&[u8]>, usage: BufferUsage);
    fn buffer_sub_data(&self, target: BufferTarget, offset: usize, data: &[u8]);
    fn buffer_storage(
        &self,
        target: BufferTarget,
        size: usize,
        data: Option<&[u8]>,
        flags: BufferStorageFlags,
    );
    fn get_buffer_sub_data(&self, target: BufferTarget, offset: usize, out: &mut [u8]);
    fn get_buffer_parameter(&self, target: BufferTarget, parameter: BufferParameter) -> i32;
    fn copy_buffer_sub_data(
        &self,
        read_target: BufferTarget,
        write_target: BufferTarget,
        read_offset: usize,
        write_offset: usize,
        size: usize,
    );

    // ===== BUFFERS (direct state access) =====

    /// `glCreateBuffers`: name and object created immediately
    fn create_buffer(&self) -> u32;
    fn named_buffer_data(&self, buffer: u32, size: usize, data: Option<&[u8]>, usage: BufferUsage);
    fn named_buffer_sub_data(&self, buffer: u32, offset: usize, data: &[u8]);
    fn named_buffer_storage(
        &self,
        buffer: u32,
        size: usize,
        data: Option<&[u8]>,
        flags: BufferStorageFlags,
    );
    fn get_named_buffer_sub_data(&self, buffer: u32, offset: usize, out: &mut [u8]);
    fn get_named_buffer_parameter(&self, buffer: u32, parameter: BufferParameter) -> i32;
    fn copy_named_buffer_sub_data(
        &self,
        read_buffer: u32,
        write_buffer: u32,
        read_offset: usize,
        write_offset: usize,
        size: usize,
    );

    // ===== FRAMEBUFFERS (bind-based) =====

    fn gen_framebuffer(&self) -> u32;
    fn delete_framebuffer(&self, framebuffer: u32);
    fn bind_framebuffer(&self, target: FramebufferTarget, framebuffer: u32);
    fn check_framebuffer_status(&self, target: FramebufferTarget) -> FramebufferStatus;
    fn framebuffer_texture(&self, target: FramebufferTarget, attachment: Attachment, texture: u32, level: i32);
    fn framebuffer_texture_layer(
        &self,
        target: FramebufferTarget,
        attachment: Attachment,
        texture: u32,
        level: i32,
        layer: i32,
    );
    fn framebuffer_renderbuffer(&self, target: FramebufferTarget, attachment: Attachment, renderbuffer: u32);
    fn get_framebuffer_attachment_parameter(
        &self,
        target: FramebufferTarget,
        attachment: Attachment,
        parameter: AttachmentParameter,
    ) -> i32;
    fn read_buffer(&self, mode: ColorBuffer);
    fn draw_buffer(&self, mode: ColorBuffer);
    fn draw_buffers(&self, modes: &[ColorBuffer]);

    // ===== FRAMEBUFFERS (direct state access) =====

    fn create_framebuffer(&self) -> u32;
    fn check_named_framebuffer_status(&self, framebuffer: u32, target: FramebufferTarget) -> FramebufferStatus;
    fn named_framebuffer_texture(&self, framebuffer: u32, attachment: Attachment, texture: u32, level: i32);
    fn named_framebuffer_texture_layer(
        &self,
        framebuffer: u32,
        attachment: Attachment,
        texture: u32,
        level: i32,
        layer: i32,
    );
    fn named_framebuffer_renderbuffer(&self, framebuffer: u32, attachment: Attachment, renderbuffer: u32);
    fn get_named_framebuffer_attachment_parameter(
        &self,
        framebuffer: u32,
        attachment: Attachment,
        parameter: AttachmentParameter,
    ) -> i32;
    fn named_framebuffer_read_buffer(&self, framebuffer: u32, mode: ColorBuffer);
    fn named_framebuffer_draw_buffer(&self, framebuffer: u32, mode: ColorBuffer);
    fn named_framebuffer_draw_buffers(&self, framebuffer: u32, modes: &[ColorBuffer]);

    // ===== RENDERBUFFERS =====

    fn gen_renderbuffer(&self) -> u32;
    fn delete_renderbuffer(&self, renderbuffer: u32);
    fn bind_renderbuffer(&self, renderbuffer: u32);
    fn renderbuffer_storage(&self, format: TextureFormat, width: u32, height: u32);

    // ===== TEXTURES =====

    fn gen_texture(&self) -> u32;
    fn delete_texture(&self, texture: u32);
    fn bind_texture(&self, target: TextureTarget, texture: u32);
    /// `glActiveTexture(GL_TEXTURE0 + unit)`
    fn active_texture(&self, unit: u32);
    fn tex_parameter(&self, target: TextureTarget, parameter: TextureParameter);
    fn tex_image_2d(
        &self,
        target: TextureTarget,
        level: i32,
        format: TextureFormat,
        width: u32,
        height: u32,
        data: Option<&[u8]>,
    );
    fn generate_mipmap(&self, target: TextureTarget);
    /// `glPixelStorei`
    fn pixel_store(&self, parameter: PixelStoreParameter, value: i32);

    // ===== SHADERS =====

    fn create_shader(&self, shader_type: ShaderType) -> u32;
    fn delete_shader(&self, shader: u32);
    fn shader_source(&self, shader: u32, source: &str);
    fn compile_shader(&self, shader: u32);
    fn get_shader_compile_status(&self, shader: u32) -> bool;
    fn get_shader_info_log(&self, shader: u32) -> String;

    // ===== SHADER INCLUDES (ARB_shading_language_include) =====

    fn named_string(&self, name: &str, string: &str);
    fn delete_named_string(&self, name: &str);
    fn compile_shader_include(&self, shader: u32, paths: &[String]);

    // ===== PROGRAMS =====

    fn create_program(&self) -> u32;
    fn delete_program(&self, program: u32);
    fn attach_shader(&self, program: u32, shader: u32);
    fn detach_shader(&self, program: u32, shader: u32);
    fn link_program(&self, program: u32);
    fn get_program_link_status(&self, program: u32) -> bool;
    fn get_program_info_log(&self, program: u32) -> String;
    /// `glUseProgram`, `0` unbinds
    fn use_program(&self, program: u32);
    fn get_uniform_location(&self, program: u32, name: &str) -> Option<i32>;
    fn get_attrib_location(&self, program: u32, name: &str) -> Option<u32>;

    // ===== UNIFORMS =====

    /// `glUniform*` on the program currently in use
    fn uniform(&self, location: i32, value: &UniformValue);
    /// `glProgramUniform*` (ARB_separate_shader_objects)
    fn program_uniform(&self, program: u32, location: i32, value: &UniformValue);

    // ===== PROGRAM BINARIES (ARB_get_program_binary) =====

    fn program_binary_retrievable_hint(&self, program: u32, retrievable: bool);
    fn get_program_binary(&self, program: u32) -> Option<ProgramBinary>;
    fn program_binary(&self, program: u32, binary: &ProgramBinary);

    // ===== VERTEX ARRAYS / DRAWING =====

    fn gen_vertex_array(&self) -> u32;
    fn delete_vertex_array(&self, vertex_array: u32);
    fn bind_vertex_array(&self, vertex_array: u32);
    fn enable_vertex_attrib_array(&self, index: u32);
    fn disable_vertex_attrib_array(&self, index: u32);
    /// `glVertexAttribPointer` against the buffer bound to `GL_ARRAY_BUFFER`
    fn vertex_attrib_pointer(
        &self,
        index: u32,
        size: i32,
        attrib_type: VertexAttribType,
        normalized: bool,
        stride: i32,
        offset: usize,
    );
    fn draw_arrays(&self, mode: DrawMode, first: i32, count: i32);
    fn draw_elements(&self, mode: DrawMode, count: i32, index_type: IndexType, offset: usize);

    // ===== DEBUG OUTPUT (KHR_debug) =====

    /// Install (or with `None`, drop) the driver debug callback
    fn debug_message_callback(&self, callback: Option<DebugCallback>);
    /// `None` filters map to `GL_DONT_CARE`
    fn debug_message_control(
        &self,
        source: Option<DebugSource>,
        message_type: Option<DebugType>,
        severity: Option<DebugSeverity>,
        ids: &[u32],
        enabled: bool,
    );
    fn debug_message_insert(&self, message: &DebugMessage);
    fn object_label(&self, object_type: ObjectType, name: u32, label: Option<&str>);
    fn get_object_label(&self, object_type: ObjectType, name: u32) -> String;
}
