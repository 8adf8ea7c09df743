/// GlowBackend - GlBackend implemented on top of glow
///
/// glow covers the bind-based entry points directly. The direct state access
/// entry points it lacks are issued against a scratch binding point
/// (`GL_COPY_WRITE_BUFFER`, `GL_DRAW_FRAMEBUFFER`, ...) and the previous
/// binding is restored afterwards, so callers observe DSA semantics.

use std::cell::{Ref, RefCell};
use std::ffi::c_void;
use std::num::NonZeroU32;

use glow::HasContext;
use globjects::glo::gl::{
    Attachment, AttachmentParameter, BufferParameter, BufferStorageFlags, BufferTarget,
    BufferUsage, Capability, ColorBuffer, DebugCallback, DebugMessage, DebugSeverity,
    DebugSource, DebugType, DrawMode, FramebufferStatus, FramebufferTarget, GlBackend, GlError,
    IndexType, ObjectType, PixelStoreParameter, ProgramBinary, ShaderType, TextureFormat,
    TextureParameter, TextureTarget, UniformValue, VertexAttribType,
};
use globjects::glo::Version;
use globjects::{glo_debug, glo_error, glo_warn};

use crate::glow_attachments::AttachmentTracker;
use crate::glow_conversions::*;

const LOG_SOURCE: &str = "glo::GlowBackend";

/// Not reachable through glow, hidden from capability detection
pub const SHADING_LANGUAGE_INCLUDE: &str = "GL_ARB_shading_language_include";

// ===== NAME CONVERSIONS =====

fn native_buffer(name: u32) -> Option<glow::NativeBuffer> {
    NonZeroU32::new(name).map(glow::NativeBuffer)
}

fn native_framebuffer(name: u32) -> Option<glow::NativeFramebuffer> {
    NonZeroU32::new(name).map(glow::NativeFramebuffer)
}

fn native_renderbuffer(name: u32) -> Option<glow::NativeRenderbuffer> {
    NonZeroU32::new(name).map(glow::NativeRenderbuffer)
}

fn native_texture(name: u32) -> Option<glow::NativeTexture> {
    NonZeroU32::new(name).map(glow::NativeTexture)
}

fn native_shader(name: u32) -> Option<glow::NativeShader> {
    NonZeroU32::new(name).map(glow::NativeShader)
}

fn native_program(name: u32) -> Option<glow::NativeProgram> {
    NonZeroU32::new(name).map(glow::NativeProgram)
}

fn native_vertex_array(name: u32) -> Option<glow::NativeVertexArray> {
    NonZeroU32::new(name).map(glow::NativeVertexArray)
}

/// Unwrap a glow creation result into a raw name, `0` on failure
fn created_name<T>(kind: &str, result: Result<T, String>, name: impl FnOnce(T) -> u32) -> u32 {
    match result {
        Ok(object) => name(object),
        Err(message) => {
            glo_error!(LOG_SOURCE, "Failed to create {}: {}", kind, message);
            0
        }
    }
}

/// Scratch binding used to emulate DSA framebuffer calls
///
/// `GL_FRAMEBUFFER` would also rebind the read target, so it maps to draw.
fn scratch_framebuffer_target(target: FramebufferTarget) -> FramebufferTarget {
    match target {
        FramebufferTarget::Read => FramebufferTarget::Read,
        FramebufferTarget::Framebuffer | FramebufferTarget::Draw => FramebufferTarget::Draw,
    }
}

/// Upload a uniform to the program currently in use
unsafe fn upload_uniform(gl: &glow::Context, location: i32, value: &UniformValue) {
    if location < 0 {
        return;
    }
    let location = glow::NativeUniformLocation(location as u32);
    let location = Some(&location);

    match value {
        UniformValue::Bool(value) => gl.uniform_1_i32(location, *value as i32),
        UniformValue::Int(value) => gl.uniform_1_i32(location, *value),
        UniformValue::UInt(value) => gl.uniform_1_u32(location, *value),
        UniformValue::Float(value) => gl.uniform_1_f32(location, *value),
        UniformValue::Vec2(v) => gl.uniform_2_f32(location, v.x, v.y),
        UniformValue::Vec3(v) => gl.uniform_3_f32(location, v.x, v.y, v.z),
        UniformValue::Vec4(v) => gl.uniform_4_f32(location, v.x, v.y, v.z, v.w),
        UniformValue::IVec2(v) => gl.uniform_2_i32(location, v.x, v.y),
        UniformValue::IVec3(v) => gl.uniform_3_i32(location, v.x, v.y, v.z),
        UniformValue::IVec4(v) => gl.uniform_4_i32(location, v.x, v.y, v.z, v.w),
        UniformValue::Mat3(m) => gl.uniform_matrix_3_f32_slice(location, false, &m.to_cols_array()),
        UniformValue::Mat4(m) => gl.uniform_matrix_4_f32_slice(location, false, &m.to_cols_array()),
        UniformValue::IntArray(values) => gl.uniform_1_i32_slice(location, values),
        UniformValue::FloatArray(values) => gl.uniform_1_f32_slice(location, values),
        UniformValue::Vec4Array(values) => {
            let flat: Vec<f32> = values.iter().flat_map(|v| v.to_array()).collect();
            gl.uniform_4_f32_slice(location, &flat);
        }
    }
}

// ===== GLOW BACKEND =====

/// Native entry points backed by a `glow::Context`
///
/// The context sits in a `RefCell` because glow installs debug callbacks
/// through `&mut self`; every other call borrows it shared.
pub struct GlowBackend {
    gl: RefCell<glow::Context>,
    attachments: AttachmentTracker,
}

impl GlowBackend {
    pub fn new(gl: glow::Context) -> Self {
        let version = gl.version();
        glo_debug!(
            LOG_SOURCE,
            "Wrapping OpenGL {}.{} ({})",
            version.major,
            version.minor,
            version.vendor_info
        );
        Self {
            gl: RefCell::new(gl),
            attachments: AttachmentTracker::new(),
        }
    }

    /// Load entry points with a platform loader (`glutin`, `sdl2`, ...)
    ///
    /// # Safety
    ///
    /// A context must be current on the calling thread and stay current
    /// while the backend is in use.
    pub unsafe fn from_loader_function<F>(loader: F) -> Self
    where
        F: FnMut(&str) -> *const c_void,
    {
        Self::new(glow::Context::from_loader_function(loader))
    }

    /// The wrapped glow context, for calls outside the GlBackend surface
    pub fn raw(&self) -> Ref<'_, glow::Context> {
        self.gl.borrow()
    }

    fn gl(&self) -> Ref<'_, glow::Context> {
        self.gl.borrow()
    }

    fn binding(gl: &glow::Context, query: u32) -> u32 {
        unsafe { gl.get_parameter_i32(query) as u32 }
    }

    /// Run `f` with `buffer` bound to `target`, restoring the previous binding
    fn with_buffer<R>(&self, target: BufferTarget, buffer: u32, f: impl FnOnce(&glow::Context, u32) -> R) -> R {
        let gl = self.gl();
        let (target, query) = match target {
            BufferTarget::CopyRead => (glow::COPY_READ_BUFFER, glow::COPY_READ_BUFFER_BINDING),
            _ => (glow::COPY_WRITE_BUFFER, glow::COPY_WRITE_BUFFER_BINDING),
        };
        let previous = Self::binding(&gl, query);
        unsafe { gl.bind_buffer(target, native_buffer(buffer)) };
        let result = f(&*gl, target);
        unsafe { gl.bind_buffer(target, native_buffer(previous)) };
        result
    }

    /// Run `f` with `framebuffer` bound to a scratch target, restoring the previous binding
    fn with_framebuffer<R>(
        &self,
        target: FramebufferTarget,
        framebuffer: u32,
        f: impl FnOnce(&glow::Context, u32) -> R,
    ) -> R {
        let gl = self.gl();
        let target = scratch_framebuffer_target(target);
        let native_target = framebuffer_target_to_gl(target);
        let previous = Self::binding(&gl, framebuffer_binding_query(target));
        unsafe { gl.bind_framebuffer(native_target, native_framebuffer(framebuffer)) };
        let result = f(&*gl, native_target);
        unsafe { gl.bind_framebuffer(native_target, native_framebuffer(previous)) };
        result
    }

    fn bound_framebuffer(&self, target: FramebufferTarget) -> u32 {
        Self::binding(&self.gl(), framebuffer_binding_query(target))
    }
}

impl GlBackend for GlowBackend {
    // ===== CONTEXT QUERIES =====

    fn version(&self) -> Version {
        let gl = self.gl();
        let version = gl.version();
        Version::new(version.major, version.minor)
    }

    fn extensions(&self) -> Vec<String> {
        self.gl()
            .supported_extensions()
            .iter()
            .filter(|name| name.as_str() != SHADING_LANGUAGE_INCLUDE)
            .cloned()
            .collect()
    }

    fn get_error(&self) -> GlError {
        GlError::from_code(unsafe { self.gl().get_error() })
    }

    fn enable(&self, capability: Capability) {
        unsafe { self.gl().enable(capability_to_gl(capability)) }
    }

    fn disable(&self, capability: Capability) {
        unsafe { self.gl().disable(capability_to_gl(capability)) }
    }

    // ===== BUFFERS (bind-based) =====

    fn gen_buffer(&self) -> u32 {
        let result = unsafe { self.gl().create_buffer() };
        created_name("buffer", result, |buffer| buffer.0.get())
    }

    fn delete_buffer(&self, buffer: u32) {
        if let Some(buffer) = native_buffer(buffer) {
            unsafe { self.gl().delete_buffer(buffer) }
        }
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: u32) {
        unsafe { self.gl().bind_buffer(buffer_target_to_gl(target), native_buffer(buffer)) }
    }

    fn bind_buffer_base(&self, target: BufferTarget, index: u32, buffer: u32) {
        unsafe {
            self.gl()
                .bind_buffer_base(buffer_target_to_gl(target), index, native_buffer(buffer))
        }
    }

    fn buffer_data(&self, target: BufferTarget, size: usize, data: Option<&[u8]>, usage: BufferUsage) {
        let gl = self.gl();
        let target = buffer_target_to_gl(target);
        let usage = buffer_usage_to_gl(usage);
        unsafe {
            match data {
                Some(bytes) if bytes.len() == size => gl.buffer_data_u8_slice(target, bytes, usage),
                Some(bytes) => {
                    gl.buffer_data_size(target, size as i32, usage);
                    gl.buffer_sub_data_u8_slice(target, 0, &bytes[..bytes.len().min(size)]);
                }
                None => gl.buffer_data_size(target, size as i32, usage),
            }
        }
    }

    fn buffer_sub_data(&self, target: BufferTarget, offset: usize, data: &[u8]) {
        unsafe {
            self.gl()
                .buffer_sub_data_u8_slice(buffer_target_to_gl(target), offset as i32, data)
        }
    }

    fn buffer_storage(
        &self,
        target: BufferTarget,
        size: usize,
        data: Option<&[u8]>,
        flags: BufferStorageFlags,
    ) {
        unsafe {
            self.gl()
                .buffer_storage(buffer_target_to_gl(target), size as i32, data, flags.bits())
        }
    }

    fn get_buffer_sub_data(&self, target: BufferTarget, offset: usize, out: &mut [u8]) {
        unsafe {
            self.gl()
                .get_buffer_sub_data(buffer_target_to_gl(target), offset as i32, out)
        }
    }

    fn get_buffer_parameter(&self, target: BufferTarget, parameter: BufferParameter) -> i32 {
        unsafe {
            self.gl().get_buffer_parameter_i32(
                buffer_target_to_gl(target),
                buffer_parameter_to_gl(parameter),
            )
        }
    }

    fn copy_buffer_sub_data(
        &self,
        read_target: BufferTarget,
        write_target: BufferTarget,
        read_offset: usize,
        write_offset: usize,
        size: usize,
    ) {
        unsafe {
            self.gl().copy_buffer_sub_data(
                buffer_target_to_gl(read_target),
                buffer_target_to_gl(write_target),
                read_offset as i32,
                write_offset as i32,
                size as i32,
            )
        }
    }

    // ===== BUFFERS (direct state access, emulated) =====

    fn create_buffer(&self) -> u32 {
        let buffer = self.gen_buffer();
        // First bind turns the reserved name into a buffer object
        self.with_buffer(BufferTarget::CopyWrite, buffer, |_, _| ());
        buffer
    }

    fn named_buffer_data(&self, buffer: u32, size: usize, data: Option<&[u8]>, usage: BufferUsage) {
        self.with_buffer(BufferTarget::CopyWrite, buffer, |gl, target| {
            let usage = buffer_usage_to_gl(usage);
            unsafe {
                match data {
                    Some(bytes) if bytes.len() == size => gl.buffer_data_u8_slice(target, bytes, usage),
                    Some(bytes) => {
                        gl.buffer_data_size(target, size as i32, usage);
                        gl.buffer_sub_data_u8_slice(target, 0, &bytes[..bytes.len().min(size)]);
                    }
                    None => gl.buffer_data_size(target, size as i32, usage),
                }
            }
        })
    }

    fn named_buffer_sub_data(&self, buffer: u32, offset: usize, data: &[u8]) {
        self.with_buffer(BufferTarget::CopyWrite, buffer, |gl, target| unsafe {
            gl.buffer_sub_data_u8_slice(target, offset as i32, data)
        })
    }

    fn named_buffer_storage(
        &self,
        buffer: u32,
        size: usize,
        data: Option<&[u8]>,
        flags: BufferStorageFlags,
    ) {
        self.with_buffer(BufferTarget::CopyWrite, buffer, |gl, target| unsafe {
            gl.buffer_storage(target, size as i32, data, flags.bits())
        })
    }

    fn get_named_buffer_sub_data(&self, buffer: u32, offset: usize, out: &mut [u8]) {
        self.with_buffer(BufferTarget::CopyRead, buffer, |gl, target| unsafe {
            gl.get_buffer_sub_data(target, offset as i32, out)
        })
    }

    fn get_named_buffer_parameter(&self, buffer: u32, parameter: BufferParameter) -> i32 {
        self.with_buffer(BufferTarget::CopyRead, buffer, |gl, target| unsafe {
            gl.get_buffer_parameter_i32(target, buffer_parameter_to_gl(parameter))
        })
    }

    fn copy_named_buffer_sub_data(
        &self,
        read_buffer: u32,
        write_buffer: u32,
        read_offset: usize,
        write_offset: usize,
        size: usize,
    ) {
        self.with_buffer(BufferTarget::CopyRead, read_buffer, |_, _| {
            self.with_buffer(BufferTarget::CopyWrite, write_buffer, |gl, _| unsafe {
                gl.copy_buffer_sub_data(
                    glow::COPY_READ_BUFFER,
                    glow::COPY_WRITE_BUFFER,
                    read_offset as i32,
                    write_offset as i32,
                    size as i32,
                )
            })
        })
    }

    // ===== FRAMEBUFFERS (bind-based) =====

    fn gen_framebuffer(&self) -> u32 {
        let result = unsafe { self.gl().create_framebuffer() };
        created_name("framebuffer", result, |framebuffer| framebuffer.0.get())
    }

    fn delete_framebuffer(&self, framebuffer: u32) {
        if let Some(native) = native_framebuffer(framebuffer) {
            unsafe { self.gl().delete_framebuffer(native) }
            self.attachments.forget_framebuffer(framebuffer);
        }
    }

    fn bind_framebuffer(&self, target: FramebufferTarget, framebuffer: u32) {
        unsafe {
            self.gl()
                .bind_framebuffer(framebuffer_target_to_gl(target), native_framebuffer(framebuffer))
        }
    }

    fn check_framebuffer_status(&self, target: FramebufferTarget) -> FramebufferStatus {
        let status = unsafe { self.gl().check_framebuffer_status(framebuffer_target_to_gl(target)) };
        framebuffer_status_from_gl(status)
    }

    fn framebuffer_texture(&self, target: FramebufferTarget, attachment: Attachment, texture: u32, level: i32) {
        unsafe {
            self.gl().framebuffer_texture(
                framebuffer_target_to_gl(target),
                attachment_to_gl(attachment),
                native_texture(texture),
                level,
            )
        }
        self.attachments
            .attach_texture(self.bound_framebuffer(target), attachment, texture, level, 0);
    }

    fn framebuffer_texture_layer(
        &self,
        target: FramebufferTarget,
        attachment: Attachment,
        texture: u32,
        level: i32,
        layer: i32,
    ) {
        unsafe {
            self.gl().framebuffer_texture_layer(
                framebuffer_target_to_gl(target),
                attachment_to_gl(attachment),
                native_texture(texture),
                level,
                layer,
            )
        }
        self.attachments
            .attach_texture(self.bound_framebuffer(target), attachment, texture, level, layer);
    }

    fn framebuffer_renderbuffer(&self, target: FramebufferTarget, attachment: Attachment, renderbuffer: u32) {
        unsafe {
            self.gl().framebuffer_renderbuffer(
                framebuffer_target_to_gl(target),
                attachment_to_gl(attachment),
                glow::RENDERBUFFER,
                native_renderbuffer(renderbuffer),
            )
        }
        self.attachments
            .attach_renderbuffer(self.bound_framebuffer(target), attachment, renderbuffer);
    }

    fn get_framebuffer_attachment_parameter(
        &self,
        target: FramebufferTarget,
        attachment: Attachment,
        parameter: AttachmentParameter,
    ) -> i32 {
        self.attachments
            .parameter(self.bound_framebuffer(target), attachment, parameter)
    }

    fn read_buffer(&self, mode: ColorBuffer) {
        unsafe { self.gl().read_buffer(color_buffer_to_gl(mode)) }
    }

    fn draw_buffer(&self, mode: ColorBuffer) {
        unsafe { self.gl().draw_buffer(color_buffer_to_gl(mode)) }
    }

    fn draw_buffers(&self, modes: &[ColorBuffer]) {
        let modes: Vec<u32> = modes.iter().copied().map(color_buffer_to_gl).collect();
        unsafe { self.gl().draw_buffers(&modes) }
    }

    // ===== FRAMEBUFFERS (direct state access, emulated) =====

    fn create_framebuffer(&self) -> u32 {
        let framebuffer = self.gen_framebuffer();
        self.with_framebuffer(FramebufferTarget::Draw, framebuffer, |_, _| ());
        framebuffer
    }

    fn check_named_framebuffer_status(&self, framebuffer: u32, target: FramebufferTarget) -> FramebufferStatus {
        let status = self.with_framebuffer(target, framebuffer, |gl, target| unsafe {
            gl.check_framebuffer_status(target)
        });
        framebuffer_status_from_gl(status)
    }

    fn named_framebuffer_texture(&self, framebuffer: u32, attachment: Attachment, texture: u32, level: i32) {
        self.with_framebuffer(FramebufferTarget::Draw, framebuffer, |gl, target| unsafe {
            gl.framebuffer_texture(target, attachment_to_gl(attachment), native_texture(texture), level)
        });
        self.attachments
            .attach_texture(framebuffer, attachment, texture, level, 0);
    }

    fn named_framebuffer_texture_layer(
        &self,
        framebuffer: u32,
        attachment: Attachment,
        texture: u32,
        level: i32,
        layer: i32,
    ) {
        self.with_framebuffer(FramebufferTarget::Draw, framebuffer, |gl, target| unsafe {
            gl.framebuffer_texture_layer(
                target,
                attachment_to_gl(attachment),
                native_texture(texture),
                level,
                layer,
            )
        });
        self.attachments
            .attach_texture(framebuffer, attachment, texture, level, layer);
    }

    fn named_framebuffer_renderbuffer(&self, framebuffer: u32, attachment: Attachment, renderbuffer: u32) {
        self.with_framebuffer(FramebufferTarget::Draw, framebuffer, |gl, target| unsafe {
            gl.framebuffer_renderbuffer(
                target,
                attachment_to_gl(attachment),
                glow::RENDERBUFFER,
                native_renderbuffer(renderbuffer),
            )
        });
        self.attachments
            .attach_renderbuffer(framebuffer, attachment, renderbuffer);
    }

    fn get_named_framebuffer_attachment_parameter(
        &self,
        framebuffer: u32,
        attachment: Attachment,
        parameter: AttachmentParameter,
    ) -> i32 {
        self.attachments.parameter(framebuffer, attachment, parameter)
    }

    fn named_framebuffer_read_buffer(&self, framebuffer: u32, mode: ColorBuffer) {
        self.with_framebuffer(FramebufferTarget::Read, framebuffer, |gl, _| unsafe {
            gl.read_buffer(color_buffer_to_gl(mode))
        })
    }

    fn named_framebuffer_draw_buffer(&self, framebuffer: u32, mode: ColorBuffer) {
        self.with_framebuffer(FramebufferTarget::Draw, framebuffer, |gl, _| unsafe {
            gl.draw_buffer(color_buffer_to_gl(mode))
        })
    }

    fn named_framebuffer_draw_buffers(&self, framebuffer: u32, modes: &[ColorBuffer]) {
        let modes: Vec<u32> = modes.iter().copied().map(color_buffer_to_gl).collect();
        self.with_framebuffer(FramebufferTarget::Draw, framebuffer, |gl, _| unsafe {
            gl.draw_buffers(&modes)
        })
    }

    // ===== RENDERBUFFERS =====

    fn gen_renderbuffer(&self) -> u32 {
        let result = unsafe { self.gl().create_renderbuffer() };
        created_name("renderbuffer", result, |renderbuffer| renderbuffer.0.get())
    }

    fn delete_renderbuffer(&self, renderbuffer: u32) {
        if let Some(native) = native_renderbuffer(renderbuffer) {
            unsafe { self.gl().delete_renderbuffer(native) }
            self.attachments.forget_renderbuffer(renderbuffer);
        }
    }

    fn bind_renderbuffer(&self, renderbuffer: u32) {
        unsafe {
            self.gl()
                .bind_renderbuffer(glow::RENDERBUFFER, native_renderbuffer(renderbuffer))
        }
    }

    fn renderbuffer_storage(&self, format: TextureFormat, width: u32, height: u32) {
        let gl = self.gl();
        unsafe {
            gl.renderbuffer_storage(
                glow::RENDERBUFFER,
                internal_format_to_gl(format),
                width as i32,
                height as i32,
            )
        }
        let bound = Self::binding(&gl, glow::RENDERBUFFER_BINDING);
        self.attachments.record_renderbuffer_format(bound, format);
    }

    // ===== TEXTURES =====

    fn gen_texture(&self) -> u32 {
        let result = unsafe { self.gl().create_texture() };
        created_name("texture", result, |texture| texture.0.get())
    }

    fn delete_texture(&self, texture: u32) {
        if let Some(native) = native_texture(texture) {
            unsafe { self.gl().delete_texture(native) }
            self.attachments.forget_texture(texture);
        }
    }

    fn bind_texture(&self, target: TextureTarget, texture: u32) {
        unsafe {
            self.gl()
                .bind_texture(texture_target_to_gl(target), native_texture(texture))
        }
    }

    fn active_texture(&self, unit: u32) {
        unsafe { self.gl().active_texture(glow::TEXTURE0 + unit) }
    }

    fn tex_parameter(&self, target: TextureTarget, parameter: TextureParameter) {
        let (name, value) = texture_parameter_to_gl(parameter);
        unsafe {
            self.gl()
                .tex_parameter_i32(texture_target_to_gl(target), name, value)
        }
    }

    fn tex_image_2d(
        &self,
        target: TextureTarget,
        level: i32,
        format: TextureFormat,
        width: u32,
        height: u32,
        data: Option<&[u8]>,
    ) {
        let gl = self.gl();
        let (pixel_format, pixel_type) = pixel_format_to_gl(format);
        unsafe {
            gl.tex_image_2d(
                texture_target_to_gl(target),
                level,
                internal_format_to_gl(format) as i32,
                width as i32,
                height as i32,
                0,
                pixel_format,
                pixel_type,
                data,
            )
        }
        if let Some(query) = texture_binding_query(target) {
            let bound = Self::binding(&gl, query);
            self.attachments.record_texture_format(bound, format);
        }
    }

    fn generate_mipmap(&self, target: TextureTarget) {
        unsafe { self.gl().generate_mipmap(texture_target_to_gl(target)) }
    }

    fn pixel_store(&self, parameter: PixelStoreParameter, value: i32) {
        unsafe { self.gl().pixel_store_i32(pixel_store_parameter_to_gl(parameter), value) }
    }

    // ===== SHADERS =====

    fn create_shader(&self, shader_type: ShaderType) -> u32 {
        let result = unsafe { self.gl().create_shader(shader_type_to_gl(shader_type)) };
        created_name("shader", result, |shader| shader.0.get())
    }

    fn delete_shader(&self, shader: u32) {
        if let Some(shader) = native_shader(shader) {
            unsafe { self.gl().delete_shader(shader) }
        }
    }

    fn shader_source(&self, shader: u32, source: &str) {
        if let Some(shader) = native_shader(shader) {
            unsafe { self.gl().shader_source(shader, source) }
        }
    }

    fn compile_shader(&self, shader: u32) {
        if let Some(shader) = native_shader(shader) {
            unsafe { self.gl().compile_shader(shader) }
        }
    }

    fn get_shader_compile_status(&self, shader: u32) -> bool {
        native_shader(shader)
            .map(|shader| unsafe { self.gl().get_shader_compile_status(shader) })
            .unwrap_or(false)
    }

    fn get_shader_info_log(&self, shader: u32) -> String {
        native_shader(shader)
            .map(|shader| unsafe { self.gl().get_shader_info_log(shader) })
            .unwrap_or_default()
    }

    // ===== SHADER INCLUDES (not exposed by glow) =====

    fn named_string(&self, name: &str, _string: &str) {
        glo_warn!(LOG_SOURCE, "{} unavailable, '{}' not uploaded", SHADING_LANGUAGE_INCLUDE, name);
    }

    fn delete_named_string(&self, name: &str) {
        glo_warn!(LOG_SOURCE, "{} unavailable, '{}' not deleted", SHADING_LANGUAGE_INCLUDE, name);
    }

    fn compile_shader_include(&self, shader: u32, paths: &[String]) {
        glo_warn!(
            LOG_SOURCE,
            "{} unavailable, compiling shader {} without {} search paths",
            SHADING_LANGUAGE_INCLUDE,
            shader,
            paths.len()
        );
        self.compile_shader(shader);
    }

    // ===== PROGRAMS =====

    fn create_program(&self) -> u32 {
        let result = unsafe { self.gl().create_program() };
        created_name("program", result, |program| program.0.get())
    }

    fn delete_program(&self, program: u32) {
        if let Some(program) = native_program(program) {
            unsafe { self.gl().delete_program(program) }
        }
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        if let (Some(program), Some(shader)) = (native_program(program), native_shader(shader)) {
            unsafe { self.gl().attach_shader(program, shader) }
        }
    }

    fn detach_shader(&self, program: u32, shader: u32) {
        if let (Some(program), Some(shader)) = (native_program(program), native_shader(shader)) {
            unsafe { self.gl().detach_shader(program, shader) }
        }
    }

    fn link_program(&self, program: u32) {
        if let Some(program) = native_program(program) {
            unsafe { self.gl().link_program(program) }
        }
    }

    fn get_program_link_status(&self, program: u32) -> bool {
        native_program(program)
            .map(|program| unsafe { self.gl().get_program_link_status(program) })
            .unwrap_or(false)
    }

    fn get_program_info_log(&self, program: u32) -> String {
        native_program(program)
            .map(|program| unsafe { self.gl().get_program_info_log(program) })
            .unwrap_or_default()
    }

    fn use_program(&self, program: u32) {
        unsafe { self.gl().use_program(native_program(program)) }
    }

    fn get_uniform_location(&self, program: u32, name: &str) -> Option<i32> {
        let program = native_program(program)?;
        let location = unsafe { self.gl().get_uniform_location(program, name) };
        location.map(|location| location.0 as i32)
    }

    fn get_attrib_location(&self, program: u32, name: &str) -> Option<u32> {
        let program = native_program(program)?;
        unsafe { self.gl().get_attrib_location(program, name) }
    }

    // ===== UNIFORMS =====

    fn uniform(&self, location: i32, value: &UniformValue) {
        unsafe { upload_uniform(&self.gl(), location, value) }
    }

    /// Issued through a temporary `glUseProgram`, the previous program is restored
    fn program_uniform(&self, program: u32, location: i32, value: &UniformValue) {
        let gl = self.gl();
        let previous = Self::binding(&gl, glow::CURRENT_PROGRAM);
        unsafe {
            gl.use_program(native_program(program));
            upload_uniform(&gl, location, value);
            gl.use_program(native_program(previous));
        }
    }

    // ===== PROGRAM BINARIES =====

    fn program_binary_retrievable_hint(&self, program: u32, retrievable: bool) {
        // glow has no glProgramParameteri; drivers return binaries without the hint
        glo_debug!(
            LOG_SOURCE,
            "Retrievable hint {} for program {} left to the driver",
            retrievable,
            program
        );
    }

    fn get_program_binary(&self, program: u32) -> Option<ProgramBinary> {
        let program = native_program(program)?;
        let binary = unsafe { self.gl().get_program_binary(program) }?;
        Some(ProgramBinary {
            format: binary.format,
            data: binary.buffer,
        })
    }

    fn program_binary(&self, program: u32, binary: &ProgramBinary) {
        if let Some(program) = native_program(program) {
            let native = glow::ProgramBinary {
                buffer: binary.data.clone(),
                format: binary.format,
            };
            unsafe { self.gl().program_binary(program, &native) }
        }
    }

    // ===== VERTEX ARRAYS / DRAWING =====

    fn gen_vertex_array(&self) -> u32 {
        let result = unsafe { self.gl().create_vertex_array() };
        created_name("vertex array", result, |vertex_array| vertex_array.0.get())
    }

    fn delete_vertex_array(&self, vertex_array: u32) {
        if let Some(vertex_array) = native_vertex_array(vertex_array) {
            unsafe { self.gl().delete_vertex_array(vertex_array) }
        }
    }

    fn bind_vertex_array(&self, vertex_array: u32) {
        unsafe { self.gl().bind_vertex_array(native_vertex_array(vertex_array)) }
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        unsafe { self.gl().enable_vertex_attrib_array(index) }
    }

    fn disable_vertex_attrib_array(&self, index: u32) {
        unsafe { self.gl().disable_vertex_attrib_array(index) }
    }

    fn vertex_attrib_pointer(
        &self,
        index: u32,
        size: i32,
        attrib_type: VertexAttribType,
        normalized: bool,
        stride: i32,
        offset: usize,
    ) {
        unsafe {
            self.gl().vertex_attrib_pointer_f32(
                index,
                size,
                vertex_attrib_type_to_gl(attrib_type),
                normalized,
                stride,
                offset as i32,
            )
        }
    }

    fn draw_arrays(&self, mode: DrawMode, first: i32, count: i32) {
        unsafe { self.gl().draw_arrays(draw_mode_to_gl(mode), first, count) }
    }

    fn draw_elements(&self, mode: DrawMode, count: i32, index_type: IndexType, offset: usize) {
        unsafe {
            self.gl().draw_elements(
                draw_mode_to_gl(mode),
                count,
                index_type_to_gl(index_type),
                offset as i32,
            )
        }
    }

    // ===== DEBUG OUTPUT =====

    fn debug_message_callback(&self, callback: Option<DebugCallback>) {
        let mut gl = self.gl.borrow_mut();
        match callback {
            Some(callback) => unsafe {
                gl.debug_message_callback(move |source, message_type, id, severity, message: &str| {
                    callback(DebugMessage {
                        source: debug_source_from_gl(source),
                        message_type: debug_type_from_gl(message_type),
                        id,
                        severity: debug_severity_from_gl(severity),
                        message: message.to_string(),
                    })
                })
            },
            // glow keeps the last callback alive, replace it with a sink
            None => unsafe { gl.debug_message_callback(|_, _, _, _, _: &str| {}) },
        }
    }

    fn debug_message_control(
        &self,
        source: Option<DebugSource>,
        message_type: Option<DebugType>,
        severity: Option<DebugSeverity>,
        ids: &[u32],
        enabled: bool,
    ) {
        unsafe {
            self.gl().debug_message_control(
                debug_source_to_gl(source),
                debug_type_to_gl(message_type),
                debug_severity_to_gl(severity),
                ids,
                enabled,
            )
        }
    }

    fn debug_message_insert(&self, message: &DebugMessage) {
        unsafe {
            self.gl().debug_message_insert(
                debug_source_to_gl(Some(message.source)),
                debug_type_to_gl(Some(message.message_type)),
                message.id,
                debug_severity_to_gl(Some(message.severity)),
                &message.message,
            )
        }
    }

    fn object_label(&self, object_type: ObjectType, name: u32, label: Option<&str>) {
        unsafe { self.gl().object_label(object_type_to_gl(object_type), name, label) }
    }

    fn get_object_label(&self, object_type: ObjectType, name: u32) -> String {
        unsafe { self.gl().get_object_label(object_type_to_gl(object_type), name) }
    }
}
