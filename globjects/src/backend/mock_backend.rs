/// Mock GlBackend for unit tests (no GL context required)
///
/// Records every native call as a string (e.g. `"bind_buffer(CopyWrite, 3)"`)
/// and keeps just enough state to answer queries: buffer contents, compile and
/// link status, labels, the installed debug callback and the error queue.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::backend::{
    Attachment, AttachmentParameter, BufferParameter, BufferStorageFlags, BufferTarget,
    BufferUsage, Capability, ColorBuffer, DebugCallback, DebugMessage, DebugSeverity,
    DebugSource, DebugType, DrawMode, FramebufferStatus, FramebufferTarget, GlBackend, GlError,
    IndexType, ObjectType, PixelStoreParameter, ProgramBinary, ShaderType, TextureFormat,
    TextureParameter, TextureTarget, UniformValue, VertexAttribType,
};
use crate::capabilities::Version;

// ============================================================================
// Mock buffer storage
// ============================================================================

#[derive(Debug, Default, Clone)]
pub struct MockBufferStore {
    pub data: Vec<u8>,
    pub usage: Option<BufferUsage>,
    pub storage_flags: Option<BufferStorageFlags>,
}

// ============================================================================
// MockBackend
// ============================================================================

pub struct MockBackend {
    version: Version,
    extensions: Vec<String>,
    calls: RefCell<Vec<String>>,
    next_name: Cell<u32>,

    enabled: RefCell<FxHashSet<Capability>>,
    errors: RefCell<VecDeque<GlError>>,

    buffers: RefCell<FxHashMap<u32, MockBufferStore>>,
    bound_buffers: RefCell<FxHashMap<BufferTarget, u32>>,

    bound_framebuffer: Cell<u32>,
    framebuffer_status: Cell<FramebufferStatus>,
    attachments: RefCell<FxHashMap<(u32, Attachment), u32>>,

    shader_sources: RefCell<FxHashMap<u32, String>>,
    compile_status: RefCell<FxHashMap<u32, bool>>,
    link_status: RefCell<FxHashMap<u32, bool>>,
    fail_next_compile: RefCell<Option<String>>,
    fail_next_link: RefCell<Option<String>>,
    info_logs: RefCell<FxHashMap<u32, String>>,

    uniform_locations: RefCell<FxHashMap<String, i32>>,
    missing_uniforms: RefCell<FxHashSet<String>>,

    program_binaries: RefCell<FxHashMap<u32, ProgramBinary>>,
    named_strings: RefCell<FxHashMap<String, String>>,
    labels: RefCell<FxHashMap<(ObjectType, u32), String>>,
    debug_callback: RefCell<Option<DebugCallback>>,
}

impl MockBackend {
    /// OpenGL 4.6 context without extension strings (every core feature available)
    pub fn new() -> Self {
        Self::with_capabilities(Version::new(4, 6), &[])
    }

    pub fn with_capabilities(version: Version, extensions: &[&str]) -> Self {
        Self {
            version,
            extensions: extensions.iter().map(|ext| ext.to_string()).collect(),
            calls: RefCell::new(Vec::new()),
            next_name: Cell::new(1),
            enabled: RefCell::new(FxHashSet::default()),
            errors: RefCell::new(VecDeque::new()),
            buffers: RefCell::new(FxHashMap::default()),
            bound_buffers: RefCell::new(FxHashMap::default()),
            bound_framebuffer: Cell::new(0),
            framebuffer_status: Cell::new(FramebufferStatus::Complete),
            attachments: RefCell::new(FxHashMap::default()),
            shader_sources: RefCell::new(FxHashMap::default()),
            compile_status: RefCell::new(FxHashMap::default()),
            link_status: RefCell::new(FxHashMap::default()),
            fail_next_compile: RefCell::new(None),
            fail_next_link: RefCell::new(None),
            info_logs: RefCell::new(FxHashMap::default()),
            uniform_locations: RefCell::new(FxHashMap::default()),
            missing_uniforms: RefCell::new(FxHashSet::default()),
            program_binaries: RefCell::new(FxHashMap::default()),
            named_strings: RefCell::new(FxHashMap::default()),
            labels: RefCell::new(FxHashMap::default()),
            debug_callback: RefCell::new(None),
        }
    }

    // ===== RECORDING =====

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn has_call(&self, call: &str) -> bool {
        self.calls.borrow().iter().any(|c| c == call)
    }

    /// Number of recorded calls starting with `prefix`
    pub fn count_calls(&self, prefix: &str) -> usize {
        self.calls.borrow().iter().filter(|c| c.starts_with(prefix)).count()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn allocate_name(&self) -> u32 {
        let name = self.next_name.get();
        self.next_name.set(name + 1);
        name
    }

    // ===== TEST CONTROLS =====

    pub fn push_error(&self, error: GlError) {
        self.errors.borrow_mut().push_back(error);
    }

    pub fn fail_next_compile(&self, info_log: &str) {
        *self.fail_next_compile.borrow_mut() = Some(info_log.to_string());
    }

    pub fn fail_next_link(&self, info_log: &str) {
        *self.fail_next_link.borrow_mut() = Some(info_log.to_string());
    }

    pub fn set_framebuffer_status(&self, status: FramebufferStatus) {
        self.framebuffer_status.set(status);
    }

    /// Make `get_uniform_location` report the uniform as inactive
    pub fn hide_uniform(&self, name: &str) {
        self.missing_uniforms.borrow_mut().insert(name.to_string());
    }

    pub fn is_enabled(&self, capability: Capability) -> bool {
        self.enabled.borrow().contains(&capability)
    }

    pub fn buffer_contents(&self, buffer: u32) -> Option<Vec<u8>> {
        self.buffers.borrow().get(&buffer).map(|store| store.data.clone())
    }

    pub fn shader_source_of(&self, shader: u32) -> Option<String> {
        self.shader_sources.borrow().get(&shader).cloned()
    }

    pub fn stored_named_string(&self, name: &str) -> Option<String> {
        self.named_strings.borrow().get(name).cloned()
    }

    pub fn stored_label(&self, object_type: ObjectType, name: u32) -> Option<String> {
        self.labels.borrow().get(&(object_type, name)).cloned()
    }

    pub fn has_debug_callback(&self) -> bool {
        self.debug_callback.borrow().is_some()
    }

    /// Deliver a driver message through the installed callback
    pub fn emit(&self, message: DebugMessage) {
        if let Some(callback) = self.debug_callback.borrow().as_ref() {
            callback(message);
        }
    }

    // ===== STATE HELPERS =====

    fn bound_buffer(&self, target: BufferTarget) -> u32 {
        self.bound_buffers.borrow().get(&target).copied().unwrap_or(0)
    }

    fn initial_bytes(size: usize, data: Option<&[u8]>) -> Vec<u8> {
        let mut bytes = vec![0u8; size];
        if let Some(data) = data {
            let len = data.len().min(size);
            bytes[..len].copy_from_slice(&data[..len]);
        }
        bytes
    }

    fn write_data(&self, buffer: u32, size: usize, data: Option<&[u8]>, usage: BufferUsage) {
        let bytes = Self::initial_bytes(size, data);
        let mut buffers = self.buffers.borrow_mut();
        let store = buffers.entry(buffer).or_default();
        store.data = bytes;
        store.usage = Some(usage);
        store.storage_flags = None;
    }

    fn write_storage(&self, buffer: u32, size: usize, data: Option<&[u8]>, flags: BufferStorageFlags) {
        let bytes = Self::initial_bytes(size, data);
        let mut buffers = self.buffers.borrow_mut();
        let store = buffers.entry(buffer).or_default();
        store.data = bytes;
        store.usage = None;
        store.storage_flags = Some(flags);
    }

    fn write_sub_data(&self, buffer: u32, offset: usize, data: &[u8]) {
        let mut buffers = self.buffers.borrow_mut();
        if let Some(store) = buffers.get_mut(&buffer) {
            let end = (offset + data.len()).min(store.data.len());
            if offset < end {
                store.data[offset..end].copy_from_slice(&data[..end - offset]);
            }
        }
    }

    fn read_sub_data(&self, buffer: u32, offset: usize, out: &mut [u8]) {
        let buffers = self.buffers.borrow();
        if let Some(store) = buffers.get(&buffer) {
            let end = (offset + out.len()).min(store.data.len());
            if offset < end {
                out[..end - offset].copy_from_slice(&store.data[offset..end]);
            }
        }
    }

    fn copy_between(&self, read: u32, write: u32, read_offset: usize, write_offset: usize, size: usize) {
        let mut chunk = vec![0u8; size];
        self.read_sub_data(read, read_offset, &mut chunk);
        self.write_sub_data(write, write_offset, &chunk);
    }

    fn buffer_parameter(&self, buffer: u32, parameter: BufferParameter) -> i32 {
        let buffers = self.buffers.borrow();
        let Some(store) = buffers.get(&buffer) else {
            return 0;
        };
        match parameter {
            BufferParameter::Size => store.data.len() as i32,
            BufferParameter::ImmutableStorage => store.storage_flags.is_some() as i32,
            BufferParameter::StorageFlags => {
                store.storage_flags.map(|f| f.bits() as i32).unwrap_or(0)
            }
            BufferParameter::Usage | BufferParameter::Mapped | BufferParameter::AccessFlags => 0,
        }
    }

    fn attachment_parameter(&self, framebuffer: u32, attachment: Attachment, parameter: AttachmentParameter) -> i32 {
        let name = self
            .attachments
            .borrow()
            .get(&(framebuffer, attachment))
            .copied()
            .unwrap_or(0);
        match parameter {
            AttachmentParameter::ObjectName => name as i32,
            _ => 0,
        }
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl GlBackend for MockBackend {
    // ===== CONTEXT QUERIES =====

    fn version(&self) -> Version {
        self.version
    }

    fn extensions(&self) -> Vec<String> {
        self.extensions.clone()
    }

    fn get_error(&self) -> GlError {
        self.errors.borrow_mut().pop_front().unwrap_or(GlError::NoError)
    }

    fn enable(&self, capability: Capability) {
        self.record(format!("enable({:?})", capability));
        self.enabled.borrow_mut().insert(capability);
    }

    fn disable(&self, capability: Capability) {
        self.record(format!("disable({:?})", capability));
        self.enabled.borrow_mut().remove(&capability);
    }

    // ===== BUFFERS (bind-based) =====

    fn gen_buffer(&self) -> u32 {
        let name = self.allocate_name();
        self.record(format!("gen_buffer() -> {}", name));
        name
    }

    fn delete_buffer(&self, buffer: u32) {
        self.record(format!("delete_buffer({})", buffer));
        self.buffers.borrow_mut().remove(&buffer);
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: u32) {
        self.record(format!("bind_buffer({:?}, {})", target, buffer));
        self.bound_buffers.borrow_mut().insert(target, buffer);
        if buffer != 0 {
            self.buffers.borrow_mut().entry(buffer).or_default();
        }
    }

    fn bind_buffer_base(&self, target: BufferTarget, index: u32, buffer: u32) {
        self.record(format!("bind_buffer_base({:?}, {}, {})", target, index, buffer));
    }

    fn buffer_data(&self, target: BufferTarget, size: usize, data: Option<&[u8]>, usage: BufferUsage) {
        self.record(format!("buffer_data({:?}, {}, {:?})", target, size, usage));
        self.write_data(self.bound_buffer(target), size, data, usage);
    }

    fn buffer_sub_data(&self, target: BufferTarget, offset: usize, data: &[u8]) {
        self.record(format!("buffer_sub_data({:?}, {}, {})", target, offset, data.len()));
        self.write_sub_data(self.bound_buffer(target), offset, data);
    }

    fn buffer_storage(&self, target: BufferTarget, size: usize, data: Option<&[u8]>, flags: BufferStorageFlags) {
        self.record(format!("buffer_storage({:?}, {}, {:?})", target, size, flags));
        self.write_storage(self.bound_buffer(target), size, data, flags);
    }

    fn get_buffer_sub_data(&self, target: BufferTarget, offset: usize, out: &mut [u8]) {
        self.record(format!("get_buffer_sub_data({:?}, {}, {})", target, offset, out.len()));
        self.read_sub_data(self.bound_buffer(target), offset, out);
    }

    fn get_buffer_parameter(&self, target: BufferTarget, parameter: BufferParameter) -> i32 {
        self.record(format!("get_buffer_parameter({:?}, {:?})", target, parameter));
        self.buffer_parameter(self.bound_buffer(target), parameter)
    }

    fn copy_buffer_sub_data(
        &self,
        read_target: BufferTarget,
        write_target: BufferTarget,
        read_offset: usize,
        write_offset: usize,
        size: usize,
    ) {
        self.record(format!(
            "copy_buffer_sub_data({:?}, {:?}, {}, {}, {})",
            read_target, write_target, read_offset, write_offset, size
        ));
        self.copy_between(
            self.bound_buffer(read_target),
            self.bound_buffer(write_target),
            read_offset,
            write_offset,
            size,
        );
    }

    // ===== BUFFERS (direct state access) =====

    fn create_buffer(&self) -> u32 {
        let name = self.allocate_name();
        self.record(format!("create_buffer() -> {}", name));
        self.buffers.borrow_mut().insert(name, MockBufferStore::default());
        name
    }

    fn named_buffer_data(&self, buffer: u32, size: usize, data: Option<&[u8]>, usage: BufferUsage) {
        self.record(format!("named_buffer_data({}, {}, {:?})", buffer, size, usage));
        self.write_data(buffer, size, data, usage);
    }

    fn named_buffer_sub_data(&self, buffer: u32, offset: usize, data: &[u8]) {
        self.record(format!("named_buffer_sub_data({}, {}, {})", buffer, offset, data.len()));
        self.write_sub_data(buffer, offset, data);
    }

    fn named_buffer_storage(&self, buffer: u32, size: usize, data: Option<&[u8]>, flags: BufferStorageFlags) {
        self.record(format!("named_buffer_storage({}, {}, {:?})", buffer, size, flags));
        self.write_storage(buffer, size, data, flags);
    }

    fn get_named_buffer_sub_data(&self, buffer: u32, offset: usize, out: &mut [u8]) {
        self.record(format!("get_named_buffer_sub_data({}, {}, {})", buffer, offset, out.len()));
        self.read_sub_data(buffer, offset, out);
    }

    fn get_named_buffer_parameter(&self, buffer: u32, parameter: BufferParameter) -> i32 {
        self.record(format!("get_named_buffer_parameter({}, {:?})", buffer, parameter));
        self.buffer_parameter(buffer, parameter)
    }

    fn copy_named_buffer_sub_data(
        &self,
        read_buffer: u32,
        write_buffer: u32,
        read_offset: usize,
        write_offset: usize,
        size: usize,
    ) {
        self.record(format!(
            "copy_named_buffer_sub_data({}, {}, {}, {}, {})",
            read_buffer, write_buffer, read_offset, write_offset, size
        ));
        self.copy_between(read_buffer, write_buffer, read_offset, write_offset, size);
    }

    // ===== FRAMEBUFFERS (bind-based) =====

    fn gen_framebuffer(&self) -> u32 {
        let name = self.allocate_name();
        self.record(format!("gen_framebuffer() -> {}", name));
        name
    }

    fn delete_framebuffer(&self, framebuffer: u32) {
        self.record(format!("delete_framebuffer({})", framebuffer));
        self.attachments.borrow_mut().retain(|(fb, _), _| *fb != framebuffer);
    }

    fn bind_framebuffer(&self, target: FramebufferTarget, framebuffer: u32) {
        self.record(format!("bind_framebuffer({:?}, {})", target, framebuffer));
        self.bound_framebuffer.set(framebuffer);
    }

    fn check_framebuffer_status(&self, target: FramebufferTarget) -> FramebufferStatus {
        self.record(format!("check_framebuffer_status({:?})", target));
        self.framebuffer_status.get()
    }

    fn framebuffer_texture(&self, target: FramebufferTarget, attachment: Attachment, texture: u32, level: i32) {
        self.record(format!(
            "framebuffer_texture({:?}, {:?}, {}, {})",
            target, attachment, texture, level
        ));
        self.attachments
            .borrow_mut()
            .insert((self.bound_framebuffer.get(), attachment), texture);
    }

    fn framebuffer_texture_layer(
        &self,
        target: FramebufferTarget,
        attachment: Attachment,
        texture: u32,
        level: i32,
        layer: i32,
    ) {
        self.record(format!(
            "framebuffer_texture_layer({:?}, {:?}, {}, {}, {})",
            target, attachment, texture, level, layer
        ));
        self.attachments
            .borrow_mut()
            .insert((self.bound_framebuffer.get(), attachment), texture);
    }

    fn framebuffer_renderbuffer(&self, target: FramebufferTarget, attachment: Attachment, renderbuffer: u32) {
        self.record(format!(
            "framebuffer_renderbuffer({:?}, {:?}, {})",
            target, attachment, renderbuffer
        ));
        self.attachments
            .borrow_mut()
            .insert((self.bound_framebuffer.get(), attachment), renderbuffer);
    }

    fn get_framebuffer_attachment_parameter(
        &self,
        target: FramebufferTarget,
        attachment: Attachment,
        parameter: AttachmentParameter,
    ) -> i32 {
        self.record(format!(
            "get_framebuffer_attachment_parameter({:?}, {:?}, {:?})",
            target, attachment, parameter
        ));
        self.attachment_parameter(self.bound_framebuffer.get(), attachment, parameter)
    }

    fn read_buffer(&self, mode: ColorBuffer) {
        self.record(format!("read_buffer({:?})", mode));
    }

    fn draw_buffer(&self, mode: ColorBuffer) {
        self.record(format!("draw_buffer({:?})", mode));
    }

    fn draw_buffers(&self, modes: &[ColorBuffer]) {
        self.record(format!("draw_buffers({:?})", modes));
    }

    // ===== FRAMEBUFFERS (direct state access) =====

    fn create_framebuffer(&self) -> u32 {
        let name = self.allocate_name();
        self.record(format!("create_framebuffer() -> {}", name));
        name
    }

    fn check_named_framebuffer_status(&self, framebuffer: u32, target: FramebufferTarget) -> FramebufferStatus {
        self.record(format!("check_named_framebuffer_status({}, {:?})", framebuffer, target));
        self.framebuffer_status.get()
    }

    fn named_framebuffer_texture(&self, framebuffer: u32, attachment: Attachment, texture: u32, level: i32) {
        self.record(format!(
            "named_framebuffer_texture({}, {:?}, {}, {})",
            framebuffer, attachment, texture, level
        ));
        self.attachments.borrow_mut().insert((framebuffer, attachment), texture);
    }

    fn named_framebuffer_texture_layer(
        &self,
        framebuffer: u32,
        attachment: Attachment,
        texture: u32,
        level: i32,
        layer: i32,
    ) {
        self.record(format!(
            "named_framebuffer_texture_layer({}, {:?}, {}, {}, {})",
            framebuffer, attachment, texture, level, layer
        ));
        self.attachments.borrow_mut().insert((framebuffer, attachment), texture);
    }

    fn named_framebuffer_renderbuffer(&self, framebuffer: u32, attachment: Attachment, renderbuffer: u32) {
        self.record(format!(
            "named_framebuffer_renderbuffer({}, {:?}, {})",
            framebuffer, attachment, renderbuffer
        ));
        self.attachments.borrow_mut().insert((framebuffer, attachment), renderbuffer);
    }

    fn get_named_framebuffer_attachment_parameter(
        &self,
        framebuffer: u32,
        attachment: Attachment,
        parameter: AttachmentParameter,
    ) -> i32 {
        self.record(format!(
            "get_named_framebuffer_attachment_parameter({}, {:?}, {:?})",
            framebuffer, attachment, parameter
        ));
        self.attachment_parameter(framebuffer, attachment, parameter)
    }

    fn named_framebuffer_read_buffer(&self, framebuffer: u32, mode: ColorBuffer) {
        self.record(format!("named_framebuffer_read_buffer({}, {:?})", framebuffer, mode));
    }

    fn named_framebuffer_draw_buffer(&self, framebuffer: u32, mode: ColorBuffer) {
        self.record(format!("named_framebuffer_draw_buffer({}, {:?})", framebuffer, mode));
    }

    fn named_framebuffer_draw_buffers(&self, framebuffer: u32, modes: &[ColorBuffer]) {
        self.record(format!("named_framebuffer_draw_buffers({}, {:?})", framebuffer, modes));
    }

    // ===== RENDERBUFFERS =====

    fn gen_renderbuffer(&self) -> u32 {
        let name = self.allocate_name();
        self.record(format!("gen_renderbuffer() -> {}", name));
        name
    }

    fn delete_renderbuffer(&self, renderbuffer: u32) {
        self.record(format!("delete_renderbuffer({})", renderbuffer));
    }

    fn bind_renderbuffer(&self, renderbuffer: u32) {
        self.record(format!("bind_renderbuffer({})", renderbuffer));
    }

    fn renderbuffer_storage(&self, format: TextureFormat, width: u32, height: u32) {
        self.record(format!("renderbuffer_storage({:?}, {}, {})", format, width, height));
    }

    // ===== TEXTURES =====

    fn gen_texture(&self) -> u32 {
        let name = self.allocate_name();
        self.record(format!("gen_texture() -> {}", name));
        name
    }

    fn delete_texture(&self, texture: u32) {
        self.record(format!("delete_texture({})", texture));
    }

    fn bind_texture(&self, target: TextureTarget, texture: u32) {
        self.record(format!("bind_texture({:?}, {})", target, texture));
    }

    fn active_texture(&self, unit: u32) {
        self.record(format!("active_texture({})", unit));
    }

    fn tex_parameter(&self, target: TextureTarget, parameter: TextureParameter) {
        self.record(format!("tex_parameter({:?}, {:?})", target, parameter));
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
        self.record(format!(
            "tex_image_2d({:?}, {}, {:?}, {}, {}, {})",
            target,
            level,
            format,
            width,
            height,
            data.map(|d| d.len()).unwrap_or(0)
        ));
    }

    fn generate_mipmap(&self, target: TextureTarget) {
        self.record(format!("generate_mipmap({:?})", target));
    }

    fn pixel_store(&self, parameter: PixelStoreParameter, value: i32) {
        self.record(format!("pixel_store({:?}, {})", parameter, value));
    }

    // ===== SHADERS =====

    fn create_shader(&self, shader_type: ShaderType) -> u32 {
        let name = self.allocate_name();
        self.record(format!("create_shader({:?}) -> {}", shader_type, name));
        name
    }

    fn delete_shader(&self, shader: u32) {
        self.record(format!("delete_shader({})", shader));
        self.shader_sources.borrow_mut().remove(&shader);
    }

    fn shader_source(&self, shader: u32, source: &str) {
        self.record(format!("shader_source({})", shader));
        self.shader_sources.borrow_mut().insert(shader, source.to_string());
    }

    fn compile_shader(&self, shader: u32) {
        self.record(format!("compile_shader({})", shader));
        let failure = self.fail_next_compile.borrow_mut().take();
        let success = failure.is_none();
        self.info_logs
            .borrow_mut()
            .insert(shader, failure.unwrap_or_default());
        self.compile_status.borrow_mut().insert(shader, success);
    }

    fn get_shader_compile_status(&self, shader: u32) -> bool {
        self.compile_status.borrow().get(&shader).copied().unwrap_or(false)
    }

    fn get_shader_info_log(&self, shader: u32) -> String {
        self.info_logs.borrow().get(&shader).cloned().unwrap_or_default()
    }

    // ===== SHADER INCLUDES =====

    fn named_string(&self, name: &str, string: &str) {
        self.record(format!("named_string({})", name));
        self.named_strings
            .borrow_mut()
            .insert(name.to_string(), string.to_string());
    }

    fn delete_named_string(&self, name: &str) {
        self.record(format!("delete_named_string({})", name));
        self.named_strings.borrow_mut().remove(name);
    }

    fn compile_shader_include(&self, shader: u32, paths: &[String]) {
        self.record(format!("compile_shader_include({}, {:?})", shader, paths));
        let failure = self.fail_next_compile.borrow_mut().take();
        let success = failure.is_none();
        self.info_logs
            .borrow_mut()
            .insert(shader, failure.unwrap_or_default());
        self.compile_status.borrow_mut().insert(shader, success);
    }

    // ===== PROGRAMS =====

    fn create_program(&self) -> u32 {
        let name = self.allocate_name();
        self.record(format!("create_program() -> {}", name));
        name
    }

    fn delete_program(&self, program: u32) {
        self.record(format!("delete_program({})", program));
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        self.record(format!("attach_shader({}, {})", program, shader));
    }

    fn detach_shader(&self, program: u32, shader: u32) {
        self.record(format!("detach_shader({}, {})", program, shader));
    }

    fn link_program(&self, program: u32) {
        self.record(format!("link_program({})", program));
        let failure = self.fail_next_link.borrow_mut().take();
        let success = failure.is_none();
        self.info_logs
            .borrow_mut()
            .insert(program, failure.unwrap_or_default());
        self.link_status.borrow_mut().insert(program, success);
    }

    fn get_program_link_status(&self, program: u32) -> bool {
        self.link_status.borrow().get(&program).copied().unwrap_or(false)
    }

    fn get_program_info_log(&self, program: u32) -> String {
        self.info_logs.borrow().get(&program).cloned().unwrap_or_default()
    }

    fn use_program(&self, program: u32) {
        self.record(format!("use_program({})", program));
    }

    fn get_uniform_location(&self, program: u32, name: &str) -> Option<i32> {
        self.record(format!("get_uniform_location({}, {})", program, name));
        if self.missing_uniforms.borrow().contains(name) {
            return None;
        }
        let mut locations = self.uniform_locations.borrow_mut();
        let next = locations.len() as i32;
        Some(*locations.entry(name.to_string()).or_insert(next))
    }

    fn get_attrib_location(&self, program: u32, name: &str) -> Option<u32> {
        self.record(format!("get_attrib_location({}, {})", program, name));
        Some(0)
    }

    // ===== UNIFORMS =====

    fn uniform(&self, location: i32, value: &UniformValue) {
        self.record(format!("uniform({}, {:?})", location, value));
    }

    fn program_uniform(&self, program: u32, location: i32, value: &UniformValue) {
        self.record(format!("program_uniform({}, {}, {:?})", program, location, value));
    }

    // ===== PROGRAM BINARIES =====

    fn program_binary_retrievable_hint(&self, program: u32, retrievable: bool) {
        self.record(format!("program_binary_retrievable_hint({}, {})", program, retrievable));
    }

    fn get_program_binary(&self, program: u32) -> Option<ProgramBinary> {
        self.record(format!("get_program_binary({})", program));
        if let Some(binary) = self.program_binaries.borrow().get(&program) {
            return Some(binary.clone());
        }
        if self.get_program_link_status(program) {
            Some(ProgramBinary {
                format: 0x8E21,
                data: program.to_le_bytes().to_vec(),
            })
        } else {
            None
        }
    }

    fn program_binary(&self, program: u32, binary: &ProgramBinary) {
        self.record(format!("program_binary({}, {:#X}, {})", program, binary.format, binary.data.len()));
        self.program_binaries.borrow_mut().insert(program, binary.clone());
        self.link_status.borrow_mut().insert(program, true);
    }

    // ===== VERTEX ARRAYS / DRAWING =====

    fn gen_vertex_array(&self) -> u32 {
        let name = self.allocate_name();
        self.record(format!("gen_vertex_array() -> {}", name));
        name
    }

    fn delete_vertex_array(&self, vertex_array: u32) {
        self.record(format!("delete_vertex_array({})", vertex_array));
    }

    fn bind_vertex_array(&self, vertex_array: u32) {
        self.record(format!("bind_vertex_array({})", vertex_array));
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.record(format!("enable_vertex_attrib_array({})", index));
    }

    fn disable_vertex_attrib_array(&self, index: u32) {
        self.record(format!("disable_vertex_attrib_array({})", index));
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
        self.record(format!(
            "vertex_attrib_pointer({}, {}, {:?}, {}, {}, {})",
            index, size, attrib_type, normalized, stride, offset
        ));
    }

    fn draw_arrays(&self, mode: DrawMode, first: i32, count: i32) {
        self.record(format!("draw_arrays({:?}, {}, {})", mode, first, count));
    }

    fn draw_elements(&self, mode: DrawMode, count: i32, index_type: IndexType, offset: usize) {
        self.record(format!("draw_elements({:?}, {}, {:?}, {})", mode, count, index_type, offset));
    }

    // ===== DEBUG OUTPUT =====

    fn debug_message_callback(&self, callback: Option<DebugCallback>) {
        self.record(format!("debug_message_callback({})", callback.is_some()));
        *self.debug_callback.borrow_mut() = callback;
    }

    fn debug_message_control(
        &self,
        source: Option<DebugSource>,
        message_type: Option<DebugType>,
        severity: Option<DebugSeverity>,
        ids: &[u32],
        enabled: bool,
    ) {
        self.record(format!(
            "debug_message_control({:?}, {:?}, {:?}, {:?}, {})",
            source, message_type, severity, ids, enabled
        ));
    }

    fn debug_message_insert(&self, message: &DebugMessage) {
        self.record(format!("debug_message_insert({}, {})", message.id, message.message));
        if self.is_enabled(Capability::DebugOutput) {
            self.emit(message.clone());
        }
    }

    fn object_label(&self, object_type: ObjectType, name: u32, label: Option<&str>) {
        self.record(format!("object_label({:?}, {}, {:?})", object_type, name, label));
        let mut labels = self.labels.borrow_mut();
        match label {
            Some(label) => {
                labels.insert((object_type, name), label.to_string());
            }
            None => {
                labels.remove(&(object_type, name));
            }
        }
    }

    fn get_object_label(&self, object_type: ObjectType, name: u32) -> String {
        self.record(format!("get_object_label({:?}, {})", object_type, name));
        self.stored_label(object_type, name).unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "mock_backend_tests.rs"]
mod tests;
