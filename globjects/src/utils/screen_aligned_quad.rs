/// ScreenAlignedQuad - fullscreen quad for texture presentation and post-processing

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use glam::Vec2;

use crate::backend::{BufferUsage, DrawMode, ShaderType, VertexAttribType};
use crate::context::Context;
use crate::error::Result;
use crate::objects::{Buffer, Program, Shader, Texture, VertexArray};

/// Pass-through vertex shader; maps clip-space corners to `v_uv` in [0, 1]
pub const DEFAULT_VERTEX_SHADER: &str = "#version 140

in vec2 a_vertex;
out vec2 v_uv;

void main()
{
    v_uv = a_vertex * 0.5 + 0.5;
    gl_Position = vec4(a_vertex, 0.0, 1.0);
}
";

/// Samples the `source` texture at `v_uv`
pub const DEFAULT_FRAGMENT_SHADER: &str = "#version 140

uniform sampler2D source;

in vec2 v_uv;
out vec4 fragColor;

void main()
{
    fragColor = texture(source, v_uv);
}
";

/// Attribute location of `a_vertex`
pub const VERTEX_LOCATION: u32 = 0;

/// Strip corners in clip space
pub const VERTICES: [Vec2; 4] = [
    Vec2::new(-1.0, 1.0),
    Vec2::new(-1.0, -1.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(1.0, -1.0),
];

pub struct ScreenAlignedQuad {
    program: Rc<Program>,
    vertex_shader: Option<Rc<Shader>>,
    fragment_shader: Option<Rc<Shader>>,
    texture: RefCell<Option<Rc<Texture>>>,
    sampler_uniform: RefCell<String>,
    sampler_unit: Cell<u32>,
    buffer: Rc<Buffer>,
    vao: VertexArray,
}

impl ScreenAlignedQuad {
    /// Quad drawn with a caller-provided program (which supplies both stages)
    pub fn from_program(context: &Rc<Context>, program: Rc<Program>) -> Result<Self> {
        Self::build(context, program, None, None, None)
    }

    /// Default vertex stage plus the given fragment stage
    pub fn from_fragment_shader(
        context: &Rc<Context>,
        fragment_shader: Rc<Shader>,
        texture: Option<Rc<Texture>>,
    ) -> Result<Self> {
        let vertex_shader = Rc::new(Shader::from_source(
            context,
            ShaderType::Vertex,
            DEFAULT_VERTEX_SHADER,
        )?);
        let program = Rc::new(Program::with_shaders(
            context,
            &[vertex_shader.clone(), fragment_shader.clone()],
        ));
        Self::build(context, program, Some(vertex_shader), Some(fragment_shader), texture)
    }

    /// Default shaders presenting `texture`
    pub fn from_texture(context: &Rc<Context>, texture: Rc<Texture>) -> Result<Self> {
        let fragment_shader = Rc::new(Shader::from_source(
            context,
            ShaderType::Fragment,
            DEFAULT_FRAGMENT_SHADER,
        )?);
        Self::from_fragment_shader(context, fragment_shader, Some(texture))
    }

    fn build(
        context: &Rc<Context>,
        program: Rc<Program>,
        vertex_shader: Option<Rc<Shader>>,
        fragment_shader: Option<Rc<Shader>>,
        texture: Option<Rc<Texture>>,
    ) -> Result<Self> {
        let buffer = Rc::new(Buffer::new(context)?);
        buffer.set_data_of(&VERTICES, BufferUsage::StaticDraw)?;

        let vao = VertexArray::new(context);
        let binding = vao.binding(0);
        binding.set_attribute(VERTEX_LOCATION);
        binding.set_buffer(&buffer, 0, std::mem::size_of::<Vec2>() as i32);
        binding.set_format(2, VertexAttribType::Float, false, 0);
        vao.enable(VERTEX_LOCATION);
        vao.unbind();

        Ok(Self {
            program,
            vertex_shader,
            fragment_shader,
            texture: RefCell::new(texture),
            sampler_uniform: RefCell::new("source".to_string()),
            sampler_unit: Cell::new(0),
            buffer,
            vao,
        })
    }

    pub fn program(&self) -> &Rc<Program> {
        &self.program
    }

    pub fn buffer(&self) -> &Rc<Buffer> {
        &self.buffer
    }

    pub fn vertex_shader(&self) -> Option<&Rc<Shader>> {
        self.vertex_shader.as_ref()
    }

    pub fn fragment_shader(&self) -> Option<&Rc<Shader>> {
        self.fragment_shader.as_ref()
    }

    pub fn texture(&self) -> Option<Rc<Texture>> {
        self.texture.borrow().clone()
    }

    pub fn set_texture(&self, texture: Option<Rc<Texture>>) {
        *self.texture.borrow_mut() = texture;
    }

    /// Name of the sampler uniform bound to the texture (default `source`)
    pub fn set_sampler_uniform(&self, name: &str) {
        *self.sampler_uniform.borrow_mut() = name.to_string();
    }

    pub fn sampler_unit(&self) -> u32 {
        self.sampler_unit.get()
    }

    pub fn set_sampler_unit(&self, unit: u32) {
        self.sampler_unit.set(unit);
    }

    /// Draw the quad, binding the texture (if any) to the sampler unit
    pub fn draw(&self) -> Result<()> {
        let texture = self.texture.borrow().clone();
        let unit = self.sampler_unit();

        if let Some(texture) = &texture {
            texture.bind_active(unit);
            self.program
                .set_uniform(&self.sampler_uniform.borrow(), unit as i32)?;
        }

        self.program.use_program()?;
        self.vao.draw_arrays(DrawMode::TriangleStrip, 0, VERTICES.len() as i32);
        self.vao.unbind();
        self.program.release();

        if let Some(texture) = &texture {
            texture.unbind();
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "screen_aligned_quad_tests.rs"]
mod tests;
