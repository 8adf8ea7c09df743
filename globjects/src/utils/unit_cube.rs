/// UnitCube - unit cube centered at the origin, drawn as one triangle strip
///
/// Positions and normals are interleaved in a single buffer. Each strip
/// vertex carries the normal of the face it completes; the first two vertices
/// only start the strip and carry a zero normal.

use std::rc::Rc;

use glam::Vec3;

use crate::backend::{BufferUsage, Capability, DrawMode, VertexAttribType};
use crate::context::Context;
use crate::error::Result;
use crate::objects::{Buffer, VertexArray};

/// Strip vertex count (`strip()` holds a position and a normal per vertex)
pub const STRIP_VERTEX_COUNT: i32 = 14;

pub struct UnitCube {
    context: Rc<Context>,
    strip: Rc<Buffer>,
    vao: VertexArray,
}

impl UnitCube {
    /// Interleaved position/normal pairs of the cube strip
    #[rustfmt::skip]
    pub fn strip() -> [Vec3; 28] {
        let vertices = [
            Vec3::new(-0.5, -0.5, -0.5),
            Vec3::new(-0.5, -0.5, 0.5),
            Vec3::new(-0.5, 0.5, -0.5),
            Vec3::new(-0.5, 0.5, 0.5),
            Vec3::new(0.5, -0.5, -0.5),
            Vec3::new(0.5, -0.5, 0.5),
            Vec3::new(0.5, 0.5, -0.5),
            Vec3::new(0.5, 0.5, 0.5),
        ];
        let normals = [
            Vec3::NEG_X,
            Vec3::X,
            Vec3::NEG_Y,
            Vec3::Y,
            Vec3::NEG_Z,
            Vec3::Z,
            Vec3::ZERO,
        ];

        [
            vertices[7], normals[6],
            vertices[3], normals[6],
            vertices[5], normals[5],
            vertices[1], normals[5],
            vertices[0], normals[2],
            vertices[3], normals[0],
            vertices[2], normals[0],
            vertices[7], normals[3],
            vertices[6], normals[3],
            vertices[5], normals[1],
            vertices[4], normals[1],
            vertices[0], normals[2],
            vertices[6], normals[4],
            vertices[2], normals[4],
        ]
    }

    /// Cube feeding attribute locations 0 (position) and 1 (normal)
    pub fn new(context: &Rc<Context>) -> Result<Self> {
        Self::with_locations(context, 0, 1)
    }

    pub fn with_locations(context: &Rc<Context>, vertex_location: u32, normal_location: u32) -> Result<Self> {
        let strip = Rc::new(Buffer::new(context)?);
        strip.set_data_of(&Self::strip(), BufferUsage::StaticDraw)?;

        let stride = (2 * std::mem::size_of::<Vec3>()) as i32;
        let vao = VertexArray::new(context);
        vao.bind();

        let vertex_binding = vao.binding(0);
        vertex_binding.set_attribute(vertex_location);
        vertex_binding.set_buffer(&strip, 0, stride);
        vertex_binding.set_format(3, VertexAttribType::Float, false, 0);
        vao.enable(vertex_location);

        let normal_binding = vao.binding(1);
        normal_binding.set_attribute(normal_location);
        normal_binding.set_buffer(&strip, 0, stride);
        normal_binding.set_format(3, VertexAttribType::Float, true, std::mem::size_of::<Vec3>());
        vao.enable(normal_location);

        vao.unbind();

        Ok(Self {
            context: context.clone(),
            strip,
            vao,
        })
    }

    pub fn buffer(&self) -> &Rc<Buffer> {
        &self.strip
    }

    pub fn vertex_array(&self) -> &VertexArray {
        &self.vao
    }

    /// Draw with depth testing enabled
    pub fn draw(&self) {
        self.context.gl().enable(Capability::DepthTest);
        self.vao.draw_arrays(DrawMode::TriangleStrip, 0, STRIP_VERTEX_COUNT);
        self.vao.unbind();
    }
}

#[cfg(test)]
#[path = "unit_cube_tests.rs"]
mod tests;
