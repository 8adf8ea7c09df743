//! Unit tests for screen_aligned_quad.rs

use std::rc::Rc;

use crate::backend::{ShaderType, TextureTarget};
use crate::objects::{Object, Program, Shader, Texture};
use crate::testing::mock_context;
use crate::utils::screen_aligned_quad::{DEFAULT_FRAGMENT_SHADER, DEFAULT_VERTEX_SHADER};
use crate::utils::ScreenAlignedQuad;

#[test]
fn test_from_texture_builds_default_program() {
    let (mock, context) = mock_context();
    let texture = Rc::new(Texture::new(&context, TextureTarget::Texture2D));

    let quad = ScreenAlignedQuad::from_texture(&context, texture.clone()).unwrap();

    let vertex = quad.vertex_shader().unwrap();
    let fragment = quad.fragment_shader().unwrap();
    assert_eq!(vertex.source().as_deref(), Some(DEFAULT_VERTEX_SHADER));
    assert_eq!(fragment.source().as_deref(), Some(DEFAULT_FRAGMENT_SHADER));
    assert_eq!(quad.program().shaders().len(), 2);
    assert_eq!(quad.texture().map(|t| t.id()), Some(texture.id()));
    assert_eq!(quad.buffer().size(), 32);
    assert!(mock.has_call("vertex_attrib_pointer(0, 2, Float, false, 8, 0)"));
}

#[test]
fn test_draw_binds_texture_and_links() {
    let (mock, context) = mock_context();
    let texture = Rc::new(Texture::new(&context, TextureTarget::Texture2D));
    let quad = ScreenAlignedQuad::from_texture(&context, texture.clone()).unwrap();
    mock.clear_calls();

    quad.draw().unwrap();

    let program = quad.program();
    assert!(program.is_linked());
    assert!(mock.has_call("active_texture(0)"));
    assert!(mock.has_call(&format!("bind_texture(Texture2D, {})", texture.id())));
    assert!(mock.has_call(&format!("use_program({})", program.id())));
    assert!(mock.has_call("draw_arrays(TriangleStrip, 0, 4)"));
    assert!(mock.has_call("use_program(0)"));
    assert!(mock.has_call("bind_texture(Texture2D, 0)"));

    let location = program.uniform_location("source").unwrap();
    assert!(mock.has_call(&format!("program_uniform({}, {}, Int(0))", program.id(), location)));
}

#[test]
fn test_sampler_unit_and_uniform_name() {
    let (mock, context) = mock_context();
    let texture = Rc::new(Texture::new(&context, TextureTarget::Texture2D));
    let quad = ScreenAlignedQuad::from_texture(&context, texture).unwrap();

    quad.set_sampler_unit(2);
    quad.set_sampler_uniform("image");
    quad.draw().unwrap();

    assert_eq!(quad.sampler_unit(), 2);
    assert!(mock.has_call("active_texture(2)"));
    let location = quad.program().uniform_location("image").unwrap();
    assert!(mock.has_call(&format!(
        "program_uniform({}, {}, Int(2))",
        quad.program().id(),
        location
    )));
}

#[test]
fn test_from_program_without_texture() {
    let (mock, context) = mock_context();
    let vertex = Rc::new(Shader::from_source(&context, ShaderType::Vertex, DEFAULT_VERTEX_SHADER).unwrap());
    let fragment = Rc::new(Shader::from_source(&context, ShaderType::Fragment, DEFAULT_FRAGMENT_SHADER).unwrap());
    let program = Rc::new(Program::with_shaders(&context, &[vertex, fragment]));

    let quad = ScreenAlignedQuad::from_program(&context, program.clone()).unwrap();
    mock.clear_calls();
    quad.draw().unwrap();

    assert!(Rc::ptr_eq(quad.program(), &program));
    assert!(quad.vertex_shader().is_none());
    assert_eq!(mock.count_calls("active_texture"), 0);
    assert!(mock.has_call("draw_arrays(TriangleStrip, 0, 4)"));
}

#[test]
fn test_set_texture_replaces_source() {
    let (mock, context) = mock_context();
    let fragment = Rc::new(Shader::from_source(&context, ShaderType::Fragment, DEFAULT_FRAGMENT_SHADER).unwrap());
    let quad = ScreenAlignedQuad::from_fragment_shader(&context, fragment, None).unwrap();
    let texture = Rc::new(Texture::new(&context, TextureTarget::Texture2D));

    assert!(quad.texture().is_none());
    quad.set_texture(Some(texture.clone()));
    mock.clear_calls();
    quad.draw().unwrap();

    assert!(mock.has_call(&format!("bind_texture(Texture2D, {})", texture.id())));
}
