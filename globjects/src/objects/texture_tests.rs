//! Unit tests for texture.rs

use crate::backend::{TextureFilter, TextureFormat, TextureParameter, TextureTarget, TextureWrap};
use crate::objects::{Object, Renderbuffer, Texture};
use crate::testing::mock_context;

// ============================================================================
// TEXTURE TESTS
// ============================================================================

#[test]
fn test_create_default_sets_linear_clamp() {
    let (mock, context) = mock_context();

    let texture = Texture::create_default(&context, TextureTarget::Texture2D);

    assert_eq!(mock.count_calls("tex_parameter"), 5);
    assert!(mock.has_call(&format!(
        "tex_parameter(Texture2D, {:?})",
        TextureParameter::MinFilter(TextureFilter::Linear)
    )));
    assert!(mock.has_call(&format!(
        "tex_parameter(Texture2D, {:?})",
        TextureParameter::WrapR(TextureWrap::ClampToEdge)
    )));
    assert!(mock.has_call(&format!("bind_texture(Texture2D, {})", texture.id())));
}

#[test]
fn test_image_2d_records_level_zero_size() {
    let (mock, context) = mock_context();
    let texture = Texture::new(&context, TextureTarget::Texture2D);

    texture
        .image_2d(0, TextureFormat::Rgba8, 2, 2, Some(&[0u8; 16]))
        .unwrap();
    texture.image_2d(1, TextureFormat::Rgba8, 1, 1, None).unwrap();

    assert_eq!(texture.width(), 2);
    assert_eq!(texture.height(), 2);
    assert_eq!(texture.format(), Some(TextureFormat::Rgba8));
    assert!(mock.has_call("tex_image_2d(Texture2D, 0, Rgba8, 2, 2, 16)"));
    assert!(mock.has_call("tex_image_2d(Texture2D, 1, Rgba8, 1, 1, 0)"));
}

#[test]
fn test_image_2d_unpacks_odd_rows_with_byte_alignment() {
    let (mock, context) = mock_context();
    let texture = Texture::new(&context, TextureTarget::Texture2D);
    mock.clear_calls();

    texture
        .image_2d(0, TextureFormat::Rgb8, 3, 3, Some(&[0u8; 27]))
        .unwrap();

    let calls = mock.calls();
    let position = |call: &str| calls.iter().position(|c| c == call).unwrap();
    let relax = position("pixel_store(UnpackAlignment, 1)");
    let upload = position("tex_image_2d(Texture2D, 0, Rgb8, 3, 3, 27)");
    let restore = position("pixel_store(UnpackAlignment, 4)");
    assert!(relax < upload && upload < restore);
}

#[test]
fn test_image_2d_keeps_alignment_for_aligned_rows() {
    let (mock, context) = mock_context();
    let texture = Texture::new(&context, TextureTarget::Texture2D);

    texture
        .image_2d(0, TextureFormat::Rgba8, 3, 3, Some(&[0u8; 36]))
        .unwrap();
    texture.image_2d(1, TextureFormat::Rgb8, 1, 1, None).unwrap();

    assert_eq!(mock.count_calls("pixel_store"), 0);
}

#[test]
fn test_image_2d_rejects_wrong_data_length() {
    let (mock, context) = mock_context();
    let texture = Texture::new(&context, TextureTarget::Texture2D);

    assert!(texture
        .image_2d(0, TextureFormat::Rgb8, 2, 2, Some(&[0u8; 4]))
        .is_err());
    assert_eq!(mock.count_calls("tex_image_2d"), 0);
    assert_eq!(texture.format(), None);
}

#[test]
fn test_image_2d_rejects_non_2d_target() {
    let (_, context) = mock_context();
    let texture = Texture::new(&context, TextureTarget::Texture3D);

    assert!(texture.image_2d(0, TextureFormat::R8, 1, 1, None).is_err());
}

#[test]
fn test_bind_active_selects_unit_first() {
    let (mock, context) = mock_context();
    let texture = Texture::new(&context, TextureTarget::Texture2D);
    mock.clear_calls();

    texture.bind_active(3);
    texture.unbind();

    assert_eq!(
        mock.calls(),
        vec![
            "active_texture(3)".to_string(),
            format!("bind_texture(Texture2D, {})", texture.id()),
            "bind_texture(Texture2D, 0)".to_string(),
        ]
    );
}

#[test]
fn test_generate_mipmap_and_drop() {
    let (mock, context) = mock_context();
    let texture = Texture::new(&context, TextureTarget::Texture2D);
    let id = texture.id();

    texture.generate_mipmap();
    drop(texture);

    assert!(mock.has_call("generate_mipmap(Texture2D)"));
    assert!(mock.has_call(&format!("delete_texture({})", id)));
}

// ============================================================================
// RENDERBUFFER TESTS
// ============================================================================

#[test]
fn test_renderbuffer_storage() {
    let (mock, context) = mock_context();
    let renderbuffer = Renderbuffer::new(&context);

    renderbuffer.storage(TextureFormat::Depth24Stencil8, 640, 480);

    assert_eq!(renderbuffer.width(), 640);
    assert_eq!(renderbuffer.height(), 480);
    assert_eq!(renderbuffer.format(), Some(TextureFormat::Depth24Stencil8));
    assert!(mock.has_call(&format!("bind_renderbuffer({})", renderbuffer.id())));
    assert!(mock.has_call("renderbuffer_storage(Depth24Stencil8, 640, 480)"));

    let id = renderbuffer.id();
    drop(renderbuffer);
    assert!(mock.has_call(&format!("delete_renderbuffer({})", id)));
}
