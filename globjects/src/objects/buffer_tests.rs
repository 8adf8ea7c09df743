//! Unit tests for buffer.rs

use std::rc::Rc;

use crate::backend::mock_backend::MockBackend;
use crate::backend::{BufferParameter, BufferStorageFlags, BufferTarget, BufferUsage};
use crate::capabilities::Version;
use crate::context::{ContextConfig, ImplementationOverrides};
use crate::error::Error;
use crate::implementations::BufferChoice;
use crate::objects::{Buffer, Object};
use crate::testing::{context_for, legacy_context, mock_context, quiet_config};

// ============================================================================
// CREATION / DROP TESTS
// ============================================================================

#[test]
fn test_new_uses_direct_state_access_on_modern_context() {
    let (mock, context) = mock_context();

    let buffer = Buffer::new(&context).unwrap();

    assert_eq!(mock.calls(), vec![format!("create_buffer() -> {}", buffer.id())]);
    assert_eq!(buffer.size(), 0);
    assert!(!buffer.is_immutable());
}

#[test]
fn test_new_uses_legacy_on_old_context() {
    let (mock, context) = legacy_context();

    let buffer = Buffer::new(&context).unwrap();

    assert!(mock.has_call(&format!("gen_buffer() -> {}", buffer.id())));
    assert!(mock.has_call(&format!("bind_buffer(CopyWrite, {})", buffer.id())));
}

#[test]
fn test_forced_legacy_buffer_on_modern_context() {
    let mock = Rc::new(MockBackend::new());
    let context = context_for(
        &mock,
        ContextConfig {
            overrides: ImplementationOverrides {
                buffer: Some(BufferChoice::Legacy),
                ..ImplementationOverrides::default()
            },
            ..quiet_config()
        },
    );
    mock.clear_calls();

    let buffer = Buffer::new(&context).unwrap();
    buffer.set_data(&[1, 2], BufferUsage::StaticDraw).unwrap();

    assert_eq!(mock.count_calls("create_buffer"), 0);
    assert!(mock.has_call("buffer_data(CopyWrite, 2, StaticDraw)"));
}

#[test]
fn test_drop_deletes_buffer() {
    let (mock, context) = mock_context();
    let buffer = Buffer::new(&context).unwrap();
    let id = buffer.id();

    drop(buffer);

    assert!(mock.has_call(&format!("delete_buffer({})", id)));
}

// ============================================================================
// DATA TESTS
// ============================================================================

#[test]
fn test_set_data_and_read_back() {
    let (mock, context) = mock_context();
    let buffer = Buffer::new(&context).unwrap();

    buffer.set_data(&[1, 2, 3, 4], BufferUsage::DynamicDraw).unwrap();
    buffer.set_sub_data(2, &[7, 8]).unwrap();

    assert_eq!(buffer.size(), 4);
    assert_eq!(buffer.sub_data(1, 3).unwrap(), vec![2, 7, 8]);
    assert_eq!(mock.buffer_contents(buffer.id()).unwrap(), vec![1, 2, 7, 8]);
}

#[test]
fn test_typed_data_round_trip() {
    let (_, context) = mock_context();
    let buffer = Buffer::new(&context).unwrap();

    buffer.set_data_of(&[1.0f32, 2.0, 3.0], BufferUsage::StaticRead).unwrap();
    buffer.set_sub_data_of(4, &[5.5f32]).unwrap();

    assert_eq!(buffer.size(), 12);
    assert_eq!(buffer.sub_data_of::<f32>(0, 3).unwrap(), vec![1.0, 5.5, 3.0]);
}

#[test]
fn test_allocate_zeroes_storage() {
    let (_, context) = mock_context();
    let buffer = Buffer::new(&context).unwrap();

    buffer.allocate(8, BufferUsage::StreamDraw).unwrap();

    assert_eq!(buffer.size(), 8);
    assert_eq!(buffer.parameter(BufferParameter::Size).unwrap(), 8);
}

#[test]
fn test_out_of_range_update_is_rejected() {
    let (mock, context) = mock_context();
    let buffer = Buffer::new(&context).unwrap();
    buffer.set_data(&[0; 4], BufferUsage::StaticDraw).unwrap();
    mock.clear_calls();

    assert!(matches!(buffer.set_sub_data(3, &[1, 2]), Err(Error::InvalidResource(_))));
    assert!(matches!(buffer.sub_data(0, 5), Err(Error::InvalidResource(_))));
    assert!(matches!(buffer.sub_data(usize::MAX, 2), Err(Error::InvalidResource(_))));
    assert!(mock.calls().is_empty());
}

#[test]
fn test_typed_read_with_overflowing_count_is_rejected() {
    let (mock, context) = mock_context();
    let buffer = Buffer::new(&context).unwrap();
    buffer.set_data(&[0u8; 16], BufferUsage::StaticDraw).unwrap();
    mock.clear_calls();

    let result = buffer.sub_data_of::<u64>(0, usize::MAX / 4);

    assert!(matches!(result, Err(Error::InvalidResource(_))));
    assert!(mock.calls().is_empty());
}

// ============================================================================
// IMMUTABLE STORAGE TESTS
// ============================================================================

#[test]
fn test_set_storage() {
    let (mock, context) = mock_context();
    let buffer = Buffer::new(&context).unwrap();

    buffer
        .set_storage(4, Some(&[1, 2, 3, 4]), BufferStorageFlags::DYNAMIC_STORAGE)
        .unwrap();

    assert!(buffer.is_immutable());
    assert_eq!(buffer.size(), 4);
    assert_eq!(buffer.parameter(BufferParameter::ImmutableStorage).unwrap(), 1);
    assert_eq!(mock.count_calls(&format!("named_buffer_storage({}, 4,", buffer.id())), 1);
}

#[test]
fn test_immutable_storage_cannot_be_respecified() {
    let (_, context) = mock_context();
    let buffer = Buffer::new(&context).unwrap();
    buffer.set_storage(4, None, BufferStorageFlags::empty()).unwrap();

    assert!(buffer.set_storage(4, None, BufferStorageFlags::empty()).is_err());
    assert!(buffer.set_data(&[1], BufferUsage::StaticDraw).is_err());
    assert!(buffer.allocate(16, BufferUsage::StaticDraw).is_err());
    assert_eq!(buffer.size(), 4);
}

#[test]
fn test_storage_data_length_must_match() {
    let (_, context) = mock_context();
    let buffer = Buffer::new(&context).unwrap();

    assert!(buffer
        .set_storage(8, Some(&[1, 2]), BufferStorageFlags::empty())
        .is_err());
    assert!(!buffer.is_immutable());
}

#[test]
fn test_storage_requires_extension() {
    let (mock, context) = legacy_context();
    let buffer = Buffer::new(&context).unwrap();
    mock.clear_calls();

    assert!(buffer.set_storage(4, None, BufferStorageFlags::empty()).is_err());
    assert_eq!(mock.count_calls("buffer_storage"), 0);
}

#[test]
fn test_storage_through_legacy_with_extension() {
    let mock = Rc::new(MockBackend::with_capabilities(
        Version::new(3, 3),
        &["GL_ARB_buffer_storage"],
    ));
    let context = context_for(&mock, quiet_config());
    let buffer = Buffer::new(&context).unwrap();

    buffer.set_storage(2, None, BufferStorageFlags::MAP_READ).unwrap();

    assert_eq!(mock.count_calls("buffer_storage(CopyWrite, 2,"), 1);
}

// ============================================================================
// COPY / BINDING TESTS
// ============================================================================

#[test]
fn test_copy_sub_data() {
    let (_, context) = mock_context();
    let source = Buffer::new(&context).unwrap();
    let dest = Buffer::new(&context).unwrap();
    source.set_data(&[1, 2, 3, 4], BufferUsage::StaticCopy).unwrap();
    dest.allocate(4, BufferUsage::StaticCopy).unwrap();

    source.copy_sub_data(&dest, 1, 2, 2).unwrap();

    assert_eq!(dest.sub_data(0, 4).unwrap(), vec![0, 0, 2, 3]);
}

#[test]
fn test_copy_checks_both_ranges() {
    let (_, context) = mock_context();
    let source = Buffer::new(&context).unwrap();
    let dest = Buffer::new(&context).unwrap();
    source.set_data(&[1, 2, 3, 4], BufferUsage::StaticCopy).unwrap();
    dest.allocate(2, BufferUsage::StaticCopy).unwrap();

    assert!(source.copy_sub_data(&dest, 0, 0, 4).is_err());
    assert!(source.copy_sub_data(&dest, 3, 0, 2).is_err());
}

#[test]
fn test_bind_and_bind_base() {
    let (mock, context) = mock_context();
    let buffer = Buffer::new(&context).unwrap();

    buffer.bind(BufferTarget::Array);
    buffer.unbind(BufferTarget::Array);
    buffer.bind_base(BufferTarget::Uniform, 2).unwrap();

    assert!(mock.has_call(&format!("bind_buffer(Array, {})", buffer.id())));
    assert!(mock.has_call("bind_buffer(Array, 0)"));
    assert!(mock.has_call(&format!("bind_buffer_base(Uniform, 2, {})", buffer.id())));
    assert!(buffer.bind_base(BufferTarget::Array, 0).is_err());
    assert!(buffer.unbind_base(BufferTarget::CopyRead, 0).is_err());
}
