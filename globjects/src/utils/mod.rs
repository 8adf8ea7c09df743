/// Utilities module - ready-made geometry built on the wrappers

pub mod unit_cube;
pub mod screen_aligned_quad;

pub use unit_cube::UnitCube;
pub use screen_aligned_quad::ScreenAlignedQuad;
