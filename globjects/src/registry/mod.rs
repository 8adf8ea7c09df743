/// Registry module - implementation selection cache

pub mod implementation_registry;

pub use implementation_registry::*;
