//! Solid generation: interprets an IGS document into one solid via the
//! geometry kernel, ready for tessellation and STL export.

pub mod engine;
pub mod text;
pub mod types;

pub use engine::generate_solid;
pub use types::EngineError;
