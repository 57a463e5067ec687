//! 2D placement layer: component footprints, lead hole patterns, and
//! axis-aligned collision/bounds checks against the board outline.

pub mod collision;
pub mod footprint;

pub use collision::*;
pub use footprint::*;
