//! Shared test support for the geometry pipeline.
//!
//! Mesh measurement utilities and component fixture builders used by the
//! end-to-end scenario tests in this crate's `tests/` directory.

pub mod helpers;

pub use helpers::*;
