//! Project file persistence and STL export.
//!
//! The project file wraps an IGS document with metadata and a format
//! version; the export path runs validation, the solid engine, and the
//! STL serializer end to end.

pub mod errors;
pub mod export;
pub mod load;
pub mod metadata;
pub mod migrate;
pub mod save;
pub mod stl;

pub use errors::{ExportError, LoadError};
pub use export::{export_stl, export_stl_ascii, ExportOptions};
pub use load::load_project;
pub use metadata::ProjectMetadata;
pub use save::{save_project, FORMAT_VERSION};
pub use stl::{export_ascii_stl, export_binary_stl};
