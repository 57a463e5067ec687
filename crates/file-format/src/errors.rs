use igs_builder::ValidationError;

/// Errors during project file loading.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoadError {
    #[error("failed to parse file: {0}")]
    ParseError(String),

    #[error("unknown file format: {0}")]
    UnknownFormat(String),

    #[error("file version {file_version} is newer than supported version {supported_version}")]
    FutureVersion {
        file_version: u32,
        supported_version: u32,
    },

    #[error("IGS version {found} is not compatible with {supported}")]
    IncompatibleIgsVersion { found: String, supported: String },

    #[error("migration failed from version {from} to {to}: {reason}")]
    MigrationFailed { from: u32, to: u32, reason: String },
}

/// Errors during STL export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("IGS failed validation with {} error(s)", errors.len())]
    InvalidIgs { errors: Vec<ValidationError> },

    #[error("solid generation failed")]
    Engine(#[from] solid_engine::EngineError),

    #[error("tessellation failed")]
    Tessellation(#[from] geom_kernel::KernelError),

    #[error("STL serialization failed: {reason}")]
    Stl { reason: String },
}
