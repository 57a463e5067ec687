use crossboard_types::IgsDocument;
use serde::Serialize;

use crate::metadata::ProjectMetadata;

/// Current file format version.
pub const FORMAT_VERSION: u32 = 1;

/// Format identifier written into every project file.
pub(crate) const FORMAT_NAME: &str = "crossboard";

/// The top-level file structure.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectFile {
    /// Format identifier.
    pub format: String,
    /// Format version number.
    pub version: u32,
    /// Project metadata.
    pub project: ProjectMetadata,
    /// The resolved geometry plan.
    pub igs: IgsDocument,
}

/// Serialize a project to a pretty-printed JSON string.
pub fn save_project(igs: &IgsDocument, metadata: &ProjectMetadata) -> String {
    let file = ProjectFile {
        format: FORMAT_NAME.to_string(),
        version: FORMAT_VERSION,
        project: metadata.clone(),
        igs: igs.clone(),
    };
    serde_json::to_string_pretty(&file).expect("IgsDocument serialization should never fail")
}
