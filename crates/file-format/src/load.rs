use crossboard_types::{IgsDocument, IGS_VERSION};
use serde::Deserialize;

use crate::errors::LoadError;
use crate::metadata::ProjectMetadata;
use crate::save::{FORMAT_NAME, FORMAT_VERSION};

/// The top-level file structure for deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectFileRaw {
    pub format: String,
    pub version: u32,
    pub project: ProjectMetadata,
    pub igs: IgsDocument,
}

/// Major component of a semver string, if it parses.
fn semver_major(version: &str) -> Option<u32> {
    version.split('.').next()?.parse().ok()
}

/// Deserialize a project from a JSON string.
///
/// Validates the format identifier, the file format version, and the
/// embedded IGS version (major must match; minor/patch drift is accepted).
pub fn load_project(json: &str) -> Result<(IgsDocument, ProjectMetadata), LoadError> {
    let raw: ProjectFileRaw =
        serde_json::from_str(json).map_err(|e| LoadError::ParseError(e.to_string()))?;

    if raw.format != FORMAT_NAME {
        return Err(LoadError::UnknownFormat(raw.format));
    }

    if raw.version > FORMAT_VERSION {
        return Err(LoadError::FutureVersion {
            file_version: raw.version,
            supported_version: FORMAT_VERSION,
        });
    }

    let supported_major = semver_major(IGS_VERSION);
    if supported_major.is_none() || semver_major(&raw.igs.version) != supported_major {
        return Err(LoadError::IncompatibleIgsVersion {
            found: raw.igs.version,
            supported: IGS_VERSION.to_string(),
        });
    }

    // Apply migrations if needed (version < current)
    let igs = if raw.version < FORMAT_VERSION {
        crate::migrate::migrate(raw.igs, raw.version, FORMAT_VERSION)?
    } else {
        raw.igs
    };

    Ok((igs, raw.project))
}
