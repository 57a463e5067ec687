//! End-to-end export: validate the IGS, generate the solid, tessellate,
//! serialize to STL.

use crossboard_types::IgsDocument;
use geom_kernel::Kernel;
use igs_builder::validate_igs;
use solid_engine::generate_solid;

use crate::errors::ExportError;
use crate::stl::{export_ascii_stl, export_binary_stl};

/// Export tuning knobs.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Model name embedded in the STL header.
    pub name: String,
    /// Tessellation tolerance in millimeters. Smaller is finer.
    pub tolerance: f64,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            name: "crossboard".to_string(),
            tolerance: 0.01,
        }
    }
}

fn build_mesh(
    kernel: &mut dyn Kernel,
    igs: &IgsDocument,
    options: &ExportOptions,
) -> Result<geom_kernel::RenderMesh, ExportError> {
    let report = validate_igs(igs);
    if !report.is_valid() {
        return Err(ExportError::InvalidIgs {
            errors: report.errors,
        });
    }
    for warning in &report.warnings {
        tracing::warn!(%warning, "IGS validation warning");
    }

    let solid = generate_solid(kernel, igs)?;
    let mesh = kernel.tessellate(&solid, options.tolerance)?;
    tracing::info!(
        triangles = mesh.triangle_count(),
        tolerance = options.tolerance,
        "tessellated board solid"
    );
    Ok(mesh)
}

/// Validate, generate and serialize a board to binary STL.
pub fn export_stl(
    kernel: &mut dyn Kernel,
    igs: &IgsDocument,
    options: &ExportOptions,
) -> Result<Vec<u8>, ExportError> {
    let mesh = build_mesh(kernel, igs, options)?;
    export_binary_stl(&mesh, &options.name)
}

/// Validate, generate and serialize a board to ASCII STL.
pub fn export_stl_ascii(
    kernel: &mut dyn Kernel,
    igs: &IgsDocument,
    options: &ExportOptions,
) -> Result<String, ExportError> {
    let mesh = build_mesh(kernel, igs, options)?;
    export_ascii_stl(&mesh, &options.name)
}
