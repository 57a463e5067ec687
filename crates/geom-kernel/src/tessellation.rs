//! Tessellation wrapper around truck-meshalgo.

use truck_meshalgo::prelude::*;
use truck_meshalgo::tessellation::{MeshableShape, MeshedShape};

use crate::types::{KernelError, RenderMesh};

type TruckSolid = truck_modeling::Solid;

/// Tessellate a truck Solid into a flat triangle mesh.
pub fn tessellate_solid(solid: &TruckSolid, tolerance: f64) -> Result<RenderMesh, KernelError> {
    let meshed = solid.triangulation(tolerance);
    let mesh = meshed.to_polygon();

    let positions = mesh.positions();
    let normals = mesh.normals();
    let tri_faces = mesh.tri_faces();

    let mut vertices = Vec::with_capacity(positions.len() * 3);
    let mut norms = Vec::with_capacity(positions.len() * 3);
    let mut indices = Vec::with_capacity(tri_faces.len() * 3);

    for pos in positions {
        vertices.push(pos[0] as f32);
        vertices.push(pos[1] as f32);
        vertices.push(pos[2] as f32);
    }

    if normals.is_empty() {
        // truck can omit normals on degenerate faces; STL recomputes them
        // from the triangle winding anyway.
        norms.resize(vertices.len(), 0.0);
    } else {
        for norm in normals {
            norms.push(norm[0] as f32);
            norms.push(norm[1] as f32);
            norms.push(norm[2] as f32);
        }
    }

    for tri in tri_faces {
        for v in tri.iter() {
            indices.push(v.pos as u32);
        }
    }

    if indices.is_empty() {
        return Err(KernelError::TessellationFailed {
            reason: "triangulation produced no facets".to_string(),
        });
    }

    Ok(RenderMesh {
        vertices,
        normals: norms,
        indices,
    })
}
