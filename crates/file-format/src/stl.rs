//! STL serialization from a tessellated mesh, binary and ASCII.

use geom_kernel::RenderMesh;

use crate::errors::ExportError;

/// Bytes per binary STL facet: 3xf32 normal + 9xf32 vertices + u16 attribute.
const FACET_BYTES: usize = 50;

/// Reject empty meshes and out-of-range indices before serializing.
/// A zero-facet file is a hard error: slicers accept it silently and the
/// user finds out at print time.
fn check_mesh(mesh: &RenderMesh) -> Result<(), ExportError> {
    if mesh.indices.is_empty() {
        return Err(ExportError::Stl {
            reason: "mesh has no triangles".to_string(),
        });
    }
    let vertex_count = mesh.vertices.len() / 3;
    for &idx in &mesh.indices {
        if idx as usize >= vertex_count {
            return Err(ExportError::Stl {
                reason: format!("index {idx} out of range (vertex count = {vertex_count})"),
            });
        }
    }
    Ok(())
}

/// Face normal of one triangle, recomputed from the cross product of its
/// edges. Degenerate triangles fall back to +Z.
fn facet_normal(mesh: &RenderMesh, tri: &[u32]) -> [f32; 3] {
    let i0 = tri[0] as usize * 3;
    let i1 = tri[1] as usize * 3;
    let i2 = tri[2] as usize * 3;

    let (ax, ay, az) = (
        mesh.vertices[i1] - mesh.vertices[i0],
        mesh.vertices[i1 + 1] - mesh.vertices[i0 + 1],
        mesh.vertices[i1 + 2] - mesh.vertices[i0 + 2],
    );
    let (bx, by, bz) = (
        mesh.vertices[i2] - mesh.vertices[i0],
        mesh.vertices[i2 + 1] - mesh.vertices[i0 + 1],
        mesh.vertices[i2 + 2] - mesh.vertices[i0 + 2],
    );
    let nx = ay * bz - az * by;
    let ny = az * bx - ax * bz;
    let nz = ax * by - ay * bx;
    let len = (nx * nx + ny * ny + nz * nz).sqrt();
    if len > 1e-12 {
        [nx / len, ny / len, nz / len]
    } else {
        [0.0, 0.0, 1.0]
    }
}

/// Export a RenderMesh as a binary STL file.
///
/// Binary STL format:
/// - 80-byte header (arbitrary text)
/// - u32 triangle count (little-endian)
/// - 50 bytes per triangle
pub fn export_binary_stl(mesh: &RenderMesh, name: &str) -> Result<Vec<u8>, ExportError> {
    check_mesh(mesh)?;
    let tri_count = mesh.indices.len() / 3;

    let mut buf = Vec::with_capacity(80 + 4 + tri_count * FACET_BYTES);

    // 80-byte header
    let header = format!("binary STL: {name}");
    let header_bytes = header.as_bytes();
    buf.extend_from_slice(&header_bytes[..header_bytes.len().min(80)]);
    buf.resize(80, 0u8);

    buf.extend_from_slice(&(tri_count as u32).to_le_bytes());

    for tri in mesh.indices.chunks(3) {
        for component in facet_normal(mesh, tri) {
            buf.extend_from_slice(&component.to_le_bytes());
        }
        for &idx in tri {
            let vi = idx as usize * 3;
            buf.extend_from_slice(&mesh.vertices[vi].to_le_bytes());
            buf.extend_from_slice(&mesh.vertices[vi + 1].to_le_bytes());
            buf.extend_from_slice(&mesh.vertices[vi + 2].to_le_bytes());
        }
        // Attribute byte count (unused)
        buf.extend_from_slice(&0u16.to_le_bytes());
    }

    Ok(buf)
}

/// Export a RenderMesh as an ASCII STL string.
pub fn export_ascii_stl(mesh: &RenderMesh, name: &str) -> Result<String, ExportError> {
    check_mesh(mesh)?;
    let tri_count = mesh.indices.len() / 3;

    let mut out = String::with_capacity(tri_count * 300);
    out.push_str(&format!("solid {name}\n"));

    for tri in mesh.indices.chunks(3) {
        let [nx, ny, nz] = facet_normal(mesh, tri);
        out.push_str(&format!("  facet normal {nx} {ny} {nz}\n"));
        out.push_str("    outer loop\n");
        for &idx in tri {
            let vi = idx as usize * 3;
            out.push_str(&format!(
                "      vertex {} {} {}\n",
                mesh.vertices[vi],
                mesh.vertices[vi + 1],
                mesh.vertices[vi + 2]
            ));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    }

    out.push_str(&format!("endsolid {name}\n"));
    Ok(out)
}
