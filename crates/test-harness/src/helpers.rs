//! Helper functions: component fixtures and mesh math.

use crossboard_types::{
    BodyShape, Dimensions, LeadConfig, LeadPattern, PartType, PlacedComponent,
};
use geom_kernel::RenderMesh;
use uuid::Uuid;

// ── Component Fixtures ──────────────────────────────────────────────────────

/// An axial electrolytic capacitor lying on its side.
pub fn axial_capacitor(x: f64, y: f64, diameter: f64, length: f64) -> PlacedComponent {
    PlacedComponent {
        id: Uuid::new_v4(),
        part_type: PartType::Capacitor,
        value: "100uF".to_string(),
        body_shape: BodyShape::Cylinder,
        dimensions: Dimensions {
            diameter: Some(diameter),
            length: Some(length),
            ..Dimensions::default()
        },
        x,
        y,
        rotation: 0.0,
        lead_config: LeadConfig::Axial {
            end_inset: Some(2.0),
        },
        hole_diameter: 1.0,
    }
}

/// A toroidal coil with radial leads on the inner circle.
pub fn toroidal_inductor(x: f64, y: f64, outer: f64, inner: f64) -> PlacedComponent {
    PlacedComponent {
        id: Uuid::new_v4(),
        part_type: PartType::Inductor,
        value: "1mH".to_string(),
        body_shape: BodyShape::Coil,
        dimensions: Dimensions {
            outer_diameter: Some(outer),
            inner_diameter: Some(inner),
            ..Dimensions::default()
        },
        x,
        y,
        rotation: 0.0,
        lead_config: LeadConfig::Radial {
            pattern: Some(LeadPattern::Opposite),
            spacing: None,
        },
        hole_diameter: 1.2,
    }
}

/// A rectangular part with no declared dimensions, for default-substitution
/// scenarios.
pub fn bare_rectangular_resistor(x: f64, y: f64) -> PlacedComponent {
    PlacedComponent {
        id: Uuid::new_v4(),
        part_type: PartType::Resistor,
        value: "10R".to_string(),
        body_shape: BodyShape::Rectangular,
        dimensions: Dimensions::default(),
        x,
        y,
        rotation: 0.0,
        lead_config: LeadConfig::Radial {
            pattern: None,
            spacing: None,
        },
        hole_diameter: 0.8,
    }
}

// ── Mesh Math Utilities ─────────────────────────────────────────────────────

/// Compute axis-aligned bounding box of a RenderMesh. Returns (min, max).
pub fn mesh_bounding_box(mesh: &RenderMesh) -> ([f32; 3], [f32; 3]) {
    assert!(
        mesh.vertices.len() >= 3,
        "Mesh must have at least one vertex"
    );
    let mut min = [f32::MAX; 3];
    let mut max = [f32::MIN; 3];
    for chunk in mesh.vertices.chunks(3) {
        for i in 0..3 {
            min[i] = min[i].min(chunk[i]);
            max[i] = max[i].max(chunk[i]);
        }
    }
    (min, max)
}

/// Compute the signed volume of a triangle mesh using the divergence theorem.
///
/// For a closed (watertight) mesh, this returns the enclosed volume.
/// For open meshes, the result may be meaningless.
pub fn mesh_volume(mesh: &RenderMesh) -> f64 {
    let verts = &mesh.vertices;
    let mut volume = 0.0f64;

    for tri in mesh.indices.chunks(3) {
        if tri.len() < 3 {
            continue;
        }
        let (i0, i1, i2) = (
            tri[0] as usize * 3,
            tri[1] as usize * 3,
            tri[2] as usize * 3,
        );
        if i0 + 2 >= verts.len() || i1 + 2 >= verts.len() || i2 + 2 >= verts.len() {
            continue;
        }

        let (x0, y0, z0) = (verts[i0] as f64, verts[i0 + 1] as f64, verts[i0 + 2] as f64);
        let (x1, y1, z1) = (verts[i1] as f64, verts[i1 + 1] as f64, verts[i1 + 2] as f64);
        let (x2, y2, z2) = (verts[i2] as f64, verts[i2 + 1] as f64, verts[i2 + 2] as f64);

        // Signed volume of tetrahedron formed by triangle and origin
        volume += x0 * (y1 * z2 - y2 * z1) + x1 * (y2 * z0 - y0 * z2) + x2 * (y0 * z1 - y1 * z0);
    }

    (volume / 6.0).abs()
}

/// Compute the total surface area of a triangle mesh.
pub fn mesh_surface_area(mesh: &RenderMesh) -> f64 {
    let verts = &mesh.vertices;
    let mut area = 0.0f64;

    for tri in mesh.indices.chunks(3) {
        if tri.len() < 3 {
            continue;
        }
        let (i0, i1, i2) = (
            tri[0] as usize * 3,
            tri[1] as usize * 3,
            tri[2] as usize * 3,
        );
        if i0 + 2 >= verts.len() || i1 + 2 >= verts.len() || i2 + 2 >= verts.len() {
            continue;
        }

        let ax = verts[i1] as f64 - verts[i0] as f64;
        let ay = verts[i1 + 1] as f64 - verts[i0 + 1] as f64;
        let az = verts[i1 + 2] as f64 - verts[i0 + 2] as f64;
        let bx = verts[i2] as f64 - verts[i0] as f64;
        let by = verts[i2 + 1] as f64 - verts[i0 + 1] as f64;
        let bz = verts[i2 + 2] as f64 - verts[i0 + 2] as f64;

        // Cross product magnitude / 2
        let cx = ay * bz - az * by;
        let cy = az * bx - ax * bz;
        let cz = ax * by - ay * bx;
        area += (cx * cx + cy * cy + cz * cz).sqrt() / 2.0;
    }

    area
}

/// Count mesh edges: returns (total_edges, boundary_edges).
///
/// Vertices are welded by position first, so per-face tessellations that
/// duplicate corner points still pair their shared edges. A boundary edge
/// belongs to exactly one triangle; a watertight mesh has none.
pub fn count_mesh_edges(mesh: &RenderMesh) -> (usize, usize) {
    use std::collections::HashMap;

    // Weld at micron resolution.
    fn quantize(v: f32) -> i64 {
        (v as f64 * 1e3).round() as i64
    }

    let mut welded: HashMap<[i64; 3], u32> = HashMap::new();
    let mut remap = Vec::with_capacity(mesh.vertices.len() / 3);
    for chunk in mesh.vertices.chunks(3) {
        if chunk.len() < 3 {
            continue;
        }
        let key = [quantize(chunk[0]), quantize(chunk[1]), quantize(chunk[2])];
        let next = welded.len() as u32;
        remap.push(*welded.entry(key).or_insert(next));
    }

    let mut edge_counts: HashMap<(u32, u32), usize> = HashMap::new();
    for tri in mesh.indices.chunks(3) {
        if tri.len() < 3 {
            continue;
        }
        let (a, b, c) = (
            remap[tri[0] as usize],
            remap[tri[1] as usize],
            remap[tri[2] as usize],
        );
        for &(p, q) in &[(a, b), (b, c), (c, a)] {
            let key = (p.min(q), p.max(q));
            *edge_counts.entry(key).or_insert(0) += 1;
        }
    }

    let total = edge_counts.len();
    let boundary = edge_counts.values().filter(|&&c| c == 1).count();
    (total, boundary)
}
