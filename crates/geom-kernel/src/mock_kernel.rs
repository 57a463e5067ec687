//! MockKernel — deterministic test double implementing Kernel.
//!
//! Tracks every solid as an axis-aligned bounding volume plus a primitive
//! count. Booleans are approximated (union merges bounds, subtraction keeps
//! the minuend's bounds), which is exact enough for the pipeline tests:
//! placement math, cutout batching, and export plumbing are all observable
//! through bounds and primitive counts without paying for real BREP booleans.

use std::collections::HashMap;

use crate::traits::{require_positive, Kernel};
use crate::types::*;

/// A mock solid: bounding volume and how many primitives went into it.
#[derive(Debug, Clone)]
struct MockSolid {
    min: [f64; 3],
    max: [f64; 3],
    primitive_count: usize,
}

/// Deterministic test double for the geometry kernel.
pub struct MockKernel {
    next_handle: u64,
    solids: HashMap<u64, MockSolid>,
    union_count: usize,
    subtract_count: usize,
}

impl MockKernel {
    pub fn new() -> Self {
        Self {
            next_handle: 1,
            solids: HashMap::new(),
            union_count: 0,
            subtract_count: 0,
        }
    }

    /// Bounding box of a solid: (min, max). Test-inspection hook.
    pub fn bounds(&self, handle: &SolidHandle) -> Option<([f64; 3], [f64; 3])> {
        self.solids.get(&handle.id()).map(|s| (s.min, s.max))
    }

    /// Number of primitives folded into a solid. Test-inspection hook.
    pub fn primitive_count(&self, handle: &SolidHandle) -> Option<usize> {
        self.solids.get(&handle.id()).map(|s| s.primitive_count)
    }

    /// How many boolean unions have been executed.
    pub fn union_count(&self) -> usize {
        self.union_count
    }

    /// How many boolean subtractions have been executed.
    pub fn subtract_count(&self) -> usize {
        self.subtract_count
    }

    fn store(&mut self, solid: MockSolid) -> SolidHandle {
        let handle = SolidHandle(self.next_handle);
        self.next_handle += 1;
        self.solids.insert(handle.id(), solid);
        handle
    }

    fn get(&self, handle: &SolidHandle) -> Result<&MockSolid, KernelError> {
        self.solids
            .get(&handle.id())
            .ok_or(KernelError::SolidNotFound {
                handle: handle.id(),
            })
    }
}

impl Default for MockKernel {
    fn default() -> Self {
        Self::new()
    }
}

/// Rotate a point about the origin around a coordinate axis.
fn rotate_point(p: [f64; 3], axis: Axis, radians: f64) -> [f64; 3] {
    let (s, c) = radians.sin_cos();
    match axis {
        Axis::X => [p[0], p[1] * c - p[2] * s, p[1] * s + p[2] * c],
        Axis::Y => [p[0] * c + p[2] * s, p[1], -p[0] * s + p[2] * c],
        Axis::Z => [p[0] * c - p[1] * s, p[0] * s + p[1] * c, p[2]],
    }
}

impl Kernel for MockKernel {
    fn make_box(
        &mut self,
        width: f64,
        depth: f64,
        height: f64,
    ) -> Result<SolidHandle, KernelError> {
        require_positive(width, "box width")?;
        require_positive(depth, "box depth")?;
        require_positive(height, "box height")?;
        Ok(self.store(MockSolid {
            min: [-width / 2.0, -depth / 2.0, -height / 2.0],
            max: [width / 2.0, depth / 2.0, height / 2.0],
            primitive_count: 1,
        }))
    }

    fn make_cylinder(&mut self, radius: f64, height: f64) -> Result<SolidHandle, KernelError> {
        require_positive(radius, "cylinder radius")?;
        require_positive(height, "cylinder height")?;
        Ok(self.store(MockSolid {
            min: [-radius, -radius, -height / 2.0],
            max: [radius, radius, height / 2.0],
            primitive_count: 1,
        }))
    }

    fn translate(
        &mut self,
        solid: &SolidHandle,
        offset: [f64; 3],
    ) -> Result<SolidHandle, KernelError> {
        let s = self.get(solid)?.clone();
        let mut min = s.min;
        let mut max = s.max;
        for i in 0..3 {
            min[i] += offset[i];
            max[i] += offset[i];
        }
        Ok(self.store(MockSolid {
            min,
            max,
            primitive_count: s.primitive_count,
        }))
    }

    fn rotate(
        &mut self,
        solid: &SolidHandle,
        axis: Axis,
        radians: f64,
    ) -> Result<SolidHandle, KernelError> {
        let s = self.get(solid)?.clone();

        // Rotate the 8 box corners and take the enclosing AABB.
        let mut min = [f64::MAX; 3];
        let mut max = [f64::MIN; 3];
        for &x in &[s.min[0], s.max[0]] {
            for &y in &[s.min[1], s.max[1]] {
                for &z in &[s.min[2], s.max[2]] {
                    let p = rotate_point([x, y, z], axis, radians);
                    for i in 0..3 {
                        min[i] = min[i].min(p[i]);
                        max[i] = max[i].max(p[i]);
                    }
                }
            }
        }
        Ok(self.store(MockSolid {
            min,
            max,
            primitive_count: s.primitive_count,
        }))
    }

    fn union(&mut self, a: &SolidHandle, b: &SolidHandle) -> Result<SolidHandle, KernelError> {
        let sa = self.get(a)?.clone();
        let sb = self.get(b)?.clone();
        self.union_count += 1;

        let mut min = [0.0; 3];
        let mut max = [0.0; 3];
        for i in 0..3 {
            min[i] = sa.min[i].min(sb.min[i]);
            max[i] = sa.max[i].max(sb.max[i]);
        }
        Ok(self.store(MockSolid {
            min,
            max,
            primitive_count: sa.primitive_count + sb.primitive_count,
        }))
    }

    fn subtract(&mut self, a: &SolidHandle, b: &SolidHandle) -> Result<SolidHandle, KernelError> {
        let sa = self.get(a)?.clone();
        let sb = self.get(b)?.clone();
        self.subtract_count += 1;

        // Removing material cannot grow the minuend.
        Ok(self.store(MockSolid {
            min: sa.min,
            max: sa.max,
            primitive_count: sa.primitive_count + sb.primitive_count,
        }))
    }

    fn tessellate(
        &mut self,
        solid: &SolidHandle,
        _tolerance: f64,
    ) -> Result<RenderMesh, KernelError> {
        let s = self.get(solid)?.clone();
        for i in 0..3 {
            if s.max[i] - s.min[i] <= 0.0 {
                return Err(KernelError::TessellationFailed {
                    reason: "solid has a degenerate bounding volume".to_string(),
                });
            }
        }

        // Emit the bounding box as a 12-triangle closed mesh.
        let (lo, hi) = (s.min, s.max);
        let corners: [[f64; 3]; 8] = [
            [lo[0], lo[1], lo[2]],
            [hi[0], lo[1], lo[2]],
            [hi[0], hi[1], lo[2]],
            [lo[0], hi[1], lo[2]],
            [lo[0], lo[1], hi[2]],
            [hi[0], lo[1], hi[2]],
            [hi[0], hi[1], hi[2]],
            [lo[0], hi[1], hi[2]],
        ];

        let mut vertices = Vec::with_capacity(24);
        for c in &corners {
            vertices.push(c[0] as f32);
            vertices.push(c[1] as f32);
            vertices.push(c[2] as f32);
        }

        let indices: Vec<u32> = vec![
            0, 2, 1, 0, 3, 2, // bottom (z = lo)
            4, 5, 6, 4, 6, 7, // top (z = hi)
            0, 1, 5, 0, 5, 4, // front
            2, 3, 7, 2, 7, 6, // back
            0, 4, 7, 0, 7, 3, // left
            1, 2, 6, 1, 6, 5, // right
        ];

        Ok(RenderMesh {
            vertices,
            normals: vec![0.0; 24],
            indices,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_bounds_are_centered() {
        let mut kernel = MockKernel::new();
        let b = kernel.make_box(10.0, 6.0, 2.0).unwrap();
        let (min, max) = kernel.bounds(&b).unwrap();
        assert_eq!(min, [-5.0, -3.0, -1.0]);
        assert_eq!(max, [5.0, 3.0, 1.0]);
    }

    #[test]
    fn rotate_z_quarter_turn_swaps_extents() {
        let mut kernel = MockKernel::new();
        let b = kernel.make_box(10.0, 2.0, 1.0).unwrap();
        let r = kernel
            .rotate(&b, Axis::Z, std::f64::consts::FRAC_PI_2)
            .unwrap();
        let (min, max) = kernel.bounds(&r).unwrap();
        assert!((max[0] - 1.0).abs() < 1e-12);
        assert!((max[1] - 5.0).abs() < 1e-12);
        assert!((min[0] + 1.0).abs() < 1e-12);
        assert!((min[1] + 5.0).abs() < 1e-12);
    }

    #[test]
    fn union_merges_bounds_and_counts() {
        let mut kernel = MockKernel::new();
        let a = kernel.make_box(2.0, 2.0, 2.0).unwrap();
        let b = kernel.make_cylinder(1.0, 4.0).unwrap();
        let b = kernel.translate(&b, [5.0, 0.0, 0.0]).unwrap();
        let u = kernel.union(&a, &b).unwrap();
        let (min, max) = kernel.bounds(&u).unwrap();
        assert_eq!(min[0], -1.0);
        assert_eq!(max[0], 6.0);
        assert_eq!(kernel.primitive_count(&u), Some(2));
        assert_eq!(kernel.union_count(), 1);
    }

    #[test]
    fn subtract_keeps_minuend_bounds() {
        let mut kernel = MockKernel::new();
        let a = kernel.make_box(10.0, 10.0, 2.0).unwrap();
        let b = kernel.make_cylinder(1.0, 6.0).unwrap();
        let d = kernel.subtract(&a, &b).unwrap();
        let (min, max) = kernel.bounds(&d).unwrap();
        assert_eq!(min, [-5.0, -5.0, -1.0]);
        assert_eq!(max, [5.0, 5.0, 1.0]);
        assert_eq!(kernel.subtract_count(), 1);
    }

    #[test]
    fn tessellated_mock_mesh_is_watertight() {
        let mut kernel = MockKernel::new();
        let b = kernel.make_box(4.0, 4.0, 4.0).unwrap();
        let mesh = kernel.tessellate(&b, 0.1).unwrap();
        assert_eq!(mesh.triangle_count(), 12);

        // Every undirected edge must be shared by exactly two triangles.
        let mut edges: HashMap<(u32, u32), usize> = HashMap::new();
        for tri in mesh.indices.chunks(3) {
            for &(a, b) in &[(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                *edges.entry((a.min(b), a.max(b))).or_insert(0) += 1;
            }
        }
        assert!(edges.values().all(|&c| c == 2));
    }
}
