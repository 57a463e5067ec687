//! TruckKernel — real geometry kernel wrapping the truck BREP stack.

use std::collections::HashMap;

use truck_modeling::builder;
use truck_modeling::topology::Solid;
use truck_modeling::{Point3, Rad, Vector3};

use crate::primitives;
use crate::tessellation;
use crate::traits::{require_positive, Kernel};
use crate::types::*;

/// Tolerance handed to truck's boolean operations.
const BOOLEAN_TOLERANCE: f64 = 0.05;

/// Real geometry kernel backed by the truck BREP library.
pub struct TruckKernel {
    next_handle: u64,
    solids: HashMap<u64, Solid>,
}

impl TruckKernel {
    pub fn new() -> Self {
        Self {
            next_handle: 1,
            solids: HashMap::new(),
        }
    }

    fn store_solid(&mut self, solid: Solid) -> SolidHandle {
        let handle = SolidHandle(self.next_handle);
        self.next_handle += 1;
        self.solids.insert(handle.id(), solid);
        handle
    }

    fn get_solid(&self, handle: &SolidHandle) -> Result<&Solid, KernelError> {
        self.solids
            .get(&handle.id())
            .ok_or(KernelError::SolidNotFound {
                handle: handle.id(),
            })
    }
}

impl Default for TruckKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl Kernel for TruckKernel {
    fn make_box(
        &mut self,
        width: f64,
        depth: f64,
        height: f64,
    ) -> Result<SolidHandle, KernelError> {
        require_positive(width, "box width")?;
        require_positive(depth, "box depth")?;
        require_positive(height, "box height")?;
        let solid = primitives::make_box(width, depth, height);
        Ok(self.store_solid(solid))
    }

    fn make_cylinder(&mut self, radius: f64, height: f64) -> Result<SolidHandle, KernelError> {
        require_positive(radius, "cylinder radius")?;
        require_positive(height, "cylinder height")?;
        let solid = primitives::make_cylinder(radius, height)?;
        Ok(self.store_solid(solid))
    }

    fn translate(
        &mut self,
        solid: &SolidHandle,
        offset: [f64; 3],
    ) -> Result<SolidHandle, KernelError> {
        let input = self.get_solid(solid)?;
        let moved = builder::translated(input, Vector3::new(offset[0], offset[1], offset[2]));
        Ok(self.store_solid(moved))
    }

    fn rotate(
        &mut self,
        solid: &SolidHandle,
        axis: Axis,
        radians: f64,
    ) -> Result<SolidHandle, KernelError> {
        let input = self.get_solid(solid)?;
        let dir = axis.direction();
        let rotated = builder::rotated(
            input,
            Point3::new(0.0, 0.0, 0.0),
            Vector3::new(dir[0], dir[1], dir[2]),
            Rad(radians),
        );
        Ok(self.store_solid(rotated))
    }

    fn union(&mut self, a: &SolidHandle, b: &SolidHandle) -> Result<SolidHandle, KernelError> {
        let solid_a = self.get_solid(a)?.clone();
        let solid_b = self.get_solid(b)?.clone();

        let result = truck_shapeops::or(&solid_a, &solid_b, BOOLEAN_TOLERANCE).ok_or_else(|| {
            KernelError::BooleanFailed {
                reason: "truck or() returned None".to_string(),
            }
        })?;
        Ok(self.store_solid(result))
    }

    fn subtract(&mut self, a: &SolidHandle, b: &SolidHandle) -> Result<SolidHandle, KernelError> {
        let solid_a = self.get_solid(a)?.clone();
        let mut solid_b = self.get_solid(b)?.clone();

        // Subtraction = A ∩ ¬B. not() mutates in place.
        solid_b.not();
        let result =
            truck_shapeops::and(&solid_a, &solid_b, BOOLEAN_TOLERANCE).ok_or_else(|| {
                KernelError::BooleanFailed {
                    reason: "truck and() returned None for subtraction".to_string(),
                }
            })?;
        Ok(self.store_solid(result))
    }

    fn tessellate(
        &mut self,
        solid: &SolidHandle,
        tolerance: f64,
    ) -> Result<RenderMesh, KernelError> {
        let truck_solid = self.get_solid(solid)?;
        tessellation::tessellate_solid(truck_solid, tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_primitives_are_rejected() {
        let mut kernel = TruckKernel::new();
        assert!(matches!(
            kernel.make_box(0.0, 1.0, 1.0),
            Err(KernelError::DegeneratePrimitive { .. })
        ));
        assert!(matches!(
            kernel.make_cylinder(-2.0, 5.0),
            Err(KernelError::DegeneratePrimitive { .. })
        ));
        assert!(matches!(
            kernel.make_cylinder(2.0, f64::NAN),
            Err(KernelError::DegeneratePrimitive { .. })
        ));
    }

    #[test]
    fn translated_box_moves_its_vertices() {
        let mut kernel = TruckKernel::new();
        let b = kernel.make_box(2.0, 2.0, 2.0).unwrap();
        let moved = kernel.translate(&b, [10.0, 0.0, 0.0]).unwrap();

        let solid = kernel.get_solid(&moved).unwrap();
        let shell = &solid.boundaries()[0];
        let mut min_x = f64::MAX;
        for v in shell.vertex_iter() {
            min_x = min_x.min(v.point()[0]);
        }
        assert!((min_x - 9.0).abs() < 1e-10);
    }

    #[test]
    fn tessellated_box_is_a_closed_mesh() {
        let mut kernel = TruckKernel::new();
        let b = kernel.make_box(10.0, 6.0, 2.0).unwrap();
        let mesh = kernel.tessellate(&b, 0.1).unwrap();
        assert!(mesh.triangle_count() >= 12);
        assert_eq!(mesh.vertices.len() % 3, 0);
        assert_eq!(mesh.indices.len() % 3, 0);
    }

    #[test]
    fn unknown_handle_is_an_error() {
        let mut kernel = TruckKernel::new();
        let bogus = SolidHandle(999);
        assert!(matches!(
            kernel.translate(&bogus, [1.0, 0.0, 0.0]),
            Err(KernelError::SolidNotFound { .. })
        ));
    }
}
