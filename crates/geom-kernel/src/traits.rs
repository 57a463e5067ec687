use crate::types::*;

/// Core CSG kernel trait. Keeps the boolean/triangulation engine a
/// replaceable capability: implemented by TruckKernel (wraps real truck)
/// and MockKernel (deterministic test double).
///
/// All primitives are centered at the origin; callers compose placement
/// from `rotate` and `translate`. Handles are immutable: every operation
/// returns a new solid and never mutates its inputs.
pub trait Kernel {
    /// Axis-aligned box centered at the origin.
    fn make_box(&mut self, width: f64, depth: f64, height: f64)
        -> Result<SolidHandle, KernelError>;

    /// Cylinder centered at the origin, axis along +Z.
    fn make_cylinder(&mut self, radius: f64, height: f64) -> Result<SolidHandle, KernelError>;

    /// Translate a solid by an offset vector.
    fn translate(&mut self, solid: &SolidHandle, offset: [f64; 3])
        -> Result<SolidHandle, KernelError>;

    /// Rotate a solid about a coordinate axis through the origin.
    fn rotate(
        &mut self,
        solid: &SolidHandle,
        axis: Axis,
        radians: f64,
    ) -> Result<SolidHandle, KernelError>;

    /// Boolean union of two solids.
    fn union(&mut self, a: &SolidHandle, b: &SolidHandle) -> Result<SolidHandle, KernelError>;

    /// Boolean subtraction: a minus b.
    fn subtract(&mut self, a: &SolidHandle, b: &SolidHandle) -> Result<SolidHandle, KernelError>;

    /// Tessellate a solid to a triangle mesh.
    fn tessellate(&mut self, solid: &SolidHandle, tolerance: f64)
        -> Result<RenderMesh, KernelError>;
}

/// Reject non-positive primitive parameters before they reach the boolean
/// engine. `what` names the offending parameter for the error message.
pub(crate) fn require_positive(value: f64, what: &str) -> Result<(), KernelError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(KernelError::DegeneratePrimitive {
            reason: format!("{} must be positive, got {}", what, value),
        })
    }
}
