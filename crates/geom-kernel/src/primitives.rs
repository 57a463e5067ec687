//! Primitive builders on top of truck's sweep API.
//!
//! truck has no built-in box/cylinder — everything is successive sweeps.
//! Both builders center the result at the origin, which is what the solid
//! engine's placement math assumes.

use std::f64::consts::PI;
use truck_modeling::builder;
use truck_modeling::topology::Solid;
use truck_modeling::{Point3, Rad, Vector3};

use crate::types::KernelError;

/// Box solid centered at the origin, via successive translational sweeps.
pub fn make_box(w: f64, d: f64, h: f64) -> Solid {
    let v = builder::vertex(Point3::new(-w / 2.0, -d / 2.0, -h / 2.0));
    let edge = builder::tsweep(&v, Vector3::new(w, 0.0, 0.0));
    let face = builder::tsweep(&edge, Vector3::new(0.0, d, 0.0));
    builder::tsweep(&face, Vector3::new(0.0, 0.0, h))
}

/// Cylinder solid centered at the origin, axis along +Z:
/// circle wire -> planar face -> translational sweep.
pub fn make_cylinder(radius: f64, height: f64) -> Result<Solid, KernelError> {
    let v = builder::vertex(Point3::new(radius, 0.0, -height / 2.0));
    let wire = builder::rsweep(
        &v,
        Point3::new(0.0, 0.0, -height / 2.0),
        Vector3::unit_z(),
        Rad(2.0 * PI),
    );
    let face = builder::try_attach_plane(&[wire]).map_err(|e| KernelError::Other {
        message: format!("failed to create circular face: {}", e),
    })?;
    Ok(builder::tsweep(&face, Vector3::new(0.0, 0.0, height)))
}
