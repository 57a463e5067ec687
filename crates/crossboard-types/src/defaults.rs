//! Central table of fallback dimensions and manufacturing constants.
//!
//! The footprint resolver, the IGS builder and the solid engine all read
//! from this one table, so a recess and the holes drilled for the same
//! component can never disagree about a defaulted dimension.

/// All magic numbers of the geometry pipeline, in one place. Millimeters.
#[derive(Debug, Clone, Copy)]
pub struct GeometryDefaults {
    /// Fallback body diameter for cylinders.
    pub diameter: f64,
    /// Fallback body length for cylinders.
    pub length: f64,
    /// Fallback outer diameter for coils.
    pub outer_diameter: f64,
    /// Fallback inner diameter for coils.
    pub inner_diameter: f64,
    /// Fallback width for rectangular bodies.
    pub width: f64,
    /// Fallback depth/length for rectangular bodies.
    pub depth: f64,
    /// Fallback body height when none of height/diameter/outer_diameter is set.
    pub height: f64,
    /// Axial lead exit inset from each body end.
    pub end_inset: f64,
    /// Radial lead spacing for non-coil bodies.
    pub lead_spacing: f64,
    /// Radial clearance added around recess walls for easy component fit.
    pub recess_clearance: f64,
    /// Clearance added to the nominal lead diameter before drilling.
    pub lead_hole_clearance: f64,
    /// Recess depth as a fraction of component height.
    pub recess_depth_factor: f64,
    /// Absolute recess depth cap.
    pub max_recess_depth: f64,
    /// Minimum board material left under a recess.
    pub min_base_thickness: f64,
    /// Clearance margin added to every side of a collision bounding box.
    pub collision_clearance: f64,
    /// Corner mounting hole inset from each board edge.
    pub mount_inset: f64,
    /// Corner mounting hole diameter (M3 clearance).
    pub mount_diameter: f64,
    /// Countersink diameter as a multiple of the hole diameter.
    pub countersink_diameter_factor: f64,
    /// Countersink depth as a multiple of the countersink diameter.
    pub countersink_depth_factor: f64,
    /// Vertical offset of auto-generated labels from the component center.
    pub label_offset: f64,
    /// Font size of auto-generated index labels.
    pub id_font_size: f64,
    /// Font size of auto-generated value labels.
    pub value_font_size: f64,
    /// Emboss depth of auto-generated labels.
    pub label_depth: f64,
    /// Character advance as a fraction of the font size.
    pub text_advance: f64,
    /// Extra cutter length beyond the board thickness for through-holes.
    pub through_margin: f64,
    /// Minimum distance from a lead hole wall to the board edge.
    pub edge_clearance: f64,
}

pub const DEFAULTS: GeometryDefaults = GeometryDefaults {
    diameter: 10.0,
    length: 20.0,
    outer_diameter: 30.0,
    inner_diameter: 15.0,
    width: 20.0,
    depth: 15.0,
    height: 10.0,
    end_inset: 2.0,
    lead_spacing: 5.0,
    recess_clearance: 0.5,
    lead_hole_clearance: 0.2,
    recess_depth_factor: 0.5,
    max_recess_depth: 3.0,
    min_base_thickness: 1.0,
    collision_clearance: 3.0,
    mount_inset: 5.0,
    mount_diameter: 3.2,
    countersink_diameter_factor: 1.8,
    countersink_depth_factor: 0.5,
    label_offset: 10.0,
    id_font_size: 3.0,
    value_font_size: 2.5,
    label_depth: 0.5,
    text_advance: 0.7,
    through_margin: 2.0,
    edge_clearance: 2.0,
};
