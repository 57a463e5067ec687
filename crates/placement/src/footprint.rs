//! Component-local geometry: 2D footprint and lead hole positions.
//!
//! Everything here is in the component's own frame: x along the nominal
//! length axis, y lateral, origin at the body center. The IGS builder
//! rotates and translates these into board-world coordinates.

use crossboard_types::{BodyShape, Dimensions, LeadConfig, LeadPattern, PlacedComponent, DEFAULTS};

/// Axis-aligned clearance footprint of a component body, before rotation.
///
/// This feeds the collision boxes only. Cylinders put their diameter across
/// x and their length across y; placement and spiral-search results depend
/// on that mapping, so it must not be swapped to follow the body axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    /// Extent along the local x axis.
    pub width: f64,
    /// Extent along the local y axis.
    pub depth: f64,
}

/// A lead hole in the component's local frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalLeadHole {
    pub x: f64,
    pub y: f64,
    pub diameter: f64,
}

/// Compute the 2D footprint of a body shape, substituting defaults for any
/// missing dimensions. The same defaults feed the lead hole resolution so
/// the recess and the drilled holes always agree.
pub fn resolve_footprint(shape: BodyShape, dims: &Dimensions) -> Footprint {
    match shape {
        // Diameter as width, length as depth.
        BodyShape::Cylinder => Footprint {
            width: dims.diameter.unwrap_or(DEFAULTS.diameter),
            depth: dims.length.unwrap_or(DEFAULTS.length),
        },
        BodyShape::Coil => {
            let outer = dims.outer_diameter.unwrap_or(DEFAULTS.outer_diameter);
            Footprint {
                width: outer,
                depth: outer,
            }
        }
        BodyShape::Rectangular => Footprint {
            width: dims.width.unwrap_or(DEFAULTS.width),
            depth: dims.depth.or(dims.length).unwrap_or(DEFAULTS.depth),
        },
    }
}

/// Compute lead hole positions in the component's local frame.
///
/// Never fails: a non-positive hole diameter is passed through as-is and
/// flagged by IGS validation, which decides severity.
pub fn resolve_lead_holes(component: &PlacedComponent) -> Vec<LocalLeadHole> {
    let diameter = component.hole_diameter;

    match component.lead_config {
        LeadConfig::Axial { end_inset } => {
            let length = component.dimensions.length.unwrap_or(DEFAULTS.length);
            let inset = end_inset.unwrap_or(DEFAULTS.end_inset);
            let offset = length / 2.0 - inset;
            vec![
                LocalLeadHole {
                    x: -offset,
                    y: 0.0,
                    diameter,
                },
                LocalLeadHole {
                    x: offset,
                    y: 0.0,
                    diameter,
                },
            ]
        }
        LeadConfig::Radial { pattern, spacing } => {
            if component.body_shape == BodyShape::Coil {
                let inner_radius = component
                    .dimensions
                    .inner_diameter
                    .unwrap_or(DEFAULTS.inner_diameter)
                    / 2.0;
                let (a1, a2) = match pattern.unwrap_or(LeadPattern::Opposite) {
                    LeadPattern::Adjacent => (0.0_f64, std::f64::consts::FRAC_PI_4),
                    LeadPattern::Opposite => (0.0_f64, std::f64::consts::PI),
                };
                vec![
                    LocalLeadHole {
                        x: inner_radius * a1.cos(),
                        y: inner_radius * a1.sin(),
                        diameter,
                    },
                    LocalLeadHole {
                        x: inner_radius * a2.cos(),
                        y: inner_radius * a2.sin(),
                        diameter,
                    },
                ]
            } else {
                let spacing = spacing.unwrap_or(DEFAULTS.lead_spacing);
                vec![
                    LocalLeadHole {
                        x: -spacing / 2.0,
                        y: 0.0,
                        diameter,
                    },
                    LocalLeadHole {
                        x: spacing / 2.0,
                        y: 0.0,
                        diameter,
                    },
                ]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossboard_types::PartType;
    use uuid::Uuid;

    fn cylinder(length: Option<f64>, diameter: Option<f64>) -> PlacedComponent {
        PlacedComponent {
            id: Uuid::new_v4(),
            part_type: PartType::Capacitor,
            value: "10uF".to_string(),
            body_shape: BodyShape::Cylinder,
            dimensions: Dimensions {
                length,
                diameter,
                ..Dimensions::default()
            },
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            lead_config: LeadConfig::Axial { end_inset: None },
            hole_diameter: 1.0,
        }
    }

    #[test]
    fn axial_holes_sit_inset_from_body_ends() {
        let mut comp = cylinder(Some(44.0), Some(18.0));
        comp.lead_config = LeadConfig::Axial {
            end_inset: Some(2.0),
        };
        let holes = resolve_lead_holes(&comp);
        assert_eq!(holes.len(), 2);
        assert_eq!(holes[0].x, -20.0);
        assert_eq!(holes[1].x, 20.0);
        assert_eq!(holes[0].y, 0.0);
    }

    #[test]
    fn footprint_and_holes_share_the_length_default() {
        // A cylinder with no declared length: both the footprint and the
        // hole span must derive from the same 20mm fallback.
        let comp = cylinder(None, None);
        let fp = resolve_footprint(comp.body_shape, &comp.dimensions);
        assert_eq!(fp.depth, 20.0);
        assert_eq!(fp.width, 10.0);

        let holes = resolve_lead_holes(&comp);
        let span = holes[1].x - holes[0].x;
        assert_eq!(span, 20.0 - 2.0 * 2.0);
    }

    #[test]
    fn coil_adjacent_pattern_uses_inner_circle() {
        let comp = PlacedComponent {
            id: Uuid::new_v4(),
            part_type: PartType::Inductor,
            value: "1mH".to_string(),
            body_shape: BodyShape::Coil,
            dimensions: Dimensions {
                outer_diameter: Some(30.0),
                inner_diameter: Some(16.0),
                ..Dimensions::default()
            },
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            lead_config: LeadConfig::Radial {
                pattern: Some(LeadPattern::Adjacent),
                spacing: None,
            },
            hole_diameter: 1.2,
        };
        let holes = resolve_lead_holes(&comp);
        assert!((holes[0].x - 8.0).abs() < 1e-12);
        assert!((holes[0].y - 0.0).abs() < 1e-12);
        // Second hole at 45 degrees on the radius-8 circle.
        let r = (holes[1].x * holes[1].x + holes[1].y * holes[1].y).sqrt();
        assert!((r - 8.0).abs() < 1e-12);
        assert!((holes[1].x - holes[1].y).abs() < 1e-12);
    }

    #[test]
    fn coil_opposite_pattern_spans_the_diameter() {
        let comp = PlacedComponent {
            id: Uuid::new_v4(),
            part_type: PartType::Inductor,
            value: "1mH".to_string(),
            body_shape: BodyShape::Coil,
            dimensions: Dimensions::default(),
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            lead_config: LeadConfig::Radial {
                pattern: Some(LeadPattern::Opposite),
                spacing: None,
            },
            hole_diameter: 1.2,
        };
        let holes = resolve_lead_holes(&comp);
        assert!((holes[0].x - 7.5).abs() < 1e-12);
        assert!((holes[1].x + 7.5).abs() < 1e-12);
        assert!(holes[1].y.abs() < 1e-12);
    }

    #[test]
    fn rectangular_radial_holes_use_spacing_default() {
        let comp = PlacedComponent {
            id: Uuid::new_v4(),
            part_type: PartType::Resistor,
            value: "10R".to_string(),
            body_shape: BodyShape::Rectangular,
            dimensions: Dimensions::default(),
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            lead_config: LeadConfig::Radial {
                pattern: None,
                spacing: None,
            },
            hole_diameter: 0.8,
        };
        let holes = resolve_lead_holes(&comp);
        assert_eq!(holes[0].x, -2.5);
        assert_eq!(holes[1].x, 2.5);
    }

    #[test]
    fn resolver_passes_bad_hole_diameter_through() {
        let mut comp = cylinder(Some(20.0), None);
        comp.hole_diameter = 0.0;
        let holes = resolve_lead_holes(&comp);
        // Severity is the validator's call, not the resolver's.
        assert_eq!(holes[0].diameter, 0.0);
    }
}
