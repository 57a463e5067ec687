//! Manufacturability validation of an IGS document.
//!
//! Errors are hard-stop: the solid engine must not run on a document that
//! produced any. Warnings are advisories; generation proceeds and the
//! caller decides how to surface them.

use crossboard_types::{IgsComponent, IgsDocument, RecessSpec};
use uuid::Uuid;

/// Rule violations that block solid generation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("board dimensions must be positive: {width} x {height}")]
    NonPositiveBoard { width: f64, height: f64 },

    #[error("board thickness must be positive: {thickness}")]
    NonPositiveThickness { thickness: f64 },

    #[error("corner radius {radius} must be below {limit} for this board")]
    CornerRadiusTooLarge { radius: f64, limit: f64 },

    #[error("duplicate component id: {id}")]
    DuplicateComponentId { id: Uuid },

    #[error("component {id}: lead hole diameter {diameter} must be positive")]
    NonPositiveLeadHole { id: Uuid, diameter: f64 },

    #[error("component {id}: recess depth {depth} must be positive")]
    NonPositiveRecess { id: Uuid, depth: f64 },

    #[error("component {id}: recess depth {depth} exceeds the {limit} limit")]
    RecessTooDeep { id: Uuid, depth: f64, limit: f64 },

    #[error("mounting hole {index}: diameter {diameter} must be positive")]
    MountingHoleDiameter { index: usize, diameter: f64 },

    #[error("mounting hole {index} lies outside the board outline")]
    MountingHoleOutOfBounds { index: usize },

    #[error("label {index}: font size {font_size} must be positive")]
    LabelFontSize { index: usize, font_size: f64 },
}

/// Advisory conditions. Generation proceeds; never silently dropped.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationWarning {
    #[error("board thickness {thickness}mm may be too thin for components")]
    ThinBoard { thickness: f64 },

    #[error("component {id} extends past the board edge")]
    ComponentPastEdge { id: Uuid },

    #[error("component {id} has lead holes within 2mm of the board edge")]
    LeadHoleNearEdge { id: Uuid },

    #[error("components {a} and {b} may be too close")]
    ComponentsTooClose { a: Uuid, b: Uuid },
}

/// Outcome of validating an IGS document.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Minimum board thickness below which components tend to poke through.
const THIN_BOARD_MM: f64 = 3.0;
/// Minimum distance from a lead hole wall to the board edge.
const EDGE_CLEARANCE_MM: f64 = 2.0;
/// Minimum clearance between component outlines.
const COMPONENT_CLEARANCE_MM: f64 = 3.0;

/// Footprint extents (width, depth) implied by a recess spec.
fn recess_extents(recess: &RecessSpec) -> (f64, f64) {
    match *recess {
        RecessSpec::Cylindrical {
            diameter, length, ..
        } => (length, diameter),
        RecessSpec::Toroidal { outer_diameter, .. } => (outer_diameter, outer_diameter),
        RecessSpec::Rectangular { width, length, .. } => (width, length),
    }
}

fn component_size(comp: &IgsComponent) -> f64 {
    let (w, d) = recess_extents(&comp.recess);
    w.max(d)
}

/// Validate an IGS document against the manufacturability rules.
pub fn validate_igs(igs: &IgsDocument) -> ValidationReport {
    let mut report = ValidationReport::default();
    let board = &igs.board;

    if board.width <= 0.0 || board.height <= 0.0 {
        report.errors.push(ValidationError::NonPositiveBoard {
            width: board.width,
            height: board.height,
        });
    }
    if board.thickness <= 0.0 {
        report.errors.push(ValidationError::NonPositiveThickness {
            thickness: board.thickness,
        });
    } else if board.thickness < THIN_BOARD_MM {
        report.warnings.push(ValidationWarning::ThinBoard {
            thickness: board.thickness,
        });
    }

    let radius_limit = board.width.min(board.height) / 2.0;
    if board.corner_radius < 0.0 || (radius_limit > 0.0 && board.corner_radius >= radius_limit) {
        report.errors.push(ValidationError::CornerRadiusTooLarge {
            radius: board.corner_radius,
            limit: radius_limit,
        });
    }

    let half_w = board.width / 2.0;
    let half_h = board.height / 2.0;
    let depth_limit = board.thickness - 1.0;

    let mut seen = std::collections::HashSet::new();
    for comp in &igs.components {
        if !seen.insert(comp.id) {
            report
                .errors
                .push(ValidationError::DuplicateComponentId { id: comp.id });
        }

        let depth = comp.recess.depth();
        if depth <= 0.0 {
            report.errors.push(ValidationError::NonPositiveRecess {
                id: comp.id,
                depth,
            });
        } else if depth > depth_limit {
            report.errors.push(ValidationError::RecessTooDeep {
                id: comp.id,
                depth,
                limit: depth_limit,
            });
        }

        let (fw, fd) = recess_extents(&comp.recess);
        if comp.x.abs() + fw / 2.0 > half_w || comp.y.abs() + fd / 2.0 > half_h {
            report
                .warnings
                .push(ValidationWarning::ComponentPastEdge { id: comp.id });
        }

        let mut near_edge = false;
        for hole in &comp.lead_holes {
            if hole.diameter <= 0.0 {
                report.errors.push(ValidationError::NonPositiveLeadHole {
                    id: comp.id,
                    diameter: hole.diameter,
                });
            }
            let clearance = hole.diameter / 2.0 + EDGE_CLEARANCE_MM;
            if hole.x.abs() > half_w - clearance || hole.y.abs() > half_h - clearance {
                near_edge = true;
            }
        }
        if near_edge {
            report
                .warnings
                .push(ValidationWarning::LeadHoleNearEdge { id: comp.id });
        }
    }

    // Pairwise proximity check on component centers.
    for (i, a) in igs.components.iter().enumerate() {
        for b in igs.components.iter().skip(i + 1) {
            let dist = ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt();
            let min_dist =
                (component_size(a) + component_size(b)) / 2.0 + COMPONENT_CLEARANCE_MM;
            if dist < min_dist {
                report
                    .warnings
                    .push(ValidationWarning::ComponentsTooClose { a: a.id, b: b.id });
            }
        }
    }

    for (index, hole) in board.mounting_holes.iter().enumerate() {
        if hole.diameter <= 0.0 {
            report.errors.push(ValidationError::MountingHoleDiameter {
                index,
                diameter: hole.diameter,
            });
        }
        if hole.x.abs() > half_w || hole.y.abs() > half_h {
            report
                .errors
                .push(ValidationError::MountingHoleOutOfBounds { index });
        }
    }

    for (index, label) in igs.labels.iter().enumerate() {
        if label.font_size <= 0.0 {
            report.errors.push(ValidationError::LabelFontSize {
                index,
                font_size: label.font_size,
            });
        }
    }

    report
}
