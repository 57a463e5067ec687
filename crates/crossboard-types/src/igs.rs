//! The Intermediate Geometry Specification (IGS) document.
//!
//! IGS is the fully-resolved contract between the interactive state and the
//! solid engine. Every coordinate is board-centered and in millimeters, every
//! defaulted dimension has already been substituted, and no further shape
//! resolution happens downstream of its construction.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::component::PartType;

/// Current IGS document version. Semantic: readers reject a different major.
pub const IGS_VERSION: &str = "1.0.0";

/// The fully-resolved geometry plan for one board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IgsDocument {
    pub version: String,
    pub board: IgsBoard,
    pub components: Vec<IgsComponent>,
    pub labels: Vec<Label>,
    #[serde(default)]
    pub features: Vec<BoardFeature>,
}

/// Board geometry with mounting holes resolved to centered coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IgsBoard {
    pub width: f64,
    pub height: f64,
    pub thickness: f64,
    pub corner_radius: f64,
    pub mounting_holes: Vec<IgsMountingHole>,
}

/// A mounting hole in board-centered coordinates, countersink resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IgsMountingHole {
    pub x: f64,
    pub y: f64,
    pub diameter: f64,
    /// Depth from the top surface. None means through-hole.
    pub depth: Option<f64>,
    pub countersink: Option<Countersink>,
}

/// Resolved countersink geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Countersink {
    pub diameter: f64,
    pub depth: f64,
}

/// One placed component with its recess and world-space lead holes resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IgsComponent {
    pub id: Uuid,
    pub part_type: PartType,
    pub x: f64,
    pub y: f64,
    /// Rotation about the board normal, degrees CCW.
    pub rotation: f64,
    pub recess: RecessSpec,
    pub lead_holes: Vec<LeadHole>,
}

/// Recess cutout geometry seating a component body. Dimensions are the
/// declared body dimensions; fit clearance is added by the solid engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum RecessSpec {
    /// Horizontal cradle for a cylindrical body lying on its side.
    Cylindrical { diameter: f64, length: f64, depth: f64 },
    /// Ring-shaped pocket for a toroidal coil.
    Toroidal {
        outer_diameter: f64,
        inner_diameter: f64,
        depth: f64,
    },
    /// Flat-bottomed rectangular pocket.
    Rectangular { width: f64, length: f64, depth: f64 },
}

impl RecessSpec {
    pub fn depth(&self) -> f64 {
        match *self {
            RecessSpec::Cylindrical { depth, .. }
            | RecessSpec::Toroidal { depth, .. }
            | RecessSpec::Rectangular { depth, .. } => depth,
        }
    }
}

/// A lead-wire through-hole in board-centered world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeadHole {
    pub x: f64,
    pub y: f64,
    /// Nominal lead diameter; drill clearance is added by the solid engine.
    pub diameter: f64,
}

/// Which face of the board a label sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Bottom,
}

/// A text label. `font_depth > 0` embosses (material added),
/// `font_depth < 0` engraves (material removed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub side: Side,
    pub font_size: f64,
    pub font_depth: f64,
    #[serde(default)]
    pub rotation: f64,
}

/// Ventilation hole arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VentPattern {
    Grid { rows: u32, cols: u32 },
    Hexagon,
}

/// Auxiliary board features, board-centered coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BoardFeature {
    /// Through-slot with rounded ends for a zip tie.
    ZipTieSlot {
        x: f64,
        y: f64,
        width: f64,
        length: f64,
        /// Degrees CCW about the board normal.
        rotation: f64,
    },
    /// Field of through-holes for airflow.
    VentHoles {
        x: f64,
        y: f64,
        pattern: VentPattern,
        hole_diameter: f64,
        spacing: f64,
    },
    /// Groove cut into the bottom surface for routing a wire.
    CableChannel {
        start_x: f64,
        start_y: f64,
        end_x: f64,
        end_y: f64,
        width: f64,
        depth: f64,
    },
}
