use serde::{Deserialize, Serialize};

/// Mounting board settings as supplied by the caller (UI state or JSON).
///
/// All dimensions in millimeters. User-specified coordinates on the board
/// (mounting holes) are in top-left board coordinates; the IGS builder is the
/// single place where everything is normalized to board-centered coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub width: f64,
    pub height: f64,
    pub thickness: f64,
    /// Corner rounding radius. Zero means square corners.
    #[serde(default)]
    pub corner_radius: f64,
    /// User-defined mounting holes, in top-left board coordinates.
    #[serde(default)]
    pub mounting_holes: Vec<MountingHoleSpec>,
}

impl Board {
    pub fn new(width: f64, height: f64, thickness: f64) -> Self {
        Self {
            width,
            height,
            thickness,
            corner_radius: 0.0,
            mounting_holes: Vec::new(),
        }
    }
}

/// A user-specified mounting hole, in top-left board coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MountingHoleSpec {
    pub x: f64,
    pub y: f64,
    pub diameter: f64,
    #[serde(default)]
    pub countersink: bool,
    /// Countersink diameter. None resolves to 1.8 x hole diameter.
    #[serde(default)]
    pub countersink_diameter: Option<f64>,
    /// Countersink depth. None resolves to 0.5 x countersink diameter.
    #[serde(default)]
    pub countersink_depth: Option<f64>,
    /// Hole depth from the top surface. None means through-hole.
    #[serde(default)]
    pub depth: Option<f64>,
}

impl MountingHoleSpec {
    pub fn through(x: f64, y: f64, diameter: f64) -> Self {
        Self {
            x,
            y,
            diameter,
            countersink: false,
            countersink_diameter: None,
            countersink_depth: None,
            depth: None,
        }
    }
}
