use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Component kind. Determines the prefix of auto-generated index labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartType {
    Capacitor,
    Resistor,
    Inductor,
}

impl PartType {
    /// Single-letter designator prefix ("C1", "R2", "I3").
    pub fn prefix(&self) -> char {
        match self {
            PartType::Capacitor => 'C',
            PartType::Resistor => 'R',
            PartType::Inductor => 'I',
        }
    }
}

/// Body shape of a component. Closed set; the footprint resolver and the
/// solid engine match exhaustively so a new shape cannot be half-supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyShape {
    Cylinder,
    Coil,
    Rectangular,
}

/// Declared body dimensions, millimeters. Only the fields relevant to the
/// body shape are consulted; missing fields fall back to the values in
/// [`crate::defaults::DEFAULTS`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    #[serde(default)]
    pub diameter: Option<f64>,
    #[serde(default)]
    pub length: Option<f64>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub depth: Option<f64>,
    #[serde(default)]
    pub outer_diameter: Option<f64>,
    #[serde(default)]
    pub inner_diameter: Option<f64>,
}

/// How the two leads of a radial coil exit the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadPattern {
    /// Both leads exit near each other (0 deg and 45 deg on the inner circle).
    Adjacent,
    /// Leads exit on opposite sides (0 deg and 180 deg).
    Opposite,
}

/// Lead wire configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LeadConfig {
    /// Leads exit opposite ends of the body's long axis.
    Axial {
        /// Distance from each body end to the lead exit. None resolves to 2mm.
        #[serde(default)]
        end_inset: Option<f64>,
    },
    /// Leads exit one face at a fixed spacing (or ring pattern for coils).
    Radial {
        #[serde(default)]
        pattern: Option<LeadPattern>,
        /// Hole-to-hole spacing for non-coil bodies. None resolves to 5mm.
        #[serde(default)]
        spacing: Option<f64>,
    },
}

/// A component placed on the board by the user.
///
/// Position is board-centered (origin at the board center), millimeters.
/// Rotation is about the board normal, degrees, counter-clockwise positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedComponent {
    pub id: Uuid,
    pub part_type: PartType,
    /// Display value, e.g. "4.7uF". Used for value labels.
    pub value: String,
    pub body_shape: BodyShape,
    pub dimensions: Dimensions,
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub lead_config: LeadConfig,
    /// Suggested lead hole diameter, before drill clearance is added.
    pub hole_diameter: f64,
}
