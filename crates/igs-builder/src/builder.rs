//! IGS construction: normalization to board-centered coordinates, default
//! substitution, recess resolution, and lead hole world placement.
//!
//! `generate_igs` is a pure function of its inputs. Calling it twice with
//! the same arguments yields identical documents; anything time- or
//! environment-dependent (project metadata, timestamps) belongs to the
//! file-format layer instead.

use crossboard_types::{
    Board, BoardFeature, BodyShape, Countersink, IgsBoard, IgsComponent, IgsDocument,
    IgsMountingHole, Label, LeadHole, MountingHoleSpec, PlacedComponent, RecessSpec, Side,
    DEFAULTS, IGS_VERSION,
};
use placement::resolve_lead_holes;

/// Feature toggles for IGS generation.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Overrides the board's corner radius when set.
    pub corner_radius: Option<f64>,
    /// Place four countersunk mounting holes inset from the board corners.
    pub corner_mounting_holes: bool,
    /// Diameter of the corner mounting holes.
    pub mounting_hole_diameter: f64,
    /// Emit an index label above and a value label below each component.
    pub add_labels: bool,
    /// Auxiliary features, in top-left board coordinates.
    pub features: Vec<BoardFeature>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            corner_radius: None,
            corner_mounting_holes: false,
            mounting_hole_diameter: DEFAULTS.mount_diameter,
            add_labels: false,
            features: Vec::new(),
        }
    }
}

/// Build the fully-resolved geometry plan for a board.
///
/// This is the single point where ambiguity is eliminated: coordinates are
/// normalized to the board center, every defaulted dimension is substituted,
/// and countersinks are resolved to explicit diameters and depths. Nothing
/// downstream re-resolves shape defaults.
pub fn generate_igs(
    board: &Board,
    components: &[PlacedComponent],
    options: &BuildOptions,
) -> IgsDocument {
    let mut mounting_holes: Vec<IgsMountingHole> = board
        .mounting_holes
        .iter()
        .map(|spec| resolve_mounting_hole(spec, board))
        .collect();

    if options.corner_mounting_holes {
        mounting_holes.extend(corner_mounting_holes(board, options.mounting_hole_diameter));
    }

    let igs_components: Vec<IgsComponent> = components
        .iter()
        .map(|comp| resolve_component(comp, board.thickness))
        .collect();

    let mut labels = Vec::new();
    if options.add_labels {
        for (idx, comp) in components.iter().enumerate() {
            labels.push(Label {
                text: format!("{}{}", comp.part_type.prefix(), idx + 1),
                x: comp.x,
                y: comp.y + DEFAULTS.label_offset,
                side: Side::Top,
                font_size: DEFAULTS.id_font_size,
                font_depth: DEFAULTS.label_depth,
                rotation: comp.rotation,
            });
            labels.push(Label {
                text: comp.value.clone(),
                x: comp.x,
                y: comp.y - DEFAULTS.label_offset,
                side: Side::Top,
                font_size: DEFAULTS.value_font_size,
                font_depth: DEFAULTS.label_depth,
                rotation: comp.rotation,
            });
        }
    }

    let features = options
        .features
        .iter()
        .map(|f| center_feature(f, board))
        .collect();

    IgsDocument {
        version: IGS_VERSION.to_string(),
        board: IgsBoard {
            width: board.width,
            height: board.height,
            thickness: board.thickness,
            corner_radius: options.corner_radius.unwrap_or(board.corner_radius),
            mounting_holes,
        },
        components: igs_components,
        labels,
        features,
    }
}

/// Recess depth rule: half the body height, capped so at least 1mm of base
/// material survives, never deeper than 3mm.
fn recess_depth(component_height: f64, board_thickness: f64) -> f64 {
    (component_height * DEFAULTS.recess_depth_factor)
        .min(board_thickness - DEFAULTS.min_base_thickness)
        .min(DEFAULTS.max_recess_depth)
}

fn resolve_component(comp: &PlacedComponent, board_thickness: f64) -> IgsComponent {
    let dims = &comp.dimensions;
    let component_height = dims
        .height
        .or(dims.diameter)
        .or(dims.outer_diameter)
        .unwrap_or(DEFAULTS.height);
    let depth = recess_depth(component_height, board_thickness);

    let recess = match comp.body_shape {
        BodyShape::Cylinder => RecessSpec::Cylindrical {
            diameter: dims.diameter.unwrap_or(DEFAULTS.diameter),
            length: dims.length.unwrap_or(DEFAULTS.length),
            depth,
        },
        BodyShape::Coil => RecessSpec::Toroidal {
            outer_diameter: dims.outer_diameter.unwrap_or(DEFAULTS.outer_diameter),
            inner_diameter: dims.inner_diameter.unwrap_or(DEFAULTS.inner_diameter),
            depth,
        },
        BodyShape::Rectangular => RecessSpec::Rectangular {
            width: dims.width.unwrap_or(DEFAULTS.width),
            length: dims.depth.or(dims.length).unwrap_or(DEFAULTS.depth),
            depth,
        },
    };

    // Rotate local hole positions into board-world coordinates.
    let theta = comp.rotation.to_radians();
    let (sin, cos) = theta.sin_cos();
    let lead_holes = resolve_lead_holes(comp)
        .into_iter()
        .map(|hole| LeadHole {
            x: comp.x + hole.x * cos - hole.y * sin,
            y: comp.y + hole.x * sin + hole.y * cos,
            diameter: hole.diameter,
        })
        .collect();

    IgsComponent {
        id: comp.id,
        part_type: comp.part_type,
        x: comp.x,
        y: comp.y,
        rotation: comp.rotation,
        recess,
        lead_holes,
    }
}

fn resolve_mounting_hole(spec: &MountingHoleSpec, board: &Board) -> IgsMountingHole {
    let countersink = spec.countersink.then(|| {
        let diameter = spec
            .countersink_diameter
            .unwrap_or(spec.diameter * DEFAULTS.countersink_diameter_factor);
        Countersink {
            diameter,
            depth: spec
                .countersink_depth
                .unwrap_or(diameter * DEFAULTS.countersink_depth_factor),
        }
    });

    IgsMountingHole {
        // Top-left board coordinates to centered.
        x: spec.x - board.width / 2.0,
        y: spec.y - board.height / 2.0,
        diameter: spec.diameter,
        depth: spec.depth,
        countersink,
    }
}

fn corner_mounting_holes(board: &Board, diameter: f64) -> Vec<IgsMountingHole> {
    let dx = board.width / 2.0 - DEFAULTS.mount_inset;
    let dy = board.height / 2.0 - DEFAULTS.mount_inset;
    let countersink_diameter = diameter * DEFAULTS.countersink_diameter_factor;
    let countersink = Some(Countersink {
        diameter: countersink_diameter,
        depth: countersink_diameter * DEFAULTS.countersink_depth_factor,
    });

    [(-dx, -dy), (dx, -dy), (-dx, dy), (dx, dy)]
        .iter()
        .map(|&(x, y)| IgsMountingHole {
            x,
            y,
            diameter,
            depth: None,
            countersink,
        })
        .collect()
}

fn center_feature(feature: &BoardFeature, board: &Board) -> BoardFeature {
    let cx = board.width / 2.0;
    let cy = board.height / 2.0;
    match *feature {
        BoardFeature::ZipTieSlot {
            x,
            y,
            width,
            length,
            rotation,
        } => BoardFeature::ZipTieSlot {
            x: x - cx,
            y: y - cy,
            width,
            length,
            rotation,
        },
        BoardFeature::VentHoles {
            x,
            y,
            pattern,
            hole_diameter,
            spacing,
        } => BoardFeature::VentHoles {
            x: x - cx,
            y: y - cy,
            pattern,
            hole_diameter,
            spacing,
        },
        BoardFeature::CableChannel {
            start_x,
            start_y,
            end_x,
            end_y,
            width,
            depth,
        } => BoardFeature::CableChannel {
            start_x: start_x - cx,
            start_y: start_y - cy,
            end_x: end_x - cx,
            end_y: end_y - cy,
            width,
            depth,
        },
    }
}
