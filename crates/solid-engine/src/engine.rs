//! IGS interpretation: base board, cutout batch, single subtraction,
//! embossed text union.
//!
//! The engine walks the document in a fixed order: build the base board,
//! collect every material-removing solid (recesses, lead holes, mounting
//! holes, board features, engraved labels) into one batch, union the batch
//! and subtract it in a single boolean, then union embossed labels on top.
//! Batching keeps the expensive subtract down to one call no matter how
//! many components the board carries.

use crossboard_types::{
    BoardFeature, Countersink, IgsBoard, IgsComponent, IgsDocument, IgsMountingHole, Label,
    LeadHole, RecessSpec, Side, VentPattern, DEFAULTS,
};
use geom_kernel::{Axis, Kernel, KernelError, SolidHandle};

use crate::text::render_text;
use crate::types::EngineError;

/// Interpret an IGS document into a single solid.
pub fn generate_solid(
    kernel: &mut dyn Kernel,
    igs: &IgsDocument,
) -> Result<SolidHandle, EngineError> {
    let board = &igs.board;
    let thickness = board.thickness;
    tracing::debug!(
        width = board.width,
        height = board.height,
        thickness,
        components = igs.components.len(),
        "generating board solid"
    );

    let base = base_board(kernel, board).map_err(|source| EngineError::Board { source })?;

    let mut cutouts: Vec<SolidHandle> = Vec::new();
    for comp in &igs.components {
        component_cutouts(kernel, comp, thickness, &mut cutouts)
            .map_err(|source| EngineError::Component {
                id: comp.id,
                source,
            })?;
    }
    for (index, hole) in board.mounting_holes.iter().enumerate() {
        mounting_hole_cutouts(kernel, hole, thickness, &mut cutouts)
            .map_err(|source| EngineError::MountingHole { index, source })?;
    }
    for (index, feature) in igs.features.iter().enumerate() {
        feature_cutouts(kernel, feature, thickness, &mut cutouts)
            .map_err(|source| EngineError::Feature { index, source })?;
    }

    let mut embossed: Vec<SolidHandle> = Vec::new();
    for label in &igs.labels {
        let placed = label_solid(kernel, label, thickness).map_err(|source| EngineError::Label {
            text: label.text.clone(),
            source,
        })?;
        match placed {
            Some((solid, true)) => embossed.push(solid),
            Some((solid, false)) => cutouts.push(solid),
            None => {}
        }
    }

    tracing::debug!(
        cutouts = cutouts.len(),
        embossed = embossed.len(),
        "cutout batch assembled"
    );

    let mut solid = base;
    if let Some(batch) = union_all(kernel, cutouts).map_err(|source| EngineError::Board { source })?
    {
        solid = kernel
            .subtract(&solid, &batch)
            .map_err(|source| EngineError::Board { source })?;
    }
    for text_solid in embossed {
        solid = kernel
            .union(&solid, &text_solid)
            .map_err(|source| EngineError::Board { source })?;
    }

    Ok(solid)
}

/// Fold a batch of solids into one union. `None` for an empty batch.
fn union_all(
    kernel: &mut dyn Kernel,
    solids: Vec<SolidHandle>,
) -> Result<Option<SolidHandle>, KernelError> {
    let mut iter = solids.into_iter();
    let Some(first) = iter.next() else {
        return Ok(None);
    };
    let mut acc = first;
    for solid in iter {
        acc = kernel.union(&acc, &solid)?;
    }
    Ok(Some(acc))
}

/// The board blank: a box, or two overlapping boxes plus four corner
/// cylinders when the corners are rounded.
fn base_board(kernel: &mut dyn Kernel, board: &IgsBoard) -> Result<SolidHandle, KernelError> {
    let (w, h, t) = (board.width, board.height, board.thickness);
    let r = board.corner_radius;
    if r <= 0.0 {
        return kernel.make_box(w, h, t);
    }

    let core_x = kernel.make_box(w - 2.0 * r, h, t)?;
    let core_y = kernel.make_box(w, h - 2.0 * r, t)?;
    let mut solid = kernel.union(&core_x, &core_y)?;
    for (sx, sy) in [(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)] {
        let corner = kernel.make_cylinder(r, t)?;
        let corner = kernel.translate(&corner, [sx * (w / 2.0 - r), sy * (h / 2.0 - r), 0.0])?;
        solid = kernel.union(&solid, &corner)?;
    }
    Ok(solid)
}

fn component_cutouts(
    kernel: &mut dyn Kernel,
    comp: &IgsComponent,
    thickness: f64,
    cutouts: &mut Vec<SolidHandle>,
) -> Result<(), KernelError> {
    cutouts.push(recess_cutout(kernel, comp, thickness)?);
    for hole in &comp.lead_holes {
        cutouts.push(lead_hole_cutout(kernel, hole, thickness)?);
    }
    Ok(())
}

/// Recess cutter for one component, in world coordinates.
fn recess_cutout(
    kernel: &mut dyn Kernel,
    comp: &IgsComponent,
    thickness: f64,
) -> Result<SolidHandle, KernelError> {
    let depth = comp.recess.depth();
    let clearance = DEFAULTS.recess_clearance;

    let shaped = match comp.recess {
        RecessSpec::Cylindrical {
            diameter, length, ..
        } => {
            // Cradle lying along the local x axis, the same axis the lead
            // holes sit on. Only the lower arc bites into the board.
            let radius = diameter / 2.0 + clearance;
            let cyl = kernel.make_cylinder(radius, length)?;
            let cradle = kernel.rotate(&cyl, Axis::Y, std::f64::consts::FRAC_PI_2)?;
            kernel.translate(&cradle, [0.0, 0.0, thickness / 2.0 - depth + radius])?
        }
        RecessSpec::Toroidal {
            outer_diameter,
            inner_diameter,
            ..
        } => {
            let outer = kernel.make_cylinder(outer_diameter / 2.0 + clearance, depth * 2.0)?;
            let inner_radius = inner_diameter / 2.0 - clearance;
            // Tiny coils degenerate to a plain pocket; no island to keep.
            let ring = if inner_radius > 0.0 {
                let inner = kernel.make_cylinder(inner_radius, depth * 2.0 + 1.0)?;
                kernel.subtract(&outer, &inner)?
            } else {
                outer
            };
            kernel.translate(&ring, [0.0, 0.0, thickness / 2.0])?
        }
        RecessSpec::Rectangular { width, length, .. } => {
            let pocket = kernel.make_box(
                width + 2.0 * clearance,
                length + 2.0 * clearance,
                depth * 2.0,
            )?;
            kernel.translate(&pocket, [0.0, 0.0, thickness / 2.0])?
        }
    };

    // Z-rotation leaves the vertical placement alone, so rotating the
    // already-lifted cutter about the origin is safe.
    let rotated = if comp.rotation != 0.0 {
        kernel.rotate(&shaped, Axis::Z, comp.rotation.to_radians())?
    } else {
        shaped
    };
    kernel.translate(&rotated, [comp.x, comp.y, 0.0])
}

/// Through-hole cutter for one lead, drill clearance added here.
fn lead_hole_cutout(
    kernel: &mut dyn Kernel,
    hole: &LeadHole,
    thickness: f64,
) -> Result<SolidHandle, KernelError> {
    let radius = (hole.diameter + DEFAULTS.lead_hole_clearance) / 2.0;
    let cutter = kernel.make_cylinder(radius, thickness + DEFAULTS.through_margin)?;
    kernel.translate(&cutter, [hole.x, hole.y, 0.0])
}

fn mounting_hole_cutouts(
    kernel: &mut dyn Kernel,
    hole: &IgsMountingHole,
    thickness: f64,
    cutouts: &mut Vec<SolidHandle>,
) -> Result<(), KernelError> {
    let radius = hole.diameter / 2.0;
    let cutter = match hole.depth {
        // Blind holes hang from the top surface.
        Some(depth) => {
            let cyl = kernel.make_cylinder(radius, depth)?;
            kernel.translate(&cyl, [hole.x, hole.y, thickness / 2.0 - depth / 2.0])?
        }
        None => {
            let cyl = kernel.make_cylinder(radius, thickness + DEFAULTS.through_margin)?;
            kernel.translate(&cyl, [hole.x, hole.y, 0.0])?
        }
    };
    cutouts.push(cutter);

    if let Some(Countersink { diameter, depth }) = hole.countersink {
        let cs = kernel.make_cylinder(diameter / 2.0, depth)?;
        let cs = kernel.translate(&cs, [hole.x, hole.y, thickness / 2.0 - depth / 2.0])?;
        cutouts.push(cs);
    }
    Ok(())
}

fn feature_cutouts(
    kernel: &mut dyn Kernel,
    feature: &BoardFeature,
    thickness: f64,
    cutouts: &mut Vec<SolidHandle>,
) -> Result<(), KernelError> {
    let through = thickness + DEFAULTS.through_margin;
    match *feature {
        BoardFeature::ZipTieSlot {
            x,
            y,
            width,
            length,
            rotation,
        } => {
            // Slot body with rounded ends so the tie threads easily.
            let body = kernel.make_box(length, width, through)?;
            let end_offset = length / 2.0 - width / 2.0;
            let mut slot = body;
            for sign in [-1.0, 1.0] {
                let end = kernel.make_cylinder(width / 2.0, through)?;
                let end = kernel.translate(&end, [sign * end_offset, 0.0, 0.0])?;
                slot = kernel.union(&slot, &end)?;
            }
            if rotation != 0.0 {
                slot = kernel.rotate(&slot, Axis::Z, rotation.to_radians())?;
            }
            cutouts.push(kernel.translate(&slot, [x, y, 0.0])?);
        }
        BoardFeature::VentHoles {
            x,
            y,
            pattern,
            hole_diameter,
            spacing,
        } => {
            let radius = hole_diameter / 2.0;
            match pattern {
                VentPattern::Grid { rows, cols } => {
                    let x0 = x - (cols.saturating_sub(1)) as f64 * spacing / 2.0;
                    let y0 = y - (rows.saturating_sub(1)) as f64 * spacing / 2.0;
                    for row in 0..rows {
                        for col in 0..cols {
                            let hole = kernel.make_cylinder(radius, through)?;
                            let hole = kernel.translate(
                                &hole,
                                [x0 + col as f64 * spacing, y0 + row as f64 * spacing, 0.0],
                            )?;
                            cutouts.push(hole);
                        }
                    }
                }
                VentPattern::Hexagon => {
                    // Center hole plus six on the surrounding ring.
                    let center = kernel.make_cylinder(radius, through)?;
                    cutouts.push(kernel.translate(&center, [x, y, 0.0])?);
                    for i in 0..6 {
                        let angle = f64::from(i) * std::f64::consts::FRAC_PI_3;
                        let hole = kernel.make_cylinder(radius, through)?;
                        let hole = kernel.translate(
                            &hole,
                            [x + spacing * angle.cos(), y + spacing * angle.sin(), 0.0],
                        )?;
                        cutouts.push(hole);
                    }
                }
            }
        }
        BoardFeature::CableChannel {
            start_x,
            start_y,
            end_x,
            end_y,
            width,
            depth,
        } => {
            let dx = end_x - start_x;
            let dy = end_y - start_y;
            let length = (dx * dx + dy * dy).sqrt();
            let groove = kernel.make_box(length, width, depth)?;
            let groove = kernel.rotate(&groove, Axis::Z, dy.atan2(dx))?;
            let groove = kernel.translate(
                &groove,
                [
                    (start_x + end_x) / 2.0,
                    (start_y + end_y) / 2.0,
                    -thickness / 2.0 + depth / 2.0,
                ],
            )?;
            cutouts.push(groove);
        }
    }
    Ok(())
}

/// Build a placed label solid. The bool is true for embossed labels
/// (unioned after subtraction), false for engraved ones (cut with the
/// rest of the batch). `None` when the label renders no geometry.
fn label_solid(
    kernel: &mut dyn Kernel,
    label: &Label,
    thickness: f64,
) -> Result<Option<(SolidHandle, bool)>, KernelError> {
    if label.font_depth == 0.0 {
        return Ok(None);
    }
    let text_depth = label.font_depth.abs();
    let Some(rendered) = render_text(kernel, &label.text, label.font_size, text_depth)? else {
        tracing::warn!(text = %label.text, "label rendered no geometry, skipping");
        return Ok(None);
    };

    let mut solid = rendered;
    if label.side == Side::Bottom {
        // Half turn about Y so the text reads correctly from below.
        solid = kernel.rotate(&solid, Axis::Y, std::f64::consts::PI)?;
    }
    if label.rotation != 0.0 {
        solid = kernel.rotate(&solid, Axis::Z, label.rotation.to_radians())?;
    }

    let emboss = label.font_depth > 0.0;
    let surface = thickness / 2.0;
    let z = match (label.side, emboss) {
        (Side::Top, true) => surface + text_depth / 2.0,
        (Side::Top, false) => surface - text_depth / 2.0,
        (Side::Bottom, true) => -(surface + text_depth / 2.0),
        (Side::Bottom, false) => -(surface - text_depth / 2.0),
    };
    let solid = kernel.translate(&solid, [label.x, label.y, z])?;
    Ok(Some((solid, emboss)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossboard_types::{IgsDocument, PartType, IGS_VERSION};
    use geom_kernel::MockKernel;
    use uuid::Uuid;

    fn empty_doc(width: f64, height: f64, thickness: f64) -> IgsDocument {
        IgsDocument {
            version: IGS_VERSION.to_string(),
            board: IgsBoard {
                width,
                height,
                thickness,
                corner_radius: 0.0,
                mounting_holes: vec![],
            },
            components: vec![],
            labels: vec![],
            features: vec![],
        }
    }

    fn cylinder_component(x: f64, y: f64) -> IgsComponent {
        IgsComponent {
            id: Uuid::new_v4(),
            part_type: PartType::Capacitor,
            x,
            y,
            rotation: 0.0,
            recess: RecessSpec::Cylindrical {
                diameter: 18.0,
                length: 44.0,
                depth: 3.0,
            },
            lead_holes: vec![
                LeadHole {
                    x: x - 20.0,
                    y,
                    diameter: 1.0,
                },
                LeadHole {
                    x: x + 20.0,
                    y,
                    diameter: 1.0,
                },
            ],
        }
    }

    #[test]
    fn bare_board_is_a_single_box() {
        let mut kernel = MockKernel::new();
        let solid = generate_solid(&mut kernel, &empty_doc(100.0, 60.0, 5.0)).unwrap();
        let (min, max) = kernel.bounds(&solid).unwrap();
        assert_eq!(min, [-50.0, -30.0, -2.5]);
        assert_eq!(max, [50.0, 30.0, 2.5]);
        assert_eq!(kernel.subtract_count(), 0);
        assert_eq!(kernel.union_count(), 0);
    }

    #[test]
    fn rounded_board_unions_cores_and_corners() {
        let mut kernel = MockKernel::new();
        let mut doc = empty_doc(100.0, 60.0, 5.0);
        doc.board.corner_radius = 5.0;
        let solid = generate_solid(&mut kernel, &doc).unwrap();
        // Two core boxes plus four corner cylinders.
        assert_eq!(kernel.primitive_count(&solid), Some(6));
        let (min, max) = kernel.bounds(&solid).unwrap();
        assert_eq!(min[0], -50.0);
        assert_eq!(max[1], 30.0);
    }

    #[test]
    fn all_cutouts_go_through_one_subtraction() {
        let mut kernel = MockKernel::new();
        let mut doc = empty_doc(100.0, 100.0, 5.0);
        doc.components.push(cylinder_component(-20.0, 0.0));
        doc.components.push(cylinder_component(25.0, 20.0));
        doc.board.mounting_holes.push(IgsMountingHole {
            x: 45.0,
            y: 45.0,
            diameter: 3.2,
            depth: None,
            countersink: Some(Countersink {
                diameter: 5.76,
                depth: 2.88,
            }),
        });
        doc.labels.push(Label {
            text: "C1".to_string(),
            x: -20.0,
            y: 10.0,
            side: Side::Top,
            font_size: 3.0,
            font_depth: -0.5, // engraved
            rotation: 0.0,
        });

        let solid = generate_solid(&mut kernel, &doc).unwrap();
        assert_eq!(kernel.subtract_count(), 1);
        // Removing material never grows the board.
        let (min, max) = kernel.bounds(&solid).unwrap();
        assert_eq!(min, [-50.0, -50.0, -2.5]);
        assert_eq!(max, [50.0, 50.0, 2.5]);
    }

    #[test]
    fn embossed_labels_union_after_the_cut() {
        let mut kernel = MockKernel::new();
        let mut doc = empty_doc(100.0, 100.0, 5.0);
        doc.labels.push(Label {
            text: "C1".to_string(),
            x: 0.0,
            y: 0.0,
            side: Side::Top,
            font_size: 3.0,
            font_depth: 0.5,
            rotation: 0.0,
        });

        let solid = generate_solid(&mut kernel, &doc).unwrap();
        assert_eq!(kernel.subtract_count(), 0);
        let (_, max) = kernel.bounds(&solid).unwrap();
        // Raised text sits proud of the top surface.
        assert!((max[2] - 3.0).abs() < 1e-9);
    }

    #[test]
    fn bottom_labels_land_under_the_board() {
        let mut kernel = MockKernel::new();
        let mut doc = empty_doc(100.0, 100.0, 5.0);
        doc.labels.push(Label {
            text: "C1".to_string(),
            x: 0.0,
            y: 0.0,
            side: Side::Bottom,
            font_size: 3.0,
            font_depth: 0.5,
            rotation: 0.0,
        });

        let solid = generate_solid(&mut kernel, &doc).unwrap();
        let (min, _) = kernel.bounds(&solid).unwrap();
        assert!((min[2] + 3.0).abs() < 1e-9);
    }

    #[test]
    fn tiny_coil_recess_skips_the_island() {
        let mut kernel = MockKernel::new();
        let mut doc = empty_doc(100.0, 100.0, 5.0);
        doc.components.push(IgsComponent {
            id: Uuid::new_v4(),
            part_type: PartType::Inductor,
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            recess: RecessSpec::Toroidal {
                outer_diameter: 8.0,
                inner_diameter: 1.0, // inner radius collapses under clearance
                depth: 2.0,
            },
            lead_holes: vec![],
        });

        generate_solid(&mut kernel, &doc).unwrap();
        // Only the final batch subtraction, no ring-forming subtract.
        assert_eq!(kernel.subtract_count(), 1);
    }

    #[test]
    fn vent_grid_emits_one_cutter_per_hole() {
        let mut kernel = MockKernel::new();
        let mut doc = empty_doc(100.0, 100.0, 5.0);
        doc.features.push(BoardFeature::VentHoles {
            x: 0.0,
            y: 0.0,
            pattern: VentPattern::Grid { rows: 2, cols: 3 },
            hole_diameter: 3.0,
            spacing: 8.0,
        });

        let solid = generate_solid(&mut kernel, &doc).unwrap();
        // Board plus six vent cylinders folded through the subtraction.
        assert_eq!(kernel.primitive_count(&solid), Some(7));
    }

    #[test]
    fn degenerate_component_reports_its_id() {
        let mut kernel = MockKernel::new();
        let mut doc = empty_doc(100.0, 100.0, 5.0);
        let id = Uuid::new_v4();
        doc.components.push(IgsComponent {
            id,
            part_type: PartType::Resistor,
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            recess: RecessSpec::Rectangular {
                width: -5.0,
                length: 10.0,
                depth: 2.0,
            },
            lead_holes: vec![],
        });

        match generate_solid(&mut kernel, &doc) {
            Err(EngineError::Component { id: got, .. }) => assert_eq!(got, id),
            other => panic!("expected component error, got {other:?}"),
        }
    }
}
