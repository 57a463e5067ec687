//! Axis-aligned collision and board-bounds checks.
//!
//! Bounding boxes deliberately ignore component rotation: the check stays
//! conservative for round and square parts and keeps placement behavior
//! stable while a part is being rotated. Do not apply the rotation here.

use crossboard_types::{PlacedComponent, DEFAULTS};

use crate::footprint::resolve_footprint;

/// Axis-aligned bounding box in board-centered coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

/// Bounding box of a component's footprint plus the standard 3mm clearance
/// margin on every side.
pub fn bounding_box(component: &PlacedComponent) -> BoundingBox {
    let fp = resolve_footprint(component.body_shape, &component.dimensions);
    let half_w = fp.width / 2.0 + DEFAULTS.collision_clearance;
    let half_d = fp.depth / 2.0 + DEFAULTS.collision_clearance;
    BoundingBox {
        min_x: component.x - half_w,
        max_x: component.x + half_w,
        min_y: component.y - half_d,
        max_y: component.y + half_d,
    }
}

/// Standard AABB overlap test: true unless fully separated on some axis.
pub fn overlaps(a: &BoundingBox, b: &BoundingBox) -> bool {
    !(a.max_x < b.min_x || a.min_x > b.max_x || a.max_y < b.min_y || a.min_y > b.max_y)
}

/// True if `component` overlaps any other component (self excluded by id).
pub fn check_collision(component: &PlacedComponent, others: &[PlacedComponent]) -> bool {
    let own = bounding_box(component);
    others
        .iter()
        .filter(|other| other.id != component.id)
        .any(|other| overlaps(&own, &bounding_box(other)))
}

/// True if the component's clearance box lies fully inside the board outline.
pub fn is_within_bounds(component: &PlacedComponent, board_width: f64, board_height: f64) -> bool {
    let b = bounding_box(component);
    let half_w = board_width / 2.0;
    let half_h = board_height / 2.0;
    b.min_x >= -half_w && b.max_x <= half_w && b.min_y >= -half_h && b.max_y <= half_h
}

/// Spiral search for the nearest conflict-free, grid-snapped position.
///
/// Rings grow outward in `grid_size` increments up to a 50mm radius, with 16
/// sample angles per ring. The ring/angle order is observable (it decides
/// which valid slot wins), so it must not be reordered.
pub fn find_nearest_valid_position(
    component: &PlacedComponent,
    others: &[PlacedComponent],
    board_width: f64,
    board_height: f64,
    grid_size: f64,
) -> Option<(f64, f64)> {
    const SEARCH_RADIUS: f64 = 50.0;
    const ANGLE_STEP: f64 = std::f64::consts::PI / 8.0;

    let mut radius = grid_size;
    while radius <= SEARCH_RADIUS {
        let mut angle = 0.0;
        while angle < 2.0 * std::f64::consts::PI {
            let x = component.x + angle.cos() * radius;
            let y = component.y + angle.sin() * radius;

            let snapped_x = (x / grid_size).round() * grid_size;
            let snapped_y = (y / grid_size).round() * grid_size;

            let mut candidate = component.clone();
            candidate.x = snapped_x;
            candidate.y = snapped_y;

            if !check_collision(&candidate, others)
                && is_within_bounds(&candidate, board_width, board_height)
            {
                return Some((snapped_x, snapped_y));
            }
            angle += ANGLE_STEP;
        }
        radius += grid_size;
    }

    None
}
