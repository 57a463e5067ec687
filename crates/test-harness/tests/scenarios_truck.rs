//! Scenarios on the real truck kernel. Kept boolean-free: a bare board
//! exercises primitive construction and tessellation without paying for
//! (or depending on the robustness of) BREP booleans.

use crossboard_types::Board;
use file_format::export_binary_stl;
use geom_kernel::{Kernel, TruckKernel};
use igs_builder::{generate_igs, BuildOptions};
use solid_engine::generate_solid;
use test_harness::{count_mesh_edges, mesh_bounding_box, mesh_surface_area, mesh_volume};

#[test]
fn empty_board_tessellates_to_its_exact_envelope() {
    let board = Board::new(100.0, 60.0, 5.0);
    let igs = generate_igs(&board, &[], &BuildOptions::default());

    let mut kernel = TruckKernel::new();
    let solid = generate_solid(&mut kernel, &igs).unwrap();
    let mesh = kernel.tessellate(&solid, 0.01).unwrap();

    let (min, max) = mesh_bounding_box(&mesh);
    assert!((min[0] + 50.0).abs() < 1e-4);
    assert!((max[0] - 50.0).abs() < 1e-4);
    assert!((min[1] + 30.0).abs() < 1e-4);
    assert!((max[1] - 30.0).abs() < 1e-4);
    assert!((min[2] + 2.5).abs() < 1e-4);
    assert!((max[2] - 2.5).abs() < 1e-4);

    // A box tessellates without sliver loss: volume and area are exact.
    let volume = mesh_volume(&mesh);
    assert!((volume - 100.0 * 60.0 * 5.0).abs() / (100.0 * 60.0 * 5.0) < 1e-6);
    let area = mesh_surface_area(&mesh);
    assert!((area - 13600.0).abs() / 13600.0 < 1e-6);

    // Watertight: every edge shared by exactly two triangles.
    let (_, boundary) = count_mesh_edges(&mesh);
    assert_eq!(boundary, 0);
}

#[test]
fn empty_board_exports_valid_binary_stl() {
    let board = Board::new(80.0, 40.0, 3.0);
    let igs = generate_igs(&board, &[], &BuildOptions::default());

    let mut kernel = TruckKernel::new();
    let solid = generate_solid(&mut kernel, &igs).unwrap();
    let mesh = kernel.tessellate(&solid, 0.01).unwrap();

    let bytes = export_binary_stl(&mesh, "empty-board").unwrap();
    let count = u32::from_le_bytes(bytes[80..84].try_into().unwrap()) as usize;
    assert_eq!(bytes.len(), 84 + count * 50);
    assert!(count >= 12);
}
