//! Integration tests for project persistence and STL export.

use crossboard_types::{Board, IgsDocument, IGS_VERSION};
use file_format::{
    export_binary_stl, export_stl, export_stl_ascii, load_project, save_project, ExportError,
    ExportOptions, LoadError, ProjectMetadata,
};
use geom_kernel::{Kernel, MockKernel, RenderMesh};
use igs_builder::{generate_igs, BuildOptions};

fn sample_igs() -> IgsDocument {
    let board = Board::new(100.0, 60.0, 5.0);
    let options = BuildOptions {
        corner_mounting_holes: true,
        ..BuildOptions::default()
    };
    generate_igs(&board, &[], &options)
}

#[test]
fn project_round_trips_through_json() {
    let igs = sample_igs();
    let metadata = ProjectMetadata::new("amp psu board");

    let json = save_project(&igs, &metadata);
    let (loaded_igs, loaded_metadata) = load_project(&json).unwrap();

    assert_eq!(loaded_igs, igs);
    assert_eq!(loaded_metadata, metadata);
}

#[test]
fn unknown_format_identifier_is_rejected() {
    let igs = sample_igs();
    let json = save_project(&igs, &ProjectMetadata::new("x"));
    let tampered = json.replace("\"crossboard\"", "\"protoboard\"");

    match load_project(&tampered) {
        Err(LoadError::UnknownFormat(name)) => assert_eq!(name, "protoboard"),
        other => panic!("expected UnknownFormat, got {other:?}"),
    }
}

#[test]
fn future_file_version_is_rejected() {
    let igs = sample_igs();
    let json = save_project(&igs, &ProjectMetadata::new("x"));
    let tampered = json.replace("\"version\": 1", "\"version\": 99");

    match load_project(&tampered) {
        Err(LoadError::FutureVersion { file_version, .. }) => assert_eq!(file_version, 99),
        other => panic!("expected FutureVersion, got {other:?}"),
    }
}

#[test]
fn igs_major_version_gate() {
    let mut igs = sample_igs();
    igs.version = "2.0.0".to_string();
    let json = save_project(&igs, &ProjectMetadata::new("x"));

    match load_project(&json) {
        Err(LoadError::IncompatibleIgsVersion { found, supported }) => {
            assert_eq!(found, "2.0.0");
            assert_eq!(supported, IGS_VERSION);
        }
        other => panic!("expected IncompatibleIgsVersion, got {other:?}"),
    }
}

#[test]
fn igs_minor_version_drift_is_accepted() {
    let mut igs = sample_igs();
    igs.version = "1.3.7".to_string();
    let json = save_project(&igs, &ProjectMetadata::new("x"));
    let (loaded, _) = load_project(&json).unwrap();
    assert_eq!(loaded.version, "1.3.7");
}

#[test]
fn binary_stl_has_the_expected_layout() {
    let mut kernel = MockKernel::new();
    let solid = kernel.make_box(10.0, 10.0, 2.0).unwrap();
    let mesh = kernel.tessellate(&solid, 0.1).unwrap();

    let bytes = export_binary_stl(&mesh, "fixture").unwrap();
    // 80-byte header + u32 count + 50 bytes per facet.
    assert_eq!(bytes.len(), 80 + 4 + 12 * 50);

    let count = u32::from_le_bytes(bytes[80..84].try_into().unwrap());
    assert_eq!(count, 12);
    assert!(bytes[..80].starts_with(b"binary STL: fixture"));
}

#[test]
fn empty_mesh_is_a_hard_error() {
    let mesh = RenderMesh {
        vertices: vec![],
        normals: vec![],
        indices: vec![],
    };
    match export_binary_stl(&mesh, "empty") {
        Err(ExportError::Stl { reason }) => assert!(reason.contains("no triangles")),
        other => panic!("expected Stl error, got {other:?}"),
    }
}

#[test]
fn out_of_range_index_is_rejected() {
    let mesh = RenderMesh {
        vertices: vec![0.0; 9],
        normals: vec![0.0; 9],
        indices: vec![0, 1, 7],
    };
    assert!(matches!(
        export_binary_stl(&mesh, "bad"),
        Err(ExportError::Stl { .. })
    ));
}

#[test]
fn end_to_end_export_emits_binary_stl() {
    let mut kernel = MockKernel::new();
    let igs = sample_igs();
    let bytes = export_stl(&mut kernel, &igs, &ExportOptions::default()).unwrap();
    assert!(bytes.len() > 84);
    assert_eq!((bytes.len() - 84) % 50, 0);
}

#[test]
fn ascii_export_brackets_the_solid() {
    let mut kernel = MockKernel::new();
    let igs = sample_igs();
    let options = ExportOptions {
        name: "board".to_string(),
        ..ExportOptions::default()
    };
    let text = export_stl_ascii(&mut kernel, &igs, &options).unwrap();
    assert!(text.starts_with("solid board\n"));
    assert!(text.ends_with("endsolid board\n"));
    assert!(text.contains("facet normal"));
}

#[test]
fn invalid_igs_never_reaches_the_kernel() {
    let mut kernel = MockKernel::new();
    let board = Board::new(0.0, 60.0, 5.0);
    let igs = generate_igs(&board, &[], &BuildOptions::default());

    match export_stl(&mut kernel, &igs, &ExportOptions::default()) {
        Err(ExportError::InvalidIgs { errors }) => assert!(!errors.is_empty()),
        other => panic!("expected InvalidIgs, got {other:?}"),
    }
    assert_eq!(kernel.subtract_count(), 0);
    assert_eq!(kernel.union_count(), 0);
}
