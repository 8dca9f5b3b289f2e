//! End-to-end tests for importing mesh directories.

use std::fs;
use std::path::Path;

use approx::assert_relative_eq;
use nalgebra::Point2;
use polymesh::error::{MeshError, ValidationError};
use polymesh::io::{self, import, import_mesh, EDGE_TABLE, FACE_TABLE, VERTEX_TABLE};
use polymesh::mesh::{EdgeId, FaceId, VertexId};
use polymesh::validate::{report, ValidateOptions};
use tempfile::TempDir;

// Unit square (face 0) with a triangle glued to its right side (face 1).
const VERTICES: &str = "\
Id;Marker;X;Y
0;1;0.0;0.0
1;2;1.0;0.0
2;0;1.0;1.0
3;4;0.0;1.0
4;2;2.0;0.5
";

const EDGES: &str = "\
Id;Marker;Origin;End
0;1;0;1
1;0;1;2
2;3;2;3
3;4;3;0
4;2;1;4
5;2;4;2
";

const FACES: &str = "\
Id;Marker;NumVertices;Vertices;NumEdges;Edges
0;0;4;0;1;2;3;4;0;1;2;3
1;0;3;1;4;2;3;4;5;1
";

fn write_mesh(vertices: &str, edges: &str, faces: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(VERTEX_TABLE), vertices).unwrap();
    fs::write(dir.path().join(EDGE_TABLE), edges).unwrap();
    fs::write(dir.path().join(FACE_TABLE), faces).unwrap();
    dir
}

fn write_valid_mesh() -> TempDir {
    write_mesh(VERTICES, EDGES, FACES)
}

fn v(id: u32) -> VertexId {
    VertexId::new(id)
}

fn e(id: u32) -> EdgeId {
    EdgeId::new(id)
}

#[test]
fn counts_match_table_rows() {
    let dir = write_valid_mesh();
    let mesh = import_mesh(dir.path()).unwrap();

    assert_eq!(mesh.num_vertices(), 5);
    assert_eq!(mesh.num_edges(), 6);
    assert_eq!(mesh.num_faces(), 2);
}

#[test]
fn records_are_read_in_order() {
    let dir = write_valid_mesh();
    let mesh = import_mesh(dir.path()).unwrap();

    assert_eq!(mesh.vertices()[4].id, v(4));
    assert_eq!(mesh.vertices()[4].position, Point2::new(2.0, 0.5));
    assert_eq!(mesh.edges()[5].endpoints(), [v(4), v(2)]);

    let tri = mesh.face(FaceId::new(1)).unwrap();
    assert_eq!(tri.vertices, vec![v(1), v(4), v(2)]);
    assert_eq!(tri.edges, vec![e(4), e(5), e(1)]);
    assert_relative_eq!(mesh.triangle_area(tri).unwrap(), 0.5);
}

#[test]
fn marker_indices() {
    let dir = write_valid_mesh();
    let mesh = import_mesh(dir.path()).unwrap();

    let vertex_markers = mesh.vertex_markers();
    assert_eq!(vertex_markers.markers().collect::<Vec<_>>(), vec![1, 2, 4]);
    assert_eq!(vertex_markers.get(1), &[v(0)]);
    assert_eq!(vertex_markers.get(2), &[v(1), v(4)]);
    assert_eq!(vertex_markers.get(4), &[v(3)]);
    // Vertex 2 has marker 0
    assert!(vertex_markers.iter().all(|(_, ids)| !ids.contains(&v(2))));

    let edge_markers = mesh.edge_markers();
    assert_eq!(edge_markers.get(2), &[e(4), e(5)]);
    assert_eq!(edge_markers.get(3), &[e(2)]);
    assert!(edge_markers.iter().all(|(_, ids)| !ids.contains(&e(1))));
}

#[test]
fn import_is_idempotent() {
    let dir = write_valid_mesh();
    let first = import_mesh(dir.path()).unwrap();
    let second = import_mesh(dir.path()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_table_fails_with_file_not_found() {
    for missing in [VERTEX_TABLE, EDGE_TABLE, FACE_TABLE] {
        let dir = write_valid_mesh();
        fs::remove_file(dir.path().join(missing)).unwrap();

        match import_mesh(dir.path()) {
            Err(MeshError::FileNotFound { path }) => {
                assert_eq!(path.file_name().unwrap(), missing);
            }
            other => panic!("expected FileNotFound for {}, got {:?}", missing, other),
        }
    }
}

#[test]
fn missing_directory() {
    let result = import(Path::new("nonexistent_mesh_dir_12345"));
    assert!(matches!(result, Err(MeshError::FileNotFound { .. })));
}

#[test]
fn empty_tables_are_rejected() {
    let cases = [
        ("Id;Marker;X;Y\n", EDGES, FACES, VERTEX_TABLE),
        (VERTICES, "Id;Marker;Origin;End\n", FACES, EDGE_TABLE),
        (VERTICES, EDGES, "Id\n", FACE_TABLE),
    ];

    for (vertices, edges, faces, table) in cases {
        let dir = write_mesh(vertices, edges, faces);
        match import(dir.path()) {
            Err(MeshError::EmptyTable { path }) => {
                assert_eq!(path.file_name().unwrap(), table);
            }
            other => panic!("expected EmptyTable for {}, got {:?}", table, other),
        }
    }
}

#[test]
fn first_failing_table_wins() {
    // Both the vertex and the face table are broken; vertices load first
    let dir = write_mesh("Id;Marker;X;Y\n0;1;0.0\n", EDGES, "Id\n");
    let err = import(dir.path()).unwrap_err();
    match err {
        MeshError::MalformedRow { path, line, .. } => {
            assert_eq!(path.file_name().unwrap(), VERTEX_TABLE);
            assert_eq!(line, 2);
        }
        other => panic!("expected MalformedRow, got {:?}", other),
    }
}

#[test]
fn malformed_face_row_reports_line() {
    let faces = "Id;Marker;NumVertices;Vertices;NumEdges;Edges\n\
                 0;0;4;0;1;2;3;4;0;1;2;3\n\
                 1;0;3;1;4;2;3;4;5\n";
    let dir = write_mesh(VERTICES, EDGES, faces);

    let err = import(dir.path()).unwrap_err();
    assert!(matches!(err, MeshError::MalformedRow { line: 3, .. }));
    assert!(err.to_string().contains(FACE_TABLE));
}

#[test]
fn duplicate_ids_are_rejected() {
    let vertices = format!("{}4;0;3.0;3.0\n", VERTICES);
    let dir = write_mesh(&vertices, EDGES, FACES);
    assert!(matches!(
        import(dir.path()),
        Err(MeshError::DuplicateId { id: 4, .. })
    ));
}

#[test]
fn degenerate_edge_is_rejected() {
    // Vertex 4 moved onto vertex 1
    let vertices = VERTICES.replace("4;2;2.0;0.5", "4;2;1.0;0.0");
    let dir = write_mesh(&vertices, EDGES, FACES);

    match import_mesh(dir.path()) {
        Err(MeshError::Validation(ValidationError::DegenerateEdge { edge, .. })) => {
            assert_eq!(edge, e(4));
        }
        other => panic!("expected DegenerateEdge, got {:?}", other),
    }
}

#[test]
fn degenerate_triangle_is_rejected() {
    // Vertex 4 moved onto the segment between vertices 1 and 2
    let vertices = VERTICES.replace("4;2;2.0;0.5", "4;2;1.0;0.5");
    let dir = write_mesh(&vertices, EDGES, FACES);

    assert!(matches!(
        import_mesh(dir.path()),
        Err(MeshError::Validation(ValidationError::DegenerateFace { face: 1, .. }))
    ));
}

#[test]
fn dangling_edge_reference_is_rejected() {
    // Face 1 lists edge 3 (3 -> 0), which does not touch the triangle
    let faces = FACES.replace("1;0;3;1;4;2;3;4;5;1", "1;0;3;1;4;2;3;4;5;3");
    let dir = write_mesh(VERTICES, EDGES, &faces);

    match import_mesh(dir.path()) {
        Err(MeshError::Validation(ValidationError::DanglingEdgeReference { face, edge })) => {
            assert_eq!(face, 1);
            assert_eq!(edge, e(3));
        }
        other => panic!("expected DanglingEdgeReference, got {:?}", other),
    }
}

#[test]
fn face_shape_mismatch_is_rejected() {
    // Square lists 4 vertices but only 3 edges
    let faces = FACES.replace("0;0;4;0;1;2;3;4;0;1;2;3", "0;0;4;0;1;2;3;3;0;1;2");
    let dir = write_mesh(VERTICES, EDGES, &faces);

    assert!(matches!(
        import_mesh(dir.path()),
        Err(MeshError::Validation(ValidationError::InconsistentFace {
            face: 0,
            vertices: 4,
            edges: 3
        }))
    ));
}

#[test]
fn import_without_validation_keeps_defects() {
    let faces = FACES.replace("0;0;4;0;1;2;3;4;0;1;2;3", "0;0;4;0;1;2;3;3;0;1;2");
    let dir = write_mesh(VERTICES, EDGES, &faces);

    let mesh = io::import(dir.path()).unwrap();
    assert_eq!(mesh.faces()[0].num_edges(), 3);

    let summary = report(&mesh, &ValidateOptions::default());
    assert_eq!(summary.issue_count(), 1);
    assert!(!summary.is_valid());
}

#[test]
fn unreadable_table_is_named() {
    let dir = write_valid_mesh();
    let mut bytes = FACES.as_bytes().to_vec();
    bytes.extend_from_slice(b"2;0;3;\xff\xfe;1;2\n");
    fs::write(dir.path().join(FACE_TABLE), bytes).unwrap();

    let err = import(dir.path()).unwrap_err();
    match &err {
        MeshError::Io { path, .. } => assert_eq!(path.file_name().unwrap(), FACE_TABLE),
        other => panic!("expected Io, got {:?}", other),
    }
    assert!(err.to_string().contains(FACE_TABLE));
}

#[test]
fn face_shape_reported_before_unknown_vertex() {
    let edges = format!("{}6;0;0;99\n", EDGES);
    let faces = FACES.replace("1;0;3;1;4;2;3;4;5;1", "1;0;3;1;4;2;2;4;5");
    let dir = write_mesh(VERTICES, &edges, &faces);

    assert!(matches!(
        import_mesh(dir.path()),
        Err(MeshError::Validation(ValidationError::InconsistentFace {
            face: 1,
            vertices: 3,
            edges: 2
        }))
    ));
}

#[test]
fn whitespace_separated_rows() {
    let vertices = VERTICES.replace(';', " ");
    let dir = write_mesh(&vertices, EDGES, FACES);
    assert!(import_mesh(dir.path()).is_ok());
}
