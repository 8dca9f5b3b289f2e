//! Mesh file I/O.
//!
//! A mesh lives in a directory holding three tables, one per entity:
//!
//! | Entity | File | Row layout |
//! |--------|------|------------|
//! | Vertex (Cell0D) | `Cell0Ds.csv` | `id;marker;x;y` |
//! | Edge (Cell1D) | `Cell1Ds.csv` | `id;marker;origin;end` |
//! | Face (Cell2D) | `Cell2Ds.csv` | `id;marker;nv;v0;...;ne;e0;...` |
//!
//! Each file starts with a header line, which is ignored. Fields are
//! positional; the header does not map columns.
//!
//! # Usage
//!
//! ```no_run
//! use polymesh::io::import_mesh;
//!
//! // Import and validate
//! let mesh = import_mesh("PolygonalMesh").unwrap();
//! println!("{} faces", mesh.num_faces());
//! ```
//!
//! Diagnostic tools that want to inspect a broken mesh can import without
//! validating:
//!
//! ```no_run
//! use polymesh::io::import;
//! use polymesh::validate::{report, ValidateOptions};
//!
//! let mesh = import("PolygonalMesh").unwrap();
//! println!("{}", report(&mesh, &ValidateOptions::default()));
//! ```

pub mod edges;
pub mod faces;
pub mod table;
pub mod vertices;

use std::path::{Path, PathBuf};

use crate::error::{EntityKind, Result};
use crate::mesh::{build_mesh, PolygonalMesh};
use crate::validate::validate;

/// File name of the vertex table.
pub const VERTEX_TABLE: &str = "Cell0Ds.csv";

/// File name of the edge table.
pub const EDGE_TABLE: &str = "Cell1Ds.csv";

/// File name of the face table.
pub const FACE_TABLE: &str = "Cell2Ds.csv";

/// Path of the table holding `kind` inside a mesh directory.
pub fn table_path<P: AsRef<Path>>(dir: P, kind: EntityKind) -> PathBuf {
    let name = match kind {
        EntityKind::Vertex => VERTEX_TABLE,
        EntityKind::Edge => EDGE_TABLE,
        EntityKind::Face => FACE_TABLE,
    };
    dir.as_ref().join(name)
}

/// Import a mesh directory without validating it.
///
/// Tables are read in order (vertices, edges, faces) and the first failure is
/// returned unchanged.
pub fn import<P: AsRef<Path>>(dir: P) -> Result<PolygonalMesh> {
    let dir = dir.as_ref();

    let vertices = vertices::load(table_path(dir, EntityKind::Vertex))?;
    let edges = edges::load(table_path(dir, EntityKind::Edge))?;
    let faces = faces::load(table_path(dir, EntityKind::Face))?;

    let mesh = build_mesh(vertices, edges, faces)?;
    log::info!(
        "Imported {}: {} vertices, {} edges, {} faces",
        dir.display(),
        mesh.num_vertices(),
        mesh.num_edges(),
        mesh.num_faces()
    );
    log_contents(&mesh);

    Ok(mesh)
}

/// Import a mesh directory and validate it.
///
/// A mesh that fails validation is reported as
/// [`MeshError::Validation`](crate::error::MeshError::Validation) and never
/// returned.
///
/// # Example
///
/// ```no_run
/// use polymesh::io::import_mesh;
///
/// match import_mesh("PolygonalMesh") {
///     Ok(mesh) => println!("{} vertices", mesh.num_vertices()),
///     Err(e) => eprintln!("rejected: {}", e),
/// }
/// ```
pub fn import_mesh<P: AsRef<Path>>(dir: P) -> Result<PolygonalMesh> {
    let mesh = import(dir)?;
    validate(&mesh)?;
    Ok(mesh)
}

/// Trace markers and face composition at debug level.
fn log_contents(mesh: &PolygonalMesh) {
    if !log::log_enabled!(log::Level::Debug) {
        return;
    }

    for (marker, ids) in mesh.vertex_markers() {
        log::debug!("vertex marker {}: {:?}", marker, ids);
    }
    for (marker, ids) in mesh.edge_markers() {
        log::debug!("edge marker {}: {:?}", marker, ids);
    }
    for (i, face) in mesh.faces().iter().enumerate() {
        log::debug!(
            "face #{} (id {}): vertices {:?}, edges {:?}",
            i,
            face.id,
            face.vertices,
            face.edges
        );
    }
}
