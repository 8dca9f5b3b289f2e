//! # Polymesh
//!
//! Import and validation of planar polygonal meshes.
//!
//! A mesh is stored as three related tables in one directory: vertices
//! (`Cell0Ds.csv`), edges (`Cell1Ds.csv`) and polygonal faces
//! (`Cell2Ds.csv`). Polymesh reads the tables, assembles them into a
//! [`PolygonalMesh`](mesh::PolygonalMesh) and checks that the result is
//! topologically and geometrically sound before numerical code touches it.
//!
//! ## Features
//!
//! - **Typed ids**: vertices, edges and faces are addressed by distinct id types
//! - **Marker indices**: boundary markers grouped per vertex and per edge
//! - **Strict parsing**: every malformed row is reported with file and line
//! - **Validation**: face consistency, edge/face cross references, minimum edge
//!   length and minimum triangle area
//!
//! ## Quick Start
//!
//! ```no_run
//! use polymesh::prelude::*;
//!
//! // Import and validate
//! let mesh = polymesh::io::import_mesh("PolygonalMesh").unwrap();
//!
//! println!("Vertices: {}", mesh.num_vertices());
//! println!("Edges: {}", mesh.num_edges());
//! println!("Faces: {}", mesh.num_faces());
//!
//! // Boundary markers
//! for (marker, ids) in mesh.vertex_markers().iter() {
//!     println!("marker {}: {:?}", marker, ids);
//! }
//! ```
//!
//! ## Validating Separately
//!
//! ```
//! use polymesh::prelude::*;
//! use nalgebra::Point2;
//!
//! let mut vertices = VertexTable::new();
//! vertices.push(VertexId::new(0), 1, Point2::new(0.0, 0.0));
//! vertices.push(VertexId::new(1), 1, Point2::new(1.0, 0.0));
//! vertices.push(VertexId::new(2), 0, Point2::new(2.0, 0.0));
//!
//! let mut edges = EdgeTable::new();
//! edges.push(EdgeId::new(0), 0, VertexId::new(0), VertexId::new(1));
//! edges.push(EdgeId::new(1), 0, VertexId::new(1), VertexId::new(2));
//! edges.push(EdgeId::new(2), 0, VertexId::new(2), VertexId::new(0));
//!
//! let mut faces = FaceTable::new();
//! faces.push(
//!     FaceId::new(0),
//!     vec![VertexId::new(0), VertexId::new(1), VertexId::new(2)],
//!     vec![EdgeId::new(0), EdgeId::new(1), EdgeId::new(2)],
//! );
//!
//! let mesh = build_mesh(vertices, edges, faces).unwrap();
//!
//! // The three vertices are collinear
//! assert!(matches!(
//!     validate(&mesh),
//!     Err(ValidationError::DegenerateFace { face: 0, .. })
//! ));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod io;
pub mod mesh;
pub mod validate;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use polymesh::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{MeshError, Result, ValidationError};
    pub use crate::io::{import, import_mesh};
    pub use crate::mesh::{
        build_mesh, Edge, EdgeId, EdgeTable, Face, FaceId, FaceTable, MarkerIndex,
        PolygonalMesh, Vertex, VertexId, VertexTable,
    };
    pub use crate::validate::{validate, validate_with, ValidateOptions};
}

// Re-export nalgebra types for convenience
pub use nalgebra;
