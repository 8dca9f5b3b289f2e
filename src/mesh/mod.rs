//! Core mesh data structures.
//!
//! This module provides the polygonal mesh representation and the types it is
//! made of.
//!
//! # Overview
//!
//! The primary type is [`PolygonalMesh`], a planar mesh stored as three cell
//! tables: vertices (Cell0D), edges (Cell1D) and polygonal faces (Cell2D).
//! Entities reference each other by id, and optional integer markers tag
//! vertices and edges (typically with boundary conditions).
//!
//! # Identifiers
//!
//! Mesh entities are identified by type-safe id wrappers:
//! - [`VertexId`] - Identifies a vertex
//! - [`EdgeId`] - Identifies an edge
//! - [`FaceId`] - Identifies a face
//!
//! # Construction
//!
//! Meshes are normally read from disk with [`crate::io::import`], or built
//! from in-memory tables:
//!
//! ```
//! use nalgebra::Point2;
//! use polymesh::mesh::{build_mesh, EdgeTable, FaceTable, VertexId, VertexTable};
//!
//! let mut vertices = VertexTable::new();
//! vertices.push(VertexId::new(0), 0, Point2::new(0.0, 0.0));
//!
//! let mesh = build_mesh(vertices, EdgeTable::new(), FaceTable::new()).unwrap();
//! assert_eq!(mesh.num_vertices(), 1);
//! ```

mod builder;
mod index;
mod marker;
mod polygonal;

pub use builder::{build_mesh, EdgeTable, FaceTable, VertexTable};
pub use index::{EdgeId, FaceId, VertexId};
pub use marker::{MarkerIndex, NO_MARKER};
pub use polygonal::{Edge, Face, PolygonalMesh, Vertex};
