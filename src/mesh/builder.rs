//! Mesh construction utilities.
//!
//! The three table loaders each produce an owned table value; [`build_mesh`]
//! moves them into one [`PolygonalMesh`] and indexes every entity by id.
//! Nothing is shared or mutated across loaders, so a failed import never
//! leaves a half-populated mesh behind.

use std::collections::HashMap;
use std::hash::Hash;

use nalgebra::Point2;

use super::index::{EdgeId, FaceId, VertexId};
use super::marker::MarkerIndex;
use super::polygonal::{Edge, Face, PolygonalMesh, Vertex};
use crate::error::{EntityKind, MeshError, Result};

/// Parsed contents of a vertex table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VertexTable {
    /// Vertices in row order.
    pub vertices: Vec<Vertex>,
    /// Vertex ids grouped by non-zero marker.
    pub markers: MarkerIndex<VertexId>,
}

impl VertexTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vertex row.
    pub fn push(&mut self, id: VertexId, marker: u32, position: Point2<f64>) {
        self.vertices.push(Vertex::new(id, position));
        self.markers.insert(marker, id);
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Parsed contents of an edge table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeTable {
    /// Edges in row order.
    pub edges: Vec<Edge>,
    /// Edge ids grouped by non-zero marker.
    pub markers: MarkerIndex<EdgeId>,
}

impl EdgeTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an edge row.
    pub fn push(&mut self, id: EdgeId, marker: u32, origin: VertexId, end: VertexId) {
        self.edges.push(Edge::new(id, origin, end));
        self.markers.insert(marker, id);
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Parsed contents of a face table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FaceTable {
    /// Faces in row order.
    pub faces: Vec<Face>,
}

impl FaceTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a face row.
    pub fn push(&mut self, id: FaceId, vertices: Vec<VertexId>, edges: Vec<EdgeId>) {
        self.faces.push(Face::new(id, vertices, edges));
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}

/// Assemble a mesh from its three tables.
///
/// Ids must be unique within each table. References between tables are not
/// checked here; see [`validate`](crate::validate::validate).
///
/// # Example
/// ```
/// use nalgebra::Point2;
/// use polymesh::mesh::{build_mesh, EdgeTable, FaceTable, VertexTable};
/// use polymesh::mesh::{EdgeId, FaceId, VertexId};
///
/// let mut vertices = VertexTable::new();
/// vertices.push(VertexId::new(0), 1, Point2::new(0.0, 0.0));
/// vertices.push(VertexId::new(1), 0, Point2::new(1.0, 0.0));
/// vertices.push(VertexId::new(2), 0, Point2::new(0.0, 1.0));
///
/// let mut edges = EdgeTable::new();
/// edges.push(EdgeId::new(0), 0, VertexId::new(0), VertexId::new(1));
/// edges.push(EdgeId::new(1), 0, VertexId::new(1), VertexId::new(2));
/// edges.push(EdgeId::new(2), 0, VertexId::new(2), VertexId::new(0));
///
/// let mut faces = FaceTable::new();
/// faces.push(
///     FaceId::new(0),
///     vec![VertexId::new(0), VertexId::new(1), VertexId::new(2)],
///     vec![EdgeId::new(0), EdgeId::new(1), EdgeId::new(2)],
/// );
///
/// let mesh = build_mesh(vertices, edges, faces).unwrap();
/// assert_eq!(mesh.num_vertices(), 3);
/// assert_eq!(mesh.num_faces(), 1);
/// ```
pub fn build_mesh(
    vertices: VertexTable,
    edges: EdgeTable,
    faces: FaceTable,
) -> Result<PolygonalMesh> {
    let vertex_lookup = index_by_id(&vertices.vertices, |v| v.id, EntityKind::Vertex)?;
    let edge_lookup = index_by_id(&edges.edges, |e| e.id, EntityKind::Edge)?;
    let face_lookup = index_by_id(&faces.faces, |f| f.id, EntityKind::Face)?;

    Ok(PolygonalMesh {
        vertices: vertices.vertices,
        vertex_markers: vertices.markers,
        edges: edges.edges,
        edge_markers: edges.markers,
        faces: faces.faces,
        vertex_lookup,
        edge_lookup,
        face_lookup,
    })
}

/// Map each id to its position, rejecting repeats.
fn index_by_id<T, K>(
    items: &[T],
    id_of: impl Fn(&T) -> K,
    kind: EntityKind,
) -> Result<HashMap<K, usize>>
where
    K: Copy + Eq + Hash + Into<u32>,
{
    let mut lookup = HashMap::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let id = id_of(item);
        if lookup.insert(id, i).is_some() {
            return Err(MeshError::DuplicateId {
                kind,
                id: id.into(),
            });
        }
    }
    Ok(lookup)
}
