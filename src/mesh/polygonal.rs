//! Polygonal mesh data structure.
//!
//! A [`PolygonalMesh`] stores the three cell tables of a planar mesh as they
//! were read, in table order:
//!
//! - **Vertices** (Cell0D): an id and a 2D position
//! - **Edges** (Cell1D): an id and an ordered pair of vertex ids
//! - **Faces** (Cell2D): an id and parallel vertex/edge id lists in winding
//!   order, where `edges[k]` joins `vertices[k]` to `vertices[(k + 1) % n]`
//!
//! Vertex and edge markers are kept in separate [`MarkerIndex`] maps.
//!
//! Cross references are stored as ids and resolved on demand, so a mesh may
//! hold dangling references until it has been validated.

use std::collections::HashMap;

use nalgebra::Point2;

use super::index::{EdgeId, FaceId, VertexId};
use super::marker::MarkerIndex;

/// A vertex of the mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    /// The id from the vertex table.
    pub id: VertexId,

    /// Position in the plane.
    pub position: Point2<f64>,
}

impl Vertex {
    /// Create a vertex.
    pub fn new(id: VertexId, position: Point2<f64>) -> Self {
        Self { id, position }
    }
}

/// An edge of the mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// The id from the edge table.
    pub id: EdgeId,

    /// The vertex this edge starts from.
    pub origin: VertexId,

    /// The vertex this edge ends at.
    pub end: VertexId,
}

impl Edge {
    /// Create an edge.
    pub fn new(id: EdgeId, origin: VertexId, end: VertexId) -> Self {
        Self { id, origin, end }
    }

    /// Both endpoints, origin first.
    #[inline]
    pub fn endpoints(&self) -> [VertexId; 2] {
        [self.origin, self.end]
    }
}

/// A polygonal face of the mesh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    /// The id from the face table.
    pub id: FaceId,

    /// Boundary vertices in winding order.
    pub vertices: Vec<VertexId>,

    /// Boundary edges in the same winding order as `vertices`.
    pub edges: Vec<EdgeId>,
}

impl Face {
    /// Create a face.
    pub fn new(id: FaceId, vertices: Vec<VertexId>, edges: Vec<EdgeId>) -> Self {
        Self {
            id,
            vertices,
            edges,
        }
    }

    /// Number of vertex ids listed.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edge ids listed.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Check if the face lists exactly three vertices.
    #[inline]
    pub fn is_triangle(&self) -> bool {
        self.vertices.len() == 3
    }

    /// Check if `vertex` is on the face boundary.
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.vertices.contains(&vertex)
    }
}

/// A planar polygonal mesh assembled from vertex, edge and face tables.
///
/// Built by [`build_mesh`](super::build_mesh), usually through
/// [`io::import`](crate::io::import).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PolygonalMesh {
    pub(super) vertices: Vec<Vertex>,
    pub(super) vertex_markers: MarkerIndex<VertexId>,
    pub(super) edges: Vec<Edge>,
    pub(super) edge_markers: MarkerIndex<EdgeId>,
    pub(super) faces: Vec<Face>,

    // id -> position in the sequences above
    pub(super) vertex_lookup: HashMap<VertexId, usize>,
    pub(super) edge_lookup: HashMap<EdgeId, usize>,
    pub(super) face_lookup: HashMap<FaceId, usize>,
}

impl PolygonalMesh {
    // ==================== Accessors ====================

    /// Get the number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of edges.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Get the number of faces.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// All vertices in table order.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// All edges in table order.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// All faces in table order.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Vertex ids grouped by marker.
    #[inline]
    pub fn vertex_markers(&self) -> &MarkerIndex<VertexId> {
        &self.vertex_markers
    }

    /// Edge ids grouped by marker.
    #[inline]
    pub fn edge_markers(&self) -> &MarkerIndex<EdgeId> {
        &self.edge_markers
    }

    /// Look up a vertex by id.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertex_lookup.get(&id).map(|&i| &self.vertices[i])
    }

    /// Look up an edge by id.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edge_lookup.get(&id).map(|&i| &self.edges[i])
    }

    /// Look up a face by id.
    pub fn face(&self, id: FaceId) -> Option<&Face> {
        self.face_lookup.get(&id).map(|&i| &self.faces[i])
    }

    /// Position of the vertex with the given id.
    #[inline]
    pub fn position(&self, id: VertexId) -> Option<&Point2<f64>> {
        self.vertex(id).map(|v| &v.position)
    }

    // ==================== Geometry ====================

    /// Euclidean length of an edge, or `None` if an endpoint is unknown.
    pub fn edge_length(&self, edge: &Edge) -> Option<f64> {
        let p0 = self.position(edge.origin)?;
        let p1 = self.position(edge.end)?;
        Some(nalgebra::distance(p0, p1))
    }

    /// Area of a triangular face.
    ///
    /// Half the absolute 2D cross product of `(v1 - v0)` and `(v2 - v0)`.
    /// Returns `None` if the face is not a triangle or a vertex is unknown.
    pub fn triangle_area(&self, face: &Face) -> Option<f64> {
        let &[a, b, c] = face.vertices.as_slice() else {
            return None;
        };
        let p0 = self.position(a)?;
        let p1 = self.position(b)?;
        let p2 = self.position(c)?;
        Some(0.5 * (p1 - p0).perp(&(p2 - p0)).abs())
    }

    /// Unsigned area of any face, by the shoelace formula.
    ///
    /// Returns `None` if a vertex is unknown.
    pub fn polygon_area(&self, face: &Face) -> Option<f64> {
        let points = face
            .vertices
            .iter()
            .map(|&v| self.position(v))
            .collect::<Option<Vec<_>>>()?;

        let n = points.len();
        let twice_signed: f64 = (0..n)
            .map(|i| points[i].coords.perp(&points[(i + 1) % n].coords))
            .sum();
        Some(0.5 * twice_signed.abs())
    }

    /// Compute the axis-aligned bounding box of all vertices.
    pub fn bounding_box(&self) -> Option<(Point2<f64>, Point2<f64>)> {
        let first = self.vertices.first()?.position;
        Some(
            self.vertices
                .iter()
                .fold((first, first), |(min, max), v| {
                    (min.inf(&v.position), max.sup(&v.position))
                }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{build_mesh, EdgeTable, FaceTable, VertexTable};
    use approx::assert_relative_eq;

    fn v(id: u32) -> VertexId {
        VertexId::new(id)
    }

    fn e(id: u32) -> EdgeId {
        EdgeId::new(id)
    }

    /// Unit square with ids offset from positions.
    fn square() -> PolygonalMesh {
        let mut vertices = VertexTable::new();
        vertices.push(v(10), 1, Point2::new(0.0, 0.0));
        vertices.push(v(11), 1, Point2::new(1.0, 0.0));
        vertices.push(v(12), 0, Point2::new(1.0, 1.0));
        vertices.push(v(13), 2, Point2::new(0.0, 1.0));

        let mut edges = EdgeTable::new();
        edges.push(e(0), 1, v(10), v(11));
        edges.push(e(1), 0, v(11), v(12));
        edges.push(e(2), 0, v(12), v(13));
        edges.push(e(3), 0, v(13), v(10));

        let mut faces = FaceTable::new();
        faces.push(
            FaceId::new(0),
            vec![v(10), v(11), v(12), v(13)],
            vec![e(0), e(1), e(2), e(3)],
        );

        build_mesh(vertices, edges, faces).unwrap()
    }

    #[test]
    fn test_lookup_by_id() {
        let mesh = square();

        assert_eq!(mesh.num_vertices(), 4);
        assert_eq!(mesh.vertex(v(12)).unwrap().position, Point2::new(1.0, 1.0));
        assert!(mesh.vertex(v(0)).is_none());
        assert_eq!(mesh.edge(e(3)).unwrap().endpoints(), [v(13), v(10)]);
        assert_eq!(mesh.face(FaceId::new(0)).unwrap().num_edges(), 4);
    }

    #[test]
    fn test_edge_length() {
        let mesh = square();
        let edge = *mesh.edge(e(1)).unwrap();
        assert_relative_eq!(mesh.edge_length(&edge).unwrap(), 1.0);

        let dangling = Edge::new(e(9), v(10), v(99));
        assert!(mesh.edge_length(&dangling).is_none());
    }

    #[test]
    fn test_triangle_area() {
        let mesh = square();
        let tri = Face::new(FaceId::new(1), vec![v(10), v(11), v(13)], vec![]);
        assert_relative_eq!(mesh.triangle_area(&tri).unwrap(), 0.5);

        // Not a triangle
        assert!(mesh.triangle_area(&mesh.faces()[0]).is_none());
    }

    #[test]
    fn test_triangle_area_uses_both_axes() {
        // Non-zero y of the first vertex must not leak into the x difference
        let mut vertices = VertexTable::new();
        vertices.push(v(0), 0, Point2::new(0.0, 5.0));
        vertices.push(v(1), 0, Point2::new(2.0, 5.0));
        vertices.push(v(2), 0, Point2::new(0.0, 8.0));
        let mut faces = FaceTable::new();
        faces.push(FaceId::new(0), vec![v(0), v(1), v(2)], vec![]);
        let mesh = build_mesh(vertices, EdgeTable::new(), faces).unwrap();

        assert_relative_eq!(mesh.triangle_area(&mesh.faces()[0]).unwrap(), 3.0);
    }

    #[test]
    fn test_polygon_area() {
        let mesh = square();
        assert_relative_eq!(mesh.polygon_area(&mesh.faces()[0]).unwrap(), 1.0);
    }

    #[test]
    fn test_bounding_box() {
        let mesh = square();
        let (min, max) = mesh.bounding_box().unwrap();
        assert_eq!(min, Point2::new(0.0, 0.0));
        assert_eq!(max, Point2::new(1.0, 1.0));

        assert!(PolygonalMesh::default().bounding_box().is_none());
    }

    #[test]
    fn test_markers() {
        let mesh = square();
        assert_eq!(mesh.vertex_markers().get(1), &[v(10), v(11)]);
        assert_eq!(mesh.vertex_markers().get(2), &[v(13)]);
        assert_eq!(mesh.edge_markers().get(1), &[e(0)]);
        assert_eq!(mesh.edge_markers().len(), 1);
    }
}
