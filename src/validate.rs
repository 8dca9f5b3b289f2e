//! Mesh validation.
//!
//! Checks an assembled [`PolygonalMesh`] for the defects that make it unusable
//! by numerical code. The checks run in a fixed order:
//!
//! 1. **Face shape**: each face lists as many edges as vertices.
//! 2. **References**: every vertex id used by an edge or face, and every edge
//!    id used by a face, exists.
//! 3. **Face edges**: both endpoints of each edge of a face are vertices of
//!    that face.
//! 4. **Edge length**: no edge is shorter than the length tolerance.
//! 5. **Triangle area**: no triangular face has less area than the area
//!    tolerance. Other polygons are not area-checked.
//!
//! [`validate`] stops at the first violation. [`report`] runs the same checks
//! and collects every violation instead.
//!
//! # Example
//!
//! ```no_run
//! use polymesh::io::import;
//! use polymesh::validate::{validate_with, ValidateOptions};
//!
//! let mesh = import("PolygonalMesh").unwrap();
//! let options = ValidateOptions::new(1e-9);
//! if let Err(e) = validate_with(&mesh, &options) {
//!     eprintln!("invalid mesh: {}", e);
//! }
//! ```

use std::fmt;

use crate::error::ValidationError;
use crate::mesh::PolygonalMesh;

/// Default minimum edge length.
pub const EDGE_LENGTH_TOLERANCE: f64 = 1.0e-12;

/// Area of the equilateral triangle whose side is `edge_tolerance`.
pub fn area_tolerance_for(edge_tolerance: f64) -> f64 {
    (3.0_f64.sqrt() / 4.0) * edge_tolerance * edge_tolerance
}

/// Geometric tolerances used by validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidateOptions {
    /// Edges shorter than this are degenerate.
    pub edge_tolerance: f64,

    /// Triangles with less area than this are degenerate.
    pub area_tolerance: f64,
}

impl ValidateOptions {
    /// Create options from an edge length tolerance, deriving the area
    /// tolerance with [`area_tolerance_for`].
    pub fn new(edge_tolerance: f64) -> Self {
        Self {
            edge_tolerance,
            area_tolerance: area_tolerance_for(edge_tolerance),
        }
    }

    /// Set the triangle area tolerance.
    pub fn with_area_tolerance(mut self, tolerance: f64) -> Self {
        self.area_tolerance = tolerance;
        self
    }
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self::new(EDGE_LENGTH_TOLERANCE)
    }
}

/// Validate a mesh with the default tolerances.
pub fn validate(mesh: &PolygonalMesh) -> Result<(), ValidationError> {
    validate_with(mesh, &ValidateOptions::default())
}

/// Validate a mesh, stopping at the first violation.
pub fn validate_with(
    mesh: &PolygonalMesh,
    options: &ValidateOptions,
) -> Result<(), ValidationError> {
    Checker::new(mesh, options, false).run()
}

/// Run every check and collect all violations.
///
/// Geometric checks skip entities whose references do not resolve; those are
/// already reported by the reference check.
pub fn report(mesh: &PolygonalMesh, options: &ValidateOptions) -> ValidationReport {
    let mut checker = Checker::new(mesh, options, true);
    let outcome = checker.run();
    debug_assert!(outcome.is_ok(), "collecting checker stopped early");
    let violations = checker.violations;

    ValidationReport {
        vertex_count: mesh.num_vertices(),
        edge_count: mesh.num_edges(),
        face_count: mesh.num_faces(),
        violations,
    }
}

/// Every violation found in a mesh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    /// Total number of vertices.
    pub vertex_count: usize,
    /// Total number of edges.
    pub edge_count: usize,
    /// Total number of faces.
    pub face_count: usize,
    /// Violations in check order.
    pub violations: Vec<ValidationError>,
}

impl ValidationReport {
    /// Check if no violation was found.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// The violation [`validate`] would have reported.
    pub fn first(&self) -> Option<&ValidationError> {
        self.violations.first()
    }

    /// Number of violations.
    pub fn issue_count(&self) -> usize {
        self.violations.len()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mesh Report:")?;
        writeln!(f, "  Vertices: {}", self.vertex_count)?;
        writeln!(f, "  Edges: {}", self.edge_count)?;
        writeln!(f, "  Faces: {}", self.face_count)?;
        writeln!(f)?;

        if self.is_valid() {
            writeln!(f, "  Status: Valid")?;
        } else {
            writeln!(f, "  Status: Invalid ({} issues)", self.issue_count())?;
            writeln!(f, "  Issues:")?;
            for violation in &self.violations {
                writeln!(f, "    - {}", violation)?;
            }
        }

        Ok(())
    }
}

struct Checker<'a> {
    mesh: &'a PolygonalMesh,
    options: &'a ValidateOptions,
    collect: bool,
    violations: Vec<ValidationError>,
}

impl<'a> Checker<'a> {
    fn new(mesh: &'a PolygonalMesh, options: &'a ValidateOptions, collect: bool) -> Self {
        Self {
            mesh,
            options,
            collect,
            violations: Vec::new(),
        }
    }

    /// Record a violation; `Err` ends the run unless collecting.
    fn flag(&mut self, error: ValidationError) -> Result<(), ValidationError> {
        if !self.collect {
            return Err(error);
        }
        log::warn!("{}", error);
        self.violations.push(error);
        Ok(())
    }

    fn run(&mut self) -> Result<(), ValidationError> {
        self.check_face_shapes()?;
        self.check_references()?;
        self.check_face_edges()?;
        self.check_edge_lengths()?;
        self.check_triangle_areas()?;

        log::debug!(
            "Validated {} vertices, {} edges, {} faces ({} violations)",
            self.mesh.num_vertices(),
            self.mesh.num_edges(),
            self.mesh.num_faces(),
            self.violations.len()
        );
        Ok(())
    }

    fn check_references(&mut self) -> Result<(), ValidationError> {
        let mesh = self.mesh;

        for edge in mesh.edges() {
            for vertex in edge.endpoints() {
                if mesh.vertex(vertex).is_none() {
                    self.flag(ValidationError::UnknownVertex {
                        owner: format!("edge {}", edge.id),
                        vertex,
                    })?;
                }
            }
        }

        for (i, face) in mesh.faces().iter().enumerate() {
            for &vertex in &face.vertices {
                if mesh.vertex(vertex).is_none() {
                    self.flag(ValidationError::UnknownVertex {
                        owner: format!("face #{}", i),
                        vertex,
                    })?;
                }
            }
            for &edge in &face.edges {
                if mesh.edge(edge).is_none() {
                    self.flag(ValidationError::UnknownEdge { face: i, edge })?;
                }
            }
        }

        Ok(())
    }

    fn check_face_shapes(&mut self) -> Result<(), ValidationError> {
        let mesh = self.mesh;

        for (i, face) in mesh.faces().iter().enumerate() {
            if face.num_vertices() != face.num_edges() {
                self.flag(ValidationError::InconsistentFace {
                    face: i,
                    vertices: face.num_vertices(),
                    edges: face.num_edges(),
                })?;
            }
        }
        Ok(())
    }

    fn check_face_edges(&mut self) -> Result<(), ValidationError> {
        let mesh = self.mesh;

        for (i, face) in mesh.faces().iter().enumerate() {
            for &edge_id in &face.edges {
                let Some(edge) = mesh.edge(edge_id) else {
                    continue;
                };
                if !edge.endpoints().iter().all(|&v| face.contains_vertex(v)) {
                    self.flag(ValidationError::DanglingEdgeReference {
                        face: i,
                        edge: edge_id,
                    })?;
                }
            }
        }
        Ok(())
    }

    fn check_edge_lengths(&mut self) -> Result<(), ValidationError> {
        let mesh = self.mesh;
        let tolerance = self.options.edge_tolerance;

        for edge in mesh.edges() {
            let Some(length) = mesh.edge_length(edge) else {
                continue;
            };
            if length < tolerance {
                self.flag(ValidationError::DegenerateEdge {
                    edge: edge.id,
                    length,
                })?;
            }
        }
        Ok(())
    }

    fn check_triangle_areas(&mut self) -> Result<(), ValidationError> {
        let mesh = self.mesh;
        let tolerance = self.options.area_tolerance;

        for (i, face) in mesh.faces().iter().enumerate() {
            if !face.is_triangle() {
                continue;
            }
            let Some(area) = mesh.triangle_area(face) else {
                continue;
            };
            if area < tolerance {
                self.flag(ValidationError::DegenerateFace { face: i, area })?;
            }
        }
        Ok(())
    }
}
