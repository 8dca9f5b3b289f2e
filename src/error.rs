//! Error types for polymesh.
//!
//! Import failures are reported as [`MeshError`]. Defects found while
//! validating an assembled mesh are reported as [`ValidationError`], which
//! converts into [`MeshError::Validation`] when it surfaces from
//! [`import_mesh`](crate::io::import_mesh).

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::mesh::{EdgeId, VertexId};

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// The kind of entity a table describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Cell0D, a point.
    Vertex,
    /// Cell1D, a segment between two vertices.
    Edge,
    /// Cell2D, a closed polygon.
    Face,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityKind::Vertex => "vertex",
            EntityKind::Edge => "edge",
            EntityKind::Face => "face",
        })
    }
}

/// Errors that can occur while importing a mesh.
#[derive(Error, Debug)]
pub enum MeshError {
    /// A required table file does not exist.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// A table file could not be opened or read.
    #[error("{path}: I/O error: {source}")]
    Io {
        /// The table file.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },

    /// A table has a header but no data rows.
    #[error("{path} contains no data rows")]
    EmptyTable {
        /// The table file.
        path: PathBuf,
    },

    /// A data row does not have the shape its table requires.
    #[error("{path}:{line}: malformed row: {message}")]
    MalformedRow {
        /// The table file.
        path: PathBuf,
        /// 1-based line number in the file.
        line: usize,
        /// What was wrong with the row.
        message: String,
    },

    /// Two rows of the same table share an id.
    #[error("duplicate {kind} id {id}")]
    DuplicateId {
        /// Which table the id was duplicated in.
        kind: EntityKind,
        /// The repeated id.
        id: u32,
    },

    /// The mesh was assembled but failed validation.
    #[error("invalid mesh: {0}")]
    Validation(#[from] ValidationError),
}

impl MeshError {
    /// Create an I/O error for a table file.
    pub fn io<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        MeshError::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a malformed row error.
    pub fn malformed<P: Into<PathBuf>>(path: P, line: usize, message: impl Into<String>) -> Self {
        MeshError::MalformedRow {
            path: path.into(),
            line,
            message: message.into(),
        }
    }
}

/// Structural or geometric defects detected by the validator.
///
/// Faces are identified by their position in the face table (`face`), which
/// is what a caller needs to locate the offending row.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// An edge or face refers to a vertex id that is not in the vertex table.
    #[error("{owner} references unknown vertex {vertex}")]
    UnknownVertex {
        /// The referring entity, e.g. `edge 4` or `face #2`.
        owner: String,
        /// The missing vertex id.
        vertex: VertexId,
    },

    /// A face refers to an edge id that is not in the edge table.
    #[error("face #{face} references unknown edge {edge}")]
    UnknownEdge {
        /// The face index.
        face: usize,
        /// The missing edge id.
        edge: EdgeId,
    },

    /// A face does not list one edge per vertex.
    #[error("face #{face} is not a closed polygon: {vertices} vertices but {edges} edges")]
    InconsistentFace {
        /// The face index.
        face: usize,
        /// Number of vertex ids listed.
        vertices: usize,
        /// Number of edge ids listed.
        edges: usize,
    },

    /// A face lists an edge whose endpoints are not both among its vertices.
    #[error("face #{face} lists edge {edge} whose endpoints are not on the face")]
    DanglingEdgeReference {
        /// The face index.
        face: usize,
        /// The offending edge id.
        edge: EdgeId,
    },

    /// An edge is shorter than the length tolerance.
    #[error("edge {edge} is degenerate (length {length:e})")]
    DegenerateEdge {
        /// The edge id.
        edge: EdgeId,
        /// The measured length.
        length: f64,
    },

    /// A triangular face has less area than the area tolerance.
    #[error("face #{face} is a degenerate triangle (area {area:e})")]
    DegenerateFace {
        /// The face index.
        face: usize,
        /// The measured area.
        area: f64,
    },
}
