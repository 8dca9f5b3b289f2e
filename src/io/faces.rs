//! Face (Cell2D) table support.
//!
//! Rows are self-describing:
//!
//! ```text
//! id;marker;numVertices;v0;...;v(n-1);numEdges;e0;...;e(m-1)
//! ```
//!
//! The marker is read and discarded. `numVertices` and `numEdges` may differ
//! here; that is a mesh-level defect reported by the validator.

use std::path::Path;

use super::table::{read_table, Table};
use crate::error::Result;
use crate::mesh::FaceTable;

/// Load a face table from a file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<FaceTable> {
    parse(&read_table(path)?)
}

/// Parse the rows of a face table.
pub fn parse(table: &Table) -> Result<FaceTable> {
    if table.is_empty() {
        return Err(table.empty_error());
    }

    let mut faces = FaceTable::new();
    faces.faces.reserve(table.len());

    for row in &table.rows {
        let mut fields = table.parser(row);
        let id = fields.next_id("id")?;
        let _marker = fields.next_u32("marker")?;

        let num_vertices = fields.next_count("vertex count")?;
        let vertices = fields.next_ids(num_vertices, "vertex ids")?;

        let num_edges = fields.next_count("edge count")?;
        let edges = fields.next_ids(num_edges, "edge ids")?;
        fields.finish()?;

        faces.push(id, vertices, edges);
    }

    log::debug!("{}: {} faces", table.path.display(), faces.len());
    Ok(faces)
}
