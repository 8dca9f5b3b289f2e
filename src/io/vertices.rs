//! Vertex (Cell0D) table support.
//!
//! Each data row is `id;marker;x;y`.

use std::path::Path;

use nalgebra::Point2;

use super::table::{read_table, Table};
use crate::error::Result;
use crate::mesh::VertexTable;

/// Load a vertex table from a file.
///
/// # Example
///
/// ```no_run
/// use polymesh::io::vertices;
///
/// let table = vertices::load("PolygonalMesh/Cell0Ds.csv").unwrap();
/// println!("{} vertices", table.len());
/// ```
pub fn load<P: AsRef<Path>>(path: P) -> Result<VertexTable> {
    parse(&read_table(path)?)
}

/// Parse the rows of a vertex table.
///
/// Fails with `EmptyTable` when there are no rows: a mesh needs at least one
/// vertex.
pub fn parse(table: &Table) -> Result<VertexTable> {
    if table.is_empty() {
        return Err(table.empty_error());
    }

    let mut vertices = VertexTable::new();
    vertices.vertices.reserve(table.len());

    for row in &table.rows {
        let mut fields = table.parser(row);
        let id = fields.next_id("id")?;
        let marker = fields.next_u32("marker")?;
        let x = fields.next_f64("x")?;
        let y = fields.next_f64("y")?;
        fields.finish()?;

        vertices.push(id, marker, Point2::new(x, y));
    }

    log::debug!(
        "{}: {} vertices, {} markers",
        table.path.display(),
        vertices.len(),
        vertices.markers.len()
    );
    Ok(vertices)
}
