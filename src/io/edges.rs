//! Edge (Cell1D) table support.
//!
//! Each data row is `id;marker;origin;end`. Endpoints are vertex ids and are
//! not resolved against the vertex table here.

use std::path::Path;

use super::table::{read_table, Table};
use crate::error::Result;
use crate::mesh::EdgeTable;

/// Load an edge table from a file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<EdgeTable> {
    parse(&read_table(path)?)
}

/// Parse the rows of an edge table.
pub fn parse(table: &Table) -> Result<EdgeTable> {
    if table.is_empty() {
        return Err(table.empty_error());
    }

    let mut edges = EdgeTable::new();
    edges.edges.reserve(table.len());

    for row in &table.rows {
        let mut fields = table.parser(row);
        let id = fields.next_id("id")?;
        let marker = fields.next_u32("marker")?;
        let origin = fields.next_id("origin")?;
        let end = fields.next_id("end")?;
        fields.finish()?;

        edges.push(id, marker, origin, end);
    }

    log::debug!(
        "{}: {} edges, {} markers",
        table.path.display(),
        edges.len(),
        edges.markers.len()
    );
    Ok(edges)
}
